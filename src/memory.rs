//! # Work RAM
//!
//! A fixed-size, zero-initialized byte array that answers bus reads and
//! writes. The NES console maps 2 KiB of it at `0x0000`; tests and tools that
//! want every address backed by RAM can create a full 64 KiB instance.
//!
//! ## Bounds Policy
//!
//! Out-of-range accesses are not errors:
//! - Reads at or beyond `size` return `0`
//! - Writes at or beyond `size` are dropped
//!
//! The bound is exclusive (`address < size`), so the byte one past the end is
//! out of range like any other.

use crate::bus::BusDevice;
use crate::ConfigError;

/// Size of the NES CPU work RAM.
pub const NES_RAM_SIZE: usize = 0x0800;

/// Largest memory the 16-bit address bus can reach.
pub const MAX_MEMORY_SIZE: usize = 0x1_0000;

/// Flat byte-addressable memory.
///
/// # Examples
///
/// ```
/// use nes6502::{BusDevice, Memory};
///
/// let mut mem = Memory::new(0x0800).unwrap();
/// mem.write_byte(0x0042, 0xAA);
/// assert_eq!(mem.read_byte(0x0042), 0xAA);
///
/// // Beyond the end: reads are zero, writes vanish
/// mem.write_byte(0x0800, 0x55);
/// assert_eq!(mem.read_byte(0x0800), 0x00);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    storage: Vec<u8>,
}

impl Memory {
    /// Creates a zeroed memory of `size` bytes.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroMemorySize`] if `size` is 0
    /// - [`ConfigError::MemoryTooLarge`] if `size` exceeds 64 KiB
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroMemorySize);
        }
        if size > MAX_MEMORY_SIZE {
            return Err(ConfigError::MemoryTooLarge(size));
        }
        Ok(Self {
            storage: vec![0; size],
        })
    }

    /// Creates the 2 KiB NES work RAM.
    pub fn nes_ram() -> Self {
        Self {
            storage: vec![0; NES_RAM_SIZE],
        }
    }

    /// Number of addressable bytes.
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Zeroes every byte.
    pub fn reset(&mut self) {
        self.storage.fill(0);
    }

    /// Direct view of the backing store, for inspection by a host or test.
    pub fn as_slice(&self) -> &[u8] {
        &self.storage
    }

    /// Direct mutable view of the backing store.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    /// Copies `bytes` starting at `address`. Bytes that would land past the
    /// end are dropped, like any other out-of-range write.
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        let start = address as usize;
        if start >= self.storage.len() {
            return;
        }
        let end = (start + bytes.len()).min(self.storage.len());
        self.storage[start..end].copy_from_slice(&bytes[..end - start]);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::nes_ram()
    }
}

impl BusDevice for Memory {
    fn read_byte(&self, address: u16) -> u8 {
        self.storage.get(address as usize).copied().unwrap_or(0)
    }

    fn write_byte(&mut self, address: u16, data: u8) {
        if let Some(slot) = self.storage.get_mut(address as usize) {
            *slot = data;
        }
    }

    fn size(&self) -> usize {
        self.storage.len()
    }
}
