//! # Console Configuration
//!
//! [`ConsoleConfig`] sizes the work RAM. The default is the NES's 2 KiB;
//! [`ConsoleConfig::flat`] backs the whole 64 KiB address space, which is
//! what tests, benchmarks and fuzzing want.

use crate::memory::{MAX_MEMORY_SIZE, NES_RAM_SIZE};
use crate::ConfigError;

/// Console construction parameters.
///
/// # Examples
///
/// ```
/// use nes6502::{ConfigError, ConsoleConfig};
///
/// assert_eq!(ConsoleConfig::default().memory_size, 0x0800);
/// assert_eq!(ConsoleConfig::flat().memory_size, 0x1_0000);
///
/// let bad = ConsoleConfig { memory_size: 0 };
/// assert_eq!(bad.validate(), Err(ConfigError::ZeroMemorySize));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Bytes of RAM mapped from `0x0000`. Addresses above read as 0.
    pub memory_size: usize,
}

impl ConsoleConfig {
    /// 64 KiB of RAM: every address is backed.
    pub fn flat() -> Self {
        Self {
            memory_size: MAX_MEMORY_SIZE,
        }
    }

    pub fn with_memory_size(mut self, memory_size: usize) -> Self {
        self.memory_size = memory_size;
        self
    }

    /// Checks the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_size == 0 {
            return Err(ConfigError::ZeroMemorySize);
        }
        if self.memory_size > MAX_MEMORY_SIZE {
            return Err(ConfigError::MemoryTooLarge(self.memory_size));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            memory_size: NES_RAM_SIZE,
        }
    }
}
