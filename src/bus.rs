//! # Bus Abstraction
//!
//! Two traits split the memory system the way the hardware does:
//!
//! - [`Bus`] is what the CPU talks to: a 16-bit address in, a byte out.
//! - [`BusDevice`] is something that answers on the bus (work RAM here).
//!
//! [`SystemBus`] is the routing layer between them. It owns no data of its own;
//! it forwards each access to the device that answers at that address. An
//! address nobody answers reads as `0` and swallows writes, which is how an
//! unpopulated address range behaves.
//!
//! The bus never charges cycles. Cycle accounting happens one layer up, in the
//! CPU's access wrappers, so every transaction is charged exactly once no
//! matter which device answers it.

use crate::memory::Memory;

/// CPU-facing bus.
///
/// # Examples
///
/// ```
/// use nes6502::{Bus, Memory, SystemBus};
///
/// let mut bus = SystemBus::new(Memory::nes_ram());
/// bus.write(0x0010, 0x42);
/// assert_eq!(bus.read(0x0010), 0x42);
///
/// // Above the 2 KiB of RAM nothing answers
/// assert_eq!(bus.read(0x8000), 0x00);
/// ```
pub trait Bus {
    /// Reads the byte at `address`.
    fn read(&self, address: u16) -> u8;

    /// Writes `data` to `address`.
    fn write(&mut self, address: u16, data: u8);
}

/// Device contract for anything that can be attached to a [`SystemBus`].
///
/// Addresses handed to a device are relative to where it is mapped. A device
/// must never panic on an access; out-of-range reads return a value and
/// out-of-range writes are ignored.
pub trait BusDevice {
    /// Reads the byte at `address`.
    fn read_byte(&self, address: u16) -> u8;

    /// Writes `data` at `address`.
    fn write_byte(&mut self, address: u16, data: u8);

    /// Number of addresses the device answers, starting from its base.
    fn size(&self) -> usize;
}

/// Routes bus traffic to a single device mapped at `0x0000`.
///
/// The device answers `0x0000..device.size()`. Everything above is
/// unpopulated. With no device attached, the whole address space is
/// unpopulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemBus<D: BusDevice = Memory> {
    device: Option<D>,
}

impl<D: BusDevice> SystemBus<D> {
    /// Creates a bus with `device` mapped at `0x0000`.
    pub fn new(device: D) -> Self {
        Self {
            device: Some(device),
        }
    }

    /// Creates a bus with nothing attached.
    pub fn unpopulated() -> Self {
        Self { device: None }
    }

    /// Attaches `device`, returning whatever was attached before.
    pub fn attach(&mut self, device: D) -> Option<D> {
        self.device.replace(device)
    }

    /// Detaches and returns the current device.
    pub fn detach(&mut self) -> Option<D> {
        self.device.take()
    }

    /// Returns the attached device, if any.
    pub fn device(&self) -> Option<&D> {
        self.device.as_ref()
    }

    /// Returns the attached device mutably, if any.
    pub fn device_mut(&mut self) -> Option<&mut D> {
        self.device.as_mut()
    }

    fn route(&self, address: u16) -> Option<&D> {
        self.device
            .as_ref()
            .filter(|device| (address as usize) < device.size())
    }
}

impl<D: BusDevice> Bus for SystemBus<D> {
    fn read(&self, address: u16) -> u8 {
        match self.route(address) {
            Some(device) => device.read_byte(address),
            None => 0,
        }
    }

    fn write(&mut self, address: u16, data: u8) {
        if self.route(address).is_none() {
            return;
        }
        if let Some(device) = self.device.as_mut() {
            device.write_byte(address, data);
        }
    }
}
