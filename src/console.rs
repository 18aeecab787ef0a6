//! # Console
//!
//! The top-level object a host drives. It wires a [`Cpu`] to a [`SystemBus`]
//! with the work RAM attached, loads programs and runs them.
//!
//! ## Program Format
//!
//! A program blob starts with its little-endian load address. The remaining
//! bytes are copied to memory from that address, and PC is set to it:
//!
//! ```text
//! 00 06 A9 01 8D 00 02 ...
//! ^^^^^ load address 0x0600
//!       ^^^^^^^^^^^^^^^^^^ code, copied to 0x0600..
//! ```

use crate::bus::{Bus, SystemBus};
use crate::config::ConsoleConfig;
use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::{ConfigError, ExecutionError, LoadError};

/// A 6502 with its work RAM.
///
/// # Examples
///
/// ```
/// use nes6502::Console;
///
/// let mut console = Console::new();
/// // LDA #$01; STA $0200; INX
/// let entry = console
///     .load(&[0x00, 0x06, 0xA9, 0x01, 0x8D, 0x00, 0x02, 0xE8])
///     .unwrap();
/// assert_eq!(entry, 0x0600);
///
/// console.start(8).unwrap();
///
/// assert_eq!(console.read(0x0200), 0x01);
/// assert_eq!(console.cpu().registers().x, 0x01);
/// ```
#[derive(Debug)]
pub struct Console {
    cpu: Cpu<SystemBus<Memory>>,
}

impl Console {
    /// Creates a console with 2 KiB of RAM.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(SystemBus::new(Memory::nes_ram())),
        }
    }

    /// Creates a console from `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`ConsoleConfig::validate`].
    pub fn with_config(config: ConsoleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let memory = Memory::new(config.memory_size)?;
        Ok(Self {
            cpu: Cpu::new(SystemBus::new(memory)),
        })
    }

    /// Loads a program blob and points PC at it.
    ///
    /// Bytes are written straight to the bus without charging cycles. Bytes
    /// that land on unpopulated addresses are dropped, and the copy wraps at
    /// `0xFFFF`.
    ///
    /// # Returns
    ///
    /// The load address, which is now PC.
    ///
    /// # Errors
    ///
    /// [`LoadError::ProgramTooShort`] if there is no code after the address.
    pub fn load(&mut self, program: &[u8]) -> Result<u16, LoadError> {
        let [low, high, code @ ..] = program else {
            return Err(LoadError::ProgramTooShort { len: program.len() });
        };
        if code.is_empty() {
            return Err(LoadError::ProgramTooShort { len: program.len() });
        }

        let address = u16::from_le_bytes([*low, *high]);
        let bus = self.cpu.bus_mut();
        for (offset, &byte) in code.iter().enumerate() {
            bus.write(address.wrapping_add(offset as u16), byte);
        }
        self.cpu.registers_mut().pc = address;

        log::debug!("loaded {} bytes at 0x{:04X}", code.len(), address);

        Ok(address)
    }

    /// Runs until the CPU's total cycle count reaches `cycle_budget`.
    ///
    /// See [`Cpu::execute`].
    pub fn start(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        self.cpu.execute(cycle_budget)
    }

    /// Executes one instruction. See [`Cpu::step`].
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        self.cpu.step()
    }

    /// Power-on reset: registers, cycle counter and RAM are all cleared.
    pub fn reset(&mut self) {
        self.cpu.reset();
        if let Some(memory) = self.cpu.bus_mut().device_mut() {
            memory.reset();
        }
        log::debug!("console reset");
    }

    /// Reads a byte through the bus without charging cycles.
    pub fn read(&self, address: u16) -> u8 {
        self.cpu.bus().read(address)
    }

    /// Writes a byte through the bus without charging cycles.
    pub fn write(&mut self, address: u16, data: u8) {
        self.cpu.bus_mut().write(address, data);
    }

    pub fn cpu(&self) -> &Cpu<SystemBus<Memory>> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu<SystemBus<Memory>> {
        &mut self.cpu
    }

    /// The work RAM, unless it has been detached from the bus.
    pub fn memory(&self) -> Option<&Memory> {
        self.cpu.bus().device()
    }

    pub fn memory_mut(&mut self) -> Option<&mut Memory> {
        self.cpu.bus_mut().device_mut()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
