//! # NES 6502 CPU Emulator Core
//!
//! A cycle-accurate emulator for the 6502 core of the NES 2A03: the register
//! and flag model, a bus abstraction, full addressing-mode resolution, a
//! table-driven decoder covering the documented opcodes, and every
//! instruction's semantics with exact cycle costs, including page-crossing and
//! branch-taken penalties.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::Console;
//!
//! let mut console = Console::new();
//!
//! // Load address 0x0600, then LDA #$00
//! console.load(&[0x00, 0x06, 0xA9, 0x00]).unwrap();
//! console.start(2).unwrap();
//!
//! let regs = console.cpu().registers();
//! assert_eq!(regs.a, 0x00);
//! assert!(regs.zero());
//! assert_eq!(console.cpu().total_cycles(), 2);
//! ```
//!
//! ## Architecture
//!
//! - **Ownership**: the [`Console`] owns the [`Cpu`], the CPU owns its
//!   [`SystemBus`], and the bus owns the [`Memory`] device
//! - **Cycle Accuracy**: every bus access is charged as it happens, and each
//!   instruction is topped up to its documented cycle count
//! - **Table-Driven Design**: all opcode metadata lives in [`OPCODE_TABLE`],
//!   checked at compile time
//! - **No Global Output**: tracing goes through an injectable [`TraceSink`]
//!   and diagnostics through the `log` facade
//!
//! ## Modules
//!
//! - `registers` - Register file and status flags
//! - `memory` - Work RAM
//! - `bus` - Bus traits and routing
//! - `addressing` - Addressing modes and operand resolution
//! - `opcodes` - Opcode table
//! - `cpu` - CPU state, bus wrappers and the fetch/execute loop
//! - `trace` - Instruction tracing
//! - `config` - Console configuration
//! - `console` - The console and program loader

pub mod addressing;
pub mod bus;
pub mod config;
pub mod console;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod trace;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand, Resolved};
pub use bus::{Bus, BusDevice, SystemBus};
pub use config::ConsoleConfig;
pub use console::Console;
pub use cpu::{Cpu, BRK_VECTOR, CPU_FREQUENCY_HZ, STACK_PAGE};
pub use memory::{Memory, MAX_MEMORY_SIZE, NES_RAM_SIZE};
pub use opcodes::{opcode_for, Instruction, Opcode, OPCODE_TABLE};
pub use registers::{Registers, Status};
pub use trace::{LogTracer, TraceEvent, TraceSink};

use thiserror::Error;

/// Errors that stop the fetch/execute loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched byte is not a documented opcode.
    ///
    /// `address` is where the byte was fetched from. The fetch cycle has been
    /// charged and PC already points past the byte.
    #[error("invalid opcode 0x{opcode:02X} at 0x{address:04X}")]
    InvalidOpcode { opcode: u8, address: u16 },
}

/// Errors from building a memory or console with a bad configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("memory size must be greater than zero")]
    ZeroMemorySize,

    #[error("memory size {0:#X} exceeds the 64 KiB address space")]
    MemoryTooLarge(usize),
}

/// Errors from the program loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// A program needs a 2-byte load address and at least one byte of code.
    #[error("program is {len} bytes; need a 2-byte load address followed by code")]
    ProgramTooShort { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ExecutionError::InvalidOpcode {
            opcode: 0x02,
            address: 0x0600,
        };
        assert_eq!(err.to_string(), "invalid opcode 0x02 at 0x0600");
        assert_eq!(
            ConfigError::MemoryTooLarge(0x20000).to_string(),
            "memory size 0x20000 exceeds the 64 KiB address space"
        );
        assert_eq!(
            LoadError::ProgramTooShort { len: 2 }.to_string(),
            "program is 2 bytes; need a 2-byte load address followed by code"
        );
    }
}
