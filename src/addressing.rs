//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns a mode into an operand.
//!
//! Resolution consumes operand bytes through the CPU's cycle-charging fetch
//! wrappers, so the program counter and the cycle counter advance as a side
//! effect. The resolver also reports whether an indexed address crossed a
//! page boundary; the instruction decides whether that costs a cycle.
//!
//! ## Wrapping Rules
//!
//! - Zero page indexed addresses wrap within page 0 (`$FF,X` with X=1 is `$00`)
//! - `(zp,X)` and `(zp),Y` read their pointer from page 0, and a pointer at
//!   `$FF` takes its high byte from `$00`
//! - `JMP ($xxFF)` takes its high byte from `$xx00`, like the NMOS part
//! - Absolute indexed addresses wrap at `$FFFF`

use crate::bus::Bus;
use crate::cpu::Cpu;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndexedIndirect, IndirectIndexed
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    #[default]
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within page 0.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within page 0.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// Reads pay +1 cycle when the index crosses a page.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// Reads pay +1 cycle when the index crosses a page.
    AbsoluteY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($0120)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndexedIndirect,

    /// Indirect indexed: dereference ZP then add Y.
    ///
    /// Example: LDA ($40),Y
    /// Reads pay +1 cycle when the index crosses a page.
    IndirectIndexed,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Where an instruction's operand lives once its mode has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand
    None,
    /// The accumulator itself
    Accumulator,
    /// The byte that followed the opcode
    Immediate(u8),
    /// Effective memory address
    Address(u16),
    /// Raw branch offset byte, two's complement
    Relative(u8),
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    /// True if an index addition moved the address into another page.
    pub page_crossed: bool,
}

impl Resolved {
    fn new(operand: Operand) -> Self {
        Self {
            operand,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, address: u16) -> Self {
        Self {
            operand: Operand::Address(address),
            page_crossed: page_crossed(base, address),
        }
    }
}

/// Returns true if `base` and `address` lie in different 256-byte pages.
pub fn page_crossed(base: u16, address: u16) -> bool {
    (base & 0xFF00) != (address & 0xFF00)
}

impl<B: Bus> Cpu<B> {
    /// Consumes the operand bytes for `mode` and resolves the operand.
    ///
    /// Every byte read here is charged through the bus wrappers: one cycle
    /// per operand byte and one per pointer byte.
    pub fn resolve(&mut self, mode: AddressingMode) -> Resolved {
        match mode {
            AddressingMode::Implicit => Resolved::new(Operand::None),
            AddressingMode::Accumulator => Resolved::new(Operand::Accumulator),
            AddressingMode::Immediate => Resolved::new(Operand::Immediate(self.fetch())),
            AddressingMode::Relative => Resolved::new(Operand::Relative(self.fetch())),

            AddressingMode::ZeroPage => Resolved::new(Operand::Address(self.fetch() as u16)),
            AddressingMode::ZeroPageX => {
                let address = self.fetch().wrapping_add(self.registers.x);
                Resolved::new(Operand::Address(address as u16))
            }
            AddressingMode::ZeroPageY => {
                let address = self.fetch().wrapping_add(self.registers.y);
                Resolved::new(Operand::Address(address as u16))
            }

            AddressingMode::Absolute => Resolved::new(Operand::Address(self.fetch_word())),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Resolved::indexed(base, base.wrapping_add(self.registers.x as u16))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Resolved::indexed(base, base.wrapping_add(self.registers.y as u16))
            }

            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                Resolved::new(Operand::Address(self.read_word_page_wrapped(pointer)))
            }
            AddressingMode::IndexedIndirect => {
                let pointer = self.fetch().wrapping_add(self.registers.x);
                Resolved::new(Operand::Address(self.read_word_zero_page(pointer)))
            }
            AddressingMode::IndirectIndexed => {
                let pointer = self.fetch();
                let base = self.read_word_zero_page(pointer);
                Resolved::indexed(base, base.wrapping_add(self.registers.y as u16))
            }
        }
    }

    /// Resolves `mode` and reads the operand value.
    ///
    /// Returns the value and whether a page was crossed, or `None` if the mode
    /// has no value to read (implicit or relative).
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> Option<(u8, bool)> {
        let resolved = self.resolve(mode);
        let value = match resolved.operand {
            Operand::Accumulator => self.registers.a,
            Operand::Immediate(value) => value,
            Operand::Address(address) => self.read_byte(address),
            Operand::None | Operand::Relative(_) => return None,
        };
        Some((value, resolved.page_crossed))
    }

    /// Resolves `mode` to a memory address, for stores and jumps.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> Option<(u16, bool)> {
        let resolved = self.resolve(mode);
        match resolved.operand {
            Operand::Address(address) => Some((address, resolved.page_crossed)),
            _ => None,
        }
    }

    /// Reads a little-endian word from page 0, wrapping `$FF` to `$00`.
    fn read_word_zero_page(&mut self, pointer: u8) -> u16 {
        let low = self.read_byte(pointer as u16) as u16;
        let high = self.read_byte(pointer.wrapping_add(1) as u16) as u16;
        (high << 8) | low
    }

    /// Reads a little-endian word without carrying into the pointer's high
    /// byte, reproducing the NMOS `JMP ($xxFF)` behavior.
    fn read_word_page_wrapped(&mut self, pointer: u16) -> u16 {
        let high_address = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
        let low = self.read_byte(pointer) as u16;
        let high = self.read_byte(high_address) as u16;
        (high << 8) | low
    }
}
