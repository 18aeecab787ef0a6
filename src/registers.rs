//! # Processor Registers
//!
//! Architectural state of the 2A03's 6502 core: the accumulator, the two index
//! registers, the stack pointer, the program counter and the packed status
//! register `P`.
//!
//! ## Status Register Layout
//!
//! ```text
//! bit  7 6 5 4 3 2 1 0
//!      N V - B D I Z C
//! ```
//!
//! Bit 5 is not a real flag. It always reads back as 1, and `Registers` never
//! lets it be cleared.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Packed processor status flags (`P`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry / no-borrow (bit 0)
        const CARRY = 1 << 0;
        /// Result was zero (bit 1)
        const ZERO = 1 << 1;
        /// Interrupt disable (bit 2)
        const INTERRUPT = 1 << 2;
        /// Decimal mode (bit 3). Stored but ignored by ADC/SBC on the 2A03.
        const DECIMAL = 1 << 3;
        /// Break (bit 4)
        const BREAK = 1 << 4;
        /// Unused, always set (bit 5)
        const UNUSED = 1 << 5;
        /// Signed overflow (bit 6)
        const OVERFLOW = 1 << 6;
        /// Sign / negative (bit 7)
        const SIGN = 1 << 7;
    }
}

/// Power-on value of `P`: only the unused bit is set.
pub const STATUS_POWER_ON: u8 = 0b0010_0000;

/// Power-on value of the stack pointer.
pub const SP_POWER_ON: u8 = 0xFF;

/// CPU register file.
///
/// `a`, `x`, `y`, `pc` and `sp` are plain public fields so that a host or test
/// harness can poke them directly. The status register is private and goes
/// through typed accessors, which keep bit 5 set.
///
/// # Examples
///
/// ```
/// use nes6502::Registers;
///
/// let mut regs = Registers::new();
/// assert_eq!(regs.p(), 0b0010_0000);
/// assert_eq!(regs.sp, 0xFF);
///
/// regs.set_carry(true);
/// regs.set_sign(true);
/// assert_eq!(regs.p(), 0b1010_0001);
///
/// // Bit 5 survives a raw write of zero
/// regs.set_p(0x00);
/// assert_eq!(regs.p(), 0b0010_0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Program counter
    pub pc: u16,
    /// Stack pointer (offset into page 0x0100)
    pub sp: u8,
    p: Status,
}

impl Registers {
    /// Creates the power-on register state.
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: SP_POWER_ON,
            p: Status::from_bits_retain(STATUS_POWER_ON),
        }
    }

    /// Restores the power-on register state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the packed status register.
    pub fn p(&self) -> u8 {
        self.p.bits()
    }

    /// Replaces the packed status register. Bit 5 is forced on.
    pub fn set_p(&mut self, value: u8) {
        self.p = Status::from_bits_retain(value) | Status::UNUSED;
    }

    /// Returns the status register as typed flags.
    pub fn status(&self) -> Status {
        self.p
    }

    /// Returns true if every flag in `flags` is set.
    pub fn contains(&self, flags: Status) -> bool {
        self.p.contains(flags)
    }

    /// Sets or clears `flags`. The unused bit cannot be cleared.
    pub fn set_flag(&mut self, flags: Status, value: bool) {
        self.p.set(flags, value);
        self.p.insert(Status::UNUSED);
    }

    pub fn carry(&self) -> bool {
        self.p.contains(Status::CARRY)
    }

    pub fn set_carry(&mut self, value: bool) {
        self.set_flag(Status::CARRY, value);
    }

    pub fn zero(&self) -> bool {
        self.p.contains(Status::ZERO)
    }

    pub fn set_zero(&mut self, value: bool) {
        self.set_flag(Status::ZERO, value);
    }

    pub fn interrupt(&self) -> bool {
        self.p.contains(Status::INTERRUPT)
    }

    pub fn set_interrupt(&mut self, value: bool) {
        self.set_flag(Status::INTERRUPT, value);
    }

    pub fn decimal(&self) -> bool {
        self.p.contains(Status::DECIMAL)
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.set_flag(Status::DECIMAL, value);
    }

    /// Break flag (`break` is a keyword, hence the suffix).
    pub fn break_flag(&self) -> bool {
        self.p.contains(Status::BREAK)
    }

    pub fn set_break_flag(&mut self, value: bool) {
        self.set_flag(Status::BREAK, value);
    }

    pub fn overflow(&self) -> bool {
        self.p.contains(Status::OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.set_flag(Status::OVERFLOW, value);
    }

    /// Sign (negative) flag, a copy of bit 7 of the last result.
    pub fn sign(&self) -> bool {
        self.p.contains(Status::SIGN)
    }

    pub fn set_sign(&mut self, value: bool) {
        self.set_flag(Status::SIGN, value);
    }

    /// Sets Z if `value` is zero and N from bit 7 of `value`.
    ///
    /// Shared by loads, transfers, logical ops, increments and decrements.
    pub fn update_zero_and_sign(&mut self, value: u8) {
        self.set_zero(value == 0);
        self.set_sign(value & 0x80 != 0);
    }

    /// Full stack address the stack pointer currently points at.
    pub fn sp_address(&self) -> u16 {
        crate::cpu::STACK_PAGE | self.sp as u16
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Status, char); 8] = [
            (Status::SIGN, 'N'),
            (Status::OVERFLOW, 'V'),
            (Status::UNUSED, '-'),
            (Status::BREAK, 'B'),
            (Status::DECIMAL, 'D'),
            (Status::INTERRUPT, 'I'),
            (Status::ZERO, 'Z'),
            (Status::CARRY, 'C'),
        ];

        let flags: String = NAMES
            .iter()
            .map(|&(flag, name)| {
                if self.p.contains(flag) {
                    name
                } else {
                    name.to_ascii_lowercase()
                }
            })
            .collect();

        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} PC:{:04X} [{}]",
            self.a,
            self.x,
            self.y,
            self.p(),
            self.sp,
            self.pc,
            flags
        )
    }
}
