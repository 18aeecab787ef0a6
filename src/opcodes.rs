//! # Opcode Table
//!
//! The 256-entry decode table: one [`Opcode`] per possible opcode byte, indexed
//! directly by that byte.
//!
//! The table holds the 151 documented NMOS 6502 opcodes. Every other byte
//! decodes to [`Instruction::Invalid`], which halts the fetch loop with
//! [`crate::ExecutionError::InvalidOpcode`].
//!
//! Each entry records:
//! - The byte value itself (always equal to its index)
//! - The instruction kind
//! - The addressing mode
//! - The base cycle cost, including the opcode fetch but excluding
//!   page-crossing and branch-taken penalties
//!
//! The table is a `const` checked at compile time: every entry's index matches
//! its byte, and every instruction is paired only with addressing modes its
//! executor handles.

use crate::addressing::AddressingMode;
use std::fmt;

/// The 56 documented 6502 operations, plus `Invalid` for undecodable bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // Load/store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,

    // Register transfers
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,

    // Stack
    Pha,
    Php,
    Pla,
    Plp,

    // Logical
    And,
    Eor,
    Ora,
    Bit,

    // Arithmetic
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,

    // Increments & decrements
    Inc,
    Inx,
    Iny,
    Dec,
    Dex,
    Dey,

    // Shifts & rotates
    Asl,
    Lsr,
    Rol,
    Ror,

    // Jumps & calls
    Jmp,
    Jsr,
    Rts,

    // Branches
    Bcc,
    Bcs,
    Beq,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,

    // Status flag changes
    Clc,
    Cld,
    Cli,
    Clv,
    Sec,
    Sed,
    Sei,

    // System
    Brk,
    Nop,
    Rti,

    /// Undocumented or unused opcode byte.
    Invalid,
}

impl Instruction {
    /// Upper-case assembler mnemonic, `"???"` for [`Instruction::Invalid`].
    pub const fn mnemonic(self) -> &'static str {
        use Instruction::*;
        match self {
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Txa => "TXA",
            Tya => "TYA",
            Tsx => "TSX",
            Txs => "TXS",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            And => "AND",
            Eor => "EOR",
            Ora => "ORA",
            Bit => "BIT",
            Adc => "ADC",
            Sbc => "SBC",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Asl => "ASL",
            Lsr => "LSR",
            Rol => "ROL",
            Ror => "ROR",
            Jmp => "JMP",
            Jsr => "JSR",
            Rts => "RTS",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Brk => "BRK",
            Nop => "NOP",
            Rti => "RTI",
            Invalid => "???",
        }
    }

    /// Returns true if the executor for this instruction handles `mode`.
    pub const fn supports(self, mode: AddressingMode) -> bool {
        use AddressingMode::*;
        use Instruction::*;
        match self {
            Lda | And | Eor | Ora | Adc | Sbc | Cmp => matches!(
                mode,
                Immediate
                    | ZeroPage
                    | ZeroPageX
                    | Absolute
                    | AbsoluteX
                    | AbsoluteY
                    | IndexedIndirect
                    | IndirectIndexed
            ),
            Ldx => matches!(
                mode,
                Immediate | ZeroPage | ZeroPageY | Absolute | AbsoluteY
            ),
            Ldy => matches!(
                mode,
                Immediate | ZeroPage | ZeroPageX | Absolute | AbsoluteX
            ),
            Sta => matches!(
                mode,
                ZeroPage
                    | ZeroPageX
                    | Absolute
                    | AbsoluteX
                    | AbsoluteY
                    | IndexedIndirect
                    | IndirectIndexed
            ),
            Stx => matches!(mode, ZeroPage | ZeroPageY | Absolute),
            Sty => matches!(mode, ZeroPage | ZeroPageX | Absolute),
            Bit => matches!(mode, ZeroPage | Absolute),
            Cpx | Cpy => matches!(mode, Immediate | ZeroPage | Absolute),
            Inc | Dec => matches!(mode, ZeroPage | ZeroPageX | Absolute | AbsoluteX),
            Asl | Lsr | Rol | Ror => matches!(
                mode,
                Accumulator | ZeroPage | ZeroPageX | Absolute | AbsoluteX
            ),
            Jmp => matches!(mode, Absolute | Indirect),
            Jsr => matches!(mode, Absolute),
            Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs => matches!(mode, Relative),
            Tax | Tay | Txa | Tya | Tsx | Txs | Pha | Php | Pla | Plp | Inx | Iny | Dex
            | Dey | Rts | Clc | Cld | Cli | Clv | Sec | Sed | Sei | Brk | Nop | Rti
            | Invalid => matches!(mode, Implicit),
        }
    }

    /// Returns true for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        use Instruction::*;
        matches!(self, Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// One decode table entry.
///
/// # Examples
///
/// ```
/// use nes6502::{AddressingMode, Instruction, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.value, 0xA9);
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.cycles, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Opcode byte
    pub value: u8,
    /// Operation performed
    pub instruction: Instruction,
    /// How the operand is located
    pub addressing_mode: AddressingMode,
    /// Base cycle cost (0 for invalid entries)
    pub cycles: u8,
}

impl Opcode {
    /// Returns true if this byte decodes to a documented instruction.
    pub const fn is_valid(&self) -> bool {
        !matches!(self.instruction, Instruction::Invalid)
    }

    /// Instruction length in bytes, opcode included.
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X} {} {:?}",
            self.value, self.instruction, self.addressing_mode
        )
    }
}

const fn op(value: u8, instruction: Instruction, mode: AddressingMode, cycles: u8) -> Opcode {
    Opcode {
        value,
        instruction,
        addressing_mode: mode,
        cycles,
    }
}

const fn invalid(value: u8) -> Opcode {
    op(value, Instruction::Invalid, AddressingMode::Implicit, 0)
}

const TABLE: [Opcode; 256] = {
    use AddressingMode::*;
    use Instruction::*;
    [
        // 0x0_
        op(0x00, Brk, Implicit, 7),
        op(0x01, Ora, IndexedIndirect, 6),
        invalid(0x02),
        invalid(0x03),
        invalid(0x04),
        op(0x05, Ora, ZeroPage, 3),
        op(0x06, Asl, ZeroPage, 5),
        invalid(0x07),
        op(0x08, Php, Implicit, 3),
        op(0x09, Ora, Immediate, 2),
        op(0x0A, Asl, Accumulator, 2),
        invalid(0x0B),
        invalid(0x0C),
        op(0x0D, Ora, Absolute, 4),
        op(0x0E, Asl, Absolute, 6),
        invalid(0x0F),
        // 0x1_
        op(0x10, Bpl, Relative, 2),
        op(0x11, Ora, IndirectIndexed, 5),
        invalid(0x12),
        invalid(0x13),
        invalid(0x14),
        op(0x15, Ora, ZeroPageX, 4),
        op(0x16, Asl, ZeroPageX, 6),
        invalid(0x17),
        op(0x18, Clc, Implicit, 2),
        op(0x19, Ora, AbsoluteY, 4),
        invalid(0x1A),
        invalid(0x1B),
        invalid(0x1C),
        op(0x1D, Ora, AbsoluteX, 4),
        op(0x1E, Asl, AbsoluteX, 7),
        invalid(0x1F),
        // 0x2_
        op(0x20, Jsr, Absolute, 6),
        op(0x21, And, IndexedIndirect, 6),
        invalid(0x22),
        invalid(0x23),
        op(0x24, Bit, ZeroPage, 3),
        op(0x25, And, ZeroPage, 3),
        op(0x26, Rol, ZeroPage, 5),
        invalid(0x27),
        op(0x28, Plp, Implicit, 4),
        op(0x29, And, Immediate, 2),
        op(0x2A, Rol, Accumulator, 2),
        invalid(0x2B),
        op(0x2C, Bit, Absolute, 4),
        op(0x2D, And, Absolute, 4),
        op(0x2E, Rol, Absolute, 6),
        invalid(0x2F),
        // 0x3_
        op(0x30, Bmi, Relative, 2),
        op(0x31, And, IndirectIndexed, 5),
        invalid(0x32),
        invalid(0x33),
        invalid(0x34),
        op(0x35, And, ZeroPageX, 4),
        op(0x36, Rol, ZeroPageX, 6),
        invalid(0x37),
        op(0x38, Sec, Implicit, 2),
        op(0x39, And, AbsoluteY, 4),
        invalid(0x3A),
        invalid(0x3B),
        invalid(0x3C),
        op(0x3D, And, AbsoluteX, 4),
        op(0x3E, Rol, AbsoluteX, 7),
        invalid(0x3F),
        // 0x4_
        op(0x40, Rti, Implicit, 6),
        op(0x41, Eor, IndexedIndirect, 6),
        invalid(0x42),
        invalid(0x43),
        invalid(0x44),
        op(0x45, Eor, ZeroPage, 3),
        op(0x46, Lsr, ZeroPage, 5),
        invalid(0x47),
        op(0x48, Pha, Implicit, 3),
        op(0x49, Eor, Immediate, 2),
        op(0x4A, Lsr, Accumulator, 2),
        invalid(0x4B),
        op(0x4C, Jmp, Absolute, 3),
        op(0x4D, Eor, Absolute, 4),
        op(0x4E, Lsr, Absolute, 6),
        invalid(0x4F),
        // 0x5_
        op(0x50, Bvc, Relative, 2),
        op(0x51, Eor, IndirectIndexed, 5),
        invalid(0x52),
        invalid(0x53),
        invalid(0x54),
        op(0x55, Eor, ZeroPageX, 4),
        op(0x56, Lsr, ZeroPageX, 6),
        invalid(0x57),
        op(0x58, Cli, Implicit, 2),
        op(0x59, Eor, AbsoluteY, 4),
        invalid(0x5A),
        invalid(0x5B),
        invalid(0x5C),
        op(0x5D, Eor, AbsoluteX, 4),
        op(0x5E, Lsr, AbsoluteX, 7),
        invalid(0x5F),
        // 0x6_
        op(0x60, Rts, Implicit, 6),
        op(0x61, Adc, IndexedIndirect, 6),
        invalid(0x62),
        invalid(0x63),
        invalid(0x64),
        op(0x65, Adc, ZeroPage, 3),
        op(0x66, Ror, ZeroPage, 5),
        invalid(0x67),
        op(0x68, Pla, Implicit, 4),
        op(0x69, Adc, Immediate, 2),
        op(0x6A, Ror, Accumulator, 2),
        invalid(0x6B),
        op(0x6C, Jmp, Indirect, 5),
        op(0x6D, Adc, Absolute, 4),
        op(0x6E, Ror, Absolute, 6),
        invalid(0x6F),
        // 0x7_
        op(0x70, Bvs, Relative, 2),
        op(0x71, Adc, IndirectIndexed, 5),
        invalid(0x72),
        invalid(0x73),
        invalid(0x74),
        op(0x75, Adc, ZeroPageX, 4),
        op(0x76, Ror, ZeroPageX, 6),
        invalid(0x77),
        op(0x78, Sei, Implicit, 2),
        op(0x79, Adc, AbsoluteY, 4),
        invalid(0x7A),
        invalid(0x7B),
        invalid(0x7C),
        op(0x7D, Adc, AbsoluteX, 4),
        op(0x7E, Ror, AbsoluteX, 7),
        invalid(0x7F),
        // 0x8_
        invalid(0x80),
        op(0x81, Sta, IndexedIndirect, 6),
        invalid(0x82),
        invalid(0x83),
        op(0x84, Sty, ZeroPage, 3),
        op(0x85, Sta, ZeroPage, 3),
        op(0x86, Stx, ZeroPage, 3),
        invalid(0x87),
        op(0x88, Dey, Implicit, 2),
        invalid(0x89),
        op(0x8A, Txa, Implicit, 2),
        invalid(0x8B),
        op(0x8C, Sty, Absolute, 4),
        op(0x8D, Sta, Absolute, 4),
        op(0x8E, Stx, Absolute, 4),
        invalid(0x8F),
        // 0x9_
        op(0x90, Bcc, Relative, 2),
        op(0x91, Sta, IndirectIndexed, 6),
        invalid(0x92),
        invalid(0x93),
        op(0x94, Sty, ZeroPageX, 4),
        op(0x95, Sta, ZeroPageX, 4),
        op(0x96, Stx, ZeroPageY, 4),
        invalid(0x97),
        op(0x98, Tya, Implicit, 2),
        op(0x99, Sta, AbsoluteY, 5),
        op(0x9A, Txs, Implicit, 2),
        invalid(0x9B),
        invalid(0x9C),
        op(0x9D, Sta, AbsoluteX, 5),
        invalid(0x9E),
        invalid(0x9F),
        // 0xA_
        op(0xA0, Ldy, Immediate, 2),
        op(0xA1, Lda, IndexedIndirect, 6),
        op(0xA2, Ldx, Immediate, 2),
        invalid(0xA3),
        op(0xA4, Ldy, ZeroPage, 3),
        op(0xA5, Lda, ZeroPage, 3),
        op(0xA6, Ldx, ZeroPage, 3),
        invalid(0xA7),
        op(0xA8, Tay, Implicit, 2),
        op(0xA9, Lda, Immediate, 2),
        op(0xAA, Tax, Implicit, 2),
        invalid(0xAB),
        op(0xAC, Ldy, Absolute, 4),
        op(0xAD, Lda, Absolute, 4),
        op(0xAE, Ldx, Absolute, 4),
        invalid(0xAF),
        // 0xB_
        op(0xB0, Bcs, Relative, 2),
        op(0xB1, Lda, IndirectIndexed, 5),
        invalid(0xB2),
        invalid(0xB3),
        op(0xB4, Ldy, ZeroPageX, 4),
        op(0xB5, Lda, ZeroPageX, 4),
        op(0xB6, Ldx, ZeroPageY, 4),
        invalid(0xB7),
        op(0xB8, Clv, Implicit, 2),
        op(0xB9, Lda, AbsoluteY, 4),
        op(0xBA, Tsx, Implicit, 2),
        invalid(0xBB),
        op(0xBC, Ldy, AbsoluteX, 4),
        op(0xBD, Lda, AbsoluteX, 4),
        op(0xBE, Ldx, AbsoluteY, 4),
        invalid(0xBF),
        // 0xC_
        op(0xC0, Cpy, Immediate, 2),
        op(0xC1, Cmp, IndexedIndirect, 6),
        invalid(0xC2),
        invalid(0xC3),
        op(0xC4, Cpy, ZeroPage, 3),
        op(0xC5, Cmp, ZeroPage, 3),
        op(0xC6, Dec, ZeroPage, 5),
        invalid(0xC7),
        op(0xC8, Iny, Implicit, 2),
        op(0xC9, Cmp, Immediate, 2),
        op(0xCA, Dex, Implicit, 2),
        invalid(0xCB),
        op(0xCC, Cpy, Absolute, 4),
        op(0xCD, Cmp, Absolute, 4),
        op(0xCE, Dec, Absolute, 6),
        invalid(0xCF),
        // 0xD_
        op(0xD0, Bne, Relative, 2),
        op(0xD1, Cmp, IndirectIndexed, 5),
        invalid(0xD2),
        invalid(0xD3),
        invalid(0xD4),
        op(0xD5, Cmp, ZeroPageX, 4),
        op(0xD6, Dec, ZeroPageX, 6),
        invalid(0xD7),
        op(0xD8, Cld, Implicit, 2),
        op(0xD9, Cmp, AbsoluteY, 4),
        invalid(0xDA),
        invalid(0xDB),
        invalid(0xDC),
        op(0xDD, Cmp, AbsoluteX, 4),
        op(0xDE, Dec, AbsoluteX, 7),
        invalid(0xDF),
        // 0xE_
        op(0xE0, Cpx, Immediate, 2),
        op(0xE1, Sbc, IndexedIndirect, 6),
        invalid(0xE2),
        invalid(0xE3),
        op(0xE4, Cpx, ZeroPage, 3),
        op(0xE5, Sbc, ZeroPage, 3),
        op(0xE6, Inc, ZeroPage, 5),
        invalid(0xE7),
        op(0xE8, Inx, Implicit, 2),
        op(0xE9, Sbc, Immediate, 2),
        op(0xEA, Nop, Implicit, 2),
        invalid(0xEB),
        op(0xEC, Cpx, Absolute, 4),
        op(0xED, Sbc, Absolute, 4),
        op(0xEE, Inc, Absolute, 6),
        invalid(0xEF),
        // 0xF_
        op(0xF0, Beq, Relative, 2),
        op(0xF1, Sbc, IndirectIndexed, 5),
        invalid(0xF2),
        invalid(0xF3),
        invalid(0xF4),
        op(0xF5, Sbc, ZeroPageX, 4),
        op(0xF6, Inc, ZeroPageX, 6),
        invalid(0xF7),
        op(0xF8, Sed, Implicit, 2),
        op(0xF9, Sbc, AbsoluteY, 4),
        invalid(0xFA),
        invalid(0xFB),
        invalid(0xFC),
        op(0xFD, Sbc, AbsoluteX, 4),
        op(0xFE, Inc, AbsoluteX, 7),
        invalid(0xFF),
    ]
};

const fn table_is_consistent(table: &[Opcode; 256]) -> bool {
    let mut i = 0;
    while i < 256 {
        let entry = &table[i];
        if entry.value as usize != i {
            return false;
        }
        if !entry.instruction.supports(entry.addressing_mode) {
            return false;
        }
        if entry.is_valid() == (entry.cycles == 0) {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    table_is_consistent(&TABLE),
    "opcode table entry does not match its index or pairs an instruction with an unsupported mode"
);

/// Decode table indexed by opcode byte.
pub static OPCODE_TABLE: [Opcode; 256] = TABLE;

/// Decodes an opcode byte.
pub fn lookup(byte: u8) -> &'static Opcode {
    &OPCODE_TABLE[byte as usize]
}

/// Finds the byte that encodes `instruction` with `mode`.
///
/// # Examples
///
/// ```
/// use nes6502::{opcodes, AddressingMode, Instruction};
///
/// assert_eq!(opcodes::opcode_for(Instruction::Jmp, AddressingMode::Indirect), Some(0x6C));
/// assert_eq!(opcodes::opcode_for(Instruction::Sta, AddressingMode::Immediate), None);
/// ```
pub fn opcode_for(instruction: Instruction, mode: AddressingMode) -> Option<u8> {
    if instruction == Instruction::Invalid {
        return None;
    }
    OPCODE_TABLE
        .iter()
        .find(|entry| entry.instruction == instruction && entry.addressing_mode == mode)
        .map(|entry| entry.value)
}
