//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register from memory, set Z and N
//! - STA, STX, STY: store a register to memory, no flags
//!
//! Loads pay +1 cycle when an indexed address crosses a page. Stores never
//! do; their table count is already the worst case.

use super::read_cycles;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Opcode;

/// Executes the LDA (Load Accumulator) instruction.
///
/// Flags affected: Z, N
///
/// Cycle timing: 2-6 cycles depending on addressing mode, +1 on page cross
/// for Absolute,X / Absolute,Y / (Indirect),Y.
pub(crate) fn execute_lda<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let Some((value, page_crossed)) = cpu.operand_value(opcode.addressing_mode) else {
        return 0;
    };

    cpu.registers.a = value;
    cpu.registers.update_zero_and_sign(value);

    read_cycles(opcode, page_crossed)
}

/// Executes the LDX (Load X Register) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_ldx<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let Some((value, page_crossed)) = cpu.operand_value(opcode.addressing_mode) else {
        return 0;
    };

    cpu.registers.x = value;
    cpu.registers.update_zero_and_sign(value);

    read_cycles(opcode, page_crossed)
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_ldy<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let Some((value, page_crossed)) = cpu.operand_value(opcode.addressing_mode) else {
        return 0;
    };

    cpu.registers.y = value;
    cpu.registers.update_zero_and_sign(value);

    read_cycles(opcode, page_crossed)
}

/// Executes the STA (Store Accumulator) instruction.
///
/// No flags affected. Absolute,X / Absolute,Y take 5 cycles and (Indirect),Y
/// takes 6 whether or not a page is crossed.
pub(crate) fn execute_sta<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let value = cpu.registers.a;
    store(cpu, opcode, value)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let value = cpu.registers.x;
    store(cpu, opcode, value)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let value = cpu.registers.y;
    store(cpu, opcode, value)
}

fn store<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode, value: u8) -> u8 {
    let Some((address, _)) = cpu.operand_address(opcode.addressing_mode) else {
        return 0;
    };

    cpu.write_byte(address, value);

    opcode.cycles
}
