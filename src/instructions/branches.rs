//! # Branch Instructions
//!
//! This module implements the conditional branches:
//! - BCC / BCS: carry clear / set
//! - BNE / BEQ: zero clear / set
//! - BPL / BMI: sign clear / set
//! - BVC / BVS: overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! added to the address of the next instruction.
//!
//! Cycle timing:
//! - 2 cycles if the branch is not taken
//! - 3 cycles if taken to the same page
//! - 4 cycles if taken to a different page
//!
//! No flags are affected.

use crate::addressing::{page_crossed, Operand};
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Opcode;

pub(crate) fn execute_bcc<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let condition = !cpu.registers.carry();
    branch(cpu, opcode, condition)
}

pub(crate) fn execute_bcs<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let condition = cpu.registers.carry();
    branch(cpu, opcode, condition)
}

pub(crate) fn execute_bne<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let condition = !cpu.registers.zero();
    branch(cpu, opcode, condition)
}

pub(crate) fn execute_beq<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let condition = cpu.registers.zero();
    branch(cpu, opcode, condition)
}

pub(crate) fn execute_bpl<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let condition = !cpu.registers.sign();
    branch(cpu, opcode, condition)
}

pub(crate) fn execute_bmi<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let condition = cpu.registers.sign();
    branch(cpu, opcode, condition)
}

pub(crate) fn execute_bvc<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let condition = !cpu.registers.overflow();
    branch(cpu, opcode, condition)
}

pub(crate) fn execute_bvs<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let condition = cpu.registers.overflow();
    branch(cpu, opcode, condition)
}

/// Fetches the offset and, if `condition` holds, moves PC by it.
fn branch<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode, condition: bool) -> u8 {
    let Operand::Relative(offset) = cpu.resolve(opcode.addressing_mode).operand else {
        return 0;
    };

    if !condition {
        return opcode.cycles;
    }

    // PC already points at the next instruction
    let next = cpu.registers.pc;
    let target = next.wrapping_add_signed(offset as i8 as i16);
    cpu.registers.pc = target;

    opcode.cycles + 1 + page_crossed(next, target) as u8
}
