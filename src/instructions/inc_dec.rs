//! # Increment and Decrement Instructions
//!
//! - INC, DEC: read-modify-write on memory
//! - INX, INY, DEX, DEY: on an index register
//!
//! All wrap at 8 bits and set Z and N from the new value.

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Opcode;

/// Executes the INC (Increment Memory) instruction.
///
/// Reads the byte, adds one, writes it back, then sets Z and N from the
/// value written.
///
/// Cycle timing: 5 (zp), 6 (zp,X / abs), 7 (abs,X)
pub(crate) fn execute_inc<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    modify_memory(cpu, opcode, |value| value.wrapping_add(1))
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Same shape and timing as INC.
pub(crate) fn execute_dec<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    modify_memory(cpu, opcode, |value| value.wrapping_sub(1))
}

fn modify_memory<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode, f: impl FnOnce(u8) -> u8) -> u8 {
    let Some((address, _)) = cpu.operand_address(opcode.addressing_mode) else {
        return 0;
    };

    let result = f(cpu.read_byte(address));
    cpu.write_byte(address, result);
    cpu.registers.update_zero_and_sign(result);

    opcode.cycles
}

pub(crate) fn execute_inx<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.x = cpu.registers.x.wrapping_add(1);
    cpu.registers.update_zero_and_sign(cpu.registers.x);
    opcode.cycles
}

pub(crate) fn execute_iny<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.y = cpu.registers.y.wrapping_add(1);
    cpu.registers.update_zero_and_sign(cpu.registers.y);
    opcode.cycles
}

pub(crate) fn execute_dex<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.x = cpu.registers.x.wrapping_sub(1);
    cpu.registers.update_zero_and_sign(cpu.registers.x);
    opcode.cycles
}

pub(crate) fn execute_dey<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.y = cpu.registers.y.wrapping_sub(1);
    cpu.registers.update_zero_and_sign(cpu.registers.y);
    opcode.cycles
}
