//! # Register Transfer Instructions
//!
//! Copy one register into another. Every transfer sets Z and N from the
//! copied value except TXS, which touches no flags. All take 2 cycles.

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Opcode;

/// TAX: X = A
pub(crate) fn execute_tax<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.x = cpu.registers.a;
    cpu.registers.update_zero_and_sign(cpu.registers.x);
    opcode.cycles
}

/// TAY: Y = A
pub(crate) fn execute_tay<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.y = cpu.registers.a;
    cpu.registers.update_zero_and_sign(cpu.registers.y);
    opcode.cycles
}

/// TXA: A = X
pub(crate) fn execute_txa<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.a = cpu.registers.x;
    cpu.registers.update_zero_and_sign(cpu.registers.a);
    opcode.cycles
}

/// TYA: A = Y
pub(crate) fn execute_tya<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.a = cpu.registers.y;
    cpu.registers.update_zero_and_sign(cpu.registers.a);
    opcode.cycles
}

/// TSX: X = SP
pub(crate) fn execute_tsx<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.x = cpu.registers.sp;
    cpu.registers.update_zero_and_sign(cpu.registers.x);
    opcode.cycles
}

/// TXS: SP = X. Flags are not affected.
pub(crate) fn execute_txs<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    cpu.registers.sp = cpu.registers.x;
    opcode.cycles
}
