//! # Status Flag Instructions
//!
//! Each one sets or clears exactly one flag and touches nothing else.
//! All take 2 cycles.
//!
//! | Instruction | Effect |
//! |-------------|--------|
//! | CLC / SEC   | C = 0 / 1 |
//! | CLI / SEI   | I = 0 / 1 |
//! | CLD / SED   | D = 0 / 1 |
//! | CLV         | V = 0 |

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Opcode;
use crate::registers::Status;

fn set<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode, flag: Status, value: bool) -> u8 {
    cpu.registers.set_flag(flag, value);
    opcode.cycles
}

pub(crate) fn execute_clc<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    set(cpu, opcode, Status::CARRY, false)
}

pub(crate) fn execute_sec<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    set(cpu, opcode, Status::CARRY, true)
}

pub(crate) fn execute_cli<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    set(cpu, opcode, Status::INTERRUPT, false)
}

pub(crate) fn execute_sei<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    set(cpu, opcode, Status::INTERRUPT, true)
}

/// CLD. Decimal mode has no effect on arithmetic on the 2A03, but the flag
/// is still stored.
pub(crate) fn execute_cld<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    set(cpu, opcode, Status::DECIMAL, false)
}

pub(crate) fn execute_sed<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    set(cpu, opcode, Status::DECIMAL, true)
}

pub(crate) fn execute_clv<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    set(cpu, opcode, Status::OVERFLOW, false)
}
