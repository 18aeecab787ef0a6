//! # Stack Instructions
//!
//! - PHA: push A (3 cycles)
//! - PHP: push P as it is (3 cycles)
//! - PLA: pull A, set Z and N (4 cycles)
//! - PLP: pull P, bit 5 forced on (4 cycles)
//!
//! The stack lives in page 1 and grows downward; see [`Cpu::push_byte`].

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Opcode;

pub(crate) fn execute_pha<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let value = cpu.registers.a;
    cpu.push_byte(value);
    opcode.cycles
}

/// Pushes the status register verbatim. The B flag is pushed only if it is
/// actually set.
pub(crate) fn execute_php<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let value = cpu.registers.p();
    cpu.push_byte(value);
    opcode.cycles
}

pub(crate) fn execute_pla<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let value = cpu.pop_byte();
    cpu.registers.a = value;
    cpu.registers.update_zero_and_sign(value);
    opcode.cycles
}

/// Pulls the status register. No flags are computed; the pulled byte
/// replaces P with bit 5 set.
pub(crate) fn execute_plp<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let value = cpu.pop_byte();
    cpu.registers.set_p(value);
    opcode.cycles
}
