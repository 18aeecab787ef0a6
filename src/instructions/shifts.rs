//! # Shift and Rotate Instructions
//!
//! - ASL: C <- [7..0] <- 0
//! - LSR: 0 -> [7..0] -> C
//! - ROL: C <- [7..0] <- C
//! - ROR: C -> [7..0] -> C
//!
//! Each works on A (Accumulator mode, 2 cycles) or on memory as a
//! read-modify-write (5-7 cycles). The result is written back before Z and N
//! are set from it.

use crate::addressing::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Opcode;

pub(crate) fn execute_asl<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    shift(cpu, opcode, |value, _| (value << 1, value & 0x80 != 0))
}

pub(crate) fn execute_lsr<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    shift(cpu, opcode, |value, _| (value >> 1, value & 0x01 != 0))
}

pub(crate) fn execute_rol<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    shift(cpu, opcode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

pub(crate) fn execute_ror<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    shift(cpu, opcode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}

/// Applies `op` to the operand. `op` gets the value and the incoming carry
/// and returns the result and the outgoing carry.
fn shift<B: Bus>(
    cpu: &mut Cpu<B>,
    opcode: &Opcode,
    op: impl FnOnce(u8, bool) -> (u8, bool),
) -> u8 {
    let carry_in = cpu.registers.carry();

    let result = match cpu.resolve(opcode.addressing_mode).operand {
        Operand::Accumulator => {
            let (result, carry_out) = op(cpu.registers.a, carry_in);
            cpu.registers.a = result;
            cpu.registers.set_carry(carry_out);
            result
        }
        Operand::Address(address) => {
            let (result, carry_out) = op(cpu.read_byte(address), carry_in);
            cpu.write_byte(address, result);
            cpu.registers.set_carry(carry_out);
            result
        }
        _ => return 0,
    };

    cpu.registers.update_zero_and_sign(result);

    opcode.cycles
}
