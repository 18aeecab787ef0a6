//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: subroutine call and return
//! - BRK / RTI: software interrupt and return
//! - NOP: no operation
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC (already one past the BRK byte) as a word
//! 2. Pushes the processor status byte as it stands
//! 3. Sets the B flag
//! 4. Loads PC from the vector at [`BRK_VECTOR`]
//!
//! RTI undoes this in reverse order, so a BRK/RTI pair restores PC, SP and P.

use crate::bus::Bus;
use crate::cpu::{Cpu, BRK_VECTOR};
use crate::opcodes::Opcode;

/// Executes the JMP (Jump) instruction.
///
/// - Absolute (0x4C): 3 cycles
/// - Indirect (0x6C): 5 cycles. A pointer at `$xxFF` takes its high byte
///   from `$xx00`.
///
/// No flags affected.
pub(crate) fn execute_jmp<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let Some((target, _)) = cpu.operand_address(opcode.addressing_mode) else {
        return 0;
    };

    cpu.registers.pc = target;

    opcode.cycles
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (PC - 1 once
/// the operand has been fetched), then jumps. RTS adds the missing one back.
///
/// Cycle timing: 6 cycles
pub(crate) fn execute_jsr<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let Some((target, _)) = cpu.operand_address(opcode.addressing_mode) else {
        return 0;
    };

    let return_address = cpu.registers.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.registers.pc = target;

    opcode.cycles
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the return address and resumes one byte past it.
///
/// Cycle timing: 6 cycles
pub(crate) fn execute_rts<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let return_address = cpu.pop_word();
    cpu.registers.pc = return_address.wrapping_add(1);

    opcode.cycles
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Cycle timing: 7 cycles
///
/// Flags affected:
/// - B: set after P has been pushed
pub(crate) fn execute_brk<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let return_address = cpu.registers.pc;
    cpu.push_word(return_address);

    let status = cpu.registers.p();
    cpu.push_byte(status);

    cpu.registers.set_break_flag(true);
    cpu.registers.pc = cpu.read_word(BRK_VECTOR);

    log::debug!(
        "BRK at 0x{:04X}, vectoring to 0x{:04X}",
        return_address.wrapping_sub(1),
        cpu.registers.pc
    );

    opcode.cycles
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops P, then PC. P is restored exactly as pushed, bit 5 aside.
///
/// Cycle timing: 6 cycles
pub(crate) fn execute_rti<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    let status = cpu.pop_byte();
    cpu.registers.set_p(status);
    cpu.registers.pc = cpu.pop_word();

    opcode.cycles
}

/// Executes the NOP (No Operation) instruction. 2 cycles.
pub(crate) fn execute_nop<B: Bus>(_cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    opcode.cycles
}
