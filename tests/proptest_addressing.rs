//! Property-based tests for addressing mode calculations.
//!
//! These tests verify effective address calculation across the operand
//! space, zero-page wraparound, and the page-crossing cycle penalty.

use nes6502::{opcode_for, AddressingMode, Bus, Cpu, Instruction, Memory, SystemBus};
use proptest::prelude::*;

const PROGRAM: u16 = 0x8000;

/// CPU over 64 KiB of RAM with `program` at 0x8000.
fn setup_cpu(program: &[u8]) -> Cpu<SystemBus<Memory>> {
    let mut bus = SystemBus::new(Memory::new(0x1_0000).unwrap());
    for (offset, &byte) in program.iter().enumerate() {
        bus.write(PROGRAM + offset as u16, byte);
    }
    let mut cpu = Cpu::new(bus);
    cpu.registers_mut().pc = PROGRAM;
    cpu
}

fn poke(cpu: &mut Cpu<SystemBus<Memory>>, address: u16, value: u8) {
    cpu.bus_mut().write(address, value);
}

fn in_program(address: u16) -> bool {
    (PROGRAM..PROGRAM + 3).contains(&address)
}

fn lda(mode: AddressingMode) -> u8 {
    opcode_for(Instruction::Lda, mode).unwrap()
}

// ========== Zero Page ==========

proptest! {
    /// Property: Zero page,X addressing wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(
        base in 0u8..=255u8,
        x in 0u8..=255u8,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu(&[lda(AddressingMode::ZeroPageX), base]);
        cpu.registers_mut().x = x;
        poke(&mut cpu, base.wrapping_add(x) as u16, value);

        let cycles = cpu.step().unwrap();

        prop_assert_eq!(cpu.registers().a, value);
        prop_assert_eq!(cycles, 4);
    }

    /// Property: Zero page,Y addressing wraps within zero page
    #[test]
    fn prop_zero_page_y_wraps_in_zero_page(
        base in 0u8..=255u8,
        y in 0u8..=255u8,
        value in 0u8..=255u8,
    ) {
        let ldx = opcode_for(Instruction::Ldx, AddressingMode::ZeroPageY).unwrap();
        let mut cpu = setup_cpu(&[ldx, base]);
        cpu.registers_mut().y = y;
        poke(&mut cpu, base.wrapping_add(y) as u16, value);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.registers().x, value);
    }

    /// Property: (zp,X) reads its pointer from page 0, wrapping at 0xFF
    #[test]
    fn prop_indexed_indirect_pointer_wraps(
        base in 0u8..=255u8,
        x in 0u8..=255u8,
        target in 0x0200u16..0x7F00,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu(&[lda(AddressingMode::IndexedIndirect), base]);
        cpu.registers_mut().x = x;
        let pointer = base.wrapping_add(x);
        poke(&mut cpu, pointer as u16, (target & 0xFF) as u8);
        poke(&mut cpu, pointer.wrapping_add(1) as u16, (target >> 8) as u8);
        poke(&mut cpu, target, value);

        let cycles = cpu.step().unwrap();

        prop_assert_eq!(cpu.registers().a, value);
        prop_assert_eq!(cycles, 6);
    }
}

// ========== Page Crossing ==========

proptest! {
    /// Property: Absolute,X reads cost 4 cycles, 5 when the index crosses a page
    #[test]
    fn prop_absolute_x_page_penalty(base in 0u16..=0xFFFF, x in 0u8..=255u8, value in 0u8..=255u8) {
        let address = base.wrapping_add(x as u16);
        prop_assume!(!in_program(address));

        let [low, high] = base.to_le_bytes();
        let mut cpu = setup_cpu(&[lda(AddressingMode::AbsoluteX), low, high]);
        cpu.registers_mut().x = x;
        poke(&mut cpu, address, value);

        let cycles = cpu.step().unwrap();

        let crossed = (base & 0xFF00) != (address & 0xFF00);
        prop_assert_eq!(cpu.registers().a, value);
        prop_assert_eq!(cycles, 4 + crossed as u32);
    }

    /// Property: Absolute,Y reads cost 4 cycles, 5 when the index crosses a page
    #[test]
    fn prop_absolute_y_page_penalty(base in 0u16..=0xFFFF, y in 0u8..=255u8) {
        let address = base.wrapping_add(y as u16);
        let [low, high] = base.to_le_bytes();
        let mut cpu = setup_cpu(&[lda(AddressingMode::AbsoluteY), low, high]);
        cpu.registers_mut().y = y;

        let cycles = cpu.step().unwrap();

        let crossed = (base & 0xFF00) != (address & 0xFF00);
        prop_assert_eq!(cycles, 4 + crossed as u32);
    }

    /// Property: (zp),Y reads cost 5 cycles, 6 when the index crosses a page
    #[test]
    fn prop_indirect_indexed_page_penalty(
        pointer in 0u8..=255u8,
        base in 0x0200u16..0x7F00,
        y in 0u8..=255u8,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu(&[lda(AddressingMode::IndirectIndexed), pointer]);
        cpu.registers_mut().y = y;
        poke(&mut cpu, pointer as u16, (base & 0xFF) as u8);
        poke(&mut cpu, pointer.wrapping_add(1) as u16, (base >> 8) as u8);
        let address = base + y as u16;
        poke(&mut cpu, address, value);

        let cycles = cpu.step().unwrap();

        let crossed = (base & 0xFF00) != (address & 0xFF00);
        prop_assert_eq!(cpu.registers().a, value);
        prop_assert_eq!(cycles, 5 + crossed as u32);
    }

    /// Property: indexed stores always pay the worst case
    #[test]
    fn prop_store_indexed_fixed_cycles(base in 0u16..=0xFFFF, y in 0u8..=255u8) {
        let sta = opcode_for(Instruction::Sta, AddressingMode::AbsoluteY).unwrap();
        let [low, high] = base.to_le_bytes();
        let mut cpu = setup_cpu(&[sta, low, high]);
        cpu.registers_mut().y = y;

        prop_assert_eq!(cpu.step().unwrap(), 5);
    }

    /// Property: a taken branch costs 3 cycles, 4 when the target is on
    /// another page than the next instruction
    #[test]
    fn prop_branch_page_penalty(offset in 0u8..=255u8) {
        let beq = opcode_for(Instruction::Beq, AddressingMode::Relative).unwrap();
        let mut cpu = setup_cpu(&[beq, offset]);
        cpu.registers_mut().set_zero(true);

        let cycles = cpu.step().unwrap();

        let next = PROGRAM + 2;
        let target = next.wrapping_add_signed(offset as i8 as i16);
        let crossed = (next & 0xFF00) != (target & 0xFF00);
        prop_assert_eq!(cpu.registers().pc, target);
        prop_assert_eq!(cycles, 3 + crossed as u32);
    }
}
