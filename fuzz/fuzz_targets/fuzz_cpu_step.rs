//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary register states and memory contents, then
//! executes a few instructions looking for panics and broken invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes6502::{Bus, Cpu, Memory, SystemBus, OPCODE_TABLE};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    p: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instructions + operands)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Size of the work RAM, scaled into 1..=0x10000
    memory_size: u16,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let size = input.memory.memory_size as usize + 1;
    let Ok(memory) = Memory::new(size) else {
        return;
    };
    let mut bus = SystemBus::new(memory);

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        bus.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        bus.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.program.iter().enumerate() {
        bus.write(0x0200 + i as u16, byte);
    }

    let mut cpu = Cpu::new(bus);
    {
        let regs = cpu.registers_mut();
        regs.a = input.cpu_state.a;
        regs.x = input.cpu_state.x;
        regs.y = input.cpu_state.y;
        regs.sp = input.cpu_state.sp;
        regs.pc = 0x0200;
        regs.set_p(input.cpu_state.p);
    }

    for _ in 0..(input.steps % 8) + 1 {
        let before = cpu.total_cycles();
        let opcode = OPCODE_TABLE[cpu.bus().read(cpu.registers().pc) as usize];

        match cpu.step() {
            Ok(cycles) => {
                // Every documented instruction costs between its base count
                // and base + 2
                assert!(cycles >= opcode.cycles as u32);
                assert!(cycles <= opcode.cycles as u32 + 2);
                assert_eq!(cpu.total_cycles(), before + cycles as u64);
            }
            Err(_) => {
                assert!(!opcode.is_valid());
                assert_eq!(cpu.total_cycles(), before + 1);
                break;
            }
        }

        // Bit 5 of P is always set
        assert_eq!(cpu.registers().p() & 0x20, 0x20);
    }
});
