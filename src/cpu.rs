//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct and the fetch-decode-execute loop.
//!
//! ## Bus Access
//!
//! Instruction logic only touches memory through the wrappers defined here,
//! and every wrapper charges cycles as it goes:
//!
//! | Operation      | Cycles |
//! |----------------|--------|
//! | `read_byte`    | 1      |
//! | `read_word`    | 2      |
//! | `write_byte`   | 1      |
//! | `write_word`   | 2      |
//! | `fetch`        | 1      |
//! | `fetch_word`   | 2      |
//!
//! ## Cycle Accounting
//!
//! Each instruction executor returns the instruction's documented cycle count
//! (table base plus any page-cross or branch penalty). Once it returns,
//! [`Cpu::step`] charges whatever the bus accesses have not already covered,
//! so one instruction always costs exactly its documented count. An invalid
//! opcode costs only the fetch that read it.
//!
//! ## Execution Model
//!
//! - [`Cpu::step`]: execute one instruction
//! - [`Cpu::execute`]: execute until the total cycle count reaches a target
//! - [`Cpu::run_for_cycles`]: execute for a number of cycles from now

use crate::bus::Bus;
use crate::instructions;
use crate::opcodes::OPCODE_TABLE;
use crate::registers::Registers;
use crate::trace::{TraceEvent, TraceSink};
use crate::ExecutionError;
use std::fmt;

/// Base address of the hardware stack.
pub const STACK_PAGE: u16 = 0x0100;

/// Address BRK loads the new program counter from.
///
/// Real hardware uses `$FFFE`. The console only has 2 KiB of RAM, so the
/// vector lives at the top of page 0 instead.
pub const BRK_VECTOR: u16 = 0x00FE;

/// NTSC 2A03 CPU clock in Hz.
pub const CPU_FREQUENCY_HZ: u32 = 1_789_773;

/// 6502 CPU state and execution context.
///
/// Generic over the bus it drives. The register file is exposed through
/// [`Cpu::registers`] and [`Cpu::registers_mut`] so a host or test harness can
/// set up and inspect state directly.
///
/// # Examples
///
/// ```
/// use nes6502::{Bus, Cpu, Memory, SystemBus};
///
/// let mut bus = SystemBus::new(Memory::nes_ram());
/// bus.write(0x0000, 0xA9); // LDA #$42
/// bus.write(0x0001, 0x42);
///
/// let mut cpu = Cpu::new(bus);
/// let cycles = cpu.step().unwrap();
///
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.registers().a, 0x42);
/// assert_eq!(cpu.registers().pc, 0x0002);
/// ```
pub struct Cpu<B: Bus> {
    pub(crate) registers: Registers,

    /// Cycles executed since power-on or the last reset
    pub(crate) total_cycles: u64,

    pub(crate) bus: B,

    tracer: Option<Box<dyn TraceSink>>,
}

impl<B: Bus> Cpu<B> {
    /// Creates a CPU in the power-on state attached to `bus`.
    ///
    /// - A, X, Y and PC are zero
    /// - SP is `0xFF`
    /// - P has only bit 5 set
    /// - The cycle counter is zero
    pub fn new(bus: B) -> Self {
        Self {
            registers: Registers::new(),
            total_cycles: 0,
            bus,
            tracer: None,
        }
    }

    /// Restores the power-on register state and clears the cycle counter.
    ///
    /// The bus and whatever it is attached to are left alone.
    pub fn reset(&mut self) {
        self.registers.reset();
        self.total_cycles = 0;
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the CPU, handing back its bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Returns the total number of cycles executed since power-on or reset.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Installs a sink that receives one [`TraceEvent`] per executed
    /// instruction, replacing any previous sink.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer = Some(sink);
    }

    /// Removes the trace sink, returning it.
    pub fn clear_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.tracer.take()
    }

    // ========== Bus Operations ==========

    /// Reads one byte. 1 cycle.
    pub fn read_byte(&mut self, address: u16) -> u8 {
        self.total_cycles += 1;
        self.bus.read(address)
    }

    /// Reads a little-endian word from `address` and `address + 1`. 2 cycles.
    pub fn read_word(&mut self, address: u16) -> u16 {
        let low = self.read_byte(address) as u16;
        let high = self.read_byte(address.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Writes one byte. 1 cycle.
    pub fn write_byte(&mut self, address: u16, data: u8) {
        self.total_cycles += 1;
        self.bus.write(address, data);
    }

    /// Writes a little-endian word, low byte at `address`. 2 cycles.
    pub fn write_word(&mut self, address: u16, data: u16) {
        self.write_byte(address, (data & 0xFF) as u8);
        self.write_byte(address.wrapping_add(1), (data >> 8) as u8);
    }

    /// Reads the byte at PC and advances PC by 1. 1 cycle.
    pub fn fetch(&mut self) -> u8 {
        let value = self.read_byte(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(1);
        value
    }

    /// Reads the word at PC and advances PC by 2. 2 cycles.
    pub fn fetch_word(&mut self) -> u16 {
        let value = self.read_word(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(2);
        value
    }

    // ========== Stack ==========

    /// Writes `value` at the stack pointer, then decrements SP.
    pub fn push_byte(&mut self, value: u8) {
        self.write_byte(self.registers.sp_address(), value);
        self.registers.sp = self.registers.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads the byte it points at.
    pub fn pop_byte(&mut self) -> u8 {
        self.registers.sp = self.registers.sp.wrapping_add(1);
        self.read_byte(self.registers.sp_address())
    }

    /// Pushes a word, high byte first, so the low byte ends up at the lower
    /// address. SP wraps within page 1.
    pub fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte((value & 0xFF) as u8);
    }

    /// Pops a word pushed by [`Cpu::push_word`].
    pub fn pop_word(&mut self) -> u16 {
        let low = self.pop_byte() as u16;
        let high = self.pop_byte() as u16;
        (high << 8) | low
    }

    // ========== Execution ==========

    /// Executes one instruction.
    ///
    /// 1. Fetch the opcode byte at PC (1 cycle)
    /// 2. Decode it through [`OPCODE_TABLE`]
    /// 3. Dispatch to the instruction executor
    /// 4. Charge any internal cycles the bus accesses did not cover
    /// 5. Report the instruction to the trace sink, if one is installed
    ///
    /// # Returns
    ///
    /// - `Ok(cycles)` with the cycles this instruction took
    /// - `Err(ExecutionError::InvalidOpcode)` if the byte is not a documented
    ///   opcode. The fetch cycle has been charged and PC points past the byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{Bus, Cpu, ExecutionError, Memory, SystemBus};
    ///
    /// let mut bus = SystemBus::new(Memory::nes_ram());
    /// bus.write(0x0000, 0xFF);
    ///
    /// let mut cpu = Cpu::new(bus);
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::InvalidOpcode { opcode: 0xFF, address: 0x0000 })
    /// );
    /// assert_eq!(cpu.total_cycles(), 1);
    /// ```
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        let start_cycles = self.total_cycles;
        let address = self.registers.pc;

        let byte = self.fetch();
        let opcode = &OPCODE_TABLE[byte as usize];

        if !opcode.is_valid() {
            log::warn!(
                "invalid opcode 0x{:02X} at 0x{:04X}, halting",
                byte,
                address
            );
            return Err(ExecutionError::InvalidOpcode {
                opcode: byte,
                address,
            });
        }

        let declared = instructions::execute(self, opcode) as u64;
        let charged = self.total_cycles - start_cycles;
        self.total_cycles += declared.saturating_sub(charged);

        let cycles = (self.total_cycles - start_cycles) as u32;

        if self.tracer.is_some() {
            let event = TraceEvent {
                address,
                opcode: byte,
                instruction: opcode.instruction,
                addressing_mode: opcode.addressing_mode,
                registers: self.registers,
                cycles,
                total_cycles: self.total_cycles,
            };
            if let Some(tracer) = self.tracer.as_mut() {
                tracer.trace(&event);
            }
        }

        Ok(cycles)
    }

    /// Runs until the total cycle count reaches `cycle_budget`.
    ///
    /// The budget is compared against [`Cpu::total_cycles`], which only
    /// [`Cpu::reset`] clears, so calling again with a larger budget resumes
    /// where the last call stopped. The last instruction may overshoot the
    /// budget; instructions are never split.
    ///
    /// # Returns
    ///
    /// - `Ok(cycles)` consumed by this call
    /// - `Err(ExecutionError)` from the first invalid opcode
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{Bus, Cpu, Memory, SystemBus};
    ///
    /// let mut bus = SystemBus::new(Memory::nes_ram());
    /// for address in 0x0000..0x0010 {
    ///     bus.write(address, 0xEA); // NOP
    /// }
    ///
    /// let mut cpu = Cpu::new(bus);
    /// assert_eq!(cpu.execute(6).unwrap(), 6);
    /// assert_eq!(cpu.execute(10).unwrap(), 4);
    /// assert_eq!(cpu.total_cycles(), 10);
    /// ```
    pub fn execute(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.total_cycles;

        while self.total_cycles < cycle_budget {
            self.step()?;
        }

        Ok(self.total_cycles - start_cycles)
    }

    /// Runs for at least `cycles` more cycles.
    ///
    /// Handy for frame-locked hosts: one NTSC frame is about 29780 cycles.
    pub fn run_for_cycles(&mut self, cycles: u64) -> Result<u64, ExecutionError> {
        self.execute(self.total_cycles.saturating_add(cycles))
    }
}

impl<B: Bus + fmt::Debug> fmt::Debug for Cpu<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("registers", &self.registers)
            .field("total_cycles", &self.total_cycles)
            .field("bus", &self.bus)
            .field("tracing", &self.tracer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Memory, SystemBus};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup_cpu() -> Cpu<SystemBus<Memory>> {
        Cpu::new(SystemBus::new(Memory::new(0x1_0000).unwrap()))
    }

    fn load(cpu: &mut Cpu<SystemBus<Memory>>, address: u16, bytes: &[u8]) {
        if let Some(memory) = cpu.bus_mut().device_mut() {
            memory.load(address, bytes);
        }
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.registers().a, 0x00);
        assert_eq!(cpu.registers().x, 0x00);
        assert_eq!(cpu.registers().y, 0x00);
        assert_eq!(cpu.registers().pc, 0x0000);
        assert_eq!(cpu.registers().sp, 0xFF);
        assert_eq!(cpu.registers().p(), 0x20);
        assert_eq!(cpu.total_cycles(), 0);
    }

    #[test]
    fn test_into_bus_keeps_memory_written_by_instructions() {
        let mut cpu = setup_cpu();
        load(&mut cpu, 0x0000, &[0xA9, 0x5A, 0x85, 0x40]); // LDA #$5A; STA $40

        cpu.execute(5).unwrap();
        let bus = cpu.into_bus();

        assert_eq!(bus.read(0x0040), 0x5A);
    }

    #[test]
    fn test_bus_wrappers_charge_cycles() {
        let mut cpu = setup_cpu();

        cpu.write_byte(0x0010, 0x34);
        assert_eq!(cpu.total_cycles(), 1);
        cpu.write_word(0x0020, 0xBEEF);
        assert_eq!(cpu.total_cycles(), 3);
        assert_eq!(cpu.read_byte(0x0010), 0x34);
        assert_eq!(cpu.total_cycles(), 4);
        assert_eq!(cpu.read_word(0x0020), 0xBEEF);
        assert_eq!(cpu.total_cycles(), 6);
    }

    #[test]
    fn test_write_word_is_little_endian() {
        let mut cpu = setup_cpu();
        cpu.write_word(0x0300, 0x1234);

        let memory = cpu.bus().device().unwrap();
        assert_eq!(memory.as_slice()[0x0300], 0x34);
        assert_eq!(memory.as_slice()[0x0301], 0x12);
    }

    #[test]
    fn test_fetch_advances_pc() {
        let mut cpu = setup_cpu();
        load(&mut cpu, 0x0400, &[0x11, 0x22, 0x33]);
        cpu.registers_mut().pc = 0x0400;

        assert_eq!(cpu.fetch(), 0x11);
        assert_eq!(cpu.registers().pc, 0x0401);
        assert_eq!(cpu.fetch_word(), 0x3322);
        assert_eq!(cpu.registers().pc, 0x0403);
        assert_eq!(cpu.total_cycles(), 3);
    }

    #[test]
    fn test_push_pop_byte() {
        let mut cpu = setup_cpu();

        cpu.push_byte(0x42);
        assert_eq!(cpu.registers().sp, 0xFE);
        assert_eq!(cpu.bus().device().unwrap().as_slice()[0x01FF], 0x42);

        assert_eq!(cpu.pop_byte(), 0x42);
        assert_eq!(cpu.registers().sp, 0xFF);
    }

    #[test]
    fn test_push_word_layout_matches_write_word() {
        let mut cpu = setup_cpu();

        cpu.push_word(0xABCD);

        let memory = cpu.bus().device().unwrap();
        assert_eq!(memory.as_slice()[0x01FE], 0xCD);
        assert_eq!(memory.as_slice()[0x01FF], 0xAB);
        assert_eq!(cpu.registers().sp, 0xFD);
    }

    #[test]
    fn test_stack_pointer_wraps_within_page_one() {
        let mut cpu = setup_cpu();
        cpu.registers_mut().sp = 0x00;

        cpu.push_byte(0x77);
        assert_eq!(cpu.registers().sp, 0xFF);
        assert_eq!(cpu.bus().device().unwrap().as_slice()[0x0100], 0x77);

        assert_eq!(cpu.pop_byte(), 0x77);
        assert_eq!(cpu.registers().sp, 0x00);
    }

    #[test]
    fn test_step_pads_internal_cycles() {
        let mut cpu = setup_cpu();
        load(&mut cpu, 0x0000, &[0xE8]); // INX

        assert_eq!(cpu.step(), Ok(2));
        assert_eq!(cpu.total_cycles(), 2);
        assert_eq!(cpu.registers().x, 1);
    }

    #[test]
    fn test_step_invalid_opcode() {
        let mut cpu = setup_cpu();
        load(&mut cpu, 0x0010, &[0x02]);
        cpu.registers_mut().pc = 0x0010;

        let result = cpu.step();

        assert_eq!(
            result,
            Err(ExecutionError::InvalidOpcode {
                opcode: 0x02,
                address: 0x0010
            })
        );
        assert_eq!(cpu.total_cycles(), 1);
        assert_eq!(cpu.registers().pc, 0x0011);
    }

    #[test]
    fn test_execute_stops_at_budget() {
        let mut cpu = setup_cpu();
        load(&mut cpu, 0x0000, &[0xEA; 16]);

        // NOPs are 2 cycles, so a budget of 5 overshoots to 6
        assert_eq!(cpu.execute(5), Ok(6));
        assert_eq!(cpu.registers().pc, 0x0003);
    }

    #[test]
    fn test_execute_with_budget_already_met_does_nothing() {
        let mut cpu = setup_cpu();
        load(&mut cpu, 0x0000, &[0xEA; 4]);
        cpu.execute(4).unwrap();

        assert_eq!(cpu.execute(4), Ok(0));
        assert_eq!(cpu.total_cycles(), 4);
    }

    #[test]
    fn test_run_for_cycles_is_relative() {
        let mut cpu = setup_cpu();
        load(&mut cpu, 0x0000, &[0xEA; 16]);
        cpu.execute(4).unwrap();

        assert_eq!(cpu.run_for_cycles(4), Ok(4));
        assert_eq!(cpu.total_cycles(), 8);
    }

    #[test]
    fn test_reset_clears_registers_and_cycles() {
        let mut cpu = setup_cpu();
        load(&mut cpu, 0x0000, &[0xA9, 0x80]);
        cpu.step().unwrap();

        cpu.reset();

        assert_eq!(*cpu.registers(), Registers::new());
        assert_eq!(cpu.total_cycles(), 0);
        // memory is untouched
        assert_eq!(cpu.bus().device().unwrap().as_slice()[0x0000], 0xA9);
    }

    #[test]
    fn test_trace_sink_sees_each_instruction() {
        let mut cpu = setup_cpu();
        load(&mut cpu, 0x0000, &[0xA9, 0x05, 0xAA]); // LDA #5, TAX

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        cpu.set_trace_sink(Box::new(move |event: &TraceEvent| {
            sink.borrow_mut().push(*event);
        }));

        cpu.step().unwrap();
        cpu.step().unwrap();

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].address, 0x0000);
        assert_eq!(events[0].opcode, 0xA9);
        assert_eq!(events[0].registers.a, 0x05);
        assert_eq!(events[1].address, 0x0002);
        assert_eq!(events[1].registers.x, 0x05);
        assert_eq!(events[1].total_cycles, 4);
    }

    #[test]
    fn test_clear_trace_sink() {
        let mut cpu = setup_cpu();
        assert!(cpu.clear_trace_sink().is_none());

        cpu.set_trace_sink(Box::new(|_: &TraceEvent| {}));
        assert!(cpu.clear_trace_sink().is_some());
    }
}
