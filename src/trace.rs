//! # Instruction Tracing
//!
//! An optional hook that observes every executed instruction. The core never
//! prints anything itself; a host installs a [`TraceSink`] on the CPU and
//! decides where the events go.
//!
//! Any `FnMut(&TraceEvent)` closure is a sink. [`LogTracer`] forwards events to
//! the `log` facade at trace level.

use crate::addressing::AddressingMode;
use crate::opcodes::Instruction;
use crate::registers::Registers;
use std::fmt;

/// Log target used by [`LogTracer`].
pub const TRACE_TARGET: &str = "nes6502::trace";

/// One executed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    /// Address the opcode byte was fetched from
    pub address: u16,
    /// Opcode byte
    pub opcode: u8,
    pub instruction: Instruction,
    pub addressing_mode: AddressingMode,
    /// Register state after the instruction completed
    pub registers: Registers,
    /// Cycles charged for this instruction
    pub cycles: u32,
    /// Total cycles after this instruction
    pub total_cycles: u64,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X}  {:02X}  {} {:<16} {} +{} CYC:{}",
            self.address,
            self.opcode,
            self.instruction,
            format!("{:?}", self.addressing_mode),
            self.registers,
            self.cycles,
            self.total_cycles
        )
    }
}

/// Receiver for [`TraceEvent`]s.
pub trait TraceSink {
    fn trace(&mut self, event: &TraceEvent);
}

impl<F> TraceSink for F
where
    F: FnMut(&TraceEvent),
{
    fn trace(&mut self, event: &TraceEvent) {
        self(event)
    }
}

/// Sink that writes each event with `log::trace!` under [`TRACE_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl TraceSink for LogTracer {
    fn trace(&mut self, event: &TraceEvent) {
        log::trace!(target: TRACE_TARGET, "{}", event);
    }
}
