//! WASM API for the console.
//!
//! Provides JavaScript-callable interfaces for loading programs, running them,
//! inspecting CPU state and memory, and tracing execution.

use crate::{Console, ConsoleConfig, TraceEvent};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

/// A console with 64 KiB of RAM, driven from JavaScript.
#[wasm_bindgen]
pub struct WasmConsole {
    console: Console,
}

#[wasm_bindgen]
impl WasmConsole {
    /// Create a console with every address backed by RAM
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmConsole, JsError> {
        Ok(WasmConsole {
            console: Console::with_config(ConsoleConfig::flat())?,
        })
    }

    /// Load a program blob (2-byte little-endian load address, then code).
    /// Returns the load address.
    pub fn load_program(&mut self, program: &[u8]) -> Result<u16, JsError> {
        Ok(self.console.load(program)?)
    }

    /// Execute a single instruction and return its cycle count
    pub fn step(&mut self) -> Result<u32, JsError> {
        Ok(self.console.step()?)
    }

    /// Execute for at least `cycles` more cycles and return the actual count
    pub fn run(&mut self, cycles: u32) -> Result<u32, JsError> {
        let consumed = self.console.cpu_mut().run_for_cycles(cycles as u64)?;
        Ok(consumed as u32)
    }

    /// Reset registers, cycle counter and memory
    pub fn reset(&mut self) {
        self.console.reset();
    }

    /// Call `callback(line)` with a formatted trace line after every
    /// instruction. Replaces any previous callback.
    pub fn set_trace_callback(&mut self, callback: js_sys::Function) {
        self.console
            .cpu_mut()
            .set_trace_sink(Box::new(move |event: &TraceEvent| {
                let line = JsValue::from_str(&event.to_string());
                let _ = callback.call1(&JsValue::NULL, &line);
            }));
    }

    pub fn clear_trace_callback(&mut self) {
        self.console.cpu_mut().clear_trace_sink();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.console.cpu().registers().a
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.console.cpu().registers().x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.console.cpu().registers().y
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.console.cpu().registers().pc
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.console.cpu().registers().sp
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.console.cpu().registers().p()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.console.cpu().total_cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.console.cpu().registers().sign()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.console.cpu().registers().overflow()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.console.cpu().registers().break_flag()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.console.cpu().registers().decimal()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.console.cpu().registers().interrupt()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.console.cpu().registers().zero()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.console.cpu().registers().carry()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.console.cpu_mut().registers_mut().pc = addr;
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.console.read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.console.write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256u16)
            .map(|i| self.console.read(start.wrapping_add(i)))
            .collect()
    }
}
