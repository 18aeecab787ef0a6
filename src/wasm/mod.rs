//! WebAssembly bindings for the console.
//!
//! This module provides JavaScript-callable interfaces to the emulator core,
//! enabling browser-based execution of 6502 programs. Built only with the
//! `wasm` feature.

pub mod api;

pub use api::{JsError, WasmConsole};
