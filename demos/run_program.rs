//! Runs a small program on the console and prints a trace of every
//! instruction.
//!
//! ```text
//! cargo run --example run_program
//! ```
//!
//! The program multiplies 6 by 7 with repeated addition, stores the result
//! at $0010, then hits an invalid opcode to stop.

use nes6502::{Console, ExecutionError, TraceEvent};

const PROGRAM: &[u8] = &[
    0x00, 0x06, // load at $0600
    0xA9, 0x00, //       LDA #0
    0xA2, 0x07, //       LDX #7
    0x18, //       loop: CLC
    0x69, 0x06, //       ADC #6
    0xCA, //             DEX
    0xD0, 0xFA, //       BNE loop
    0x85, 0x10, //       STA $10
    0x02, //             (invalid, halts)
];

fn main() {
    let mut console = Console::new();
    if let Err(err) = console.load(PROGRAM) {
        eprintln!("load failed: {}", err);
        return;
    }

    console
        .cpu_mut()
        .set_trace_sink(Box::new(|event: &TraceEvent| println!("{}", event)));

    match console.start(10_000) {
        Ok(cycles) => println!("budget reached after {} cycles", cycles),
        Err(ExecutionError::InvalidOpcode { opcode, address }) => {
            println!("halted on ${:02X} at ${:04X}", opcode, address)
        }
    }

    println!("$0010 = {}", console.read(0x0010));
    println!("{}", console.cpu().registers());
    println!(
        "{} cycles, {:.2} us at {} Hz",
        console.cpu().total_cycles(),
        console.cpu().total_cycles() as f64 * 1e6 / nes6502::CPU_FREQUENCY_HZ as f64,
        nes6502::CPU_FREQUENCY_HZ
    );
}
