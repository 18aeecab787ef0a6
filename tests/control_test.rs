//! Tests for JMP, JSR, RTS, BRK, RTI and NOP.

use nes6502::{Console, ConsoleConfig, BRK_VECTOR};

fn setup(program: &[u8]) -> Console {
    let mut console = Console::with_config(ConsoleConfig::flat()).unwrap();
    let mut blob = vec![0x00, 0x06];
    blob.extend_from_slice(program);
    console.load(&blob).unwrap();
    console
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let mut console = setup(&[0x4C, 0x34, 0x12]);

    assert_eq!(console.step().unwrap(), 3);
    assert_eq!(console.cpu().registers().pc, 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut console = setup(&[0x6C, 0x20, 0x01]);
    console.write(0x0120, 0xFC);
    console.write(0x0121, 0xBA);

    assert_eq!(console.step().unwrap(), 5);
    assert_eq!(console.cpu().registers().pc, 0xBAFC);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    let mut console = setup(&[0x6C, 0xFF, 0x02]);
    console.write(0x02FF, 0x00);
    console.write(0x0200, 0x07);
    console.write(0x0300, 0x09);

    console.step().unwrap();

    assert_eq!(console.cpu().registers().pc, 0x0700);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_rts_round_trip() {
    // 0x0600: JSR $0080; 0x0603: NOP
    // 0x0080: RTS
    let mut console = setup(&[0x20, 0x80, 0x00, 0xEA]);
    console.write(0x0080, 0x60);
    let sp_before = console.cpu().registers().sp;

    assert_eq!(console.step().unwrap(), 6);
    assert_eq!(console.cpu().registers().pc, 0x0080);
    assert_eq!(console.cpu().registers().sp, sp_before.wrapping_sub(2));
    // Return address is the last byte of the JSR
    assert_eq!(console.read(0x01FF), 0x06);
    assert_eq!(console.read(0x01FE), 0x02);

    assert_eq!(console.step().unwrap(), 6);
    assert_eq!(console.cpu().registers().pc, 0x0603);
    assert_eq!(console.cpu().registers().sp, sp_before);
}

#[test]
fn test_nested_subroutines() {
    // 0x0600: JSR $0700; 0x0603: NOP
    // 0x0700: JSR $0800; 0x0703: RTS
    // 0x0800: RTS
    let mut console = setup(&[0x20, 0x00, 0x07, 0xEA]);
    for (offset, &byte) in [0x20, 0x00, 0x08, 0x60].iter().enumerate() {
        console.write(0x0700 + offset as u16, byte);
    }
    console.write(0x0800, 0x60);

    console.start(24).unwrap();

    assert_eq!(console.cpu().registers().pc, 0x0603);
    assert_eq!(console.cpu().registers().sp, 0xFF);
}

// ========== BRK / RTI ==========

#[test]
fn test_brk_rti_round_trip() {
    // 0x0600: BRK; 0x0601: NOP
    // handler at 0x0700: RTI
    let mut console = setup(&[0x00, 0xEA]);
    console.write(BRK_VECTOR, 0x00);
    console.write(BRK_VECTOR + 1, 0x07);
    console.write(0x0700, 0x40);
    console.cpu_mut().registers_mut().set_carry(true);
    let sp_before = console.cpu().registers().sp;
    let p_before = console.cpu().registers().p();

    assert_eq!(console.step().unwrap(), 7);
    assert_eq!(console.cpu().registers().pc, 0x0700);
    assert!(console.cpu().registers().break_flag());
    assert_eq!(console.cpu().registers().sp, sp_before.wrapping_sub(3));

    assert_eq!(console.step().unwrap(), 6);
    let regs = console.cpu().registers();
    assert_eq!(regs.pc, 0x0601);
    assert_eq!(regs.sp, sp_before);
    assert_eq!(regs.p(), p_before);
    assert!(!regs.break_flag());
}

#[test]
fn test_brk_stack_layout() {
    let mut console = setup(&[0x00]);
    console.cpu_mut().registers_mut().set_sign(true);

    console.step().unwrap();

    assert_eq!(console.read(0x01FF), 0x06); // PC high
    assert_eq!(console.read(0x01FE), 0x01); // PC low
    assert_eq!(console.read(0x01FD), 0xA0); // P: N and bit 5
}

#[test]
fn test_brk_leaves_interrupt_flag_alone() {
    let mut console = setup(&[0x00]);

    console.step().unwrap();

    assert!(!console.cpu().registers().interrupt());
}

#[test]
fn test_rti_restores_status_verbatim() {
    let mut console = setup(&[0x40]);
    // Stack as if P=0xD3 and PC=0x1234 had been pushed
    console.write(0x01FD, 0xD3);
    console.write(0x01FE, 0x34);
    console.write(0x01FF, 0x12);
    console.cpu_mut().registers_mut().sp = 0xFC;

    assert_eq!(console.step().unwrap(), 6);

    let regs = console.cpu().registers();
    assert_eq!(regs.pc, 0x1234);
    assert_eq!(regs.p(), 0xF3);
    assert!(regs.break_flag());
    assert_eq!(regs.sp, 0xFF);
}

// ========== NOP ==========

#[test]
fn test_nop_changes_only_pc() {
    let mut console = setup(&[0xEA]);
    let before = *console.cpu().registers();

    assert_eq!(console.step().unwrap(), 2);

    let after = *console.cpu().registers();
    assert_eq!(after.pc, 0x0601);
    assert_eq!(after.a, before.a);
    assert_eq!(after.x, before.x);
    assert_eq!(after.y, before.y);
    assert_eq!(after.sp, before.sp);
    assert_eq!(after.p(), before.p());
}
