//! Tests for the load and store instructions (LDA, LDX, LDY, STA, STX, STY).
//!
//! Tests cover:
//! - Every addressing mode of LDA
//! - Flag updates (Z, N) on loads, none on stores
//! - Cycle counts including page crossing penalties on loads
//! - Stores paying their worst-case count unconditionally

use nes6502::{Console, ConsoleConfig};

/// Console with 64 KiB of RAM and `program` loaded at 0x0600.
fn setup(program: &[u8]) -> Console {
    let mut console = Console::with_config(ConsoleConfig::flat()).unwrap();
    let mut blob = vec![0x00, 0x06];
    blob.extend_from_slice(program);
    console.load(&blob).unwrap();
    console
}

// ========== LDA ==========

#[test]
fn test_lda_immediate_zero_result() {
    let mut console = setup(&[0xA9, 0x00]);

    console.start(2).unwrap();

    let regs = console.cpu().registers();
    assert_eq!(regs.a, 0x00);
    assert!(regs.zero());
    assert!(!regs.sign());
    assert_eq!(console.cpu().total_cycles(), 2);
}

#[test]
fn test_lda_immediate_negative() {
    let mut console = setup(&[0xA9, 0x80]);

    assert_eq!(console.step().unwrap(), 2);

    let regs = console.cpu().registers();
    assert_eq!(regs.a, 0x80);
    assert!(!regs.zero());
    assert!(regs.sign());
    assert_eq!(regs.pc, 0x0602);
}

#[test]
fn test_lda_zero_page() {
    let mut console = setup(&[0xA5, 0x42]);
    console.write(0x0042, 0x37);

    assert_eq!(console.step().unwrap(), 3);
    assert_eq!(console.cpu().registers().a, 0x37);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut console = setup(&[0xB5, 0xFF]);
    console.cpu_mut().registers_mut().x = 0x02;
    console.write(0x0001, 0x99);
    console.write(0x0101, 0x11);

    assert_eq!(console.step().unwrap(), 4);
    assert_eq!(console.cpu().registers().a, 0x99);
}

#[test]
fn test_lda_absolute() {
    let mut console = setup(&[0xAD, 0x34, 0x12]);
    console.write(0x1234, 0x56);

    assert_eq!(console.step().unwrap(), 4);
    assert_eq!(console.cpu().registers().a, 0x56);
    assert_eq!(console.cpu().registers().pc, 0x0603);
}

#[test]
fn test_lda_absolute_x_same_page() {
    let mut console = setup(&[0xBD, 0x00, 0x12]);
    console.cpu_mut().registers_mut().x = 0x01;
    console.write(0x1201, 0x0F);

    assert_eq!(console.step().unwrap(), 4);
    assert_eq!(console.cpu().registers().a, 0x0F);
}

#[test]
fn test_lda_absolute_x_page_cross() {
    let mut console = setup(&[0xBD, 0xFF, 0x12]);
    console.cpu_mut().registers_mut().x = 0x01;
    console.write(0x1300, 0xF0);

    assert_eq!(console.step().unwrap(), 5);
    assert_eq!(console.cpu().registers().a, 0xF0);
}

#[test]
fn test_lda_absolute_y_page_cross() {
    let mut console = setup(&[0xB9, 0x80, 0x20]);
    console.cpu_mut().registers_mut().y = 0x80;
    console.write(0x2100, 0x44);

    assert_eq!(console.step().unwrap(), 5);
    assert_eq!(console.cpu().registers().a, 0x44);
}

#[test]
fn test_lda_indexed_indirect() {
    let mut console = setup(&[0xA1, 0x20]);
    console.cpu_mut().registers_mut().x = 0x04;
    console.write(0x0024, 0x74);
    console.write(0x0025, 0x30);
    console.write(0x3074, 0xAB);

    assert_eq!(console.step().unwrap(), 6);
    assert_eq!(console.cpu().registers().a, 0xAB);
}

#[test]
fn test_lda_indirect_indexed_same_page() {
    let mut console = setup(&[0xB1, 0x86]);
    console.cpu_mut().registers_mut().y = 0x10;
    console.write(0x0086, 0x28);
    console.write(0x0087, 0x40);
    console.write(0x4038, 0x5C);

    assert_eq!(console.step().unwrap(), 5);
    assert_eq!(console.cpu().registers().a, 0x5C);
}

#[test]
fn test_lda_indirect_indexed_page_cross() {
    let mut console = setup(&[0xB1, 0x86]);
    console.cpu_mut().registers_mut().y = 0x20;
    console.write(0x0086, 0xF0);
    console.write(0x0087, 0x40);
    console.write(0x4110, 0x5D);

    assert_eq!(console.step().unwrap(), 6);
    assert_eq!(console.cpu().registers().a, 0x5D);
}

// ========== LDX / LDY ==========

#[test]
fn test_ldx_zero_page_y() {
    let mut console = setup(&[0xB6, 0x10]);
    console.cpu_mut().registers_mut().y = 0x05;
    console.write(0x0015, 0x80);

    assert_eq!(console.step().unwrap(), 4);
    assert_eq!(console.cpu().registers().x, 0x80);
    assert!(console.cpu().registers().sign());
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let mut console = setup(&[0xBE, 0xFF, 0x30]);
    console.cpu_mut().registers_mut().y = 0x01;
    console.write(0x3100, 0x01);

    assert_eq!(console.step().unwrap(), 5);
    assert_eq!(console.cpu().registers().x, 0x01);
}

#[test]
fn test_ldy_immediate_zero() {
    let mut console = setup(&[0xA0, 0x00]);
    console.cpu_mut().registers_mut().y = 0x33;

    assert_eq!(console.step().unwrap(), 2);
    assert_eq!(console.cpu().registers().y, 0x00);
    assert!(console.cpu().registers().zero());
}

#[test]
fn test_ldy_absolute_x() {
    let mut console = setup(&[0xBC, 0x00, 0x20]);
    console.cpu_mut().registers_mut().x = 0x03;
    console.write(0x2003, 0x7E);

    assert_eq!(console.step().unwrap(), 4);
    assert_eq!(console.cpu().registers().y, 0x7E);
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page() {
    let mut console = setup(&[0x85, 0x10]);
    console.cpu_mut().registers_mut().a = 0x42;

    assert_eq!(console.step().unwrap(), 3);
    assert_eq!(console.read(0x0010), 0x42);
}

#[test]
fn test_sta_absolute_x_same_page_still_five_cycles() {
    let mut console = setup(&[0x9D, 0x00, 0x20]);
    console.cpu_mut().registers_mut().a = 0x42;
    console.cpu_mut().registers_mut().x = 0x01;

    assert_eq!(console.step().unwrap(), 5);
    assert_eq!(console.read(0x2001), 0x42);
}

#[test]
fn test_sta_absolute_x_page_cross_five_cycles() {
    let mut console = setup(&[0x9D, 0xFF, 0x20]);
    console.cpu_mut().registers_mut().a = 0x42;
    console.cpu_mut().registers_mut().x = 0x01;

    assert_eq!(console.step().unwrap(), 5);
    assert_eq!(console.read(0x2100), 0x42);
}

#[test]
fn test_sta_indirect_indexed() {
    let mut console = setup(&[0x91, 0x40]);
    console.cpu_mut().registers_mut().a = 0x99;
    console.cpu_mut().registers_mut().y = 0x02;
    console.write(0x0040, 0x00);
    console.write(0x0041, 0x30);

    assert_eq!(console.step().unwrap(), 6);
    assert_eq!(console.read(0x3002), 0x99);
}

#[test]
fn test_stx_zero_page_y() {
    let mut console = setup(&[0x96, 0xF0]);
    console.cpu_mut().registers_mut().x = 0x11;
    console.cpu_mut().registers_mut().y = 0x20;

    assert_eq!(console.step().unwrap(), 4);
    assert_eq!(console.read(0x0010), 0x11);
}

#[test]
fn test_sty_absolute() {
    let mut console = setup(&[0x8C, 0x00, 0x05]);
    console.cpu_mut().registers_mut().y = 0x22;

    assert_eq!(console.step().unwrap(), 4);
    assert_eq!(console.read(0x0500), 0x22);
}

#[test]
fn test_store_does_not_touch_flags() {
    let mut console = setup(&[0x85, 0x10]);
    console.cpu_mut().registers_mut().a = 0x00;
    let before = console.cpu().registers().p();

    console.step().unwrap();

    assert_eq!(console.cpu().registers().p(), before);
}
