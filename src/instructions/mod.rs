//! # 6502 Instruction Implementations
//!
//! The instruction executor, organized by category. Each instruction is a
//! standalone function that takes the CPU and the decoded [`Opcode`] and
//! returns the instruction's documented cycle count: the table's base count
//! plus any page-cross or branch penalty.
//!
//! Handlers resolve their own operands, so by the time one returns the bus
//! accesses it made have already been charged. The caller charges the rest.
//!
//! A handler handed an addressing mode it cannot use does nothing and returns
//! 0. The opcode table is checked at compile time, so this never happens for
//! decoded opcodes.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **stack**: PHA, PHP, PLA, PLP
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **control**: JMP, JSR, RTS, BRK, RTI, NOP
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::{Instruction, Opcode};

/// Dispatches a decoded opcode to its executor and returns its cycle count.
pub(crate) fn execute<B: Bus>(cpu: &mut Cpu<B>, opcode: &Opcode) -> u8 {
    match opcode.instruction {
        Instruction::Lda => load_store::execute_lda(cpu, opcode),
        Instruction::Ldx => load_store::execute_ldx(cpu, opcode),
        Instruction::Ldy => load_store::execute_ldy(cpu, opcode),
        Instruction::Sta => load_store::execute_sta(cpu, opcode),
        Instruction::Stx => load_store::execute_stx(cpu, opcode),
        Instruction::Sty => load_store::execute_sty(cpu, opcode),

        Instruction::Tax => transfer::execute_tax(cpu, opcode),
        Instruction::Tay => transfer::execute_tay(cpu, opcode),
        Instruction::Txa => transfer::execute_txa(cpu, opcode),
        Instruction::Tya => transfer::execute_tya(cpu, opcode),
        Instruction::Tsx => transfer::execute_tsx(cpu, opcode),
        Instruction::Txs => transfer::execute_txs(cpu, opcode),

        Instruction::Pha => stack::execute_pha(cpu, opcode),
        Instruction::Php => stack::execute_php(cpu, opcode),
        Instruction::Pla => stack::execute_pla(cpu, opcode),
        Instruction::Plp => stack::execute_plp(cpu, opcode),

        Instruction::And => alu::execute_and(cpu, opcode),
        Instruction::Eor => alu::execute_eor(cpu, opcode),
        Instruction::Ora => alu::execute_ora(cpu, opcode),
        Instruction::Bit => alu::execute_bit(cpu, opcode),
        Instruction::Adc => alu::execute_adc(cpu, opcode),
        Instruction::Sbc => alu::execute_sbc(cpu, opcode),
        Instruction::Cmp => alu::execute_cmp(cpu, opcode),
        Instruction::Cpx => alu::execute_cpx(cpu, opcode),
        Instruction::Cpy => alu::execute_cpy(cpu, opcode),

        Instruction::Inc => inc_dec::execute_inc(cpu, opcode),
        Instruction::Inx => inc_dec::execute_inx(cpu, opcode),
        Instruction::Iny => inc_dec::execute_iny(cpu, opcode),
        Instruction::Dec => inc_dec::execute_dec(cpu, opcode),
        Instruction::Dex => inc_dec::execute_dex(cpu, opcode),
        Instruction::Dey => inc_dec::execute_dey(cpu, opcode),

        Instruction::Asl => shifts::execute_asl(cpu, opcode),
        Instruction::Lsr => shifts::execute_lsr(cpu, opcode),
        Instruction::Rol => shifts::execute_rol(cpu, opcode),
        Instruction::Ror => shifts::execute_ror(cpu, opcode),

        Instruction::Jmp => control::execute_jmp(cpu, opcode),
        Instruction::Jsr => control::execute_jsr(cpu, opcode),
        Instruction::Rts => control::execute_rts(cpu, opcode),
        Instruction::Brk => control::execute_brk(cpu, opcode),
        Instruction::Rti => control::execute_rti(cpu, opcode),
        Instruction::Nop => control::execute_nop(cpu, opcode),

        Instruction::Bcc => branches::execute_bcc(cpu, opcode),
        Instruction::Bcs => branches::execute_bcs(cpu, opcode),
        Instruction::Beq => branches::execute_beq(cpu, opcode),
        Instruction::Bmi => branches::execute_bmi(cpu, opcode),
        Instruction::Bne => branches::execute_bne(cpu, opcode),
        Instruction::Bpl => branches::execute_bpl(cpu, opcode),
        Instruction::Bvc => branches::execute_bvc(cpu, opcode),
        Instruction::Bvs => branches::execute_bvs(cpu, opcode),

        Instruction::Clc => flags::execute_clc(cpu, opcode),
        Instruction::Cld => flags::execute_cld(cpu, opcode),
        Instruction::Cli => flags::execute_cli(cpu, opcode),
        Instruction::Clv => flags::execute_clv(cpu, opcode),
        Instruction::Sec => flags::execute_sec(cpu, opcode),
        Instruction::Sed => flags::execute_sed(cpu, opcode),
        Instruction::Sei => flags::execute_sei(cpu, opcode),

        Instruction::Invalid => 0,
    }
}

/// Cycle count for a read instruction: base plus one if a page was crossed.
pub(crate) fn read_cycles(opcode: &Opcode, page_crossed: bool) -> u8 {
    opcode.cycles + page_crossed as u8
}
