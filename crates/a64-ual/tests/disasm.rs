//! Golden disassembly tests.
//!
//! Each case builds the instruction a decoder would produce for one encoding
//! and checks the rendered text against reference disassembler output,
//! covering every alias rule of every family.

use a64_ual::{
    render, try_render, ConditionCode, Extend, ExtendType, Immediate, ImmediateOffset,
    Instruction, Opcode, Operand, Register, RegisterName, RegisterOffset, Shift, SystemRegister,
    SystemRegisterName,
};

// ─── Helpers ────────────────────────────────────────────────────────────────

fn x(n: u8) -> Operand {
    Register::x(n).into()
}

fn w(n: u8) -> Operand {
    Register::w(n).into()
}

fn xzr() -> Operand {
    Register::xzr().into()
}

fn wzr() -> Operand {
    Register::wzr().into()
}

fn sp() -> Operand {
    Register::sp().into()
}

fn imm(value: u64, size: u8) -> Operand {
    Immediate::new(value, size).into()
}

fn no_shift() -> Operand {
    Shift::none().into()
}

fn lsl(n: u8) -> Operand {
    Shift::lsl(n).into()
}

fn mem(base: Register, offset: u64, size: u8) -> ImmediateOffset {
    ImmediateOffset::new(base, Immediate::new(offset, 9), size)
}

fn check(insn: Instruction, expected: &str) {
    assert_eq!(render(&insn), expected, "{:?}", insn);
}

fn op(opcode: Opcode, operands: &[Operand]) -> Instruction {
    Instruction::new(opcode, operands)
}

// ─── PC-relative ────────────────────────────────────────────────────────────

#[test]
fn pc_relative() {
    check(op(Opcode::Adr, &[x(0), imm(0x10, 21), no_shift()]), "adr x0, #0x10");
    check(
        op(Opcode::Adrp, &[x(1), imm(0x2, 21), lsl(12)]),
        "adrp x1, #0x2000",
    );
}

// ─── Add/subtract (immediate) ───────────────────────────────────────────────

#[test]
fn add_immediate_mov_to_and_from_sp() {
    check(
        op(Opcode::AddImmediate, &[x(0), sp(), imm(0, 12), no_shift()]),
        "mov x0, sp",
    );
    check(
        op(Opcode::AddImmediate, &[sp(), x(1), imm(0, 12), no_shift()]),
        "mov sp, x1",
    );
    check(
        op(
            Opcode::AddImmediate,
            &[w(0), Register::wsp().into(), imm(0, 12), no_shift()],
        ),
        "mov w0, wsp",
    );
}

#[test]
fn add_immediate_without_sp_is_plain() {
    check(
        op(Opcode::AddImmediate, &[x(0), x(1), imm(0, 12), no_shift()]),
        "add x0, x1, #0x0",
    );
    check(
        op(Opcode::AddImmediate, &[x(0), x(1), imm(0x10, 12), no_shift()]),
        "add x0, x1, #0x10",
    );
    check(
        op(Opcode::AddImmediate, &[x(0), x(1), imm(1, 12), no_shift()]).with_flags(),
        "adds x0, x1, #0x1",
    );
    check(
        op(Opcode::SubImmediate, &[x(0), sp(), imm(0, 12), no_shift()]),
        "sub x0, sp, #0x0",
    );
}

#[test]
fn add_sub_immediate_compare_aliases() {
    check(
        op(Opcode::AddImmediate, &[xzr(), x(1), imm(4, 12), no_shift()]).with_flags(),
        "cmn x1, #0x4",
    );
    check(
        op(Opcode::SubImmediate, &[xzr(), x(1), imm(4, 12), lsl(12)]).with_flags(),
        "cmp x1, #0x4, lsl #0xc",
    );
    check(
        op(Opcode::SubImmediate, &[wzr(), w(3), imm(0xfff, 12), no_shift()]).with_flags(),
        "cmp w3, #0xfff",
    );
}

// ─── Logical (immediate) ────────────────────────────────────────────────────

#[test]
fn logical_immediate() {
    check(op(Opcode::AndImmediate, &[x(0), x(1), imm(0xff, 64)]), "and x0, x1, #0xff");
    check(
        op(Opcode::AndImmediate, &[xzr(), x(1), imm(0xff, 64)]).with_flags(),
        "tst x1, #0xff",
    );
    check(
        op(Opcode::AndImmediate, &[x(0), x(1), imm(0xff, 64)]).with_flags(),
        "ands x0, x1, #0xff",
    );
    check(op(Opcode::OrrImmediate, &[w(0), wzr(), imm(1, 32)]), "mov w0, #0x1");
    check(op(Opcode::OrrImmediate, &[x(0), x(1), imm(0xf0, 64)]), "orr x0, x1, #0xf0");
    check(op(Opcode::EorImmediate, &[x(2), x(3), imm(1, 64)]), "eor x2, x3, #0x1");
}

// ─── Move wide ──────────────────────────────────────────────────────────────

#[test]
fn move_wide() {
    check(
        op(Opcode::Movz, &[x(0), imm(0x1234, 16), lsl(16)]),
        "mov x0, #0x12340000",
    );
    check(
        op(Opcode::Movn, &[x(0), imm(0, 16), no_shift()]),
        "mov x0, #0xffffffffffffffff",
    );
    check(op(Opcode::Movn, &[w(0), imm(0, 16), no_shift()]), "mov w0, #0xffffffff");
    check(op(Opcode::Movn, &[w(1), imm(1, 16), lsl(16)]), "mov w1, #0xfffeffff");
    check(
        op(Opcode::Movk, &[x(3), imm(0xbeef, 16), lsl(48)]),
        "movk x3, #0xbeef, lsl #0x30",
    );
}

// ─── Bitfield ───────────────────────────────────────────────────────────────

fn bitfield(opcode: Opcode, rd: Operand, rn: Operand, immr: u64, imms: u64) -> Instruction {
    op(opcode, &[rd, rn, imm(immr, 6), imm(imms, 6)])
}

#[test]
fn bfm_aliases() {
    check(bitfield(Opcode::Bfm, x(0), x(1), 8, 3), "bfi x0, x1, #56, #4");
    check(bitfield(Opcode::Bfm, x(0), xzr(), 8, 3), "bfc x0, #56, #4");
    check(bitfield(Opcode::Bfm, w(0), w(1), 4, 11), "bfxil w0, w1, #4, #8");
}

#[test]
fn sbfm_aliases() {
    check(bitfield(Opcode::Sbfm, x(0), x(1), 3, 63), "asr x0, x1, #3");
    check(bitfield(Opcode::Sbfm, w(0), w(1), 3, 31), "asr w0, w1, #3");
    check(bitfield(Opcode::Sbfm, x(0), x(1), 60, 3), "sbfiz x0, x1, #4, #4");
    check(bitfield(Opcode::Sbfm, x(0), x(1), 0, 7), "sxtb x0, w1");
    check(bitfield(Opcode::Sbfm, x(0), x(1), 0, 15), "sxth x0, w1");
    check(bitfield(Opcode::Sbfm, x(0), x(1), 0, 31), "sxtw x0, w1");
    check(bitfield(Opcode::Sbfm, w(0), w(1), 0, 7), "sxtb w0, w1");
    check(bitfield(Opcode::Sbfm, x(0), x(1), 4, 11), "sbfx x0, x1, #4, #8");
}

#[test]
fn ubfm_aliases() {
    check(bitfield(Opcode::Ubfm, x(2), x(3), 60, 59), "lsl x2, x3, #4");
    check(bitfield(Opcode::Ubfm, w(2), w(3), 1, 0), "lsl w2, w3, #31");
    check(bitfield(Opcode::Ubfm, x(0), x(1), 4, 63), "lsr x0, x1, #4");
    check(bitfield(Opcode::Ubfm, w(0), w(1), 0, 31), "lsr w0, w1, #0");
    check(bitfield(Opcode::Ubfm, x(0), x(1), 60, 2), "ubfiz x0, x1, #4, #3");
    check(bitfield(Opcode::Ubfm, w(0), w(1), 0, 7), "uxtb w0, w1");
    check(bitfield(Opcode::Ubfm, w(0), w(1), 0, 15), "uxth w0, w1");
    check(bitfield(Opcode::Ubfm, x(0), x(1), 0, 7), "ubfx x0, x1, #0, #8");
    check(bitfield(Opcode::Ubfm, x(0), x(1), 0, 15), "ubfx x0, x1, #0, #16");
    check(bitfield(Opcode::Ubfm, x(0), x(1), 4, 11), "ubfx x0, x1, #4, #8");
}

// ─── Extract ────────────────────────────────────────────────────────────────

#[test]
fn extract() {
    check(op(Opcode::Extr, &[x(0), x(1), x(1), imm(5, 6)]), "ror x0, x1, #5");
    check(op(Opcode::Extr, &[x(0), x(1), x(2), imm(5, 6)]), "extr x0, x1, x2, #5");
}

// ─── Branches and exceptions ────────────────────────────────────────────────

#[test]
fn conditional_branch() {
    check(
        op(Opcode::BCond, &[imm(0x10, 19)]).with_cc(ConditionCode::Ne),
        "b.ne #0x10",
    );
    check(
        op(Opcode::BCond, &[imm(0x7fffe, 19)]).with_cc(ConditionCode::Eq),
        "b.eq #-0x2",
    );
}

#[test]
fn exception_generation() {
    check(op(Opcode::Svc, &[imm(0, 16)]), "svc #0");
    check(op(Opcode::Brk, &[imm(0xf000, 16)]), "brk #61440");
    check(op(Opcode::Hlt, &[imm(1, 16)]), "hlt #1");
    check(op(Opcode::Dcps1, &[imm(0, 16)]), "dcps1");
}

#[test]
fn branch_register() {
    check(op(Opcode::Br, &[x(16)]), "br x16");
    check(op(Opcode::Blr, &[x(1)]), "blr x1");
    check(op(Opcode::Braaz, &[x(1)]), "braaz x1");
    check(op(Opcode::Brabz, &[x(2)]), "brabz x2");
    check(op(Opcode::Braa, &[x(1), x(2)]), "braa x1, x2");
    check(op(Opcode::Blrab, &[x(3), sp()]), "blrab x3, sp");
    check(op(Opcode::Ret, &[x(30)]), "ret");
    check(op(Opcode::Ret, &[x(1)]), "ret x1");
    check(op(Opcode::Ret, &[]), "ret");
    check(op(Opcode::Retaa, &[]), "retaa");
    check(op(Opcode::Eret, &[]), "eret");
    check(op(Opcode::Drps, &[]), "drps");
}

#[test]
fn immediate_branches() {
    check(op(Opcode::B, &[imm(0x3ff_ffff, 26)]), "b #-0x1");
    check(op(Opcode::Bl, &[imm(0x100, 26)]), "bl #0x100");
    check(op(Opcode::Cbz, &[w(0), imm(0x8, 19)]), "cbz w0, #0x8");
    check(op(Opcode::Cbnz, &[x(1), imm(0x7ffff, 19)]), "cbnz x1, #-0x1");
    check(op(Opcode::Tbz, &[x(0), imm(33, 6), imm(0x10, 14)]), "tbz x0, #33, #0x10");
    check(op(Opcode::Tbnz, &[w(1), imm(3, 6), imm(0x3fff, 14)]), "tbnz w1, #3, #-0x1");
}

// ─── System ─────────────────────────────────────────────────────────────────

#[test]
fn hints() {
    check(op(Opcode::Nop, &[]), "nop");
    check(op(Opcode::Yield, &[]), "yield");
    check(op(Opcode::PsbCsync, &[]), "psb csync");
    check(op(Opcode::Paciasp, &[]), "paciasp");
    check(op(Opcode::Autibsp, &[]), "autibsp");
    check(op(Opcode::Hint, &[imm(0x22, 7)]), "hint #0x22");
}

#[test]
fn barriers() {
    check(op(Opcode::Dsb, &[imm(15, 4)]), "dsb sy");
    check(op(Opcode::Dmb, &[imm(11, 4)]), "dmb ish");
    check(op(Opcode::Dmb, &[imm(9, 4)]), "dmb ishld");
    check(op(Opcode::Dsb, &[imm(2, 4)]), "dsb oshst");
    check(op(Opcode::Dsb, &[imm(7, 4)]), "dsb nsh");
    check(op(Opcode::Dmb, &[imm(13, 4)]), "dmb ld");
    check(op(Opcode::Dsb, &[imm(0, 4)]), "dsb #0");
    check(op(Opcode::Isb, &[imm(15, 4)]), "isb");
    check(op(Opcode::Isb, &[imm(14, 4)]), "isb #14");
}

#[test]
fn clrex() {
    check(op(Opcode::Clrex, &[]), "clrex");
    check(op(Opcode::Clrex, &[imm(15, 4)]), "clrex");
    check(op(Opcode::Clrex, &[imm(3, 4)]), "clrex #3");
}

#[test]
fn sys_and_sysl() {
    check(
        op(Opcode::Sys, &[imm(3, 3), imm(7, 4), imm(5, 4), imm(1, 3), x(0)]),
        "sys #3, C7, C5, #1, x0",
    );
    check(
        op(Opcode::Sys, &[imm(0, 3), imm(7, 4), imm(5, 4), imm(0, 3), xzr()]),
        "sys #0, C7, C5, #0",
    );
    check(
        op(Opcode::Sysl, &[x(3), imm(1, 3), imm(7, 4), imm(5, 4), imm(1, 3)]),
        "sysl x3, #1, C7, C5, #1",
    );
}

#[test]
fn system_register_moves() {
    let spsel = SystemRegister::named(SystemRegisterName::SpSel);
    check(op(Opcode::Msr, &[spsel.into(), imm(1, 4)]), "msr SPSel, #0x1");

    let tpidr = SystemRegister::unknown(3, 3, 13, 0, 2);
    check(op(Opcode::Msr, &[tpidr.into(), x(1)]), "msr S3_3_C13_C0_2, x1");
    check(op(Opcode::Mrs, &[x(0), tpidr.into()]), "mrs x0, S3_3_C13_C0_2");
}

// ─── Loads and stores ───────────────────────────────────────────────────────

#[test]
fn load_store_exclusive() {
    let base = mem(Register::x(1), 0, 64);
    check(op(Opcode::Ldxr, &[w(0), base.into()]), "ldxr w0, [x1]");
    check(
        op(Opcode::Ldxr, &[Register::w(0).with_size(8).into(), base.into()]),
        "ldxrb w0, [x1]",
    );
    check(op(Opcode::Stxr, &[w(2), x(0), base.into()]), "stxr w2, x0, [x1]");
    check(
        op(
            Opcode::Stlxr,
            &[w(2), Register::w(0).with_size(16).into(), base.into()],
        ),
        "stlxrh w2, w0, [x1]",
    );
    check(
        op(Opcode::Ldaxp, &[x(0), x(1), mem(Register::x(2), 0, 64).into()]),
        "ldaxp x0, x1, [x2]",
    );
    check(
        op(Opcode::Stxp, &[w(4), x(0), x(1), mem(Register::x(2), 0, 64).into()]),
        "stxp w4, x0, x1, [x2]",
    );
    check(
        op(Opcode::Ldar, &[x(0), mem(Register::sp(), 0, 64).into()]),
        "ldar x0, [sp]",
    );
}

#[test]
fn load_literal() {
    let literal = |offset| ImmediateOffset::new(Register::pc(), Immediate::new(offset, 19), 64);
    check(op(Opcode::LdrLiteral, &[x(0), literal(0x10).into()]), "ldr x0, #0x10");
    check(
        op(Opcode::LdrsLiteral, &[x(0), literal(0x7fffc).into()]),
        "ldrsw x0, #-0x4",
    );
    check(
        op(Opcode::PrfmLiteral, &[imm(0, 5), literal(0x20).into()]),
        "prfm PLDL1KEEP, #0x20",
    );
}

#[test]
fn load_store_pair() {
    let frame = ImmediateOffset::new(Register::sp(), Immediate::new(0x3f0, 10), 64);
    check(
        op(Opcode::Stp, &[x(29), x(30), frame.pre_indexed().into()]),
        "stp x29, x30, [sp, #-0x10]!",
    );
    let pop = ImmediateOffset::new(Register::sp(), Immediate::new(0x10, 10), 64);
    check(
        op(Opcode::Ldp, &[x(29), x(30), pop.post_indexed().into()]),
        "ldp x29, x30, [sp], #0x10",
    );
    check(
        op(Opcode::Ldpsw, &[x(0), x(1), mem(Register::x(2), 8, 32).into()]),
        "ldpsw x0, x1, [x2, #0x8]",
    );
}

#[test]
fn load_store_size_suffixes() {
    check(op(Opcode::Ldr, &[x(0), mem(Register::x(1), 8, 64).into()]), "ldr x0, [x1, #0x8]");
    check(op(Opcode::Ldr, &[w(0), mem(Register::x(1), 0, 8).into()]), "ldrb w0, [x1]");
    check(op(Opcode::Str, &[w(0), mem(Register::x(1), 0, 16).into()]), "strh w0, [x1]");
    check(op(Opcode::Ldr, &[w(0), mem(Register::x(1), 0, 32).into()]), "ldr w0, [x1]");
    check(op(Opcode::Ldrs, &[x(0), mem(Register::x(1), 0, 32).into()]), "ldrsw x0, [x1]");
    check(op(Opcode::Ldrs, &[w(0), mem(Register::x(1), 0, 8).into()]), "ldrsb w0, [x1]");
    check(
        op(Opcode::Ldur, &[x(0), mem(Register::x(1), 0x1ff, 64).into()]),
        "ldur x0, [x1, #-0x1]",
    );
    check(
        op(Opcode::Sttr, &[w(3), mem(Register::x(4), 0, 16).into()]),
        "sttrh w3, [x4]",
    );
}

#[test]
fn load_store_register_offset() {
    let scaled = RegisterOffset::new(
        Register::x(1),
        Register::x(2),
        Extend::new(ExtendType::Lsl, 3),
        64,
    );
    check(op(Opcode::Ldr, &[x(0), scaled.into()]), "ldr x0, [x1, x2, lsl #3]");

    let extended = RegisterOffset::new(
        Register::x(1),
        Register::w(2),
        Extend::new(ExtendType::Uxtw, 0),
        8,
    );
    check(op(Opcode::Str, &[w(0), extended.into()]), "strb w0, [x1, w2, uxtw]");
}

#[test]
fn prefetch() {
    check(
        op(Opcode::Prfm, &[imm(0b10001, 5), mem(Register::x(0), 0x40, 64).into()]),
        "prfm PSTL1STRM, [x0, #0x40]",
    );
    check(
        op(Opcode::Prfm, &[imm(0b11000, 5), mem(Register::x(0), 0, 64).into()]),
        "prfm #24, [x0]",
    );
}

// ─── Data processing (register) ─────────────────────────────────────────────

#[test]
fn two_source() {
    check(op(Opcode::Lsl, &[x(0), x(1), x(2)]), "lsl x0, x1, x2");
    check(op(Opcode::Udiv, &[w(0), w(1), w(2)]), "udiv w0, w1, w2");
    check(op(Opcode::Crc32cx, &[w(0), w(1), x(2)]), "crc32cx w0, w1, x2");
    check(op(Opcode::Pacga, &[x(0), x(1), sp()]), "pacga x0, x1, sp");
}

#[test]
fn one_source() {
    check(op(Opcode::Rev, &[x(0), x(1)]), "rev x0, x1");
    check(op(Opcode::Clz, &[w(0), w(1)]), "clz w0, w1");
    check(op(Opcode::Pacia, &[x(0), x(1)]), "pacia x0, x1");
    check(op(Opcode::Pacia, &[x(0), xzr()]), "paciza x0");
    check(op(Opcode::Autdb, &[x(5), sp()]), "autdb x5, sp");
    check(op(Opcode::Autdb, &[x(5), xzr()]), "autdzb x5");
    check(op(Opcode::Xpaci, &[x(7), xzr()]), "xpaci x7");
    check(op(Opcode::Xpacd, &[x(7), xzr()]), "xpacd x7");
}

#[test]
fn logical_shifted_register() {
    check(
        op(Opcode::AndShiftedRegister, &[x(0), x(1), x(2), no_shift()]),
        "and x0, x1, x2",
    );
    check(
        op(Opcode::BicShiftedRegister, &[x(0), x(1), x(2), Shift::lsr(4).into()]).with_flags(),
        "bics x0, x1, x2, lsr #0x4",
    );
    check(
        op(Opcode::EonShiftedRegister, &[w(0), w(1), w(2), Shift::ror(1).into()]),
        "eon w0, w1, w2, ror #0x1",
    );
}

#[test]
fn logical_shifted_register_aliases() {
    check(
        op(Opcode::OrrShiftedRegister, &[x(0), xzr(), x(1), no_shift()]),
        "mov x0, x1",
    );
    check(
        op(Opcode::OrrShiftedRegister, &[x(0), xzr(), x(1), lsl(0)]),
        "mov x0, x1",
    );
    check(
        op(Opcode::OrrShiftedRegister, &[x(0), xzr(), x(1), lsl(2)]),
        "orr x0, xzr, x1, lsl #0x2",
    );
    check(
        op(Opcode::OrnShiftedRegister, &[w(0), wzr(), w(1), no_shift()]),
        "mvn w0, w1",
    );
    check(
        op(Opcode::OrnShiftedRegister, &[w(0), wzr(), w(1), Shift::asr(3).into()]),
        "mvn w0, w1, asr #0x3",
    );
    check(
        op(Opcode::AndShiftedRegister, &[xzr(), x(1), x(2), no_shift()]).with_flags(),
        "tst x1, x2",
    );
}

#[test]
fn add_sub_shifted_register() {
    check(
        op(Opcode::AddShiftedRegister, &[x(0), x(1), x(2), no_shift()]),
        "add x0, x1, x2",
    );
    check(
        op(Opcode::SubShiftedRegister, &[xzr(), x(1), x(2), lsl(3)]).with_flags(),
        "cmp x1, x2, lsl #0x3",
    );
    check(
        op(Opcode::AddShiftedRegister, &[wzr(), w(1), w(2), no_shift()]).with_flags(),
        "cmn w1, w2",
    );
    check(
        op(Opcode::SubShiftedRegister, &[x(0), xzr(), x(2), no_shift()]),
        "neg x0, x2",
    );
    check(
        op(Opcode::SubShiftedRegister, &[x(0), xzr(), x(2), Shift::asr(1).into()]).with_flags(),
        "negs x0, x2, asr #0x1",
    );
    check(
        op(Opcode::SubShiftedRegister, &[x(0), x(1), x(2), no_shift()]).with_flags(),
        "subs x0, x1, x2",
    );
}

#[test]
fn add_sub_extended_register() {
    let uxtw2: Operand = Extend::new(ExtendType::Uxtw, 2).into();
    check(
        op(Opcode::AddExtendedRegister, &[x(0), sp(), w(1), uxtw2]),
        "add x0, sp, w1, uxtw #2",
    );
    check(
        op(
            Opcode::SubExtendedRegister,
            &[xzr(), sp(), x(1), Extend::new(ExtendType::Sxtx, 0).into()],
        )
        .with_flags(),
        "cmp sp, x1, sxtx",
    );
    check(
        op(
            Opcode::AddExtendedRegister,
            &[xzr(), x(1), w(2), Extend::new(ExtendType::Sxtb, 0).into()],
        )
        .with_flags(),
        "cmn x1, w2, sxtb",
    );
    check(
        op(
            Opcode::SubExtendedRegister,
            &[x(3), x(1), w(2), Extend::new(ExtendType::Sxth, 1).into()],
        )
        .with_flags(),
        "subs x3, x1, w2, sxth #1",
    );
}

#[test]
fn add_sub_with_carry() {
    check(op(Opcode::Adc, &[x(0), x(1), x(2)]), "adc x0, x1, x2");
    check(op(Opcode::Adc, &[x(0), x(1), x(2)]).with_flags(), "adcs x0, x1, x2");
    check(op(Opcode::Sbc, &[w(0), w(1), w(2)]), "sbc w0, w1, w2");
    check(op(Opcode::Sbc, &[w(0), wzr(), w(2)]), "ngc w0, w2");
    check(op(Opcode::Sbc, &[x(0), xzr(), x(2)]).with_flags(), "ngcs x0, x2");
}

#[test]
fn conditional_compare() {
    check(
        op(Opcode::Ccmp, &[x(1), imm(3, 5), imm(0, 4)]).with_cc(ConditionCode::Eq),
        "ccmp x1, #0x3, #0x0, eq",
    );
    check(
        op(Opcode::Ccmn, &[w(1), w(2), imm(4, 4)]).with_cc(ConditionCode::Lt),
        "ccmn w1, w2, #0x4, lt",
    );
}

#[test]
fn conditional_select() {
    let sel = |opcode, rn, rm| op(opcode, &[x(0), rn, rm]).with_cc(ConditionCode::Ne);
    check(sel(Opcode::Csel, x(1), x(2)), "csel x0, x1, x2, ne");
    check(sel(Opcode::Csinc, xzr(), xzr()), "cset x0, ne");
    check(sel(Opcode::Csinc, x(3), x(3)), "cinc x0, x3, ne");
    check(sel(Opcode::Csinc, x(1), x(2)), "csinc x0, x1, x2, ne");
    check(sel(Opcode::Csinv, xzr(), xzr()), "csetm x0, ne");
    check(sel(Opcode::Csinv, x(3), x(3)), "cinv x0, x3, ne");
    check(sel(Opcode::Csinv, x(1), x(2)), "csinv x0, x1, x2, ne");
    check(sel(Opcode::Csneg, x(3), x(3)), "cneg x0, x3, ne");
    check(sel(Opcode::Csneg, x(1), x(2)), "csneg x0, x1, x2, ne");
}

#[test]
fn three_source() {
    check(op(Opcode::Madd, &[x(0), x(1), x(2), x(3)]), "madd x0, x1, x2, x3");
    check(op(Opcode::Madd, &[x(0), x(1), x(2), xzr()]), "mul x0, x1, x2");
    check(op(Opcode::Msub, &[w(0), w(1), w(2), wzr()]), "mneg w0, w1, w2");
    check(op(Opcode::Smaddl, &[x(0), w(1), w(2), xzr()]), "smull x0, w1, w2");
    check(op(Opcode::Smsubl, &[x(0), w(1), w(2), xzr()]), "smnegl x0, w1, w2");
    check(op(Opcode::Umaddl, &[x(0), w(1), w(2), xzr()]), "umull x0, w1, w2");
    check(op(Opcode::Umsubl, &[x(0), w(1), w(2), x(4)]), "umsubl x0, w1, w2, x4");
    check(op(Opcode::Umsubl, &[x(0), w(1), w(2), xzr()]), "umnegl x0, w1, w2");
    check(op(Opcode::Smulh, &[x(0), x(1), x(2), xzr()]), "smulh x0, x1, x2");
    check(op(Opcode::Umulh, &[x(0), x(1), x(2), xzr()]), "umulh x0, x1, x2");
}

// ─── Placeholders and entry points ──────────────────────────────────────────

#[test]
fn condition_codes_14_and_15_render_al() {
    for bits in [14, 15] {
        check(
            op(Opcode::BCond, &[imm(4, 19)]).with_cc(ConditionCode::from_bits(bits)),
            "b.al #0x4",
        );
    }
}

#[test]
fn unsupported_register_number_renders_placeholder() {
    let bogus = Register::new(RegisterName::X(40), 64);
    check(op(Opcode::Br, &[bogus.into()]), "br <unsupported_reg>");
}

#[test]
fn display_matches_render() {
    let insn = op(Opcode::Madd, &[x(0), x(1), x(2), xzr()]);
    assert_eq!(insn.to_string(), render(&insn));
    assert_eq!(try_render(&insn).unwrap(), "mul x0, x1, x2");
}

#[test]
fn display_reports_layout_mismatch_as_fmt_error() {
    use core::fmt::Write;

    let insn = op(Opcode::Csinc, &[x(0), x(1), imm(1, 12)]);
    let mut text = String::new();
    assert!(write!(text, "{}", insn).is_err());
}

#[test]
#[should_panic(expected = "Csinc: expected register at operand 2, found immediate")]
fn render_panics_on_wrong_variant() {
    render(&op(Opcode::Csinc, &[x(0), x(1), imm(1, 12)]));
}

#[test]
#[should_panic(expected = "AddImmediate: expected 4 operands, found 3")]
fn render_panics_on_wrong_arity() {
    render(&op(Opcode::AddImmediate, &[x(0), x(1), imm(1, 12)]));
}
