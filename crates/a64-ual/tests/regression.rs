//! Regression tests for rendering bugs.
//!
//! Each test documents a specific mis-rendering that was found and fixed,
//! ensuring the fix is never accidentally reverted.

use a64_ual::{
    render, ConditionCode, Extend, ExtendType, Immediate, Instruction, Opcode, Operand, Register,
    RegisterOffset, Shift,
};

fn x(n: u8) -> Operand {
    Register::x(n).into()
}

fn imm(value: u64, size: u8) -> Operand {
    Immediate::new(value, size).into()
}

/// Regression: the pointer-authentication hint was spelled `xpaclr1`.
#[test]
fn xpaclri_spelling() {
    assert_eq!(render(&Instruction::new(Opcode::Xpaclri, &[])), "xpaclri");
}

/// Regression: BRABZ ran mnemonic and register together (`brabzx1`).
#[test]
fn brabz_separates_register() {
    assert_eq!(render(&Instruction::new(Opcode::Brabz, &[x(1)])), "brabz x1");
}

/// Regression: AUTDB rendered with the AUTDA mnemonic.
#[test]
fn autdb_mnemonic() {
    assert_eq!(
        render(&Instruction::new(Opcode::Autdb, &[x(0), x(1)])),
        "autdb x0, x1"
    );
}

/// Regression: BFXIL printed `imms` as its second operand instead of the
/// field width `imms - immr + 1`.
#[test]
fn bfxil_prints_width() {
    let insn = Instruction::new(
        Opcode::Bfm,
        &[x(0), x(1), imm(16, 6), imm(31, 6)],
    );
    assert_eq!(render(&insn), "bfxil x0, x1, #16, #16");
}

/// Regression: CLREX dropped a non-default CRm operand.
#[test]
fn clrex_keeps_non_default_crm() {
    assert_eq!(
        render(&Instruction::new(Opcode::Clrex, &[imm(5, 4)])),
        "clrex #5"
    );
}

/// Regression: UBFM was rendered as LSR whenever `imms` was 31 or 63,
/// regardless of the register width.
#[test]
fn ubfm_lsr_requires_full_width() {
    let insn = Instruction::new(
        Opcode::Ubfm,
        &[x(0), x(1), imm(0, 6), imm(31, 6)],
    );
    assert_eq!(render(&insn), "ubfx x0, x1, #0, #32");
}

/// Regression: a 64-bit UBFM with `immr == 0` took the `uxtb`/`uxth`/`uxtw`
/// aliases, which exist only for W destinations (and `uxtw` not at all).
#[test]
fn ubfm_x_destination_has_no_zero_extend_alias() {
    for (imms, expected) in [
        (7, "ubfx x0, x1, #0, #8"),
        (15, "ubfx x0, x1, #0, #16"),
        (31, "ubfx x0, x1, #0, #32"),
    ] {
        let insn = Instruction::new(Opcode::Ubfm, &[x(0), x(1), imm(0, 6), imm(imms, 6)]);
        assert_eq!(render(&insn), expected);
    }
    let w = Instruction::new(
        Opcode::Ubfm,
        &[Register::w(0).into(), Register::w(1).into(), imm(0, 6), imm(7, 6)],
    );
    assert_eq!(render(&w), "uxtb w0, w1");
}

/// Regression: the `mov` alias of ADD (immediate) was also applied to SUB
/// and to the flag-setting form, where it changes meaning.
#[test]
fn mov_alias_only_for_plain_add() {
    let sub = Instruction::new(
        Opcode::SubImmediate,
        &[x(0), Register::sp().into(), imm(0, 12), Shift::none().into()],
    );
    assert_eq!(render(&sub), "sub x0, sp, #0x0");

    let adds = Instruction::new(
        Opcode::AddImmediate,
        &[x(0), Register::sp().into(), imm(0, 12), Shift::none().into()],
    )
    .with_flags();
    assert_eq!(render(&adds), "adds x0, sp, #0x0");
}

/// Regression: an extend amount was printed after a comma (`lsl, #3`).
#[test]
fn extend_amount_follows_operator() {
    let addr = RegisterOffset::new(
        Register::x(1),
        Register::w(2),
        Extend::new(ExtendType::Sxtw, 2),
        32,
    );
    assert_eq!(
        render(&Instruction::new(Opcode::Ldr, &[Register::w(0).into(), addr.into()])),
        "ldr w0, [x1, w2, sxtw #2]"
    );
}

/// Regression: PRFM (literal) ran the prefetch operation and the offset
/// together without a separator.
#[test]
fn prfm_literal_separator() {
    let literal = a64_ual::ImmediateOffset::new(Register::pc(), Immediate::new(8, 19), 64);
    assert_eq!(
        render(&Instruction::new(Opcode::PrfmLiteral, &[imm(2, 5), literal.into()])),
        "prfm PLDL2KEEP, #0x8"
    );
}

/// Regression: MOVN into a W register was truncated by the width of the
/// immediate field instead of the destination.
#[test]
fn movn_truncates_to_destination_width() {
    let insn = Instruction::new(
        Opcode::Movn,
        &[Register::w(0).into(), imm(0x1234, 64), Shift::none().into()],
    );
    assert_eq!(render(&insn), "mov w0, #0xffffedcb");
}

/// Regression: conditional select aliases compared register widths as
/// well as register numbers, missing `cinc w0, w1` decoded with mixed views.
#[test]
fn select_alias_compares_register_numbers() {
    let insn = Instruction::new(
        Opcode::Csinc,
        &[
            Register::w(0).into(),
            Register::w(1).into(),
            Register::x(1).into(),
        ],
    )
    .with_cc(ConditionCode::Hi);
    assert_eq!(render(&insn), "cinc w0, w1, hi");
}
