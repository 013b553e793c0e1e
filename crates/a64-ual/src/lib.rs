//! # a64-ual — AArch64 Canonical Disassembly Text
//!
//! `a64-ual` turns fully decoded AArch64 instructions into one line of ARM
//! Unified Assembly Language text each, choosing the preferred alias
//! (`mov`, `cmp`, `lsl`, `cset`, `mul`, ...) the way reference
//! disassemblers do.
//!
//! ## Quick Start
//!
//! ```rust
//! use a64_ual::{render, Immediate, Instruction, Opcode, Register, Shift};
//!
//! let insn = Instruction::new(
//!     Opcode::SubImmediate,
//!     &[
//!         Register::xzr().into(),
//!         Register::x(1).into(),
//!         Immediate::new(4, 12).into(),
//!         Shift::none().into(),
//!     ],
//! )
//! .with_flags();
//! assert_eq!(render(&insn), "cmp x1, #0x4");
//! ```
//!
//! ## Features
//!
//! - **Alias resolution**: every family applies the architectural
//!   preferred-disassembly rules.
//! - **Typed forms**: operands are checked against the family layout and
//!   moved into named records ([`Form`]) before printing.
//! - **`no_std` + `alloc`**: only the output `String` is allocated.
//! - **`serde`** (optional): serialize instructions and forms.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// ── Pedantic lint policy ─────────────────────────────────────────────────
// Field extraction narrows decoded values (u64 → u8) and the mnemonic
// tables repeat arms on purpose.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::match_same_arms,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    clippy::doc_markdown,
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::many_single_char_names,
    clippy::return_self_not_must_use,
    clippy::missing_panics_doc
)]

extern crate alloc;

/// Rendering errors.
pub mod error;
/// Typed per-family instruction records.
pub mod form;
/// Instruction model: registers, immediates, modifiers, addresses.
pub mod ir;
/// Opcode tags and encoding families.
pub mod opcode;
/// Per-family renderers.
pub mod printer;

// Re-exports
pub use error::RenderError;
pub use form::{Address, Form, Source, Target};
pub use ir::{
    ConditionCode, Extend, ExtendType, Immediate, ImmediateOffset, Instruction, Operand,
    OperandKind, OperandList, Register, RegisterName, RegisterOffset, Shift, ShiftType,
    SignedImmediate, SystemRegister, SystemRegisterName,
};
pub use opcode::{Family, Opcode};
pub use printer::{BarrierOption, PrefetchOp};

use alloc::string::{String, ToString};
use core::fmt;

/// Render an instruction as UAL text.
///
/// # Panics
///
/// Panics if the operand list does not match the layout of the opcode's
/// family. The decoder never produces such instructions; use
/// [`try_render`] for hand-built or untrusted input.
///
/// # Examples
///
/// ```rust
/// use a64_ual::{render, Instruction, Opcode, Register};
///
/// let insn = Instruction::new(Opcode::Ret, &[Register::x(30).into()]);
/// assert_eq!(render(&insn), "ret");
/// ```
pub fn render(insn: &Instruction) -> String {
    match try_render(insn) {
        Ok(text) => text,
        Err(err) => panic!("{}", err),
    }
}

/// Render an instruction as UAL text, reporting layout mismatches.
///
/// # Errors
///
/// Returns [`RenderError`] if the operand count or an operand variant does
/// not match the opcode's family.
///
/// # Examples
///
/// ```rust
/// use a64_ual::{try_render, Instruction, Opcode, RenderError};
///
/// let insn = Instruction::new(Opcode::Madd, &[]);
/// assert!(matches!(try_render(&insn), Err(RenderError::OperandCount { .. })));
/// ```
pub fn try_render(insn: &Instruction) -> Result<String, RenderError> {
    Form::from_instruction(insn).map(|form| form.to_string())
}

/// Same text as [`render`].
///
/// A layout mismatch is reported as [`fmt::Error`]; use [`try_render`] to
/// see which operand was wrong.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Form::from_instruction(self) {
            Ok(form) => fmt::Display::fmt(&form, f),
            Err(err) => {
                log::debug!("cannot format instruction: {}", err);
                Err(fmt::Error)
            }
        }
    }
}
