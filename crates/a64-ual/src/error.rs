//! Contract-violation errors raised when an [`Instruction`](crate::Instruction)
//! does not have the operand shape its opcode family requires.

use core::fmt;

use crate::ir::OperandKind;
use crate::opcode::{Family, Opcode};

/// The operand list of an instruction does not match its family's layout.
///
/// The decoder guarantees well-formed input, so any of these means the
/// decoder and the printer disagree about an encoding. [`crate::render`]
/// panics with this error's message; [`crate::try_render`] returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderError {
    /// Wrong number of operands.
    OperandCount {
        /// Offending opcode.
        opcode: Opcode,
        /// Smallest accepted operand count.
        min: usize,
        /// Largest accepted operand count.
        max: usize,
        /// Operand count found.
        found: usize,
    },

    /// Operand at a fixed position has the wrong variant.
    OperandKind {
        /// Offending opcode.
        opcode: Opcode,
        /// Zero-based operand position.
        index: usize,
        /// Variant the family expects at `index`. A slot that accepts
        /// several variants names only its first: `ImmediateOffset` for a
        /// load/store address (which also takes `RegisterOffset`) and
        /// `Register` for an MSR source (which also takes `Immediate`).
        expected: OperandKind,
        /// Variant found at `index`.
        found: OperandKind,
    },

    /// Opcode was routed to a family routine that has no case for it.
    UnexpectedOpcode {
        /// Offending opcode.
        opcode: Opcode,
        /// Family routine that received it.
        family: Family,
    },
}

impl RenderError {
    /// Opcode of the instruction that failed to render.
    pub fn opcode(&self) -> Opcode {
        match self {
            RenderError::OperandCount { opcode, .. }
            | RenderError::OperandKind { opcode, .. }
            | RenderError::UnexpectedOpcode { opcode, .. } => *opcode,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::OperandCount {
                opcode,
                min,
                max,
                found,
            } => {
                if min == max {
                    write!(
                        f,
                        "{:?}: expected {} operands, found {}",
                        opcode, min, found
                    )
                } else {
                    write!(
                        f,
                        "{:?}: expected {} to {} operands, found {}",
                        opcode, min, max, found
                    )
                }
            }
            RenderError::OperandKind {
                opcode,
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{:?}: expected {} at operand {}, found {}",
                    opcode, expected, index, found
                )
            }
            RenderError::UnexpectedOpcode { opcode, family } => {
                write!(f, "{:?}: not handled by the {} printer", opcode, family)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {}
