//! Typed per-family instruction forms.
//!
//! The decoder hands over a positional operand list. [`Form::from_instruction`]
//! checks that list against the layout of the opcode's family and moves the
//! operands into a record with named, typed fields. The printer then works on
//! those records only, so an operand can never be read at the wrong position
//! or as the wrong variant.

use core::fmt;

use crate::error::RenderError;
use crate::ir::{
    ConditionCode, Extend, Immediate, ImmediateOffset, Instruction, Operand, OperandKind,
    OperandList, Register, RegisterOffset, Shift, SystemRegister,
};
use crate::opcode::{Family, Opcode};
use crate::printer::{BarrierOption, PrefetchOp};

// ── Shared operand shapes ───────────────────────────────────────────────

/// Second source of a conditional compare or value of an MSR: a register
/// or an immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// Register source.
    Register(Register),
    /// Immediate source (printed unsigned).
    Immediate(Immediate),
}

impl From<Source> for Operand {
    fn from(src: Source) -> Self {
        match src {
            Source::Register(reg) => Operand::Register(reg),
            Source::Immediate(imm) => Operand::Immediate(imm),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Register(reg) => write!(f, "{}", reg),
            Source::Immediate(imm) => write!(f, "{}", imm),
        }
    }
}

/// Transfer register of a load/store, or the prefetch operation of PRFM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// Register loaded or stored.
    Register(Register),
    /// PRFM operation.
    Prefetch(PrefetchOp),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Register(reg) => write!(f, "{}", reg),
            Target::Prefetch(op) => write!(f, "{}", op),
        }
    }
}

/// Memory address operand of a load/store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Address {
    /// `[Xn{, #imm}]` with optional writeback.
    Immediate(ImmediateOffset),
    /// `[Xn, Rm{, extend}]`.
    Register(RegisterOffset),
}

impl Address {
    /// Width of the accessed memory in bits.
    pub fn size(&self) -> u8 {
        match self {
            Address::Immediate(addr) => addr.size,
            Address::Register(addr) => addr.size,
        }
    }
}

impl From<Address> for Operand {
    fn from(addr: Address) -> Self {
        match addr {
            Address::Immediate(addr) => Operand::ImmediateOffset(addr),
            Address::Register(addr) => Operand::RegisterOffset(addr),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Immediate(addr) => write!(f, "{}", addr),
            Address::Register(addr) => write!(f, "{}", addr),
        }
    }
}

// ── Family records ──────────────────────────────────────────────────────

/// ADR / ADRP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcRelative {
    /// `Adr` or `Adrp`.
    pub opcode: Opcode,
    /// Destination.
    pub rd: Register,
    /// Offset field (pages for ADRP).
    pub imm: Immediate,
    /// Page shift (`lsl #12` for ADRP).
    pub shift: Shift,
}

/// ADD/SUB (immediate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddSubImmediate {
    /// `AddImmediate` or `SubImmediate`.
    pub opcode: Opcode,
    /// Flag-setting form.
    pub set_flags: bool,
    /// Destination.
    pub rd: Register,
    /// First source.
    pub rn: Register,
    /// 12-bit immediate.
    pub imm: Immediate,
    /// Optional `lsl #12`.
    pub shift: Shift,
}

/// AND/ORR/EOR (immediate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalImmediate {
    /// `AndImmediate`, `OrrImmediate` or `EorImmediate`.
    pub opcode: Opcode,
    /// Flag-setting form (ANDS).
    pub set_flags: bool,
    /// Destination.
    pub rd: Register,
    /// Source.
    pub rn: Register,
    /// Decoded bitmask immediate.
    pub imm: Immediate,
}

/// MOVN/MOVZ/MOVK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveWide {
    /// `Movn`, `Movz` or `Movk`.
    pub opcode: Opcode,
    /// Destination.
    pub rd: Register,
    /// 16-bit immediate.
    pub imm: Immediate,
    /// `lsl #(16 * hw)`.
    pub shift: Shift,
}

/// BFM/SBFM/UBFM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bitfield {
    /// `Bfm`, `Sbfm` or `Ubfm`.
    pub opcode: Opcode,
    /// Destination.
    pub rd: Register,
    /// Source.
    pub rn: Register,
    /// Rotate amount.
    pub immr: Immediate,
    /// Leftmost source bit.
    pub imms: Immediate,
}

/// EXTR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extract {
    /// Destination.
    pub rd: Register,
    /// High half source.
    pub rn: Register,
    /// Low half source.
    pub rm: Register,
    /// Extraction position.
    pub lsb: Immediate,
}

/// B.cond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalBranch {
    /// Branch condition.
    pub cc: ConditionCode,
    /// Signed offset.
    pub offset: Immediate,
}

/// SVC/HVC/SMC/BRK/HLT/DCPSn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExceptionGeneration {
    /// Exception opcode.
    pub opcode: Opcode,
    /// 16-bit payload.
    pub imm: Immediate,
}

/// Instructions of the system family, one shape per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum System {
    /// Hints and other operand-less instructions (`nop`, `paciasp`, ...).
    Simple {
        /// The instruction.
        opcode: Opcode,
    },
    /// `HINT #imm` for an unallocated hint number.
    Hint {
        /// Hint number.
        imm: Immediate,
    },
    /// `CLREX {#crm}`.
    Clrex {
        /// CRm field, if the decoder supplied it.
        crm: Option<Immediate>,
    },
    /// DSB/DMB/ISB.
    Barrier {
        /// `Dsb`, `Dmb` or `Isb`.
        opcode: Opcode,
        /// 4-bit CRm option.
        option: BarrierOption,
    },
    /// `SYS #op1, Cn, Cm, #op2{, Xt}`.
    Sys {
        /// `op1` field.
        op1: Immediate,
        /// `CRn` field.
        crn: Immediate,
        /// `CRm` field.
        crm: Immediate,
        /// `op2` field.
        op2: Immediate,
        /// Transfer register.
        rt: Register,
    },
    /// `SYSL Xt, #op1, Cn, Cm, #op2`.
    Sysl {
        /// Transfer register.
        rt: Register,
        /// `op1` field.
        op1: Immediate,
        /// `CRn` field.
        crn: Immediate,
        /// `CRm` field.
        crm: Immediate,
        /// `op2` field.
        op2: Immediate,
    },
    /// `MSR <sysreg>, Xt` / `MSR <pstatefield>, #imm`.
    Msr {
        /// Register or PSTATE field written.
        target: SystemRegister,
        /// Value written.
        value: Source,
    },
    /// `MRS Xt, <sysreg>`.
    Mrs {
        /// Destination.
        rt: Register,
        /// Register read.
        source: SystemRegister,
    },
}

/// BR/BLR/RET/ERET and their pointer-authenticating variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchRegister {
    /// Branch opcode.
    pub opcode: Opcode,
    /// Target register; X30 when the encoding has none.
    pub rn: Register,
    /// PAC modifier of BRAA/BRAB/BLRAA/BLRAB.
    pub modifier: Option<Register>,
}

/// B/BL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchImmediate {
    /// `B` or `Bl`.
    pub opcode: Opcode,
    /// Signed offset.
    pub offset: Immediate,
}

/// CBZ/CBNZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareAndBranch {
    /// `Cbz` or `Cbnz`.
    pub opcode: Opcode,
    /// Register tested.
    pub rt: Register,
    /// Signed offset.
    pub offset: Immediate,
}

/// TBZ/TBNZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestAndBranch {
    /// `Tbz` or `Tbnz`.
    pub opcode: Opcode,
    /// Register tested.
    pub rt: Register,
    /// Bit number.
    pub bit: Immediate,
    /// Signed offset.
    pub offset: Immediate,
}

/// Exclusive and ordered loads/stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadStoreExclusive {
    /// Exclusive/ordered opcode.
    pub opcode: Opcode,
    /// Status register of STXR/STLXR/STXP/STLXP.
    pub status: Option<Register>,
    /// Transfer register; its width selects the size suffix.
    pub rt: Register,
    /// Second transfer register of the pair forms.
    pub rt2: Option<Register>,
    /// `[Xn]`.
    pub address: ImmediateOffset,
}

/// LDR/LDRSW/PRFM (literal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadLiteral {
    /// Literal opcode.
    pub opcode: Opcode,
    /// Destination register or prefetch operation.
    pub target: Target,
    /// PC-relative literal; only its offset is printed.
    pub literal: ImmediateOffset,
}

/// LDP/LDPSW/LDNP/STP/STNP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadStorePair {
    /// Pair opcode.
    pub opcode: Opcode,
    /// First transfer register.
    pub rt: Register,
    /// Second transfer register.
    pub rt2: Register,
    /// Address.
    pub address: Address,
}

/// Single-register loads and stores, and PRFM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadStore {
    /// Load/store opcode.
    pub opcode: Opcode,
    /// Transfer register or prefetch operation.
    pub target: Target,
    /// Address; its size selects the suffix.
    pub address: Address,
}

/// Two-source data processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataProcessingTwoSource {
    /// Operation.
    pub opcode: Opcode,
    /// Destination.
    pub rd: Register,
    /// First source.
    pub rn: Register,
    /// Second source.
    pub rm: Register,
}

/// One-source data processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataProcessingOneSource {
    /// Operation.
    pub opcode: Opcode,
    /// Destination.
    pub rd: Register,
    /// Source (PAC modifier for the PAC/AUT operations).
    pub rn: Register,
}

/// AND/BIC/ORR/ORN/EOR/EON (shifted register).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalShiftedRegister {
    /// Operation.
    pub opcode: Opcode,
    /// Flag-setting form (ANDS/BICS).
    pub set_flags: bool,
    /// Destination.
    pub rd: Register,
    /// First source.
    pub rn: Register,
    /// Shifted source.
    pub rm: Register,
    /// Shift of `rm`.
    pub shift: Shift,
}

/// ADD/SUB (shifted register).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddSubShiftedRegister {
    /// `AddShiftedRegister` or `SubShiftedRegister`.
    pub opcode: Opcode,
    /// Flag-setting form.
    pub set_flags: bool,
    /// Destination.
    pub rd: Register,
    /// First source.
    pub rn: Register,
    /// Shifted source.
    pub rm: Register,
    /// Shift of `rm`.
    pub shift: Shift,
}

/// ADD/SUB (extended register).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddSubExtendedRegister {
    /// `AddExtendedRegister` or `SubExtendedRegister`.
    pub opcode: Opcode,
    /// Flag-setting form.
    pub set_flags: bool,
    /// Destination.
    pub rd: Register,
    /// First source.
    pub rn: Register,
    /// Extended source.
    pub rm: Register,
    /// Extension of `rm`.
    pub extend: Extend,
}

/// ADC/SBC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddSubWithCarry {
    /// `Adc` or `Sbc`.
    pub opcode: Opcode,
    /// Flag-setting form.
    pub set_flags: bool,
    /// Destination.
    pub rd: Register,
    /// First source.
    pub rn: Register,
    /// Second source.
    pub rm: Register,
}

/// CCMN/CCMP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalCompare {
    /// `Ccmn` or `Ccmp`.
    pub opcode: Opcode,
    /// Condition.
    pub cc: ConditionCode,
    /// First source.
    pub rn: Register,
    /// Register or 5-bit immediate.
    pub rhs: Source,
    /// Flags value used when the condition fails.
    pub nzcv: Immediate,
}

/// CSEL/CSINC/CSINV/CSNEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalSelect {
    /// Select opcode.
    pub opcode: Opcode,
    /// Condition.
    pub cc: ConditionCode,
    /// Destination.
    pub rd: Register,
    /// Selected when the condition holds.
    pub rn: Register,
    /// Incremented/inverted/negated otherwise.
    pub rm: Register,
}

/// MADD/MSUB/SMADDL/SMSUBL/SMULH/UMADDL/UMSUBL/UMULH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataProcessingThreeSource {
    /// Operation.
    pub opcode: Opcode,
    /// Destination.
    pub rd: Register,
    /// First multiplicand.
    pub rn: Register,
    /// Second multiplicand.
    pub rm: Register,
    /// Accumulator; ignored by SMULH/UMULH.
    pub ra: Register,
}

/// An instruction with its operands moved into its family's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Form {
    /// See [`PcRelative`].
    PcRelative(PcRelative),
    /// See [`AddSubImmediate`].
    AddSubImmediate(AddSubImmediate),
    /// See [`LogicalImmediate`].
    LogicalImmediate(LogicalImmediate),
    /// See [`MoveWide`].
    MoveWide(MoveWide),
    /// See [`Bitfield`].
    Bitfield(Bitfield),
    /// See [`Extract`].
    Extract(Extract),
    /// See [`ConditionalBranch`].
    ConditionalBranch(ConditionalBranch),
    /// See [`ExceptionGeneration`].
    ExceptionGeneration(ExceptionGeneration),
    /// See [`System`].
    System(System),
    /// See [`BranchRegister`].
    BranchRegister(BranchRegister),
    /// See [`BranchImmediate`].
    BranchImmediate(BranchImmediate),
    /// See [`CompareAndBranch`].
    CompareAndBranch(CompareAndBranch),
    /// See [`TestAndBranch`].
    TestAndBranch(TestAndBranch),
    /// See [`LoadStoreExclusive`].
    LoadStoreExclusive(LoadStoreExclusive),
    /// See [`LoadLiteral`].
    LoadLiteral(LoadLiteral),
    /// See [`LoadStorePair`].
    LoadStorePair(LoadStorePair),
    /// See [`LoadStore`].
    LoadStore(LoadStore),
    /// See [`DataProcessingTwoSource`].
    DataProcessingTwoSource(DataProcessingTwoSource),
    /// See [`DataProcessingOneSource`].
    DataProcessingOneSource(DataProcessingOneSource),
    /// See [`LogicalShiftedRegister`].
    LogicalShiftedRegister(LogicalShiftedRegister),
    /// See [`AddSubShiftedRegister`].
    AddSubShiftedRegister(AddSubShiftedRegister),
    /// See [`AddSubExtendedRegister`].
    AddSubExtendedRegister(AddSubExtendedRegister),
    /// See [`AddSubWithCarry`].
    AddSubWithCarry(AddSubWithCarry),
    /// See [`ConditionalCompare`].
    ConditionalCompare(ConditionalCompare),
    /// See [`ConditionalSelect`].
    ConditionalSelect(ConditionalSelect),
    /// See [`DataProcessingThreeSource`].
    DataProcessingThreeSource(DataProcessingThreeSource),
}

// ── Operand extraction ──────────────────────────────────────────────────

/// Positional view of an operand list that reports layout mismatches as
/// [`RenderError`]s.
struct Operands<'a> {
    opcode: Opcode,
    ops: &'a [Operand],
}

impl<'a> Operands<'a> {
    fn new(insn: &'a Instruction) -> Self {
        Self {
            opcode: insn.opcode,
            ops: insn.operands.as_slice(),
        }
    }

    fn len(&self) -> usize {
        self.ops.len()
    }

    fn expect_len(&self, min: usize, max: usize) -> Result<(), RenderError> {
        if (min..=max).contains(&self.ops.len()) {
            Ok(())
        } else {
            Err(RenderError::OperandCount {
                opcode: self.opcode,
                min,
                max,
                found: self.ops.len(),
            })
        }
    }

    fn get(&self, index: usize) -> Result<&'a Operand, RenderError> {
        self.ops.get(index).ok_or(RenderError::OperandCount {
            opcode: self.opcode,
            min: index + 1,
            max: OperandList::MAX_LEN,
            found: self.ops.len(),
        })
    }

    fn mismatch(&self, index: usize, expected: OperandKind, found: &Operand) -> RenderError {
        RenderError::OperandKind {
            opcode: self.opcode,
            index,
            expected,
            found: found.kind(),
        }
    }

    fn register(&self, index: usize) -> Result<Register, RenderError> {
        match self.get(index)? {
            Operand::Register(reg) => Ok(*reg),
            other => Err(self.mismatch(index, OperandKind::Register, other)),
        }
    }

    fn immediate(&self, index: usize) -> Result<Immediate, RenderError> {
        match self.get(index)? {
            Operand::Immediate(imm) => Ok(*imm),
            other => Err(self.mismatch(index, OperandKind::Immediate, other)),
        }
    }

    fn shift(&self, index: usize) -> Result<Shift, RenderError> {
        match self.get(index)? {
            Operand::Shift(shift) => Ok(*shift),
            other => Err(self.mismatch(index, OperandKind::Shift, other)),
        }
    }

    fn extend(&self, index: usize) -> Result<Extend, RenderError> {
        match self.get(index)? {
            Operand::Extend(extend) => Ok(*extend),
            other => Err(self.mismatch(index, OperandKind::Extend, other)),
        }
    }

    fn system_register(&self, index: usize) -> Result<SystemRegister, RenderError> {
        match self.get(index)? {
            Operand::SystemRegister(sysreg) => Ok(*sysreg),
            other => Err(self.mismatch(index, OperandKind::SystemRegister, other)),
        }
    }

    fn immediate_offset(&self, index: usize) -> Result<ImmediateOffset, RenderError> {
        match self.get(index)? {
            Operand::ImmediateOffset(addr) => Ok(*addr),
            other => Err(self.mismatch(index, OperandKind::ImmediateOffset, other)),
        }
    }

    /// Either offset kind; a mismatch names `ImmediateOffset`.
    fn address(&self, index: usize) -> Result<Address, RenderError> {
        match self.get(index)? {
            Operand::ImmediateOffset(addr) => Ok(Address::Immediate(*addr)),
            Operand::RegisterOffset(addr) => Ok(Address::Register(*addr)),
            other => Err(self.mismatch(index, OperandKind::ImmediateOffset, other)),
        }
    }

    /// Register or immediate; a mismatch names `Register`.
    fn source(&self, index: usize) -> Result<Source, RenderError> {
        match self.get(index)? {
            Operand::Register(reg) => Ok(Source::Register(*reg)),
            Operand::Immediate(imm) => Ok(Source::Immediate(*imm)),
            other => Err(self.mismatch(index, OperandKind::Register, other)),
        }
    }

    fn target(&self, index: usize) -> Result<Target, RenderError> {
        if matches!(self.opcode, Opcode::Prfm | Opcode::PrfmLiteral) {
            let op = self.immediate(index)?;
            Ok(Target::Prefetch(PrefetchOp::from_immediate(op)))
        } else {
            self.register(index).map(Target::Register)
        }
    }

    fn unexpected(&self, family: Family) -> RenderError {
        RenderError::UnexpectedOpcode {
            opcode: self.opcode,
            family,
        }
    }
}

impl Form {
    /// Move the operands of `insn` into the record of its opcode family.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the operand count or an operand variant
    /// does not match the family's layout.
    pub fn from_instruction(insn: &Instruction) -> Result<Form, RenderError> {
        use Opcode::*;

        let opcode = insn.opcode;
        let family = opcode.family();
        let ops = Operands::new(insn);
        log::trace!("{:?}: {} operands, {} family", opcode, ops.len(), family);

        let form = match family {
            Family::PcRelative => {
                ops.expect_len(3, 3)?;
                Form::PcRelative(PcRelative {
                    opcode,
                    rd: ops.register(0)?,
                    imm: ops.immediate(1)?,
                    shift: ops.shift(2)?,
                })
            }
            Family::AddSubImmediate => {
                ops.expect_len(4, 4)?;
                Form::AddSubImmediate(AddSubImmediate {
                    opcode,
                    set_flags: insn.set_flags,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    imm: ops.immediate(2)?,
                    shift: ops.shift(3)?,
                })
            }
            Family::LogicalImmediate => {
                ops.expect_len(3, 3)?;
                Form::LogicalImmediate(LogicalImmediate {
                    opcode,
                    set_flags: insn.set_flags,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    imm: ops.immediate(2)?,
                })
            }
            Family::MoveWide => {
                ops.expect_len(3, 3)?;
                Form::MoveWide(MoveWide {
                    opcode,
                    rd: ops.register(0)?,
                    imm: ops.immediate(1)?,
                    shift: ops.shift(2)?,
                })
            }
            Family::Bitfield => {
                ops.expect_len(4, 4)?;
                Form::Bitfield(Bitfield {
                    opcode,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    immr: ops.immediate(2)?,
                    imms: ops.immediate(3)?,
                })
            }
            Family::Extract => {
                ops.expect_len(4, 4)?;
                Form::Extract(Extract {
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    rm: ops.register(2)?,
                    lsb: ops.immediate(3)?,
                })
            }
            Family::ConditionalBranch => {
                ops.expect_len(1, 1)?;
                Form::ConditionalBranch(ConditionalBranch {
                    cc: insn.cc,
                    offset: ops.immediate(0)?,
                })
            }
            Family::ExceptionGeneration => {
                ops.expect_len(1, 1)?;
                Form::ExceptionGeneration(ExceptionGeneration {
                    opcode,
                    imm: ops.immediate(0)?,
                })
            }
            Family::System => Form::System(system(&ops)?),
            Family::BranchRegister => {
                let (rn, modifier) = match opcode {
                    Braa | Brab | Blraa | Blrab => {
                        ops.expect_len(2, 2)?;
                        (ops.register(0)?, Some(ops.register(1)?))
                    }
                    Br | Blr | Braaz | Brabz | Blraaz | Blrabz => {
                        ops.expect_len(1, 1)?;
                        (ops.register(0)?, None)
                    }
                    Ret | Retaa | Retab | Eret | Eretaa | Eretab | Drps => {
                        ops.expect_len(0, 1)?;
                        let rn = if ops.len() == 1 {
                            ops.register(0)?
                        } else {
                            Register::x(Register::LINK)
                        };
                        (rn, None)
                    }
                    _ => return Err(ops.unexpected(family)),
                };
                Form::BranchRegister(BranchRegister {
                    opcode,
                    rn,
                    modifier,
                })
            }
            Family::BranchImmediate => {
                ops.expect_len(1, 1)?;
                Form::BranchImmediate(BranchImmediate {
                    opcode,
                    offset: ops.immediate(0)?,
                })
            }
            Family::CompareAndBranch => {
                ops.expect_len(2, 2)?;
                Form::CompareAndBranch(CompareAndBranch {
                    opcode,
                    rt: ops.register(0)?,
                    offset: ops.immediate(1)?,
                })
            }
            Family::TestAndBranch => {
                ops.expect_len(3, 3)?;
                Form::TestAndBranch(TestAndBranch {
                    opcode,
                    rt: ops.register(0)?,
                    bit: ops.immediate(1)?,
                    offset: ops.immediate(2)?,
                })
            }
            Family::LoadStoreExclusive => {
                Form::LoadStoreExclusive(load_store_exclusive(&ops, family)?)
            }
            Family::LoadLiteral => {
                ops.expect_len(2, 2)?;
                Form::LoadLiteral(LoadLiteral {
                    opcode,
                    target: ops.target(0)?,
                    literal: ops.immediate_offset(1)?,
                })
            }
            Family::LoadStorePair => {
                ops.expect_len(3, 3)?;
                Form::LoadStorePair(LoadStorePair {
                    opcode,
                    rt: ops.register(0)?,
                    rt2: ops.register(1)?,
                    address: ops.address(2)?,
                })
            }
            Family::LoadStore => {
                ops.expect_len(2, 2)?;
                Form::LoadStore(LoadStore {
                    opcode,
                    target: ops.target(0)?,
                    address: ops.address(1)?,
                })
            }
            Family::DataProcessingTwoSource => {
                ops.expect_len(3, 3)?;
                Form::DataProcessingTwoSource(DataProcessingTwoSource {
                    opcode,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    rm: ops.register(2)?,
                })
            }
            Family::DataProcessingOneSource => {
                ops.expect_len(2, 2)?;
                Form::DataProcessingOneSource(DataProcessingOneSource {
                    opcode,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                })
            }
            Family::LogicalShiftedRegister => {
                ops.expect_len(4, 4)?;
                Form::LogicalShiftedRegister(LogicalShiftedRegister {
                    opcode,
                    set_flags: insn.set_flags,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    rm: ops.register(2)?,
                    shift: ops.shift(3)?,
                })
            }
            Family::AddSubShiftedRegister => {
                ops.expect_len(4, 4)?;
                Form::AddSubShiftedRegister(AddSubShiftedRegister {
                    opcode,
                    set_flags: insn.set_flags,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    rm: ops.register(2)?,
                    shift: ops.shift(3)?,
                })
            }
            Family::AddSubExtendedRegister => {
                ops.expect_len(4, 4)?;
                Form::AddSubExtendedRegister(AddSubExtendedRegister {
                    opcode,
                    set_flags: insn.set_flags,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    rm: ops.register(2)?,
                    extend: ops.extend(3)?,
                })
            }
            Family::AddSubWithCarry => {
                ops.expect_len(3, 3)?;
                Form::AddSubWithCarry(AddSubWithCarry {
                    opcode,
                    set_flags: insn.set_flags,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    rm: ops.register(2)?,
                })
            }
            Family::ConditionalCompare => {
                ops.expect_len(3, 3)?;
                Form::ConditionalCompare(ConditionalCompare {
                    opcode,
                    cc: insn.cc,
                    rn: ops.register(0)?,
                    rhs: ops.source(1)?,
                    nzcv: ops.immediate(2)?,
                })
            }
            Family::ConditionalSelect => {
                ops.expect_len(3, 3)?;
                Form::ConditionalSelect(ConditionalSelect {
                    opcode,
                    cc: insn.cc,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    rm: ops.register(2)?,
                })
            }
            Family::DataProcessingThreeSource => {
                ops.expect_len(4, 4)?;
                Form::DataProcessingThreeSource(DataProcessingThreeSource {
                    opcode,
                    rd: ops.register(0)?,
                    rn: ops.register(1)?,
                    rm: ops.register(2)?,
                    ra: ops.register(3)?,
                })
            }
        };
        Ok(form)
    }

    /// Encoding family of the form.
    pub fn family(&self) -> Family {
        match self {
            Form::PcRelative(_) => Family::PcRelative,
            Form::AddSubImmediate(_) => Family::AddSubImmediate,
            Form::LogicalImmediate(_) => Family::LogicalImmediate,
            Form::MoveWide(_) => Family::MoveWide,
            Form::Bitfield(_) => Family::Bitfield,
            Form::Extract(_) => Family::Extract,
            Form::ConditionalBranch(_) => Family::ConditionalBranch,
            Form::ExceptionGeneration(_) => Family::ExceptionGeneration,
            Form::System(_) => Family::System,
            Form::BranchRegister(_) => Family::BranchRegister,
            Form::BranchImmediate(_) => Family::BranchImmediate,
            Form::CompareAndBranch(_) => Family::CompareAndBranch,
            Form::TestAndBranch(_) => Family::TestAndBranch,
            Form::LoadStoreExclusive(_) => Family::LoadStoreExclusive,
            Form::LoadLiteral(_) => Family::LoadLiteral,
            Form::LoadStorePair(_) => Family::LoadStorePair,
            Form::LoadStore(_) => Family::LoadStore,
            Form::DataProcessingTwoSource(_) => Family::DataProcessingTwoSource,
            Form::DataProcessingOneSource(_) => Family::DataProcessingOneSource,
            Form::LogicalShiftedRegister(_) => Family::LogicalShiftedRegister,
            Form::AddSubShiftedRegister(_) => Family::AddSubShiftedRegister,
            Form::AddSubExtendedRegister(_) => Family::AddSubExtendedRegister,
            Form::AddSubWithCarry(_) => Family::AddSubWithCarry,
            Form::ConditionalCompare(_) => Family::ConditionalCompare,
            Form::ConditionalSelect(_) => Family::ConditionalSelect,
            Form::DataProcessingThreeSource(_) => Family::DataProcessingThreeSource,
        }
    }
}

impl TryFrom<&Instruction> for Form {
    type Error = RenderError;

    fn try_from(insn: &Instruction) -> Result<Self, Self::Error> {
        Form::from_instruction(insn)
    }
}

fn system(ops: &Operands<'_>) -> Result<System, RenderError> {
    use Opcode::*;

    let form = match ops.opcode {
        Hint => {
            ops.expect_len(1, 1)?;
            System::Hint {
                imm: ops.immediate(0)?,
            }
        }
        Clrex => {
            ops.expect_len(0, 1)?;
            let crm = if ops.len() == 1 {
                Some(ops.immediate(0)?)
            } else {
                None
            };
            System::Clrex { crm }
        }
        Dsb | Dmb | Isb => {
            ops.expect_len(1, 1)?;
            System::Barrier {
                opcode: ops.opcode,
                option: BarrierOption::from_immediate(ops.immediate(0)?),
            }
        }
        Sys => {
            ops.expect_len(5, 5)?;
            System::Sys {
                op1: ops.immediate(0)?,
                crn: ops.immediate(1)?,
                crm: ops.immediate(2)?,
                op2: ops.immediate(3)?,
                rt: ops.register(4)?,
            }
        }
        Sysl => {
            ops.expect_len(5, 5)?;
            System::Sysl {
                rt: ops.register(0)?,
                op1: ops.immediate(1)?,
                crn: ops.immediate(2)?,
                crm: ops.immediate(3)?,
                op2: ops.immediate(4)?,
            }
        }
        Msr => {
            ops.expect_len(2, 2)?;
            System::Msr {
                target: ops.system_register(0)?,
                value: ops.source(1)?,
            }
        }
        Mrs => {
            ops.expect_len(2, 2)?;
            System::Mrs {
                rt: ops.register(0)?,
                source: ops.system_register(1)?,
            }
        }
        // Hint-space instructions: any operands the decoder attached are
        // implied by the mnemonic.
        Nop | Yield | Wfe | Wfi | Sev | Sevl | Xpaclri | Pacia1716 | Pacib1716 | Autia1716
        | Autib1716 | Esb | PsbCsync | Paciaz | Paciasp | Pacibz | Pacibsp | Autiaz | Autiasp
        | Autibz | Autibsp => System::Simple { opcode: ops.opcode },
        _ => return Err(ops.unexpected(Family::System)),
    };
    Ok(form)
}

fn load_store_exclusive(
    ops: &Operands<'_>,
    family: Family,
) -> Result<LoadStoreExclusive, RenderError> {
    use Opcode::*;

    // (has status register, is pair)
    let (status, pair) = match ops.opcode {
        Ldar | Ldaxr | Ldlar | Ldxr | Stlr | Stllr => (false, false),
        Ldaxp | Ldxp => (false, true),
        Stlxr | Stxr => (true, false),
        Stlxp | Stxp => (true, true),
        _ => return Err(ops.unexpected(family)),
    };
    let count = 2 + usize::from(status) + usize::from(pair);
    ops.expect_len(count, count)?;

    let mut next = 0..count;
    let mut take = || next.next().unwrap_or(count - 1);
    let status = if status {
        Some(ops.register(take())?)
    } else {
        None
    };
    let rt = ops.register(take())?;
    let rt2 = if pair {
        Some(ops.register(take())?)
    } else {
        None
    };
    Ok(LoadStoreExclusive {
        opcode: ops.opcode,
        status,
        rt,
        rt2,
        address: ops.immediate_offset(take())?,
    })
}
