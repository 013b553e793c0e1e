//! Opcode enumeration and encoding families.
//!
//! The opcode space is partitioned into 26 encoding families. Families are
//! contiguous in discriminant order, which keeps range-based dispatch
//! (`opcode <= family.last_opcode()`, smallest family first) equivalent to
//! the explicit [`Opcode::family`] tag used by the printer.

use core::fmt;

/// Instruction opcode.
///
/// Variants are declared family by family, in the family order of
/// [`Family::ALL`], so that the discriminants of each family form one
/// contiguous range ending at [`Family::last_opcode`]. New opcodes must be
/// added inside their family's block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Opcode {
    // -- PC-relative addressing --
    /// ADR.
    Adr,
    /// ADRP.
    Adrp,

    // -- Add/subtract (immediate) --
    /// ADD (immediate).
    AddImmediate,
    /// SUB (immediate).
    SubImmediate,

    // -- Logical (immediate) --
    /// AND (immediate).
    AndImmediate,
    /// ORR (immediate).
    OrrImmediate,
    /// EOR (immediate).
    EorImmediate,

    // -- Move wide (immediate) --
    /// MOVK.
    Movk,
    /// MOVN.
    Movn,
    /// MOVZ.
    Movz,

    // -- Bitfield --
    /// BFM.
    Bfm,
    /// SBFM.
    Sbfm,
    /// UBFM.
    Ubfm,

    // -- Extract --
    /// EXTR.
    Extr,

    // -- Conditional branch (immediate) --
    /// B.cond.
    BCond,

    // -- Exception generation --
    /// BRK.
    Brk,
    /// DCPS1.
    Dcps1,
    /// DCPS2.
    Dcps2,
    /// DCPS3.
    Dcps3,
    /// HLT.
    Hlt,
    /// HVC.
    Hvc,
    /// SMC.
    Smc,
    /// SVC.
    Svc,

    // -- System --
    /// AUTIA1716.
    Autia1716,
    /// AUTIASP.
    Autiasp,
    /// AUTIAZ.
    Autiaz,
    /// AUTIB1716.
    Autib1716,
    /// AUTIBSP.
    Autibsp,
    /// AUTIBZ.
    Autibz,
    /// CLREX.
    Clrex,
    /// DMB.
    Dmb,
    /// DSB.
    Dsb,
    /// ESB.
    Esb,
    /// HINT.
    Hint,
    /// ISB.
    Isb,
    /// MRS.
    Mrs,
    /// MSR.
    Msr,
    /// NOP.
    Nop,
    /// PACIA1716.
    Pacia1716,
    /// PACIASP.
    Paciasp,
    /// PACIAZ.
    Paciaz,
    /// PACIB1716.
    Pacib1716,
    /// PACIBSP.
    Pacibsp,
    /// PACIBZ.
    Pacibz,
    /// PSB CSYNC.
    PsbCsync,
    /// SEV.
    Sev,
    /// SEVL.
    Sevl,
    /// SYS.
    Sys,
    /// SYSL.
    Sysl,
    /// WFE.
    Wfe,
    /// WFI.
    Wfi,
    /// XPACLRI.
    Xpaclri,
    /// YIELD.
    Yield,

    // -- Unconditional branch (register) --
    /// BLR.
    Blr,
    /// BLRAA.
    Blraa,
    /// BLRAAZ.
    Blraaz,
    /// BLRAB.
    Blrab,
    /// BLRABZ.
    Blrabz,
    /// BR.
    Br,
    /// BRAA.
    Braa,
    /// BRAAZ.
    Braaz,
    /// BRAB.
    Brab,
    /// BRABZ.
    Brabz,
    /// DRPS.
    Drps,
    /// ERET.
    Eret,
    /// ERETAA.
    Eretaa,
    /// ERETAB.
    Eretab,
    /// RET.
    Ret,
    /// RETAA.
    Retaa,
    /// RETAB.
    Retab,

    // -- Unconditional branch (immediate) --
    /// B.
    B,
    /// BL.
    Bl,

    // -- Compare and branch --
    /// CBNZ.
    Cbnz,
    /// CBZ.
    Cbz,

    // -- Test and branch --
    /// TBNZ.
    Tbnz,
    /// TBZ.
    Tbz,

    // -- Load/store exclusive and ordered --
    /// LDAR.
    Ldar,
    /// LDAXP.
    Ldaxp,
    /// LDAXR.
    Ldaxr,
    /// LDLAR.
    Ldlar,
    /// LDXP.
    Ldxp,
    /// LDXR.
    Ldxr,
    /// STLR.
    Stlr,
    /// STLLR.
    Stllr,
    /// STLXP.
    Stlxp,
    /// STLXR.
    Stlxr,
    /// STXP.
    Stxp,
    /// STXR.
    Stxr,

    // -- Load register (literal) --
    /// LDR (literal).
    LdrLiteral,
    /// LDRSW (literal).
    LdrsLiteral,
    /// PRFM (literal).
    PrfmLiteral,

    // -- Load/store register pair --
    /// LDNP.
    Ldnp,
    /// LDP.
    Ldp,
    /// LDPSW.
    Ldpsw,
    /// STNP.
    Stnp,
    /// STP.
    Stp,

    // -- Load/store register --
    /// LDR, LDRB, LDRH.
    Ldr,
    /// LDRSB, LDRSH, LDRSW.
    Ldrs,
    /// LDTR, LDTRB, LDTRH.
    Ldtr,
    /// LDTRSB, LDTRSH, LDTRSW.
    Ldtrs,
    /// LDUR, LDURB, LDURH.
    Ldur,
    /// LDURSB, LDURSH, LDURSW.
    Ldurs,
    /// PRFM.
    Prfm,
    /// STR, STRB, STRH.
    Str,
    /// STTR, STTRB, STTRH.
    Sttr,
    /// STUR, STURB, STURH.
    Stur,

    // -- Data processing (2 source) --
    /// ASRV.
    Asr,
    /// CRC32B.
    Crc32b,
    /// CRC32CB.
    Crc32cb,
    /// CRC32CH.
    Crc32ch,
    /// CRC32CW.
    Crc32cw,
    /// CRC32CX.
    Crc32cx,
    /// CRC32H.
    Crc32h,
    /// CRC32W.
    Crc32w,
    /// CRC32X.
    Crc32x,
    /// LSLV.
    Lsl,
    /// LSRV.
    Lsr,
    /// PACGA.
    Pacga,
    /// RORV.
    Ror,
    /// SDIV.
    Sdiv,
    /// UDIV.
    Udiv,

    // -- Data processing (1 source) --
    /// AUTDA.
    Autda,
    /// AUTDB.
    Autdb,
    /// AUTIA.
    Autia,
    /// AUTIB.
    Autib,
    /// CLS.
    Cls,
    /// CLZ.
    Clz,
    /// PACDA.
    Pacda,
    /// PACDB.
    Pacdb,
    /// PACIA.
    Pacia,
    /// PACIB.
    Pacib,
    /// RBIT.
    Rbit,
    /// REV.
    Rev,
    /// REV16.
    Rev16,
    /// REV32.
    Rev32,
    /// XPACD.
    Xpacd,
    /// XPACI.
    Xpaci,

    // -- Logical (shifted register) --
    /// AND (shifted register).
    AndShiftedRegister,
    /// BIC (shifted register).
    BicShiftedRegister,
    /// ORR (shifted register).
    OrrShiftedRegister,
    /// ORN (shifted register).
    OrnShiftedRegister,
    /// EOR (shifted register).
    EorShiftedRegister,
    /// EON (shifted register).
    EonShiftedRegister,

    // -- Add/subtract (shifted register) --
    /// ADD (shifted register).
    AddShiftedRegister,
    /// SUB (shifted register).
    SubShiftedRegister,

    // -- Add/subtract (extended register) --
    /// ADD (extended register).
    AddExtendedRegister,
    /// SUB (extended register).
    SubExtendedRegister,

    // -- Add/subtract (with carry) --
    /// ADC.
    Adc,
    /// SBC.
    Sbc,

    // -- Conditional compare --
    /// CCMN.
    Ccmn,
    /// CCMP.
    Ccmp,

    // -- Conditional select --
    /// CSEL.
    Csel,
    /// CSINC.
    Csinc,
    /// CSINV.
    Csinv,
    /// CSNEG.
    Csneg,

    // -- Data processing (3 source) --
    /// MADD.
    Madd,
    /// MSUB.
    Msub,
    /// SMADDL.
    Smaddl,
    /// SMSUBL.
    Smsubl,
    /// SMULH.
    Smulh,
    /// UMADDL.
    Umaddl,
    /// UMULH.
    Umulh,
    /// UMSUBL.
    Umsubl,
}

impl Opcode {
    /// Every opcode, in discriminant order.
    pub const ALL: [Opcode; 163] = [
        Opcode::Adr,
        Opcode::Adrp,
        Opcode::AddImmediate,
        Opcode::SubImmediate,
        Opcode::AndImmediate,
        Opcode::OrrImmediate,
        Opcode::EorImmediate,
        Opcode::Movk,
        Opcode::Movn,
        Opcode::Movz,
        Opcode::Bfm,
        Opcode::Sbfm,
        Opcode::Ubfm,
        Opcode::Extr,
        Opcode::BCond,
        Opcode::Brk,
        Opcode::Dcps1,
        Opcode::Dcps2,
        Opcode::Dcps3,
        Opcode::Hlt,
        Opcode::Hvc,
        Opcode::Smc,
        Opcode::Svc,
        Opcode::Autia1716,
        Opcode::Autiasp,
        Opcode::Autiaz,
        Opcode::Autib1716,
        Opcode::Autibsp,
        Opcode::Autibz,
        Opcode::Clrex,
        Opcode::Dmb,
        Opcode::Dsb,
        Opcode::Esb,
        Opcode::Hint,
        Opcode::Isb,
        Opcode::Mrs,
        Opcode::Msr,
        Opcode::Nop,
        Opcode::Pacia1716,
        Opcode::Paciasp,
        Opcode::Paciaz,
        Opcode::Pacib1716,
        Opcode::Pacibsp,
        Opcode::Pacibz,
        Opcode::PsbCsync,
        Opcode::Sev,
        Opcode::Sevl,
        Opcode::Sys,
        Opcode::Sysl,
        Opcode::Wfe,
        Opcode::Wfi,
        Opcode::Xpaclri,
        Opcode::Yield,
        Opcode::Blr,
        Opcode::Blraa,
        Opcode::Blraaz,
        Opcode::Blrab,
        Opcode::Blrabz,
        Opcode::Br,
        Opcode::Braa,
        Opcode::Braaz,
        Opcode::Brab,
        Opcode::Brabz,
        Opcode::Drps,
        Opcode::Eret,
        Opcode::Eretaa,
        Opcode::Eretab,
        Opcode::Ret,
        Opcode::Retaa,
        Opcode::Retab,
        Opcode::B,
        Opcode::Bl,
        Opcode::Cbnz,
        Opcode::Cbz,
        Opcode::Tbnz,
        Opcode::Tbz,
        Opcode::Ldar,
        Opcode::Ldaxp,
        Opcode::Ldaxr,
        Opcode::Ldlar,
        Opcode::Ldxp,
        Opcode::Ldxr,
        Opcode::Stlr,
        Opcode::Stllr,
        Opcode::Stlxp,
        Opcode::Stlxr,
        Opcode::Stxp,
        Opcode::Stxr,
        Opcode::LdrLiteral,
        Opcode::LdrsLiteral,
        Opcode::PrfmLiteral,
        Opcode::Ldnp,
        Opcode::Ldp,
        Opcode::Ldpsw,
        Opcode::Stnp,
        Opcode::Stp,
        Opcode::Ldr,
        Opcode::Ldrs,
        Opcode::Ldtr,
        Opcode::Ldtrs,
        Opcode::Ldur,
        Opcode::Ldurs,
        Opcode::Prfm,
        Opcode::Str,
        Opcode::Sttr,
        Opcode::Stur,
        Opcode::Asr,
        Opcode::Crc32b,
        Opcode::Crc32cb,
        Opcode::Crc32ch,
        Opcode::Crc32cw,
        Opcode::Crc32cx,
        Opcode::Crc32h,
        Opcode::Crc32w,
        Opcode::Crc32x,
        Opcode::Lsl,
        Opcode::Lsr,
        Opcode::Pacga,
        Opcode::Ror,
        Opcode::Sdiv,
        Opcode::Udiv,
        Opcode::Autda,
        Opcode::Autdb,
        Opcode::Autia,
        Opcode::Autib,
        Opcode::Cls,
        Opcode::Clz,
        Opcode::Pacda,
        Opcode::Pacdb,
        Opcode::Pacia,
        Opcode::Pacib,
        Opcode::Rbit,
        Opcode::Rev,
        Opcode::Rev16,
        Opcode::Rev32,
        Opcode::Xpacd,
        Opcode::Xpaci,
        Opcode::AndShiftedRegister,
        Opcode::BicShiftedRegister,
        Opcode::OrrShiftedRegister,
        Opcode::OrnShiftedRegister,
        Opcode::EorShiftedRegister,
        Opcode::EonShiftedRegister,
        Opcode::AddShiftedRegister,
        Opcode::SubShiftedRegister,
        Opcode::AddExtendedRegister,
        Opcode::SubExtendedRegister,
        Opcode::Adc,
        Opcode::Sbc,
        Opcode::Ccmn,
        Opcode::Ccmp,
        Opcode::Csel,
        Opcode::Csinc,
        Opcode::Csinv,
        Opcode::Csneg,
        Opcode::Madd,
        Opcode::Msub,
        Opcode::Smaddl,
        Opcode::Smsubl,
        Opcode::Smulh,
        Opcode::Umaddl,
        Opcode::Umulh,
        Opcode::Umsubl,
    ];

    /// The encoding family this opcode belongs to.
    pub fn family(self) -> Family {
        use Opcode::*;
        match self {
            Adr | Adrp => Family::PcRelative,
            AddImmediate | SubImmediate => Family::AddSubImmediate,
            AndImmediate | OrrImmediate | EorImmediate => Family::LogicalImmediate,
            Movk | Movn | Movz => Family::MoveWide,
            Bfm | Sbfm | Ubfm => Family::Bitfield,
            Extr => Family::Extract,
            BCond => Family::ConditionalBranch,
            Brk | Dcps1 | Dcps2 | Dcps3 | Hlt | Hvc | Smc | Svc => Family::ExceptionGeneration,
            Autia1716 | Autiasp | Autiaz | Autib1716 | Autibsp | Autibz | Clrex | Dmb | Dsb
            | Esb | Hint | Isb | Mrs | Msr | Nop | Pacia1716 | Paciasp | Paciaz | Pacib1716
            | Pacibsp | Pacibz | PsbCsync | Sev | Sevl | Sys | Sysl | Wfe | Wfi | Xpaclri
            | Yield => Family::System,
            Blr | Blraa | Blraaz | Blrab | Blrabz | Br | Braa | Braaz | Brab | Brabz | Drps
            | Eret | Eretaa | Eretab | Ret | Retaa | Retab => Family::BranchRegister,
            B | Bl => Family::BranchImmediate,
            Cbnz | Cbz => Family::CompareAndBranch,
            Tbnz | Tbz => Family::TestAndBranch,
            Ldar | Ldaxp | Ldaxr | Ldlar | Ldxp | Ldxr | Stlr | Stllr | Stlxp | Stlxr | Stxp
            | Stxr => Family::LoadStoreExclusive,
            LdrLiteral | LdrsLiteral | PrfmLiteral => Family::LoadLiteral,
            Ldnp | Ldp | Ldpsw | Stnp | Stp => Family::LoadStorePair,
            Ldr | Ldrs | Ldtr | Ldtrs | Ldur | Ldurs | Prfm | Str | Sttr | Stur => {
                Family::LoadStore
            }
            Asr | Crc32b | Crc32cb | Crc32ch | Crc32cw | Crc32cx | Crc32h | Crc32w | Crc32x
            | Lsl | Lsr | Pacga | Ror | Sdiv | Udiv => Family::DataProcessingTwoSource,
            Autda | Autdb | Autia | Autib | Cls | Clz | Pacda | Pacdb | Pacia | Pacib | Rbit
            | Rev | Rev16 | Rev32 | Xpacd | Xpaci => Family::DataProcessingOneSource,
            AndShiftedRegister | BicShiftedRegister | OrrShiftedRegister | OrnShiftedRegister
            | EorShiftedRegister | EonShiftedRegister => Family::LogicalShiftedRegister,
            AddShiftedRegister | SubShiftedRegister => Family::AddSubShiftedRegister,
            AddExtendedRegister | SubExtendedRegister => Family::AddSubExtendedRegister,
            Adc | Sbc => Family::AddSubWithCarry,
            Ccmn | Ccmp => Family::ConditionalCompare,
            Csel | Csinc | Csinv | Csneg => Family::ConditionalSelect,
            Madd | Msub | Smaddl | Smsubl | Smulh | Umaddl | Umulh | Umsubl => {
                Family::DataProcessingThreeSource
            }
        }
    }
}

/// A64 encoding family. Each family is printed by one routine in
/// [`crate::printer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// PC-relative addressing.
    PcRelative,
    /// Add/subtract (immediate).
    AddSubImmediate,
    /// Logical (immediate).
    LogicalImmediate,
    /// Move wide (immediate).
    MoveWide,
    /// Bitfield.
    Bitfield,
    /// Extract.
    Extract,
    /// Conditional branch (immediate).
    ConditionalBranch,
    /// Exception generation.
    ExceptionGeneration,
    /// System.
    System,
    /// Unconditional branch (register).
    BranchRegister,
    /// Unconditional branch (immediate).
    BranchImmediate,
    /// Compare and branch.
    CompareAndBranch,
    /// Test and branch.
    TestAndBranch,
    /// Load/store exclusive and ordered.
    LoadStoreExclusive,
    /// Load register (literal).
    LoadLiteral,
    /// Load/store register pair.
    LoadStorePair,
    /// Load/store register.
    LoadStore,
    /// Data processing (2 source).
    DataProcessingTwoSource,
    /// Data processing (1 source).
    DataProcessingOneSource,
    /// Logical (shifted register).
    LogicalShiftedRegister,
    /// Add/subtract (shifted register).
    AddSubShiftedRegister,
    /// Add/subtract (extended register).
    AddSubExtendedRegister,
    /// Add/subtract (with carry).
    AddSubWithCarry,
    /// Conditional compare.
    ConditionalCompare,
    /// Conditional select.
    ConditionalSelect,
    /// Data processing (3 source).
    DataProcessingThreeSource,
}

impl Family {
    /// Every family, in dispatch order.
    pub const ALL: [Family; 26] = [
        Family::PcRelative,
        Family::AddSubImmediate,
        Family::LogicalImmediate,
        Family::MoveWide,
        Family::Bitfield,
        Family::Extract,
        Family::ConditionalBranch,
        Family::ExceptionGeneration,
        Family::System,
        Family::BranchRegister,
        Family::BranchImmediate,
        Family::CompareAndBranch,
        Family::TestAndBranch,
        Family::LoadStoreExclusive,
        Family::LoadLiteral,
        Family::LoadStorePair,
        Family::LoadStore,
        Family::DataProcessingTwoSource,
        Family::DataProcessingOneSource,
        Family::LogicalShiftedRegister,
        Family::AddSubShiftedRegister,
        Family::AddSubExtendedRegister,
        Family::AddSubWithCarry,
        Family::ConditionalCompare,
        Family::ConditionalSelect,
        Family::DataProcessingThreeSource,
    ];

    /// First opcode of the family's range (inclusive).
    pub fn first_opcode(self) -> Opcode {
        match self {
            Family::PcRelative => Opcode::Adr,
            Family::AddSubImmediate => Opcode::AddImmediate,
            Family::LogicalImmediate => Opcode::AndImmediate,
            Family::MoveWide => Opcode::Movk,
            Family::Bitfield => Opcode::Bfm,
            Family::Extract => Opcode::Extr,
            Family::ConditionalBranch => Opcode::BCond,
            Family::ExceptionGeneration => Opcode::Brk,
            Family::System => Opcode::Autia1716,
            Family::BranchRegister => Opcode::Blr,
            Family::BranchImmediate => Opcode::B,
            Family::CompareAndBranch => Opcode::Cbnz,
            Family::TestAndBranch => Opcode::Tbnz,
            Family::LoadStoreExclusive => Opcode::Ldar,
            Family::LoadLiteral => Opcode::LdrLiteral,
            Family::LoadStorePair => Opcode::Ldnp,
            Family::LoadStore => Opcode::Ldr,
            Family::DataProcessingTwoSource => Opcode::Asr,
            Family::DataProcessingOneSource => Opcode::Autda,
            Family::LogicalShiftedRegister => Opcode::AndShiftedRegister,
            Family::AddSubShiftedRegister => Opcode::AddShiftedRegister,
            Family::AddSubExtendedRegister => Opcode::AddExtendedRegister,
            Family::AddSubWithCarry => Opcode::Adc,
            Family::ConditionalCompare => Opcode::Ccmn,
            Family::ConditionalSelect => Opcode::Csel,
            Family::DataProcessingThreeSource => Opcode::Madd,
        }
    }

    /// Last opcode of the family's range (inclusive).
    pub fn last_opcode(self) -> Opcode {
        match self {
            Family::PcRelative => Opcode::Adrp,
            Family::AddSubImmediate => Opcode::SubImmediate,
            Family::LogicalImmediate => Opcode::EorImmediate,
            Family::MoveWide => Opcode::Movz,
            Family::Bitfield => Opcode::Ubfm,
            Family::Extract => Opcode::Extr,
            Family::ConditionalBranch => Opcode::BCond,
            Family::ExceptionGeneration => Opcode::Svc,
            Family::System => Opcode::Yield,
            Family::BranchRegister => Opcode::Retab,
            Family::BranchImmediate => Opcode::Bl,
            Family::CompareAndBranch => Opcode::Cbz,
            Family::TestAndBranch => Opcode::Tbz,
            Family::LoadStoreExclusive => Opcode::Stxr,
            Family::LoadLiteral => Opcode::PrfmLiteral,
            Family::LoadStorePair => Opcode::Stp,
            Family::LoadStore => Opcode::Stur,
            Family::DataProcessingTwoSource => Opcode::Udiv,
            Family::DataProcessingOneSource => Opcode::Xpaci,
            Family::LogicalShiftedRegister => Opcode::EonShiftedRegister,
            Family::AddSubShiftedRegister => Opcode::SubShiftedRegister,
            Family::AddSubExtendedRegister => Opcode::SubExtendedRegister,
            Family::AddSubWithCarry => Opcode::Sbc,
            Family::ConditionalCompare => Opcode::Ccmp,
            Family::ConditionalSelect => Opcode::Csneg,
            Family::DataProcessingThreeSource => Opcode::Umsubl,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::PcRelative => "pc-relative addressing",
            Family::AddSubImmediate => "add/subtract (immediate)",
            Family::LogicalImmediate => "logical (immediate)",
            Family::MoveWide => "move wide (immediate)",
            Family::Bitfield => "bitfield",
            Family::Extract => "extract",
            Family::ConditionalBranch => "conditional branch",
            Family::ExceptionGeneration => "exception generation",
            Family::System => "system",
            Family::BranchRegister => "branch (register)",
            Family::BranchImmediate => "branch (immediate)",
            Family::CompareAndBranch => "compare and branch",
            Family::TestAndBranch => "test and branch",
            Family::LoadStoreExclusive => "load/store exclusive",
            Family::LoadLiteral => "load literal",
            Family::LoadStorePair => "load/store pair",
            Family::LoadStore => "load/store",
            Family::DataProcessingTwoSource => "data processing (2 source)",
            Family::DataProcessingOneSource => "data processing (1 source)",
            Family::LogicalShiftedRegister => "logical (shifted register)",
            Family::AddSubShiftedRegister => "add/subtract (shifted register)",
            Family::AddSubExtendedRegister => "add/subtract (extended register)",
            Family::AddSubWithCarry => "add/subtract (with carry)",
            Family::ConditionalCompare => "conditional compare",
            Family::ConditionalSelect => "conditional select",
            Family::DataProcessingThreeSource => "data processing (3 source)",
        })
    }
}

impl Opcode {
    /// Opcode with the given discriminant, if any.
    pub fn from_u16(raw: u16) -> Option<Opcode> {
        Self::ALL.get(usize::from(raw)).copied()
    }
}
