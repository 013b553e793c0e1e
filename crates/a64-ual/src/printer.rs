//! Per-family UAL renderers.
//!
//! Every family record of [`crate::form`] implements [`fmt::Display`] here.
//! Alias selection happens inside those impls: each one looks at the
//! record's fields and picks the preferred disassembly mnemonic.

use core::fmt;

use crate::error::RenderError;
use crate::form::{
    AddSubExtendedRegister, AddSubImmediate, AddSubShiftedRegister, AddSubWithCarry, Bitfield,
    BranchImmediate, BranchRegister, CompareAndBranch, ConditionalBranch, ConditionalCompare,
    ConditionalSelect, DataProcessingOneSource, DataProcessingThreeSource,
    DataProcessingTwoSource, ExceptionGeneration, Extract, Form, LoadLiteral, LoadStore,
    LoadStoreExclusive, LoadStorePair, LogicalImmediate, LogicalShiftedRegister, MoveWide,
    PcRelative, System, Target, TestAndBranch,
};
use crate::ir::{Immediate, Operand, Register};
use crate::opcode::{Family, Opcode};

// ─── Helpers ────────────────────────────────────────────────────────────

/// A family renderer received an opcode it has no arm for. Records are
/// public, so this is reachable only through a hand-built record.
#[cold]
fn unexpected(opcode: Opcode, family: Family) -> ! {
    panic!("{}", RenderError::UnexpectedOpcode { opcode, family })
}

/// `s` suffix of flag-setting mnemonics.
#[inline]
fn flags(set_flags: bool) -> &'static str {
    if set_flags {
        "s"
    } else {
        ""
    }
}

/// Operands joined by `", "`. Shift and extend operands carry their own
/// leading separator and are appended directly.
struct Joined<'a>(&'a [Operand]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 && !op.is_modifier() {
                f.write_str(", ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// Two register names are the same architectural register, regardless of
/// the view width.
#[inline]
fn same(a: Register, b: Register) -> bool {
    a.name == b.name
}

// ─── Barrier and prefetch operations ────────────────────────────────────

/// 4-bit CRm option of DSB/DMB/ISB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierOption(pub u8);

impl BarrierOption {
    /// Full-system barrier (`sy`); also the bare form of ISB.
    pub const SY: BarrierOption = BarrierOption(0b1111);

    /// Option carried by a decoded immediate. Values that do not fit the
    /// field saturate and render raw.
    pub fn from_immediate(imm: Immediate) -> Self {
        BarrierOption(u8::try_from(imm.value).unwrap_or(u8::MAX))
    }
}

/// `<domain><type>` barrier name, or `#<dec>` for options without one.
impl fmt::Display for BarrierOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let option = self.0;
        if option > 0b1111 || option & 0b11 == 0 {
            log::debug!("barrier option {} has no name", option);
            return write!(f, "#{}", option);
        }
        let domain = match option >> 2 {
            0b00 => "osh",
            0b01 => "nsh",
            0b10 => "ish",
            _ => "",
        };
        match option & 0b11 {
            0b01 => write!(f, "{}ld", domain),
            0b10 => write!(f, "{}st", domain),
            _ if domain.is_empty() => f.write_str("sy"),
            _ => f.write_str(domain),
        }
    }
}

/// 5-bit `prfop` of PRFM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefetchOp(pub u8);

impl PrefetchOp {
    /// Operation carried by a decoded immediate. Values that do not fit the
    /// field saturate and render raw.
    pub fn from_immediate(imm: Immediate) -> Self {
        PrefetchOp(u8::try_from(imm.value).unwrap_or(u8::MAX))
    }
}

/// `PLDL1KEEP`-style name, or `#<dec>` for unallocated operations.
impl fmt::Display for PrefetchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.0;
        if op > 0b11111 || op & 0b11000 == 0b11000 || op & 0b00110 == 0b00110 {
            log::debug!("prefetch operation {} has no name", op);
            return write!(f, "#{}", op);
        }
        let kind = match op >> 3 {
            0 => "PLD",
            1 => "PLI",
            _ => "PST",
        };
        let target = match (op >> 1) & 0b11 {
            0 => "L1",
            1 => "L2",
            _ => "L3",
        };
        let policy = if op & 1 == 0 { "KEEP" } else { "STRM" };
        write!(f, "{}{}{}", kind, target, policy)
    }
}

// ─── Data processing (immediate) ────────────────────────────────────────

impl fmt::Display for PcRelative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode {
            Opcode::Adr => write!(f, "adr {}, {}", self.rd, self.imm),
            // The page shift is implied by the mnemonic.
            Opcode::Adrp => {
                let page = Immediate::new(self.imm.value << 12, self.imm.size.saturating_add(12));
                write!(f, "adrp {}, {}", self.rd, page)
            }
            op => unexpected(op, Family::PcRelative),
        }
    }
}

impl fmt::Display for AddSubImmediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, compare) = match self.opcode {
            Opcode::AddImmediate => ("add", "cmn"),
            Opcode::SubImmediate => ("sub", "cmp"),
            op => unexpected(op, Family::AddSubImmediate),
        };
        let to_or_from_sp = self.rd.is_sp() || self.rn.is_sp();
        if self.opcode == Opcode::AddImmediate
            && !self.set_flags
            && self.imm.value == 0
            && to_or_from_sp
        {
            write!(f, "mov {}, {}", self.rd, self.rn)
        } else if self.rd.is_zero() {
            write!(f, "{} {}, {}{}", compare, self.rn, self.imm, self.shift)
        } else {
            write!(
                f,
                "{}{} {}, {}, {}{}",
                name,
                flags(self.set_flags),
                self.rd,
                self.rn,
                self.imm,
                self.shift
            )
        }
    }
}

impl fmt::Display for LogicalImmediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode {
            Opcode::AndImmediate => {
                if !self.set_flags {
                    write!(f, "and {}, {}, {}", self.rd, self.rn, self.imm)
                } else if self.rd.is_zero() {
                    write!(f, "tst {}, {}", self.rn, self.imm)
                } else {
                    write!(f, "ands {}, {}, {}", self.rd, self.rn, self.imm)
                }
            }
            Opcode::OrrImmediate => {
                if self.rn.is_zero() {
                    write!(f, "mov {}, {}", self.rd, self.imm)
                } else {
                    write!(f, "orr {}, {}, {}", self.rd, self.rn, self.imm)
                }
            }
            Opcode::EorImmediate => write!(f, "eor {}, {}, {}", self.rd, self.rn, self.imm),
            op => unexpected(op, Family::LogicalImmediate),
        }
    }
}

impl fmt::Display for MoveWide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = if self.rd.width() == 32 {
            0xffff_ffff
        } else {
            u64::MAX
        };
        let value = self
            .imm
            .value
            .checked_shl(u32::from(self.shift.count))
            .unwrap_or(0);
        let size = self.rd.width() as u8;
        match self.opcode {
            Opcode::Movn => write!(f, "mov {}, {}", self.rd, Immediate::new(!value & mask, size)),
            Opcode::Movz => write!(f, "mov {}, {}", self.rd, Immediate::new(value & mask, size)),
            Opcode::Movk => write!(f, "movk {}, {}{}", self.rd, self.imm, self.shift),
            op => unexpected(op, Family::MoveWide),
        }
    }
}

impl fmt::Display for Bitfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = u64::from(self.rd.width());
        let (immr, imms) = (self.immr.value, self.imms.value);
        let (rd, rn) = (self.rd, self.rn);
        let full = imms == n - 1;
        // Field arithmetic wraps: out-of-range fields still render.
        let lsb = n.wrapping_sub(immr);
        let width = imms.wrapping_add(1);
        let extracted = imms.wrapping_sub(immr).wrapping_add(1);
        let extend = match (immr, imms) {
            (0, 7) => Some('b'),
            (0, 15) => Some('h'),
            (0, 31) => Some('w'),
            _ => None,
        };

        match self.opcode {
            Opcode::Bfm => {
                if imms < immr {
                    if rn.is_zero() {
                        write!(f, "bfc {}, #{}, #{}", rd, lsb, width)
                    } else {
                        write!(f, "bfi {}, {}, #{}, #{}", rd, rn, lsb, width)
                    }
                } else {
                    write!(f, "bfxil {}, {}, #{}, #{}", rd, rn, immr, extracted)
                }
            }
            Opcode::Sbfm => {
                if full {
                    write!(f, "asr {}, {}, #{}", rd, rn, immr)
                } else if imms < immr {
                    write!(f, "sbfiz {}, {}, #{}, #{}", rd, rn, lsb, width)
                } else if let Some(suffix) = extend {
                    write!(f, "sxt{} {}, {}", suffix, rd, rn.with_size(32))
                } else {
                    write!(f, "sbfx {}, {}, #{}, #{}", rd, rn, immr, extracted)
                }
            }
            Opcode::Ubfm => {
                if !full && width == immr {
                    write!(f, "lsl {}, {}, #{}", rd, rn, lsb)
                } else if full {
                    write!(f, "lsr {}, {}, #{}", rd, rn, immr)
                } else if imms < immr {
                    write!(f, "ubfiz {}, {}, #{}, #{}", rd, rn, lsb, width)
                } else if let (Some(suffix @ ('b' | 'h')), 32) = (extend, rd.width()) {
                    // uxtb/uxth exist only for W destinations; there is no uxtw.
                    write!(f, "uxt{} {}, {}", suffix, rd, rn.with_size(32))
                } else {
                    write!(f, "ubfx {}, {}, #{}, #{}", rd, rn, immr, extracted)
                }
            }
            op => unexpected(op, Family::Bitfield),
        }
    }
}

impl fmt::Display for Extract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if same(self.rn, self.rm) {
            write!(f, "ror {}, {}, #{}", self.rd, self.rn, self.lsb.value)
        } else {
            write!(
                f,
                "extr {}, {}, {}, #{}",
                self.rd, self.rn, self.rm, self.lsb.value
            )
        }
    }
}

// ─── Branches, exceptions and system ────────────────────────────────────

impl fmt::Display for ConditionalBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b.{} {}", self.cc, self.offset.signed())
    }
}

impl fmt::Display for ExceptionGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::Svc => "svc",
            Opcode::Hvc => "hvc",
            Opcode::Smc => "smc",
            Opcode::Brk => "brk",
            Opcode::Hlt => "hlt",
            Opcode::Dcps1 => return f.write_str("dcps1"),
            Opcode::Dcps2 => return f.write_str("dcps2"),
            Opcode::Dcps3 => return f.write_str("dcps3"),
            op => unexpected(op, Family::ExceptionGeneration),
        };
        write!(f, "{} #{}", name, self.imm.value)
    }
}

fn hint_name(opcode: Opcode) -> &'static str {
    match opcode {
        Opcode::Nop => "nop",
        Opcode::Yield => "yield",
        Opcode::Wfe => "wfe",
        Opcode::Wfi => "wfi",
        Opcode::Sev => "sev",
        Opcode::Sevl => "sevl",
        Opcode::Xpaclri => "xpaclri",
        Opcode::Pacia1716 => "pacia1716",
        Opcode::Pacib1716 => "pacib1716",
        Opcode::Autia1716 => "autia1716",
        Opcode::Autib1716 => "autib1716",
        Opcode::Esb => "esb",
        Opcode::PsbCsync => "psb csync",
        Opcode::Paciaz => "paciaz",
        Opcode::Paciasp => "paciasp",
        Opcode::Pacibz => "pacibz",
        Opcode::Pacibsp => "pacibsp",
        Opcode::Autiaz => "autiaz",
        Opcode::Autiasp => "autiasp",
        Opcode::Autibz => "autibz",
        Opcode::Autibsp => "autibsp",
        op => unexpected(op, Family::System),
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            System::Simple { opcode } => f.write_str(hint_name(opcode)),
            System::Hint { imm } => write!(f, "hint {}", imm),
            System::Clrex { crm } => match crm {
                Some(crm) if crm.value != 15 => write!(f, "clrex #{}", crm.value),
                _ => f.write_str("clrex"),
            },
            System::Barrier { opcode, option } => match opcode {
                Opcode::Dsb => write!(f, "dsb {}", option),
                Opcode::Dmb => write!(f, "dmb {}", option),
                Opcode::Isb if option == BarrierOption::SY => f.write_str("isb"),
                Opcode::Isb => write!(f, "isb #{}", option.0),
                op => unexpected(op, Family::System),
            },
            System::Sys {
                op1,
                crn,
                crm,
                op2,
                rt,
            } => {
                write!(
                    f,
                    "sys #{}, C{}, C{}, #{}",
                    op1.value, crn.value, crm.value, op2.value
                )?;
                if !rt.is_zero() {
                    write!(f, ", {}", rt)?;
                }
                Ok(())
            }
            System::Sysl {
                rt,
                op1,
                crn,
                crm,
                op2,
            } => write!(
                f,
                "sysl {}, #{}, C{}, C{}, #{}",
                rt, op1.value, crn.value, crm.value, op2.value
            ),
            System::Msr { target, value } => write!(f, "msr {}, {}", target, value),
            System::Mrs { rt, source } => write!(f, "mrs {}, {}", rt, source),
        }
    }
}

impl fmt::Display for BranchRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::Br => "br",
            Opcode::Blr => "blr",
            Opcode::Braaz => "braaz",
            Opcode::Brabz => "brabz",
            Opcode::Blraaz => "blraaz",
            Opcode::Blrabz => "blrabz",
            Opcode::Braa => "braa",
            Opcode::Brab => "brab",
            Opcode::Blraa => "blraa",
            Opcode::Blrab => "blrab",
            Opcode::Ret | Opcode::Retaa | Opcode::Retab => {
                let name = match self.opcode {
                    Opcode::Ret => "ret",
                    Opcode::Retaa => "retaa",
                    _ => "retab",
                };
                return if self.rn.is_link() {
                    f.write_str(name)
                } else {
                    write!(f, "{} {}", name, self.rn)
                };
            }
            Opcode::Eret => return f.write_str("eret"),
            Opcode::Eretaa => return f.write_str("eretaa"),
            Opcode::Eretab => return f.write_str("eretab"),
            Opcode::Drps => return f.write_str("drps"),
            op => unexpected(op, Family::BranchRegister),
        };
        write!(f, "{} {}", name, self.rn)?;
        if let Some(modifier) = self.modifier {
            write!(f, ", {}", modifier)?;
        }
        Ok(())
    }
}

impl fmt::Display for BranchImmediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::B => "b",
            Opcode::Bl => "bl",
            op => unexpected(op, Family::BranchImmediate),
        };
        write!(f, "{} {}", name, self.offset.signed())
    }
}

impl fmt::Display for CompareAndBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::Cbz => "cbz",
            Opcode::Cbnz => "cbnz",
            op => unexpected(op, Family::CompareAndBranch),
        };
        write!(f, "{} {}, {}", name, self.rt, self.offset.signed())
    }
}

impl fmt::Display for TestAndBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::Tbz => "tbz",
            Opcode::Tbnz => "tbnz",
            op => unexpected(op, Family::TestAndBranch),
        };
        write!(
            f,
            "{} {}, #{}, {}",
            name,
            self.rt,
            self.bit.value,
            self.offset.signed()
        )
    }
}

// ─── Loads and stores ───────────────────────────────────────────────────

impl fmt::Display for LoadStoreExclusive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::Ldar => "ldar",
            Opcode::Ldaxp => "ldaxp",
            Opcode::Ldaxr => "ldaxr",
            Opcode::Ldlar => "ldlar",
            Opcode::Ldxp => "ldxp",
            Opcode::Ldxr => "ldxr",
            Opcode::Stlr => "stlr",
            Opcode::Stllr => "stllr",
            Opcode::Stlxp => "stlxp",
            Opcode::Stlxr => "stlxr",
            Opcode::Stxp => "stxp",
            Opcode::Stxr => "stxr",
            op => unexpected(op, Family::LoadStoreExclusive),
        };
        let suffix = match (self.rt2, self.rt.size) {
            (None, 8) => "b",
            (None, 16) => "h",
            _ => "",
        };
        write!(f, "{}{} ", name, suffix)?;
        if let Some(status) = self.status {
            write!(f, "{}, ", status)?;
        }
        write!(f, "{}", self.rt)?;
        if let Some(rt2) = self.rt2 {
            write!(f, ", {}", rt2)?;
        }
        write!(f, ", {}", self.address)
    }
}

impl fmt::Display for LoadLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::LdrLiteral => "ldr",
            Opcode::LdrsLiteral => "ldrsw",
            Opcode::PrfmLiteral => "prfm",
            op => unexpected(op, Family::LoadLiteral),
        };
        write!(
            f,
            "{} {}, {}",
            name,
            self.target,
            self.literal.offset.signed()
        )
    }
}

impl fmt::Display for LoadStorePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::Ldnp => "ldnp",
            Opcode::Ldp => "ldp",
            Opcode::Ldpsw => "ldpsw",
            Opcode::Stnp => "stnp",
            Opcode::Stp => "stp",
            op => unexpected(op, Family::LoadStorePair),
        };
        let ops: [Operand; 3] = [self.rt.into(), self.rt2.into(), self.address.into()];
        write!(f, "{} {}", name, Joined(&ops))
    }
}

impl fmt::Display for LoadStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, sign_extends) = match self.opcode {
            Opcode::Ldr => ("ldr", false),
            Opcode::Ldrs => ("ldrs", true),
            Opcode::Ldtr => ("ldtr", false),
            Opcode::Ldtrs => ("ldtrs", true),
            Opcode::Ldur => ("ldur", false),
            Opcode::Ldurs => ("ldurs", true),
            Opcode::Str => ("str", false),
            Opcode::Sttr => ("sttr", false),
            Opcode::Stur => ("stur", false),
            Opcode::Prfm => return write!(f, "prfm {}, {}", self.target, self.address),
            op => unexpected(op, Family::LoadStore),
        };
        let suffix = match self.address.size() {
            8 => "b",
            16 => "h",
            32 if sign_extends => "w",
            _ => "",
        };
        match self.target {
            Target::Register(rt) => {
                let ops: [Operand; 2] = [rt.into(), self.address.into()];
                write!(f, "{}{} {}", name, suffix, Joined(&ops))
            }
            Target::Prefetch(op) => write!(f, "{}{} {}, {}", name, suffix, op, self.address),
        }
    }
}

// ─── Data processing (register) ─────────────────────────────────────────

impl fmt::Display for DataProcessingTwoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::Asr => "asr",
            Opcode::Lsl => "lsl",
            Opcode::Lsr => "lsr",
            Opcode::Ror => "ror",
            Opcode::Sdiv => "sdiv",
            Opcode::Udiv => "udiv",
            Opcode::Pacga => "pacga",
            Opcode::Crc32b => "crc32b",
            Opcode::Crc32h => "crc32h",
            Opcode::Crc32w => "crc32w",
            Opcode::Crc32x => "crc32x",
            Opcode::Crc32cb => "crc32cb",
            Opcode::Crc32ch => "crc32ch",
            Opcode::Crc32cw => "crc32cw",
            Opcode::Crc32cx => "crc32cx",
            op => unexpected(op, Family::DataProcessingTwoSource),
        };
        let ops: [Operand; 3] = [self.rd.into(), self.rn.into(), self.rm.into()];
        write!(f, "{} {}", name, Joined(&ops))
    }
}

impl fmt::Display for DataProcessingOneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (mnemonic, form used when the modifier is XZR)
        let (name, zero) = match self.opcode {
            Opcode::Rbit => ("rbit", None),
            Opcode::Rev16 => ("rev16", None),
            Opcode::Rev32 => ("rev32", None),
            Opcode::Rev => ("rev", None),
            Opcode::Clz => ("clz", None),
            Opcode::Cls => ("cls", None),
            Opcode::Pacia => ("pacia", Some("paciza")),
            Opcode::Pacib => ("pacib", Some("pacizb")),
            Opcode::Pacda => ("pacda", Some("pacdza")),
            Opcode::Pacdb => ("pacdb", Some("pacdzb")),
            Opcode::Autia => ("autia", Some("autiza")),
            Opcode::Autib => ("autib", Some("autizb")),
            Opcode::Autda => ("autda", Some("autdza")),
            Opcode::Autdb => ("autdb", Some("autdzb")),
            Opcode::Xpaci => return write!(f, "xpaci {}", self.rd),
            Opcode::Xpacd => return write!(f, "xpacd {}", self.rd),
            op => unexpected(op, Family::DataProcessingOneSource),
        };
        match zero {
            Some(zero) if self.rn.is_zero() => write!(f, "{} {}", zero, self.rd),
            _ => write!(f, "{} {}, {}", name, self.rd, self.rn),
        }
    }
}

impl fmt::Display for LogicalShiftedRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rd, rn, rm, shift) = (self.rd, self.rn, self.rm, self.shift);
        let (name, set_flags) = match self.opcode {
            Opcode::AndShiftedRegister => {
                if self.set_flags && rd.is_zero() {
                    return write!(f, "tst {}, {}{}", rn, rm, shift);
                }
                ("and", self.set_flags)
            }
            Opcode::BicShiftedRegister => ("bic", self.set_flags),
            Opcode::OrrShiftedRegister => {
                if rn.is_zero() && shift.is_identity() {
                    return write!(f, "mov {}, {}", rd, rm);
                }
                ("orr", false)
            }
            Opcode::OrnShiftedRegister => {
                if rn.is_zero() {
                    return write!(f, "mvn {}, {}{}", rd, rm, shift);
                }
                ("orn", false)
            }
            Opcode::EorShiftedRegister => ("eor", false),
            Opcode::EonShiftedRegister => ("eon", false),
            op => unexpected(op, Family::LogicalShiftedRegister),
        };
        let ops: [Operand; 4] = [rd.into(), rn.into(), rm.into(), shift.into()];
        write!(f, "{}{} {}", name, flags(set_flags), Joined(&ops))
    }
}

impl fmt::Display for AddSubShiftedRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, compare) = match self.opcode {
            Opcode::AddShiftedRegister => ("add", "cmn"),
            Opcode::SubShiftedRegister => ("sub", "cmp"),
            op => unexpected(op, Family::AddSubShiftedRegister),
        };
        let s = flags(self.set_flags);
        if self.set_flags && self.rd.is_zero() {
            write!(f, "{} {}, {}{}", compare, self.rn, self.rm, self.shift)
        } else if self.opcode == Opcode::SubShiftedRegister && self.rn.is_zero() {
            write!(f, "neg{} {}, {}{}", s, self.rd, self.rm, self.shift)
        } else {
            write!(
                f,
                "{}{} {}, {}, {}{}",
                name, s, self.rd, self.rn, self.rm, self.shift
            )
        }
    }
}

impl fmt::Display for AddSubExtendedRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, compare) = match self.opcode {
            Opcode::AddExtendedRegister => ("add", "cmn"),
            Opcode::SubExtendedRegister => ("sub", "cmp"),
            op => unexpected(op, Family::AddSubExtendedRegister),
        };
        if self.set_flags && self.rd.is_zero() {
            write!(f, "{} {}, {}{}", compare, self.rn, self.rm, self.extend)
        } else {
            write!(
                f,
                "{}{} {}, {}, {}{}",
                name,
                flags(self.set_flags),
                self.rd,
                self.rn,
                self.rm,
                self.extend
            )
        }
    }
}

impl fmt::Display for AddSubWithCarry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = flags(self.set_flags);
        match self.opcode {
            Opcode::Adc => write!(f, "adc{} {}, {}, {}", s, self.rd, self.rn, self.rm),
            Opcode::Sbc if self.rn.is_zero() => write!(f, "ngc{} {}, {}", s, self.rd, self.rm),
            Opcode::Sbc => write!(f, "sbc{} {}, {}, {}", s, self.rd, self.rn, self.rm),
            op => unexpected(op, Family::AddSubWithCarry),
        }
    }
}

impl fmt::Display for ConditionalCompare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.opcode {
            Opcode::Ccmn => "ccmn",
            Opcode::Ccmp => "ccmp",
            op => unexpected(op, Family::ConditionalCompare),
        };
        let ops: [Operand; 3] = [self.rn.into(), self.rhs.into(), self.nzcv.into()];
        write!(f, "{} {}, {}", name, Joined(&ops), self.cc)
    }
}

impl fmt::Display for ConditionalSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rd, rn, rm, cc) = (self.rd, self.rn, self.rm, self.cc);
        let repeated = same(rn, rm);
        match self.opcode {
            Opcode::Csel => write!(f, "csel {}, {}, {}, {}", rd, rn, rm, cc),
            Opcode::Csinc if repeated && rn.is_zero() => write!(f, "cset {}, {}", rd, cc),
            Opcode::Csinc if repeated => write!(f, "cinc {}, {}, {}", rd, rn, cc),
            Opcode::Csinc => write!(f, "csinc {}, {}, {}, {}", rd, rn, rm, cc),
            Opcode::Csinv if repeated && rn.is_zero() => write!(f, "csetm {}, {}", rd, cc),
            Opcode::Csinv if repeated => write!(f, "cinv {}, {}, {}", rd, rn, cc),
            Opcode::Csinv => write!(f, "csinv {}, {}, {}, {}", rd, rn, rm, cc),
            Opcode::Csneg if repeated => write!(f, "cneg {}, {}, {}", rd, rn, cc),
            Opcode::Csneg => write!(f, "csneg {}, {}, {}, {}", rd, rn, rm, cc),
            op => unexpected(op, Family::ConditionalSelect),
        }
    }
}

impl fmt::Display for DataProcessingThreeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rd, rn, rm, ra) = (self.rd, self.rn, self.rm, self.ra);
        let (name, short) = match self.opcode {
            Opcode::Madd => ("madd", "mul"),
            Opcode::Msub => ("msub", "mneg"),
            Opcode::Smaddl => ("smaddl", "smull"),
            Opcode::Smsubl => ("smsubl", "smnegl"),
            Opcode::Umaddl => ("umaddl", "umull"),
            Opcode::Umsubl => ("umsubl", "umnegl"),
            Opcode::Smulh => return write!(f, "smulh {}, {}, {}", rd, rn, rm),
            Opcode::Umulh => return write!(f, "umulh {}, {}, {}", rd, rn, rm),
            op => unexpected(op, Family::DataProcessingThreeSource),
        };
        if ra.is_zero() {
            write!(f, "{} {}, {}, {}", short, rd, rn, rm)
        } else {
            write!(f, "{} {}, {}, {}, {}", name, rd, rn, rm, ra)
        }
    }
}

// ─── Dispatch ───────────────────────────────────────────────────────────

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::PcRelative(form) => fmt::Display::fmt(form, f),
            Form::AddSubImmediate(form) => fmt::Display::fmt(form, f),
            Form::LogicalImmediate(form) => fmt::Display::fmt(form, f),
            Form::MoveWide(form) => fmt::Display::fmt(form, f),
            Form::Bitfield(form) => fmt::Display::fmt(form, f),
            Form::Extract(form) => fmt::Display::fmt(form, f),
            Form::ConditionalBranch(form) => fmt::Display::fmt(form, f),
            Form::ExceptionGeneration(form) => fmt::Display::fmt(form, f),
            Form::System(form) => fmt::Display::fmt(form, f),
            Form::BranchRegister(form) => fmt::Display::fmt(form, f),
            Form::BranchImmediate(form) => fmt::Display::fmt(form, f),
            Form::CompareAndBranch(form) => fmt::Display::fmt(form, f),
            Form::TestAndBranch(form) => fmt::Display::fmt(form, f),
            Form::LoadStoreExclusive(form) => fmt::Display::fmt(form, f),
            Form::LoadLiteral(form) => fmt::Display::fmt(form, f),
            Form::LoadStorePair(form) => fmt::Display::fmt(form, f),
            Form::LoadStore(form) => fmt::Display::fmt(form, f),
            Form::DataProcessingTwoSource(form) => fmt::Display::fmt(form, f),
            Form::DataProcessingOneSource(form) => fmt::Display::fmt(form, f),
            Form::LogicalShiftedRegister(form) => fmt::Display::fmt(form, f),
            Form::AddSubShiftedRegister(form) => fmt::Display::fmt(form, f),
            Form::AddSubExtendedRegister(form) => fmt::Display::fmt(form, f),
            Form::AddSubWithCarry(form) => fmt::Display::fmt(form, f),
            Form::ConditionalCompare(form) => fmt::Display::fmt(form, f),
            Form::ConditionalSelect(form) => fmt::Display::fmt(form, f),
            Form::DataProcessingThreeSource(form) => fmt::Display::fmt(form, f),
        }
    }
}
