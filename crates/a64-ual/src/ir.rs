//! Decoded-instruction model: registers, operands, condition codes and the
//! architecture-neutral [`Instruction`] consumed by the printer.
//!
//! Every operand type implements [`fmt::Display`] with its canonical UAL
//! text. Those impls are the shared operand renderers reused by every
//! instruction family in [`crate::printer`].

use alloc::vec::Vec;
use core::fmt;

use crate::opcode::Opcode;

// ─── Registers ──────────────────────────────────────────────────────────

/// Name of an AArch64 general-purpose register slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegisterName {
    /// X0–X30 (W0–W30 in 32-bit form). Numbers above 30 are not
    /// architectural and render as a placeholder.
    X(u8),
    /// Zero register (`xzr` / `wzr`).
    Xzr,
    /// Stack pointer (`sp` / `wsp`).
    Sp,
    /// Program counter.
    Pc,
}

/// A general-purpose register together with the width it is accessed at.
///
/// Widths of 32 bits or less render the `w` form; byte and halfword
/// accesses use sizes 8 and 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Register {
    /// Register slot.
    pub name: RegisterName,
    /// Access width in bits.
    pub size: u8,
}

impl Register {
    /// Link register number.
    pub const LINK: u8 = 30;

    /// Create a register of the given width.
    #[must_use]
    pub const fn new(name: RegisterName, size: u8) -> Self {
        Self { name, size }
    }

    /// 64-bit `Xn`.
    #[must_use]
    pub const fn x(n: u8) -> Self {
        Self::new(RegisterName::X(n), 64)
    }

    /// 32-bit `Wn`.
    #[must_use]
    pub const fn w(n: u8) -> Self {
        Self::new(RegisterName::X(n), 32)
    }

    /// `xzr`.
    #[must_use]
    pub const fn xzr() -> Self {
        Self::new(RegisterName::Xzr, 64)
    }

    /// `wzr`.
    #[must_use]
    pub const fn wzr() -> Self {
        Self::new(RegisterName::Xzr, 32)
    }

    /// `sp`.
    #[must_use]
    pub const fn sp() -> Self {
        Self::new(RegisterName::Sp, 64)
    }

    /// `wsp`.
    #[must_use]
    pub const fn wsp() -> Self {
        Self::new(RegisterName::Sp, 32)
    }

    /// `pc`.
    #[must_use]
    pub const fn pc() -> Self {
        Self::new(RegisterName::Pc, 64)
    }

    /// Same register slot at a different width.
    #[must_use]
    pub const fn with_size(self, size: u8) -> Self {
        Self::new(self.name, size)
    }

    /// `true` for XZR/WZR.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.name == RegisterName::Xzr
    }

    /// `true` for SP/WSP.
    #[inline]
    pub fn is_sp(&self) -> bool {
        self.name == RegisterName::Sp
    }

    /// `true` for X30.
    #[inline]
    pub fn is_link(&self) -> bool {
        self.name == RegisterName::X(Self::LINK)
    }

    /// Architectural datasize of the register view: 32 or 64.
    #[inline]
    pub fn width(&self) -> u32 {
        if self.size <= 32 {
            32
        } else {
            64
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let narrow = self.size <= 32;
        match self.name {
            RegisterName::X(n) if n <= 30 => {
                write!(f, "{}{}", if narrow { 'w' } else { 'x' }, n)
            }
            RegisterName::Xzr => f.write_str(if narrow { "wzr" } else { "xzr" }),
            RegisterName::Sp => f.write_str(if narrow { "wsp" } else { "sp" }),
            RegisterName::Pc => f.write_str("pc"),
            RegisterName::X(n) => {
                log::debug!("register number {} has no architectural name", n);
                f.write_str("<unsupported_reg>")
            }
        }
    }
}

// ─── Immediates ─────────────────────────────────────────────────────────

/// Immediate value and the width of the field it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Immediate {
    /// Raw (possibly already sign-extended) value.
    pub value: u64,
    /// Field width in bits.
    pub size: u8,
}

impl Immediate {
    /// Create an immediate.
    #[must_use]
    pub const fn new(value: u64, size: u8) -> Self {
        Self { value, size }
    }

    /// Mask covering the low `size` bits.
    #[inline]
    fn mask(&self) -> u64 {
        match self.size {
            0 | 64.. => u64::MAX,
            n => (1u64 << n) - 1,
        }
    }

    /// `true` when bit `size - 1` is set.
    #[inline]
    pub fn is_negative(&self) -> bool {
        match self.size {
            0 => false,
            n => (self.value >> (u32::from(n).min(64) - 1)) & 1 == 1,
        }
    }

    /// Two's-complement magnitude of a negative value, taken within `size` bits.
    #[inline]
    pub fn magnitude(&self) -> u64 {
        self.value.wrapping_neg() & self.mask()
    }

    /// View of this immediate that renders as a signed offset.
    #[must_use]
    pub const fn signed(self) -> SignedImmediate {
        SignedImmediate(self)
    }
}

/// Unsigned rendering: `#0x<hex>`.
impl fmt::Display for Immediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#0x{:x}", self.value)
    }
}

/// An [`Immediate`] rendered as a signed value (`#-0x<hex>` when negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedImmediate(pub Immediate);

impl fmt::Display for SignedImmediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_negative() {
            write!(f, "#-0x{:x}", self.0.magnitude())
        } else {
            write!(f, "#0x{:x}", self.0.value)
        }
    }
}

// ─── System registers ───────────────────────────────────────────────────

/// System registers and PSTATE fields with a dedicated mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemRegisterName {
    /// No mnemonic: rendered from its encoding fields.
    Unknown,
    /// `SPSel`.
    SpSel,
    /// `DAIFSet`.
    DaifSet,
    /// `DAIFClr`.
    DaifClr,
    /// `UAO`.
    Uao,
    /// `PAN`.
    Pan,
}

/// System register operand of MRS/MSR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemRegister {
    /// Mnemonic, if the register has one.
    pub name: SystemRegisterName,
    /// `op0` encoding field.
    pub op0: u8,
    /// `op1` encoding field.
    pub op1: u8,
    /// `CRn` encoding field.
    pub crn: u8,
    /// `CRm` encoding field.
    pub crm: u8,
    /// `op2` encoding field.
    pub op2: u8,
}

impl SystemRegister {
    /// A named register; encoding fields are left zero.
    #[must_use]
    pub const fn named(name: SystemRegisterName) -> Self {
        Self {
            name,
            op0: 0,
            op1: 0,
            crn: 0,
            crm: 0,
            op2: 0,
        }
    }

    /// An unnamed register identified by its encoding.
    #[must_use]
    pub const fn unknown(op0: u8, op1: u8, crn: u8, crm: u8, op2: u8) -> Self {
        Self {
            name: SystemRegisterName::Unknown,
            op0,
            op1,
            crn,
            crm,
            op2,
        }
    }
}

impl fmt::Display for SystemRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            SystemRegisterName::Unknown => write!(
                f,
                "S{}_{}_C{}_C{}_{}",
                self.op0, self.op1, self.crn, self.crm, self.op2
            ),
            SystemRegisterName::SpSel => f.write_str("SPSel"),
            SystemRegisterName::DaifSet => f.write_str("DAIFSet"),
            SystemRegisterName::DaifClr => f.write_str("DAIFClr"),
            SystemRegisterName::Uao => f.write_str("UAO"),
            SystemRegisterName::Pan => f.write_str("PAN"),
        }
    }
}

// ─── Shifts and extends ─────────────────────────────────────────────────

/// Shift applied to a register or immediate operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiftType {
    /// No shift.
    #[default]
    None,
    /// Logical shift left.
    Lsl,
    /// Logical shift right.
    Lsr,
    /// Arithmetic shift right.
    Asr,
    /// Rotate right.
    Ror,
}

impl ShiftType {
    /// Lower-case mnemonic; empty for [`ShiftType::None`].
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftType::None => "",
            ShiftType::Lsl => "lsl",
            ShiftType::Lsr => "lsr",
            ShiftType::Asr => "asr",
            ShiftType::Ror => "ror",
        }
    }
}

/// Shift modifier. Renders with its own leading `", "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shift {
    /// Shift operation.
    pub kind: ShiftType,
    /// Shift amount.
    pub count: u8,
}

impl Shift {
    /// Create a shift.
    #[must_use]
    pub const fn new(kind: ShiftType, count: u8) -> Self {
        Self { kind, count }
    }

    /// No shift.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(ShiftType::None, 0)
    }

    /// `lsl #count`.
    #[must_use]
    pub const fn lsl(count: u8) -> Self {
        Self::new(ShiftType::Lsl, count)
    }

    /// `lsr #count`.
    #[must_use]
    pub const fn lsr(count: u8) -> Self {
        Self::new(ShiftType::Lsr, count)
    }

    /// `asr #count`.
    #[must_use]
    pub const fn asr(count: u8) -> Self {
        Self::new(ShiftType::Asr, count)
    }

    /// `ror #count`.
    #[must_use]
    pub const fn ror(count: u8) -> Self {
        Self::new(ShiftType::Ror, count)
    }

    /// `true` when the shift leaves its operand unchanged.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.kind == ShiftType::None || self.count == 0
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == ShiftType::None {
            return Ok(());
        }
        write!(f, ", {} #0x{:x}", self.kind.as_str(), self.count)
    }
}

/// Register extension applied to an index or second source register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtendType {
    /// No extension.
    #[default]
    None,
    /// Zero-extend byte.
    Uxtb,
    /// Zero-extend halfword.
    Uxth,
    /// Zero-extend word.
    Uxtw,
    /// Zero-extend doubleword.
    Uxtx,
    /// Sign-extend byte.
    Sxtb,
    /// Sign-extend halfword.
    Sxth,
    /// Sign-extend word.
    Sxtw,
    /// Sign-extend doubleword.
    Sxtx,
    /// Plain left shift (the preferred spelling of UXTX/UXTW in some forms).
    Lsl,
}

impl ExtendType {
    /// Lower-case mnemonic; empty for [`ExtendType::None`].
    pub fn as_str(self) -> &'static str {
        match self {
            ExtendType::None => "",
            ExtendType::Uxtb => "uxtb",
            ExtendType::Uxth => "uxth",
            ExtendType::Uxtw => "uxtw",
            ExtendType::Uxtx => "uxtx",
            ExtendType::Sxtb => "sxtb",
            ExtendType::Sxth => "sxth",
            ExtendType::Sxtw => "sxtw",
            ExtendType::Sxtx => "sxtx",
            ExtendType::Lsl => "lsl",
        }
    }
}

/// Extend modifier. Renders with its own leading `", "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extend {
    /// Extension operation.
    pub kind: ExtendType,
    /// Left shift applied after extension.
    pub count: u8,
}

impl Extend {
    /// Create an extend.
    #[must_use]
    pub const fn new(kind: ExtendType, count: u8) -> Self {
        Self { kind, count }
    }

    /// No extension.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(ExtendType::None, 0)
    }
}

impl fmt::Display for Extend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ExtendType::None => return Ok(()),
            // `lsl #0` is the plain register form and prints nothing.
            ExtendType::Lsl if self.count == 0 => return Ok(()),
            kind => write!(f, ", {}", kind.as_str())?,
        }
        if self.count != 0 {
            write!(f, " #{}", self.count)?;
        }
        Ok(())
    }
}

// ─── Addressing modes ───────────────────────────────────────────────────

/// `[base, #offset]` addressing, with optional pre/post-index writeback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImmediateOffset {
    /// Base register.
    pub base: Register,
    /// Byte offset (rendered signed).
    pub offset: Immediate,
    /// Shift applied to the offset.
    pub shift: Shift,
    /// Base register is updated.
    pub writeback: bool,
    /// Update happens after the access.
    pub post_index: bool,
    /// Width of the accessed memory in bits.
    pub size: u8,
}

impl ImmediateOffset {
    /// Plain `[base, #offset]` access of `size` bits.
    #[must_use]
    pub const fn new(base: Register, offset: Immediate, size: u8) -> Self {
        Self {
            base,
            offset,
            shift: Shift::none(),
            writeback: false,
            post_index: false,
            size,
        }
    }

    /// Pre-indexed form: `[base, #offset]!`.
    #[must_use]
    pub fn pre_indexed(mut self) -> Self {
        self.writeback = true;
        self.post_index = false;
        self
    }

    /// Post-indexed form: `[base], #offset`.
    #[must_use]
    pub fn post_indexed(mut self) -> Self {
        self.writeback = true;
        self.post_index = true;
        self
    }
}

impl fmt::Display for ImmediateOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let post = self.writeback && self.post_index;
        write!(f, "[{}", self.base)?;
        if post {
            f.write_str("]")?;
        }
        if self.offset.value != 0 {
            write!(f, ", {}{}", self.offset.signed(), self.shift)?;
        }
        if !post {
            f.write_str("]")?;
            if self.writeback {
                f.write_str("!")?;
            }
        }
        Ok(())
    }
}

/// `[base, Xm{, extend}]` addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterOffset {
    /// Base register.
    pub base: Register,
    /// Index register.
    pub offset: Register,
    /// Extension applied to the index.
    pub extend: Extend,
    /// Base register is updated.
    pub writeback: bool,
    /// Update happens after the access.
    pub post_index: bool,
    /// Width of the accessed memory in bits.
    pub size: u8,
}

impl RegisterOffset {
    /// Plain `[base, index{, extend}]` access of `size` bits.
    #[must_use]
    pub const fn new(base: Register, offset: Register, extend: Extend, size: u8) -> Self {
        Self {
            base,
            offset,
            extend,
            writeback: false,
            post_index: false,
            size,
        }
    }
}

impl fmt::Display for RegisterOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let post = self.writeback && self.post_index;
        write!(f, "[{}", self.base)?;
        if post {
            f.write_str("]")?;
        }
        write!(f, ", {}{}", self.offset, self.extend)?;
        if !post {
            f.write_str("]")?;
            if self.writeback {
                f.write_str("!")?;
            }
        }
        Ok(())
    }
}

// ─── Operands ───────────────────────────────────────────────────────────

/// A decoded operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Immediate value.
    Immediate(Immediate),
    /// General-purpose register.
    Register(Register),
    /// System register or PSTATE field.
    SystemRegister(SystemRegister),
    /// Shift modifier of the preceding operand.
    Shift(Shift),
    /// Extend modifier of the preceding operand.
    Extend(Extend),
    /// Immediate-offset memory address.
    ImmediateOffset(ImmediateOffset),
    /// Register-offset memory address.
    RegisterOffset(RegisterOffset),
}

impl Operand {
    /// Variant tag, used in diagnostics.
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Immediate(_) => OperandKind::Immediate,
            Operand::Register(_) => OperandKind::Register,
            Operand::SystemRegister(_) => OperandKind::SystemRegister,
            Operand::Shift(_) => OperandKind::Shift,
            Operand::Extend(_) => OperandKind::Extend,
            Operand::ImmediateOffset(_) => OperandKind::ImmediateOffset,
            Operand::RegisterOffset(_) => OperandKind::RegisterOffset,
        }
    }

    /// `true` for modifiers that print their own leading separator.
    #[inline]
    pub fn is_modifier(&self) -> bool {
        matches!(self, Operand::Shift(_) | Operand::Extend(_))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Immediate(imm) => fmt::Display::fmt(imm, f),
            Operand::Register(reg) => fmt::Display::fmt(reg, f),
            Operand::SystemRegister(sysreg) => fmt::Display::fmt(sysreg, f),
            Operand::Shift(shift) => fmt::Display::fmt(shift, f),
            Operand::Extend(extend) => fmt::Display::fmt(extend, f),
            Operand::ImmediateOffset(addr) => fmt::Display::fmt(addr, f),
            Operand::RegisterOffset(addr) => fmt::Display::fmt(addr, f),
        }
    }
}

impl From<Immediate> for Operand {
    fn from(imm: Immediate) -> Self {
        Operand::Immediate(imm)
    }
}

impl From<Register> for Operand {
    fn from(reg: Register) -> Self {
        Operand::Register(reg)
    }
}

impl From<SystemRegister> for Operand {
    fn from(sysreg: SystemRegister) -> Self {
        Operand::SystemRegister(sysreg)
    }
}

impl From<Shift> for Operand {
    fn from(shift: Shift) -> Self {
        Operand::Shift(shift)
    }
}

impl From<Extend> for Operand {
    fn from(extend: Extend) -> Self {
        Operand::Extend(extend)
    }
}

impl From<ImmediateOffset> for Operand {
    fn from(addr: ImmediateOffset) -> Self {
        Operand::ImmediateOffset(addr)
    }
}

impl From<RegisterOffset> for Operand {
    fn from(addr: RegisterOffset) -> Self {
        Operand::RegisterOffset(addr)
    }
}

/// Operand variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandKind {
    /// [`Operand::Immediate`].
    Immediate,
    /// [`Operand::Register`].
    Register,
    /// [`Operand::SystemRegister`].
    SystemRegister,
    /// [`Operand::Shift`].
    Shift,
    /// [`Operand::Extend`].
    Extend,
    /// [`Operand::ImmediateOffset`].
    ImmediateOffset,
    /// [`Operand::RegisterOffset`].
    RegisterOffset,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperandKind::Immediate => "immediate",
            OperandKind::Register => "register",
            OperandKind::SystemRegister => "system register",
            OperandKind::Shift => "shift",
            OperandKind::Extend => "extend",
            OperandKind::ImmediateOffset => "immediate-offset address",
            OperandKind::RegisterOffset => "register-offset address",
        })
    }
}

// ─── OperandList: stack-allocated operand array ──────────────────────

/// Stack-allocated operand list (max 5 operands).
///
/// No A64 encoding the printer understands carries more than five operands
/// (`SYS #op1, Cn, Cm, #op2, Xt`).
#[derive(Clone, Copy)]
pub struct OperandList {
    items: [Operand; 5],
    len: u8,
}

impl OperandList {
    /// Maximum number of operands.
    pub const MAX_LEN: usize = 5;

    /// Creates a new empty operand list.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: [Operand::default(); Self::MAX_LEN],
            len: 0,
        }
    }

    /// Appends an operand to the list.
    ///
    /// # Panics
    /// Panics if the list is full (> 5 operands).
    #[inline]
    pub fn push(&mut self, op: Operand) {
        assert!(
            (self.len as usize) < Self::MAX_LEN,
            "OperandList overflow: max {} operands",
            Self::MAX_LEN
        );
        self.items[self.len as usize] = op;
        self.len += 1;
    }

    /// Returns the number of operands.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the active operands as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Operand] {
        &self.items[..self.len as usize]
    }
}

impl core::ops::Deref for OperandList {
    type Target = [Operand];
    #[inline]
    fn deref(&self) -> &[Operand] {
        self.as_slice()
    }
}

impl PartialEq for OperandList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for OperandList {}

impl PartialEq<Vec<Operand>> for OperandList {
    fn eq(&self, other: &Vec<Operand>) -> bool {
        self.as_slice() == &other[..]
    }
}

impl fmt::Debug for OperandList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice().iter()).finish()
    }
}

impl Default for OperandList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Operand>> for OperandList {
    fn from(v: Vec<Operand>) -> Self {
        Self::from(&v[..])
    }
}

impl From<&[Operand]> for OperandList {
    fn from(ops: &[Operand]) -> Self {
        assert!(
            ops.len() <= Self::MAX_LEN,
            "OperandList: max {} operands, got {}",
            Self::MAX_LEN,
            ops.len()
        );
        let mut list = Self::new();
        for op in ops {
            list.push(*op);
        }
        list
    }
}

impl<'a> IntoIterator for &'a OperandList {
    type Item = &'a Operand;
    type IntoIter = core::slice::Iter<'a, Operand>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OperandList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for op in self.as_slice() {
            seq.serialize_element(op)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OperandList {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v: Vec<Operand> = Vec::deserialize(deserializer)?;
        if v.len() > Self::MAX_LEN {
            return Err(serde::de::Error::custom(alloc::format!(
                "too many operands: {} > {}",
                v.len(),
                Self::MAX_LEN
            )));
        }
        Ok(Self::from(v))
    }
}

impl Default for Operand {
    /// Sentinel for unoccupied [`OperandList`] slots; never exposed.
    #[inline]
    fn default() -> Self {
        Operand::Immediate(Immediate::new(0, 0))
    }
}

// ─── Condition codes ────────────────────────────────────────────────────

/// A64 condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ConditionCode {
    /// Equal.
    Eq = 0x0,
    /// Not equal.
    Ne = 0x1,
    /// Carry set / unsigned higher or same.
    Cs = 0x2,
    /// Carry clear / unsigned lower.
    Cc = 0x3,
    /// Negative.
    Mi = 0x4,
    /// Positive or zero.
    Pl = 0x5,
    /// Overflow.
    Vs = 0x6,
    /// No overflow.
    Vc = 0x7,
    /// Unsigned higher.
    Hi = 0x8,
    /// Unsigned lower or same.
    Ls = 0x9,
    /// Signed greater or equal.
    Ge = 0xA,
    /// Signed less than.
    Lt = 0xB,
    /// Signed greater than.
    Gt = 0xC,
    /// Signed less or equal.
    Le = 0xD,
    /// Always.
    #[default]
    Al = 0xE,
    /// Always (encoding 0b1111); printed as `al`.
    Nv = 0xF,
}

impl ConditionCode {
    /// All sixteen codes in encoding order.
    pub const ALL: [ConditionCode; 16] = [
        ConditionCode::Eq,
        ConditionCode::Ne,
        ConditionCode::Cs,
        ConditionCode::Cc,
        ConditionCode::Mi,
        ConditionCode::Pl,
        ConditionCode::Vs,
        ConditionCode::Vc,
        ConditionCode::Hi,
        ConditionCode::Ls,
        ConditionCode::Ge,
        ConditionCode::Lt,
        ConditionCode::Gt,
        ConditionCode::Le,
        ConditionCode::Al,
        ConditionCode::Nv,
    ];

    /// Decode the low four bits of `bits`.
    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[usize::from(bits & 0xF)]
    }

    /// 4-bit encoding.
    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Lower-case mnemonic.
    pub fn as_str(self) -> &'static str {
        const NAMES: [&str; 16] = [
            "eq", "ne", "cs", "cc", "mi", "pl", "vs", "vc", "hi", "ls", "ge", "lt", "gt", "le",
            "al", "al",
        ];
        NAMES[usize::from(self.bits())]
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Instruction ────────────────────────────────────────────────────────

/// A fully decoded instruction, as produced by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Opcode tag.
    pub opcode: Opcode,
    /// Operands in architectural order (destination first).
    pub operands: OperandList,
    /// Flag-setting (`S`) variant.
    pub set_flags: bool,
    /// Condition code; meaningful for conditional families only.
    pub cc: ConditionCode,
}

impl Instruction {
    /// Instruction with the given operands, no flag setting and `cc = al`.
    ///
    /// # Panics
    /// Panics if more than [`OperandList::MAX_LEN`] operands are given.
    #[must_use]
    pub fn new(opcode: Opcode, operands: &[Operand]) -> Self {
        Self {
            opcode,
            operands: OperandList::from(operands),
            set_flags: false,
            cc: ConditionCode::Al,
        }
    }

    /// Mark the instruction as flag-setting.
    #[must_use]
    pub fn with_flags(mut self) -> Self {
        self.set_flags = true;
        self
    }

    /// Attach a condition code.
    #[must_use]
    pub fn with_cc(mut self, cc: ConditionCode) -> Self {
        self.cc = cc;
        self
    }
}
