#![no_main]
use libfuzzer_sys::fuzz_target;

use a64_ual::{
    ConditionCode, Extend, ExtendType, Immediate, ImmediateOffset, Instruction, Opcode, Operand,
    OperandList, Register, RegisterName, RegisterOffset, Shift, ShiftType, SystemRegister,
};

/// Byte cursor that yields zeros once the input is exhausted.
struct Bytes<'a>(core::slice::Iter<'a, u8>);

impl Bytes<'_> {
    fn u8(&mut self) -> u8 {
        self.0.next().copied().unwrap_or(0)
    }

    fn u64(&mut self) -> u64 {
        (0..8).fold(0, |acc, _| (acc << 8) | u64::from(self.u8()))
    }

    fn register(&mut self) -> Register {
        let name = match self.u8() % 36 {
            31 => RegisterName::Xzr,
            32 => RegisterName::Sp,
            33 => RegisterName::Pc,
            n => RegisterName::X(n),
        };
        Register::new(name, self.u8())
    }

    fn immediate(&mut self) -> Immediate {
        Immediate::new(self.u64(), self.u8() % 72)
    }

    fn shift(&mut self) -> Shift {
        let kind = match self.u8() % 5 {
            0 => ShiftType::None,
            1 => ShiftType::Lsl,
            2 => ShiftType::Lsr,
            3 => ShiftType::Asr,
            _ => ShiftType::Ror,
        };
        Shift::new(kind, self.u8())
    }

    fn extend(&mut self) -> Extend {
        let kind = match self.u8() % 10 {
            0 => ExtendType::None,
            1 => ExtendType::Uxtb,
            2 => ExtendType::Uxth,
            3 => ExtendType::Uxtw,
            4 => ExtendType::Uxtx,
            5 => ExtendType::Sxtb,
            6 => ExtendType::Sxth,
            7 => ExtendType::Sxtw,
            8 => ExtendType::Sxtx,
            _ => ExtendType::Lsl,
        };
        Extend::new(kind, self.u8())
    }

    fn operand(&mut self) -> Operand {
        match self.u8() % 7 {
            0 => self.immediate().into(),
            1 => self.register().into(),
            2 => SystemRegister::unknown(self.u8(), self.u8(), self.u8(), self.u8(), self.u8())
                .into(),
            3 => self.shift().into(),
            4 => self.extend().into(),
            5 => {
                let mut addr = ImmediateOffset::new(self.register(), self.immediate(), self.u8());
                addr.shift = self.shift();
                addr.writeback = self.u8() & 1 == 1;
                addr.post_index = self.u8() & 1 == 1;
                addr.into()
            }
            _ => {
                let mut addr =
                    RegisterOffset::new(self.register(), self.register(), self.extend(), self.u8());
                addr.writeback = self.u8() & 1 == 1;
                addr.post_index = self.u8() & 1 == 1;
                addr.into()
            }
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut bytes = Bytes(data.iter());
    let raw = u16::from_le_bytes([bytes.u8(), bytes.u8()]);
    let opcode = Opcode::ALL[usize::from(raw) % Opcode::ALL.len()];

    let mut operands = OperandList::new();
    for _ in 0..usize::from(bytes.u8()) % (OperandList::MAX_LEN + 1) {
        operands.push(bytes.operand());
    }
    let insn = Instruction {
        opcode,
        operands,
        set_flags: bytes.u8() & 1 == 1,
        cc: ConditionCode::from_bits(bytes.u8()),
    };

    // Malformed layouts must come back as errors, never as panics.
    if let Ok(text) = a64_ual::try_render(&insn) {
        assert!(!text.is_empty());
    }
});
