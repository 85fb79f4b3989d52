//! Opcode Definitions.
//!
//! The 8-bit opcode field selects one of nineteen operations. Values not listed in
//! [`Opcode`] are encoding errors and are rejected by [`Opcode::try_from`].

use crate::common::error::DecodeError;

/// Operation selected by the opcode field of an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Opcode {
    /// `R[rd] = R[rs] + R[rt]`
    #[default]
    Add = 0,
    /// `R[rd] = R[rs] - R[rt]`
    Sub = 1,
    /// `R[rd] = R[rs] & R[rt]`
    And = 2,
    /// `R[rd] = R[rs] | R[rt]`
    Or = 3,
    /// `R[rd] = R[rs] ^ R[rt]`
    Xor = 4,
    /// `R[rd] = R[rs] * R[rt]`
    Mul = 5,
    /// `R[rd] = R[rs] << R[rt]`
    Sll = 6,
    /// Arithmetic shift right.
    Sra = 7,
    /// Logical shift right.
    Srl = 8,
    /// Branch if `R[rs] == R[rt]`.
    Beq = 9,
    /// Branch if `R[rs] != R[rt]`.
    Bne = 10,
    /// Branch if `R[rs] < R[rt]` (signed).
    Blt = 11,
    /// Branch if `R[rs] > R[rt]` (signed).
    Bgt = 12,
    /// Branch if `R[rs] <= R[rt]` (signed).
    Ble = 13,
    /// Branch if `R[rs] >= R[rt]` (signed).
    Bge = 14,
    /// Jump and link: `R15 = pc + 2`, jump to target.
    Jal = 15,
    /// `R[rd] = MEM[R[rs] + R[rt]]`
    Lw = 16,
    /// `MEM[R[rs] + R[rt]] = R[rd]`
    Sw = 17,
    /// Stop the core once this instruction retires.
    Halt = 20,
}

impl Opcode {
    /// Every valid opcode in encoding order.
    pub const ALL: [Self; 19] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Mul,
        Self::Sll,
        Self::Sra,
        Self::Srl,
        Self::Beq,
        Self::Bne,
        Self::Blt,
        Self::Bgt,
        Self::Ble,
        Self::Bge,
        Self::Jal,
        Self::Lw,
        Self::Sw,
        Self::Halt,
    ];

    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Mul => "mul",
            Self::Sll => "sll",
            Self::Sra => "sra",
            Self::Srl => "srl",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bgt => "bgt",
            Self::Ble => "ble",
            Self::Bge => "bge",
            Self::Jal => "jal",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Halt => "halt",
        }
    }

    /// Conditional branches (`BEQ` through `BGE`).
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Self::Beq | Self::Bne | Self::Blt | Self::Bgt | Self::Ble | Self::Bge
        )
    }

    /// Opcodes that produce a register write.
    pub const fn writes_register(self) -> bool {
        !self.is_branch() && !matches!(self, Self::Sw | Self::Halt)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Maps a raw opcode field onto an [`Opcode`], returning the raw value on failure.
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| *op as u8 == raw)
            .ok_or(raw)
    }
}

/// Decodes the opcode field of `word`.
pub fn decode_opcode(word: u32) -> Result<Opcode, DecodeError> {
    let raw = (word >> crate::common::constants::OPCODE_SHIFT) as u8;
    Opcode::try_from(raw).map_err(|opcode| DecodeError::UnknownOpcode { word, opcode })
}
