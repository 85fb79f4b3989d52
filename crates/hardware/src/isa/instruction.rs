//! Instruction encoding and decoding.
//!
//! Instructions are fixed 32-bit words laid out as `[opcode:8][rd:4][rs:4][rt:4][imm:12]`.
//! The immediate is sign-extended to 32 bits on decode and doubles as the absolute
//! target of branches and `JAL`.

use std::fmt;

use crate::common::constants::{
    IMM_BITS, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT,
};
use crate::common::error::DecodeError;
use crate::isa::opcodes::{Opcode, decode_opcode};

/// Decoded instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Operation.
    pub opcode: Opcode,
    /// Destination register (data source for `SW`).
    pub rd: usize,
    /// First source register.
    pub rs: usize,
    /// Second source register.
    pub rt: usize,
    /// Sign-extended 12-bit immediate / branch target.
    pub imm: i32,
}

impl Instruction {
    /// Builds an instruction from its fields.
    pub const fn new(opcode: Opcode, rd: usize, rs: usize, rt: usize, imm: i32) -> Self {
        Self {
            opcode,
            rd,
            rs,
            rt,
            imm,
        }
    }

    /// Decodes a 32-bit instruction word.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownOpcode`] when the opcode field names no instruction.
    pub fn decode(word: u32) -> Result<Self, DecodeError> {
        let opcode = decode_opcode(word)?;
        let shift = 32 - IMM_BITS;
        let imm = (((word & IMM_MASK) << shift) as i32) >> shift;
        Ok(Self {
            opcode,
            rd: ((word >> RD_SHIFT) & REG_MASK) as usize,
            rs: ((word >> RS_SHIFT) & REG_MASK) as usize,
            rt: ((word >> RT_SHIFT) & REG_MASK) as usize,
            imm,
        })
    }

    /// Encodes the instruction back into a 32-bit word. Only the low 12 bits of `imm` are kept.
    pub const fn encode(&self) -> u32 {
        ((self.opcode as u32 & OPCODE_MASK) << OPCODE_SHIFT)
            | ((self.rd as u32 & REG_MASK) << RD_SHIFT)
            | ((self.rs as u32 & REG_MASK) << RS_SHIFT)
            | ((self.rt as u32 & REG_MASK) << RT_SHIFT)
            | (self.imm as u32 & IMM_MASK)
    }

    /// Conditional branch.
    pub const fn is_branch(&self) -> bool {
        self.opcode.is_branch()
    }

    /// Conditional branch or `JAL`.
    pub const fn is_control_flow(&self) -> bool {
        self.opcode.is_branch() || matches!(self.opcode, Opcode::Jal)
    }

    /// `LW`.
    pub const fn is_load(&self) -> bool {
        matches!(self.opcode, Opcode::Lw)
    }

    /// `SW`.
    pub const fn is_store(&self) -> bool {
        matches!(self.opcode, Opcode::Sw)
    }

    /// `HALT`.
    pub const fn is_halt(&self) -> bool {
        matches!(self.opcode, Opcode::Halt)
    }

    /// Whether the instruction will commit a register write.
    pub const fn writes_register(&self) -> bool {
        self.opcode.writes_register()
    }
}

/// Assembler-style register name: `$zero`, `$imm`, or `$rN`.
pub fn reg_name(idx: usize) -> String {
    match idx {
        0 => "$zero".to_string(),
        1 => "$imm".to_string(),
        n => format!("$r{n}"),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}",
            self.opcode.mnemonic(),
            reg_name(self.rd),
            reg_name(self.rs),
            reg_name(self.rt),
            self.imm
        )
    }
}
