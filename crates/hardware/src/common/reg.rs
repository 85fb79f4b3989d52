//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct holding the committed register state of one core.
//! It enforces the register conventions of the ISA:
//! 1. **Zero Register:** `R0` always reads as zero and ignores writes.
//! 2. **Immediate Register:** `R1` reads as the immediate of the reading instruction and ignores writes.
//! 3. **Observability:** Dumping the traced registers (`R2`-`R15`) for output files.

use crate::common::constants::{FIRST_TRACED_REG, IMM_REG, NUM_REGISTERS, ZERO_REG};

/// Returns `true` if `idx` names a register that can hold a written value.
///
/// `R0` and `R1` are never written; every other index in range is.
#[inline]
pub const fn is_writable(idx: usize) -> bool {
    idx > IMM_REG && idx < NUM_REGISTERS
}

/// Committed register state of a single core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with all registers cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register as seen by an instruction carrying immediate `imm`.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `imm` - Sign-extended immediate of the reading instruction, returned for `R1`.
    ///
    /// # Returns
    ///
    /// The register value; `R0` and out-of-range indices read as 0.
    pub fn read(&self, idx: usize, imm: i32) -> u32 {
        match idx {
            ZERO_REG => 0,
            IMM_REG => imm as u32,
            _ => self.regs.get(idx).copied().unwrap_or(0),
        }
    }

    /// Writes a register. Writes to `R0`, `R1` or out-of-range indices are discarded.
    pub fn write(&mut self, idx: usize, val: u32) {
        if is_writable(idx) {
            self.regs[idx] = val;
        }
    }

    /// Returns the traced registers `R2`-`R15` in index order.
    pub fn traced(&self) -> &[u32] {
        &self.regs[FIRST_TRACED_REG..]
    }
}
