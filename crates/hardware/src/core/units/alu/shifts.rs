//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right arithmetic (SRA) and
//! shift-right logical (SRL). The shift amount is the low 5 bits of `rt`.

use crate::isa::Opcode;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The opcode to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (upper bits ignored).
///
/// # Returns
///
/// The shifted value, or `0` for non-shift opcodes.
pub const fn execute(op: Opcode, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match op {
        Opcode::Sll => a << shamt,
        Opcode::Sra => ((a as i32) >> shamt) as u32,
        Opcode::Srl => a >> shamt,
        _ => 0,
    }
}
