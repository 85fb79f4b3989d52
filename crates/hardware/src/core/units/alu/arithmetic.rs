//! ALU arithmetic operations.
//!
//! Addition, subtraction and multiplication on 32-bit values, all wrapping.
//! `LW` and `SW` reuse the adder for their effective address.

use crate::isa::Opcode;

/// Executes an arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: Opcode, a: u32, b: u32) -> u32 {
    match op {
        Opcode::Add | Opcode::Lw | Opcode::Sw => a.wrapping_add(b),
        Opcode::Sub => a.wrapping_sub(b),
        Opcode::Mul => a.wrapping_mul(b),
        _ => 0,
    }
}
