//! ALU bitwise logic operations.

use crate::isa::Opcode;

/// Executes a bitwise operation. Returns `0` for other opcodes.
pub const fn execute(op: Opcode, a: u32, b: u32) -> u32 {
    match op {
        Opcode::And => a & b,
        Opcode::Or => a | b,
        Opcode::Xor => a ^ b,
        _ => 0,
    }
}
