//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. All
//! operands and results are 32-bit register values; arithmetic wraps on
//! overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul
//! - [`logic`]:      And, Or, Xor
//! - [`shifts`]:     Sll, Sra, Srl

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor).
pub mod logic;

/// Shift operations (sll, sra, srl).
pub mod shifts;

use crate::isa::Opcode;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The opcode to perform.
    /// * `a`  - Value of `rs`.
    /// * `b`  - Value of `rt`, also used as the shift amount.
    ///
    /// # Returns
    ///
    /// The 32-bit result. Loads and stores produce the effective address
    /// `a + b`; opcodes without an ALU result (branches, `JAL`, `HALT`) return 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipesim_core::core::units::alu::Alu;
    /// use pipesim_core::isa::Opcode;
    ///
    /// assert_eq!(Alu::execute(Opcode::Add, 40, 2), 42);
    /// assert_eq!(Alu::execute(Opcode::Sub, 0, 1), 0xFFFF_FFFF);
    /// assert_eq!(Alu::execute(Opcode::Sra, 0x8000_0000, 4), 0xF800_0000);
    /// ```
    pub const fn execute(op: Opcode, a: u32, b: u32) -> u32 {
        match op {
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Lw | Opcode::Sw => {
                arithmetic::execute(op, a, b)
            }
            Opcode::And | Opcode::Or | Opcode::Xor => logic::execute(op, a, b),
            Opcode::Sll | Opcode::Sra | Opcode::Srl => shifts::execute(op, a, b),
            _ => 0,
        }
    }
}
