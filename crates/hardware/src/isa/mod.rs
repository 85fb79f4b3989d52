//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the fixed-width instruction format and the
//! disassembler.

/// Instruction disassembler for listings and diagnostics.
pub mod disasm;

/// Instruction encoding, decoding and classification.
pub mod instruction;

/// Opcode table.
pub mod opcodes;

pub use instruction::Instruction;
pub use opcodes::Opcode;
