//! System-wide Constants.
//!
//! This module defines the architectural constants shared by every simulator component:
//! 1. **Register File:** Register count and the indices with special meaning.
//! 2. **Instruction Memory:** Per-core instruction memory depth and PC width.
//! 3. **Main Memory:** Word-addressed data memory geometry.
//! 4. **Instruction Encoding:** Field positions and masks of the 32-bit instruction word.

/// Number of general-purpose registers per core.
pub const NUM_REGISTERS: usize = 16;

/// Hard-wired zero register.
pub const ZERO_REG: usize = 0;

/// Immediate register: reads as the sign-extended immediate of the reading instruction.
pub const IMM_REG: usize = 1;

/// Link register written by `JAL` regardless of the decoded `rd` field.
pub const LINK_REG: usize = 15;

/// First register index included in register dumps and trace lines.
pub const FIRST_TRACED_REG: usize = 2;

/// Number of instruction words per core.
pub const IMEM_SIZE: usize = 1024;

/// Mask applied to branch targets and link values (10-bit program counter).
pub const PC_MASK: u32 = 0x3FF;

/// Number of words in main memory (2^21).
pub const MAIN_MEM_SIZE: usize = 1 << 21;

/// Mask applied to data addresses (21-bit word address).
pub const ADDR_MASK: u32 = (1 << 21) - 1;

/// Default number of simulated cores.
pub const DEFAULT_NUM_CORES: usize = 4;

/// Bit position of the opcode field (`[31:24]`).
pub const OPCODE_SHIFT: u32 = 24;
/// Bit position of the destination register field (`[23:20]`).
pub const RD_SHIFT: u32 = 20;
/// Bit position of the first source register field (`[19:16]`).
pub const RS_SHIFT: u32 = 16;
/// Bit position of the second source register field (`[15:12]`).
pub const RT_SHIFT: u32 = 12;

/// Mask for the 8-bit opcode field.
pub const OPCODE_MASK: u32 = 0xFF;
/// Mask for a 4-bit register field.
pub const REG_MASK: u32 = 0xF;
/// Mask for the 12-bit immediate field.
pub const IMM_MASK: u32 = 0xFFF;
/// Width of the immediate field in bits.
pub const IMM_BITS: u32 = 12;
