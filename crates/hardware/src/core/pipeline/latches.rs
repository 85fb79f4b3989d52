//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the state carried between the five stages
//! Fetch → Decode → Execute → Memory → Writeback:
//! 1. **Stage Register:** One latch per stage holding the in-flight instruction and its values.
//! 2. **Pipeline State:** The Execute/Memory/Writeback latches plus the register retiring this
//!    cycle; this is everything the forwarding unit inspects.

use crate::isa::Instruction;

/// Contents of one pipeline stage for the current cycle.
///
/// An invalid latch is a bubble; its other fields are meaningless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageRegister {
    /// The stage holds a real instruction this cycle.
    pub valid: bool,
    /// Instruction address.
    pub pc: u16,
    /// Encoded instruction word (kept for diagnostics).
    pub word: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// The instruction will commit a register write.
    pub reg_write: bool,
    /// Operand value of `rs`, captured in Decode.
    pub rs_value: u32,
    /// Operand value of `rt`, captured in Decode.
    pub rt_value: u32,
    /// Value to store for `SW` (operand `rd`), captured in Decode.
    pub store_data: u32,
    /// ALU result, link value for `JAL`, or address for `LW`/`SW`.
    pub alu_result: u32,
    /// Loaded word for `LW`, populated in Memory.
    pub mem_data: u32,
    /// Decode could not read its operands this cycle.
    pub stalled: bool,
    /// Control flow for this instruction has already been resolved.
    pub branch_resolved: bool,
}

impl StageRegister {
    /// An empty latch.
    pub fn bubble() -> Self {
        Self::default()
    }

    /// Latch holding a freshly fetched instruction.
    pub fn fetched(pc: u16, word: u32, inst: Instruction) -> Self {
        Self {
            valid: true,
            pc,
            word,
            inst,
            reg_write: inst.writes_register(),
            ..Self::default()
        }
    }

    /// The authoritative result of the instruction: `mem_data` for loads, `alu_result` otherwise.
    pub const fn value(&self) -> u32 {
        if self.inst.is_load() {
            self.mem_data
        } else {
            self.alu_result
        }
    }

    /// Whether the latch holds an instruction that will write a register.
    pub const fn writes(&self) -> bool {
        self.valid && self.reg_write
    }
}

/// Back-end pipeline state of one core.
///
/// `last_committed_register` is the register Writeback retires this cycle, or `None`
/// when Writeback holds no register-writing instruction. It must agree with the
/// effective destination of `writeback.inst`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineState {
    /// Execute stage latch (youngest).
    pub execute: StageRegister,
    /// Memory stage latch.
    pub memory: StageRegister,
    /// Writeback stage latch (oldest).
    pub writeback: StageRegister,
    /// Register index Writeback is committing this cycle.
    pub last_committed_register: Option<usize>,
}

impl PipelineState {
    /// Empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no back-end stage holds an instruction.
    pub const fn is_empty(&self) -> bool {
        !self.execute.valid && !self.memory.valid && !self.writeback.valid
    }
}
