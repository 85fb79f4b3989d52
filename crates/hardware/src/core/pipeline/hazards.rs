//! Data Hazard Detection and Forwarding.
//!
//! This module decides, for every register read, which value the reader should observe. It provides:
//! 1. **Operand Forwarding:** Bypasses the register file with the youngest in-flight write.
//! 2. **Hazard Detection:** Reports a load-use hazard as a stall instead of a value.
//! 3. **Consistency Checking:** Rejects a Writeback stage whose recorded commit disagrees with
//!    its own instruction.
//!
//! Stages are inspected youngest first (Execute, Memory, Writeback) and the first
//! matching writer wins, so a younger write to the same register always supersedes
//! an older one without comparing instruction ages.

use tracing::trace;

use crate::common::constants::{LINK_REG, ZERO_REG};
use crate::common::error::HazardError;
use crate::common::reg::{RegisterFile, is_writable};
use crate::core::pipeline::latches::{PipelineState, StageRegister};
use crate::isa::{Instruction, Opcode};

/// Outcome of a forwarding query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForwardResult {
    /// The in-flight value the reader must use.
    Value(u32),
    /// A load in Execute targets the register; the reader must stall and retry.
    StallRequired,
    /// No in-flight write; read the committed register file.
    NotFound,
}

/// Back-end stage that can supply a forwarded value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Execute stage.
    Execute,
    /// Memory stage.
    Memory,
    /// Writeback stage.
    Writeback,
}

/// One entry of the forwarding priority chain.
struct StageDescriptor {
    stage: Stage,
    latch: fn(&PipelineState) -> &StageRegister,
    destination: fn(&PipelineState) -> Result<Option<usize>, HazardError>,
}

/// Forwarding sources, youngest first.
const FORWARDING_PRIORITY: [StageDescriptor; 3] = [
    StageDescriptor {
        stage: Stage::Execute,
        latch: execute_latch,
        destination: execute_destination,
    },
    StageDescriptor {
        stage: Stage::Memory,
        latch: memory_latch,
        destination: memory_destination,
    },
    StageDescriptor {
        stage: Stage::Writeback,
        latch: writeback_latch,
        destination: writeback_destination,
    },
];

/// Register an instruction actually writes: `R15` for `JAL`, the decoded `rd` otherwise.
pub const fn effective_destination(inst: &Instruction) -> usize {
    match inst.opcode {
        Opcode::Jal => LINK_REG,
        _ => inst.rd,
    }
}

const fn execute_latch(state: &PipelineState) -> &StageRegister {
    &state.execute
}

const fn memory_latch(state: &PipelineState) -> &StageRegister {
    &state.memory
}

const fn writeback_latch(state: &PipelineState) -> &StageRegister {
    &state.writeback
}

fn latch_destination(latch: &StageRegister) -> Option<usize> {
    latch
        .writes()
        .then(|| effective_destination(&latch.inst))
}

#[allow(clippy::unnecessary_wraps)]
fn execute_destination(state: &PipelineState) -> Result<Option<usize>, HazardError> {
    Ok(latch_destination(&state.execute))
}

#[allow(clippy::unnecessary_wraps)]
fn memory_destination(state: &PipelineState) -> Result<Option<usize>, HazardError> {
    Ok(latch_destination(&state.memory))
}

/// Writeback's destination is the core's recorded commit, cross-checked against the latch.
fn writeback_destination(state: &PipelineState) -> Result<Option<usize>, HazardError> {
    let decoded = latch_destination(&state.writeback);
    if decoded == state.last_committed_register {
        Ok(decoded)
    } else {
        Err(HazardError::WritebackDestinationMismatch {
            recorded: state.last_committed_register,
            decoded,
            pc: state.writeback.pc,
        })
    }
}

/// Resolves a read of `reg` and names the stage that supplied it, if any.
///
/// This is the single place the `R0` rule and the stage priority are applied.
fn lookup(
    reg: usize,
    state: &PipelineState,
) -> Result<(Option<Stage>, ForwardResult), HazardError> {
    if reg == ZERO_REG {
        return Ok((None, ForwardResult::Value(0)));
    }
    for desc in &FORWARDING_PRIORITY {
        let Some(dest) = (desc.destination)(state)? else {
            continue;
        };
        if dest != reg || !is_writable(dest) {
            continue;
        }

        let latch = (desc.latch)(state);
        if desc.stage == Stage::Execute && latch.inst.is_load() {
            trace!(reg, pc = latch.pc, "load-use hazard: load still in execute");
            return Ok((Some(desc.stage), ForwardResult::StallRequired));
        }
        return Ok((Some(desc.stage), ForwardResult::Value(latch.value())));
    }
    Ok((None, ForwardResult::NotFound))
}

/// Resolves the value a read of `reg` must observe this cycle.
///
/// `R0` short-circuits to `Value(0)` before any stage is inspected. A load still in
/// Execute yields [`ForwardResult::StallRequired`], even when older stages also write
/// the register. `R1` is never a write destination and therefore always resolves to
/// [`ForwardResult::NotFound`].
///
/// # Arguments
///
/// * `reg` - Register index being read (0-15).
/// * `state` - The reading core's back-end pipeline state.
///
/// # Errors
///
/// Returns [`HazardError::WritebackDestinationMismatch`] when the Writeback stage is
/// consulted and its recorded commit register disagrees with its instruction.
pub fn resolve(reg: usize, state: &PipelineState) -> Result<ForwardResult, HazardError> {
    lookup(reg, state).map(|(_, result)| result)
}

/// An operand value ready for use, with the stage that supplied it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperandRead {
    /// Value to use.
    pub value: u32,
    /// Forwarding stage, or `None` when read from the register file.
    pub source: Option<Stage>,
}

/// Reads an operand for the instruction in Decode, forwarding where possible.
///
/// # Arguments
///
/// * `reg` - Source register index.
/// * `imm` - Immediate of the reading instruction (value of `R1`).
/// * `state` - Back-end pipeline state.
/// * `regs` - Committed register file, consulted when nothing is in flight.
///
/// # Returns
///
/// `Ok(None)` when the read must stall for a load-use hazard.
pub fn forward_operand(
    reg: usize,
    imm: i32,
    state: &PipelineState,
    regs: &RegisterFile,
) -> Result<Option<OperandRead>, HazardError> {
    let (source, result) = lookup(reg, state)?;
    let value = match result {
        ForwardResult::StallRequired => return Ok(None),
        ForwardResult::Value(value) => value,
        ForwardResult::NotFound => regs.read(reg, imm),
    };
    if let Some(stage) = source {
        trace!(reg, ?stage, value, "forwarded operand");
    }
    Ok(Some(OperandRead { value, source }))
}
