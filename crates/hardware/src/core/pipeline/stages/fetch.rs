//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the pipeline. It is responsible for
//! reading the next instruction word from instruction memory and decoding it
//! into the fetch latch. The fetch address comes from the core's [`FetchState`]:
//! the program counter, or a pending branch target once the delay slot has been fetched.
//!
//! [`FetchState`]: crate::core::pipeline::branch::FetchState

use tracing::trace;

use crate::common::constants::IMEM_SIZE;
use crate::common::error::DecodeError;
use crate::core::Core;
use crate::core::pipeline::latches::StageRegister;
use crate::isa::Instruction;

/// Executes the instruction fetch stage of the pipeline.
///
/// Nothing is fetched when the core is halting, the fetch latch is still occupied, Decode
/// stalled last cycle, or the fetch address is past the end of instruction memory.
///
/// # Arguments
///
/// * `core` - Mutable reference to the core state
/// * `decode_was_stalled` - Decode's stall flag from the previous cycle
///
/// # Errors
///
/// Returns [`DecodeError`] when the fetched word has no valid opcode.
pub fn fetch_stage(core: &mut Core, decode_was_stalled: bool) -> Result<(), DecodeError> {
    if core.halted || core.halt_fetch || decode_was_stalled || core.fetch.valid {
        return Ok(());
    }
    let addr = core.next_fetch_pc();
    if usize::from(addr) >= IMEM_SIZE {
        return Ok(());
    }

    let addr = core.fetch_state.consume(core.pc);
    let word = core.imem.get(usize::from(addr)).copied().unwrap_or(0);
    let inst = Instruction::decode(word)?;
    core.fetch = StageRegister::fetched(addr, word, inst);
    core.pc = addr + 1;

    trace!(core = core.id, pc = addr, word, "IF fetch");
    Ok(())
}
