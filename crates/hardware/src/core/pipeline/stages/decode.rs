//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs:
//! 1. **Operand Read:** Reads `rs` and `rt` (and `rd`, the store data of `SW`) through the
//!    forwarding unit.
//! 2. **Hazard Handling:** A load-use hazard holds the instruction here for another cycle.
//! 3. **Control Flow:** Resolves branches and `JAL`; a taken redirect is armed at the end of
//!    the cycle, after the delay slot has been fetched.
//! 4. **Halt:** `HALT` stops further fetching and cancels the instruction already fetched.

use tracing::debug;

use crate::common::error::SimError;
use crate::core::Core;
use crate::core::pipeline::branch::{Operands, resolve_branch};
use crate::core::pipeline::hazards::forward_operand;
use crate::core::pipeline::latches::StageRegister;

/// Executes the decode stage of the pipeline.
///
/// # Arguments
///
/// * `core` - Mutable reference to the core state
///
/// # Errors
///
/// Propagates forwarding-unit inconsistencies and branch-resolution misuse.
pub fn decode_stage(core: &mut Core) -> Result<(), SimError> {
    if !core.decode.valid && core.fetch.valid {
        core.decode = std::mem::take(&mut core.fetch);
    }
    if !core.decode.valid {
        return Ok(());
    }

    let inst = core.decode.inst;
    let sources = [inst.rs, inst.rt, inst.rd];
    let needed = if inst.is_store() { 3 } else { 2 };

    let mut values = [0_u32; 3];
    let mut forwarded = 0;
    for (slot, reg) in sources.into_iter().take(needed).enumerate() {
        let Some(read) = forward_operand(reg, inst.imm, &core.pipeline, &core.regs)? else {
            core.decode.stalled = true;
            core.stats.decode_stall += 1;
            debug!(core = core.id, pc = core.decode.pc, reg, "ID stall on load-use hazard");
            return Ok(());
        };
        values[slot] = read.value;
        if read.source.is_some() {
            forwarded += 1;
        }
    }

    let [rs_value, rt_value, store_data] = values;
    let dec = &mut core.decode;
    dec.stalled = false;
    dec.rs_value = rs_value;
    dec.rt_value = rt_value;
    dec.store_data = store_data;
    core.stats.forwards += forwarded;

    if inst.is_control_flow() && !dec.branch_resolved {
        let redirect = resolve_branch(
            &inst,
            Operands {
                rs: rs_value,
                rt: rt_value,
            },
            dec.pc,
        )?;
        dec.branch_resolved = true;
        if redirect.taken {
            core.stats.branches_taken += 1;
            core.pending_redirect = Some(redirect);
            debug!(core = core.id, pc = dec.pc, target = redirect.next_pc, "ID branch taken");
        }
    } else if inst.is_halt() {
        core.halt_fetch = true;
        core.fetch = StageRegister::bubble();
        debug!(core = core.id, pc = dec.pc, "ID halt; fetch stopped");
    }
    Ok(())
}
