//! Writeback (WB) Stage.
//!
//! The final stage of the pipeline. It retires the instruction leaving Memory:
//! 1. **Commit Record:** Sets `last_committed_register` to the retiring destination.
//! 2. **Register Write:** Queues the write; it lands in the register file at the end of
//!    the cycle, so it is still forwarded from this stage to Decode this cycle.
//! 3. **Retirement:** Counts the instruction. A `HALT` here stops the core at the end of the cycle.

use tracing::debug;

use crate::common::reg::is_writable;
use crate::core::Core;
use crate::core::pipeline::hazards::effective_destination;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `core` - Mutable reference to the core state
pub fn wb_stage(core: &mut Core) {
    core.pipeline.last_committed_register = None;
    core.pending_write = None;
    core.pipeline.writeback = std::mem::take(&mut core.pipeline.memory);

    let wb = core.pipeline.writeback;
    if !wb.valid {
        return;
    }

    if wb.writes() {
        let dest = effective_destination(&wb.inst);
        core.pipeline.last_committed_register = Some(dest);
        if is_writable(dest) {
            core.pending_write = Some((dest, wb.value()));
        }
    }

    core.stats.instructions += 1;
    if wb.inst.is_load() {
        core.stats.loads += 1;
    } else if wb.inst.is_store() {
        core.stats.stores += 1;
    }

    debug!(core = core.id, pc = wb.pc, inst = %wb.inst, "WB retire");
}
