//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. It performs:
//! 1. **Loads:** `LW` reads the word at its computed address into `mem_data`, from where it
//!    can be forwarded.
//! 2. **Stores:** `SW` writes the store data captured in Decode.
//!
//! Every access completes within the cycle.

use tracing::debug;

use crate::core::Core;
use crate::soc::traits::DataPort;

/// Executes the memory stage of the pipeline.
///
/// # Arguments
///
/// * `core` - Mutable reference to the core state
/// * `port` - Data memory the access goes to
pub fn mem_stage(core: &mut Core, port: &mut dyn DataPort) {
    core.pipeline.memory = std::mem::take(&mut core.pipeline.execute);

    let mem = &mut core.pipeline.memory;
    if !mem.valid {
        return;
    }

    let addr = mem.alu_result;
    if mem.inst.is_load() {
        mem.mem_data = port.read_word(addr);
        debug!(core = core.id, pc = mem.pc, addr, data = mem.mem_data, "MEM load");
    } else if mem.inst.is_store() {
        port.write_word(addr, mem.store_data);
        debug!(core = core.id, pc = mem.pc, addr, data = mem.store_data, "MEM store");
    }
}
