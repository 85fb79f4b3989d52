//! Instruction Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs:
//! 1. **Issue:** Pulls the instruction from Decode unless Decode stalled last cycle, in which
//!    case a bubble enters Execute.
//! 2. **Computation:** ALU operations, effective addresses for `LW`/`SW`, and the link value
//!    (`pc + 2`) for `JAL`.

use crate::common::constants::PC_MASK;
use crate::core::Core;
use crate::core::pipeline::latches::StageRegister;
use crate::core::units::alu::Alu;
use crate::isa::Opcode;

/// Executes the execute stage of the pipeline.
///
/// Runs before Decode within a cycle, so `decode.stalled` still reflects the previous cycle.
///
/// # Arguments
///
/// * `core` - Mutable reference to the core state
pub fn execute_stage(core: &mut Core) {
    if !core.decode.valid || core.decode.stalled {
        core.pipeline.execute = StageRegister::bubble();
        return;
    }

    let mut ex = std::mem::take(&mut core.decode);
    ex.alu_result = match ex.inst.opcode {
        Opcode::Jal => (u32::from(ex.pc) + 2) & PC_MASK,
        op => Alu::execute(op, ex.rs_value, ex.rt_value),
    };
    core.pipeline.execute = ex;
}
