//! Main Execution Loop.
//!
//! This module implements one clock cycle of a core. It performs the following:
//! 1. **Pipeline Coordination:** Runs Writeback, Memory, Execute, Decode and Fetch in that
//!    order, so every stage pulls the value its predecessor held last cycle.
//! 2. **End-of-Cycle Commit:** Logs the trace line, then applies the register write, arms the
//!    fetch redirect, counts the cycle and checks for halt.

use tracing::{debug, info};

use super::Core;
use crate::common::error::SimError;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::sim::trace::format_line;
use crate::soc::traits::DataPort;

impl Core {
    /// Advances the core by one clock cycle. A halted core does nothing.
    ///
    /// # Arguments
    ///
    /// * `port` - Data memory used by the Memory stage.
    ///
    /// # Errors
    ///
    /// Returns an undecodable fetch, a forwarding inconsistency or a branch misuse. The
    /// core state is then partially updated and the run should be abandoned.
    pub fn tick(&mut self, port: &mut dyn DataPort) -> Result<(), SimError> {
        if self.halted {
            return Ok(());
        }
        let decode_was_stalled = self.decode.stalled;

        wb_stage(self);
        mem_stage(self, port);
        execute_stage(self);
        decode_stage(self)?;
        fetch_stage(self, decode_was_stalled)?;

        self.end_cycle();
        Ok(())
    }

    fn end_cycle(&mut self) {
        if self.trace_enabled {
            let line = format_line(self.stats.cycles, self.stage_pcs(), self.regs.traced());
            self.trace.push(line);
        }

        if let Some((reg, val)) = self.pending_write.take() {
            self.regs.write(reg, val);
        }
        if let Some(redirect) = self.pending_redirect.take() {
            self.fetch_state.arm(redirect);
        }
        self.stats.cycles += 1;

        let wb = &self.pipeline.writeback;
        if wb.valid && wb.inst.is_halt() {
            self.halted = true;
            info!(core = self.id, cycles = self.stats.cycles, "core halted");
        } else {
            debug!(core = self.id, cycle = self.stats.cycles, "cycle complete");
        }
    }
}
