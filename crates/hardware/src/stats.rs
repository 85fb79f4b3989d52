//! Per-core statistics collection and reporting.
//!
//! This module tracks the counters each core accumulates while it runs. It provides:
//! 1. **Cycle and IPC:** Cycles executed, retired instructions and the derived IPC.
//! 2. **Hazards:** Decode stalls and operands satisfied by forwarding.
//! 3. **Control Flow:** Taken branches and jumps.
//! 4. **Memory:** Retired loads and stores.

/// Counters for one core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoreStats {
    /// Cycles the core executed before halting.
    pub cycles: u64,
    /// Instructions that reached Writeback.
    pub instructions: u64,
    /// Cycles Decode spent stalled on a load-use hazard.
    pub decode_stall: u64,
    /// Branches and jumps that redirected fetch.
    pub branches_taken: u64,
    /// Operand reads satisfied from an in-flight stage instead of the register file.
    pub forwards: u64,
    /// Retired `LW` instructions.
    pub loads: u64,
    /// Retired `SW` instructions.
    pub stores: u64,
}

impl CoreStats {
    /// Instructions per cycle, or 0 before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions as f64 / self.cycles as f64
        }
    }

    /// Renders the `stats` output file: one `name value` pair per line.
    pub fn report(&self) -> String {
        [
            ("cycles", self.cycles),
            ("instructions", self.instructions),
            ("decode_stall", self.decode_stall),
            ("branches_taken", self.branches_taken),
            ("forwards", self.forwards),
        ]
        .iter()
        .map(|(name, value)| format!("{name} {value}\n"))
        .collect()
    }

    /// Prints a human-readable summary for core `id` to stdout.
    pub fn print(&self, id: usize) {
        println!("==========================================================");
        println!("CORE {id}");
        println!("----------------------------------------------------------");
        println!("  cycles                 {}", self.cycles);
        println!("  instructions           {}", self.instructions);
        println!("  ipc                    {:.4}", self.ipc());
        println!("  loads                  {}", self.loads);
        println!("  stores                 {}", self.stores);
        println!("  branches_taken         {}", self.branches_taken);
        println!("  decode_stall           {}", self.decode_stall);
        println!("  forwards               {}", self.forwards);
    }
}
