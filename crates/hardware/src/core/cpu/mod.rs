//! CPU Core Definition and Initialization.
//!
//! This module defines the `Core` structure, the container for everything one
//! processor owns. It coordinates the following:
//! 1. **State Management:** Register file, program counter and instruction memory.
//! 2. **Pipeline Control:** Front latches (fetch, decode), the back-end [`PipelineState`]
//!    and the fetch-address state machine.
//! 3. **End-of-Cycle Effects:** The register write and fetch redirect decided during the
//!    cycle, applied only once every stage has run.
//! 4. **Observability:** Per-cycle trace lines and statistics.

/// Per-cycle execution and end-of-cycle commit.
pub mod execution;

use crate::common::RegisterFile;
use crate::common::constants::IMEM_SIZE;
use crate::core::pipeline::branch::{FetchRedirect, FetchState};
use crate::core::pipeline::latches::{PipelineState, StageRegister};
use crate::stats::CoreStats;

/// One processor core.
///
/// Cores share nothing but the data memory passed to [`Core::tick`].
#[derive(Clone, Debug)]
pub struct Core {
    /// Core index.
    pub id: usize,
    /// Sequential program counter (address of the next instruction on the fall-through path).
    pub pc: u16,
    /// Committed registers.
    pub regs: RegisterFile,
    /// Instruction memory, always `IMEM_SIZE` words.
    pub imem: Vec<u32>,

    /// IF latch.
    pub fetch: StageRegister,
    /// ID latch.
    pub decode: StageRegister,
    /// EX, MEM and WB latches plus the commit record.
    pub pipeline: PipelineState,
    /// Fetch-address state machine.
    pub fetch_state: FetchState,

    /// Taken branch resolved this cycle, armed at the end of the cycle.
    pub pending_redirect: Option<FetchRedirect>,
    /// Register write retiring this cycle, applied at the end of the cycle.
    pub pending_write: Option<(usize, u32)>,

    /// A `HALT` reached Writeback; the core no longer ticks.
    pub halted: bool,
    /// A `HALT` reached Decode; nothing more is fetched.
    pub halt_fetch: bool,

    /// Record trace lines.
    pub trace_enabled: bool,
    /// One line per executed cycle.
    pub trace: Vec<String>,
    /// Performance counters.
    pub stats: CoreStats,
}

impl Core {
    /// Creates a core with `program` loaded at address 0.
    ///
    /// # Arguments
    ///
    /// * `id` - Core index.
    /// * `program` - Instruction words; anything past `IMEM_SIZE` is ignored.
    /// * `trace_enabled` - Whether to record per-cycle trace lines.
    pub fn new(id: usize, program: &[u32], trace_enabled: bool) -> Self {
        let mut imem = vec![0; IMEM_SIZE];
        let n = program.len().min(IMEM_SIZE);
        imem[..n].copy_from_slice(&program[..n]);
        Self {
            id,
            pc: 0,
            regs: RegisterFile::new(),
            imem,
            fetch: StageRegister::bubble(),
            decode: StageRegister::bubble(),
            pipeline: PipelineState::new(),
            fetch_state: FetchState::Sequential,
            pending_redirect: None,
            pending_write: None,
            halted: false,
            halt_fetch: false,
            trace_enabled,
            trace: Vec::new(),
            stats: CoreStats::default(),
        }
    }

    /// Address the next fetch would read.
    pub const fn next_fetch_pc(&self) -> u16 {
        self.fetch_state.next_fetch_pc(self.pc)
    }

    /// `true` while the core can still fetch new instructions.
    pub const fn can_fetch(&self) -> bool {
        !self.halted && !self.halt_fetch && (self.next_fetch_pc() as usize) < IMEM_SIZE
    }

    /// `true` when no stage holds an instruction.
    pub const fn is_drained(&self) -> bool {
        !self.fetch.valid && !self.decode.valid && self.pipeline.is_empty()
    }

    /// PCs shown for IF, ID, EX, MEM and WB in the trace; `None` renders as `---`.
    ///
    /// An empty fetch latch shows the pending fetch address while the core can still fetch.
    pub fn stage_pcs(&self) -> [Option<u16>; 5] {
        let latch_pc = |latch: &StageRegister| latch.valid.then_some(latch.pc);
        let fetch = latch_pc(&self.fetch).or_else(|| self.can_fetch().then(|| self.next_fetch_pc()));
        [
            fetch,
            latch_pc(&self.decode),
            latch_pc(&self.pipeline.execute),
            latch_pc(&self.pipeline.memory),
            latch_pc(&self.pipeline.writeback),
        ]
    }
}
