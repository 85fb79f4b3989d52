//! Simulator: owns every core and the memory they share.
//!
//! Cores are stepped in index order within a cycle against the shared main memory,
//! so stores by a lower-numbered core are visible to higher-numbered cores in the
//! same cycle. The run ends when every core has halted or the cycle limit is hit.

use tracing::{info, warn};

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Core;
use crate::soc::memory::MainMemory;

/// Top-level simulator: the cores plus shared main memory.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Cores, indexed by id.
    pub cores: Vec<Core>,
    /// Shared data memory.
    pub memory: MainMemory,
    /// Cycles stepped so far.
    pub cycle: u64,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator with one core per program.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration.
    /// * `programs` - Instruction memory image of each core.
    /// * `memin` - Initial data memory image.
    ///
    /// # Errors
    ///
    /// [`SimError::ProgramCount`] unless exactly `config.general.num_cores` programs are given.
    /// [`SimError::Config`] when the configuration fails [`Config::validate`].
    pub fn new(config: &Config, programs: &[Vec<u32>], memin: &[u32]) -> Result<Self, SimError> {
        config.validate()?;
        if programs.len() != config.general.num_cores {
            return Err(SimError::ProgramCount {
                expected: config.general.num_cores,
                found: programs.len(),
            });
        }

        let cores = programs
            .iter()
            .enumerate()
            .map(|(id, program)| Core::new(id, program, config.general.trace))
            .collect();
        let mut memory = MainMemory::new(config.memory.main_mem_words);
        memory.load(memin);

        Ok(Self {
            cores,
            memory,
            cycle: 0,
            max_cycles: config.general.max_cycles,
        })
    }

    /// Advances every core by one clock cycle.
    ///
    /// # Errors
    ///
    /// The first core error, tagged with the core index.
    pub fn tick(&mut self) -> Result<(), SimError> {
        for core in &mut self.cores {
            core.tick(&mut self.memory)
                .map_err(|e| e.on_core(core.id))?;
        }
        self.cycle += 1;
        Ok(())
    }

    /// `true` once every core has halted.
    pub fn all_halted(&self) -> bool {
        self.cores.iter().all(|core| core.halted)
    }

    /// Runs until every core halts or the cycle limit is reached.
    ///
    /// # Returns
    ///
    /// The number of cycles simulated.
    pub fn run(&mut self) -> Result<u64, SimError> {
        info!(cores = self.cores.len(), max_cycles = self.max_cycles, "simulation started");
        while !self.all_halted() {
            if self.cycle >= self.max_cycles {
                warn!(cycles = self.cycle, "cycle limit reached before all cores halted");
                break;
            }
            self.tick()?;
        }
        info!(cycles = self.cycle, "simulation complete");
        Ok(self.cycle)
    }
}
