//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline values (four cores, 2^21-word memory, 100 000-cycle limit).
//! 2. **Structures:** `general` (cores, cycle limit, tracing) and `memory` (size, dump length).
//! 3. **Loading:** Deserialization from a JSON file; every field is optional.
//!
//! Instruction memory is not configurable: the 10-bit PC fixes it at 1024 words.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_NUM_CORES, MAIN_MEM_SIZE};
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Cycle limit after which a run is abandoned.
    pub const MAX_CYCLES: u64 = 100_000;

    /// Minimum number of lines written to `memout`.
    pub const MEMOUT_MIN_WORDS: usize = 64;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use pipesim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.num_cores, 4);
/// assert_eq!(config.memory.main_mem_words, 1 << 21);
/// ```
///
/// Deserializing from JSON; omitted fields keep their defaults:
///
/// ```
/// use pipesim_core::config::Config;
///
/// let json = r#"{
///     "general": { "num_cores": 1, "trace": false }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.general.num_cores, 1);
/// assert!(!config.general.trace);
/// assert_eq!(config.general.max_cycles, 100_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the JSON document.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be simulated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MemorySize`] when `memory.main_mem_words` is zero or larger
    /// than the 21-bit data address space.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let words = self.memory.main_mem_words;
        if words == 0 || words > MAIN_MEM_SIZE {
            return Err(ConfigError::MemorySize {
                words,
                max: MAIN_MEM_SIZE,
            });
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Number of cores to simulate.
    #[serde(default = "GeneralConfig::default_num_cores")]
    pub num_cores: usize,

    /// Cycle limit; reaching it stops the run with a warning.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Record one trace line per core per cycle.
    #[serde(default = "GeneralConfig::default_trace")]
    pub trace: bool,
}

impl GeneralConfig {
    const fn default_num_cores() -> usize {
        DEFAULT_NUM_CORES
    }

    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }

    const fn default_trace() -> bool {
        true
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            num_cores: Self::default_num_cores(),
            max_cycles: Self::default_max_cycles(),
            trace: Self::default_trace(),
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Size of the shared data memory in words (rounded up to a power of two).
    #[serde(default = "MemoryConfig::default_main_mem_words")]
    pub main_mem_words: usize,

    /// Minimum number of words written to `memout`.
    #[serde(default = "MemoryConfig::default_memout_min_words")]
    pub memout_min_words: usize,
}

impl MemoryConfig {
    const fn default_main_mem_words() -> usize {
        MAIN_MEM_SIZE
    }

    const fn default_memout_min_words() -> usize {
        defaults::MEMOUT_MIN_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            main_mem_words: Self::default_main_mem_words(),
            memout_min_words: Self::default_memout_min_words(),
        }
    }
}
