//! Simulator Error Types.
//!
//! This module defines the typed failures the simulator reports outward. It provides:
//! 1. **Encoding Errors:** Instruction words whose opcode field is not part of the ISA.
//! 2. **Hazard-Policy Violations:** Pipeline states that contradict themselves.
//! 3. **Control-Flow Misuse:** Branch resolution requested for a non-branch.
//! 4. **I/O Errors:** Missing or malformed memory images, traces and config files.
//!
//! A stall is not an error; it is reported through
//! [`ForwardResult::StallRequired`](crate::core::pipeline::hazards::ForwardResult).

use std::path::PathBuf;

use thiserror::Error;

/// Failure to decode a 32-bit instruction word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode field does not name any instruction.
    #[error("unknown opcode {opcode:#04x} in instruction word {word:#010x}")]
    UnknownOpcode {
        /// The full instruction word.
        word: u32,
        /// The offending 8-bit opcode field.
        opcode: u8,
    },
}

/// Inconsistent pipeline state detected by the forwarding unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HazardError {
    /// The register recorded as committing this cycle does not match the
    /// destination decoded from the instruction sitting in Writeback.
    #[error(
        "writeback destination mismatch at pc {pc:#05x}: recorded {recorded:?}, instruction targets {decoded:?}"
    )]
    WritebackDestinationMismatch {
        /// Register index the core recorded for this cycle's commit.
        recorded: Option<usize>,
        /// Effective destination of the Writeback instruction, if it writes a register.
        decoded: Option<usize>,
        /// PC of the Writeback instruction.
        pc: u16,
    },
}

/// Branch resolution requested for an instruction that cannot redirect fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BranchError {
    /// The instruction is neither a conditional branch nor `JAL`.
    #[error("{mnemonic} is not a control-flow instruction")]
    NotControlFlow {
        /// Mnemonic of the rejected instruction.
        mnemonic: &'static str,
    },
}

/// Failure to read a hex memory image or trace file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line is not an 8-hex-digit word.
    #[error("{}:{line}: expected a hex word, found {text:?}", path.display())]
    Parse {
        /// Offending path.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The line contents.
        text: String,
    },
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    #[error("invalid config {}: {source}", path.display())]
    Json {
        /// Offending path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// `memory.main_mem_words` is zero or exceeds the addressable range.
    #[error("memory.main_mem_words must be between 1 and {max}, got {words}")]
    MemorySize {
        /// Requested size in words.
        words: usize,
        /// Largest supported size.
        max: usize,
    },
}

/// Top-level simulation error.
#[derive(Debug, Error)]
pub enum SimError {
    /// An instruction word could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The forwarding unit found an inconsistent pipeline.
    #[error(transparent)]
    Hazard(#[from] HazardError),
    /// Branch resolution was misused.
    #[error(transparent)]
    Branch(#[from] BranchError),
    /// An input file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An output file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Output {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The number of instruction images does not match the configured core count.
    #[error("expected {expected} instruction memory images, got {found}")]
    ProgramCount {
        /// Configured number of cores.
        expected: usize,
        /// Images supplied.
        found: usize,
    },
    /// A failure attributed to a specific core.
    #[error("core {core}: {source}")]
    Core {
        /// Index of the failing core.
        core: usize,
        /// What went wrong.
        #[source]
        source: Box<SimError>,
    },
}

impl SimError {
    /// Wraps this error with the index of the core that raised it.
    pub fn on_core(self, core: usize) -> Self {
        Self::Core {
            core,
            source: Box::new(self),
        }
    }
}
