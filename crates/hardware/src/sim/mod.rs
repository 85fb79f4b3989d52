//! Simulation driver, file loading and output.
//!
//! Provides everything around the cores: loading memory images, stepping the
//! cores in lockstep, writing result files and comparing traces.

/// Hex image loading.
pub mod loader;

/// Result files (register, memory, statistics, trace, listing).
pub mod output;

/// Multi-core simulation driver.
pub mod simulator;

/// Trace line format and trace comparison.
pub mod trace;

pub use simulator::Simulator;
