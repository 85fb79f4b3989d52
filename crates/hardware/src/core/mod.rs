//! Core processor implementation.
//!
//! This module contains the per-core implementation: the instruction pipeline,
//! the execution units, and the `Core` that owns and steps them.

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, forwarding, branch resolution).
pub mod pipeline;

/// Execution units.
pub mod units;

pub use self::cpu::Core;
