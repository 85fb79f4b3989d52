//! Multi-core delayed-branch pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator of an in-order, five-stage
//! pipeline with a single branch delay slot, with the following:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback), operand forwarding,
//!    load-use stalls and delay-slot branch resolution.
//! 2. **Memory:** Per-core instruction memory and a flat data memory shared by all cores.
//! 3. **ISA:** Decoding, encoding and disassembly of the fixed 32-bit instruction format.
//! 4. **Simulation:** Image loading, configuration, multi-core driver, result files and
//!    trace comparison.

/// Common types and constants (register file, errors, field layout).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (pipeline, forwarding, branch resolution, ALU).
pub mod core;
/// Instruction set (opcodes, instruction format, disassembly).
pub mod isa;
/// Loading, driving, output and trace comparison.
pub mod sim;
/// Shared memory and the data-port seam.
pub mod soc;
/// Per-core statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// One processor core.
pub use crate::core::Core;
/// Multi-core driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
