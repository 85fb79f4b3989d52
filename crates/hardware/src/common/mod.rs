//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Register conventions, memory geometry and instruction field layout.
//! 2. **Error Handling:** Typed decode, hazard, branch, load and simulation errors.
//! 3. **Register Management:** The committed register file of a core.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types reported by the simulator.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{BranchError, ConfigError, DecodeError, HazardError, LoadError, SimError};
pub use reg::RegisterFile;
