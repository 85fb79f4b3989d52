//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Branch:** Delay-slot branch resolution and the fetch-address state machine.
//! 2. **Hazards:** Operand forwarding and load-use detection.
//! 3. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 4. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.

/// Branch resolution and fetch redirection.
pub mod branch;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Pipeline latches (stage registers and back-end state).
pub mod latches;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
