//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Within a cycle they run oldest first, each pulling from its
//! predecessor:
//! 1. **Writeback:** Retires an instruction and queues its register write.
//! 2. **Memory:** Performs loads and stores.
//! 3. **Execute:** Computes ALU results, addresses and link values.
//! 4. **Decode:** Reads operands through the forwarding unit and resolves control flow.
//! 5. **Fetch:** Reads the next instruction word.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
