//! Memory System.
//!
//! Everything outside the cores that the pipeline touches:
//! 1. **Traits:** The `DataPort` seam used by the Memory stage.
//! 2. **Memory:** The flat main memory shared by all cores.

/// Shared main memory.
pub mod memory;

/// Data-memory port trait.
pub mod traits;

pub use memory::MainMemory;
pub use traits::DataPort;
