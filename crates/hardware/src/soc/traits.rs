//! Data-memory port trait.
//!
//! This module defines the `DataPort` trait the Memory stage uses for loads and stores. It provides:
//! 1. **Access:** Word-granular read and write at a word address.
//! 2. **Isolation:** A seam between the pipeline and the memory model, so a core can be
//!    driven against the shared main memory or a test double.
//!
//! Addresses are word indices; implementors decide how out-of-range addresses wrap.

/// Word-addressed data memory seen by a core's Memory stage.
pub trait DataPort {
    /// Reads the word at `addr`.
    fn read_word(&mut self, addr: u32) -> u32;
    /// Writes `val` to the word at `addr`.
    fn write_word(&mut self, addr: u32, val: u32);
}
