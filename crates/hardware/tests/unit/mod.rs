//! # Unit Components
//!
//! Tests for every layer of the simulator, from register conventions and
//! instruction decoding up to multi-core runs and their result files.


/// Run configuration loading and defaults.
pub mod config;





/// Per-core statistics.
pub mod stats;
