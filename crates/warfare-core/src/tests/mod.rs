//! Cross-module tests for the query layer.
//!
//! - `determinism.rs`: repeated queries over seeded layouts agree with each
//!   other and with a brute-force scan
//! - `integration.rs`: end-to-end scenarios for nearest lookup, early-exit
//!   counting, and game-thread confinement
//! - `helpers.rs`: grid setup and entity factories

mod determinism;
mod helpers;

pub use helpers::*;
