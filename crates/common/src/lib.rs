//! Shared building blocks for the portal crates: wire types and logging setup.

pub mod types;
pub mod utils;
