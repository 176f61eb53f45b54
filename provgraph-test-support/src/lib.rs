//! Shared test utilities used across provgraph crates.

pub mod ci;
pub mod tracing;
