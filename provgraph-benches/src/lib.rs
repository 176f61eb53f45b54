//! Benchmark support crate for provgraph.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks for traversal, structural analysis, and GML round trips.

pub mod error;
pub mod fixture;
pub mod params;
