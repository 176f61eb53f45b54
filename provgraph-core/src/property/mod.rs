//! Property-based tests for traversal, analysis, generation, and metadata.
//!
//! Every property is checked against a Floyd–Warshall distance oracle over
//! graphs drawn from a handful of topologies, both through proptest and
//! through fixed-seed rstest cases.

mod analysis;
mod bfs;
mod generator;
mod metadata;
mod oracle;
mod strategies;
#[cfg(test)]
mod tests;
mod types;
