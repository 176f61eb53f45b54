//! Support library for the provgraph CLI binary.
//!
//! Exposes argument parsing, command execution, and rendering so tests can
//! drive the pipeline without spawning a subprocess.

pub mod cli;
pub mod logging;
