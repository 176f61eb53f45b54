//! Command-line surface: load or generate a graph, run per-root shortest
//! paths and structural analysis, attach the results, and write GML.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, GraphOrigin, render_summary, run_cli};

#[cfg(test)]
mod test_helpers;
