//! Seeded graph fixtures shared by the benchmarks.

use provgraph_core::{GeneratorParams, GraphModel, generate_random_graph};

use crate::error::BenchSetupError;

/// Seed used for every generated benchmark graph.
pub const SEED: u64 = 42;

/// Generates the benchmark graph for `node_count` and `coefficient`.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when the generator rejects the
/// parameters.
pub fn random_graph(node_count: usize, coefficient: f64) -> Result<GraphModel, BenchSetupError> {
    let params = GeneratorParams::new(node_count, coefficient)?.with_seed(SEED);
    Ok(generate_random_graph(&params))
}

/// Picks `count` root labels spread evenly across the node range.
///
/// # Errors
/// Returns [`BenchSetupError::TooManyRoots`] when `count` exceeds the node
/// count.
pub fn spread_roots(graph: &GraphModel, count: usize) -> Result<Vec<String>, BenchSetupError> {
    let nodes = graph.node_count();
    if count > nodes {
        return Err(BenchSetupError::TooManyRoots {
            requested: count,
            nodes,
        });
    }
    let step = nodes.checked_div(count).unwrap_or(0).max(1);
    Ok(graph
        .nodes()
        .step_by(step)
        .take(count)
        .filter_map(|node| graph.label(node).map(str::to_owned))
        .collect())
}
