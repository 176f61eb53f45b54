//! Benchmark parameter types.

use std::fmt;

/// Parameters for a random-graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Nodes in the generated graph.
    pub node_count: usize,
    /// Density coefficient passed to the generator.
    pub coefficient: f64,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},c={}", self.node_count, self.coefficient)
    }
}

/// Parameters for a traversal benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct TraversalBenchParams {
    /// Nodes in the generated graph.
    pub node_count: usize,
    /// Roots seeded into the traversal.
    pub root_count: usize,
}

impl fmt::Display for TraversalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},roots={}", self.node_count, self.root_count)
    }
}
