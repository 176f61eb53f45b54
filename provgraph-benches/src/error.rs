//! Benchmark setup error type.

use provgraph_core::GraphError;
use provgraph_providers_gml::GmlError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator parameters were rejected.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// GML serialisation failed while preparing input text.
    #[error("gml preparation failed: {0}")]
    Gml(#[from] GmlError),
    /// A fixture asked for more roots than the graph has nodes.
    #[error("requested {requested} roots from a graph of {nodes} nodes")]
    TooManyRoots {
        /// Roots requested.
        requested: usize,
        /// Nodes available.
        nodes: usize,
    },
}
