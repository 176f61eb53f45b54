//! Shared test utilities for `provgraph-core`.

use provgraph_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{GraphModel, NodeId};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Path graph `0 - 1 - ... - (n-1)` with decimal identities.
#[must_use]
pub(crate) fn path_graph(node_count: usize) -> GraphModel {
    let labels: Vec<String> = (0..node_count).map(|index| index.to_string()).collect();
    let edges: Vec<(String, String)> = labels
        .windows(2)
        .filter_map(|pair| match pair {
            [left, right] => Some((left.clone(), right.clone())),
            _ => None,
        })
        .collect();
    GraphModel::from_edges(labels, edges).expect("path graph must build")
}

/// Cycle graph over `n >= 3` decimal identities.
#[must_use]
pub(crate) fn cycle_graph(node_count: usize) -> GraphModel {
    let labels: Vec<String> = (0..node_count).map(|index| index.to_string()).collect();
    let edges: Vec<(String, String)> = (0..node_count)
        .map(|index| (index.to_string(), ((index + 1) % node_count).to_string()))
        .collect();
    GraphModel::from_edges(labels, edges).expect("cycle graph must build")
}

/// Resolves `label` in `graph`, panicking when it is missing.
#[must_use]
pub(crate) fn node(graph: &GraphModel, label: &str) -> NodeId {
    graph
        .node_id(label)
        .unwrap_or_else(|| panic!("node `{label}` must exist"))
}
