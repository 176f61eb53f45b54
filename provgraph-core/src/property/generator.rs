//! Generator properties: exactly `n` nodes labelled `0..n-1`, a simple edge
//! set, and identical output for identical seeds.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{AttrValue, GeneratorParams, LABEL_ATTR, generate_random_graph};

pub(super) fn run_generator_property(node_count: usize, coefficient: f64, seed: u64) -> TestCaseResult {
    let params = GeneratorParams::new(node_count, coefficient)
        .map_err(|err| TestCaseError::fail(format!("valid parameters rejected: {err}")))?
        .with_seed(seed);
    let graph = generate_random_graph(&params);

    if graph.node_count() != node_count {
        return Err(TestCaseError::fail(format!(
            "expected {node_count} nodes, got {}",
            graph.node_count()
        )));
    }
    for (index, node) in graph.nodes().enumerate() {
        let identity = index.to_string();
        if graph.label(node) != Some(identity.as_str()) {
            return Err(TestCaseError::fail(format!("node {index} is not labelled `{identity}`")));
        }
        if graph.attr(node, LABEL_ATTR) != Some(&AttrValue::Str(identity)) {
            return Err(TestCaseError::fail(format!("node {index} lacks its label attribute")));
        }
    }

    let mut seen = HashSet::new();
    for &(left, right) in graph.edges() {
        if left == right {
            return Err(TestCaseError::fail(format!("self-loop on {left:?}")));
        }
        if !seen.insert((left.min(right), left.max(right))) {
            return Err(TestCaseError::fail(format!("duplicate edge {left:?} -- {right:?}")));
        }
    }
    if graph.edge_count() > node_count * (node_count - 1) / 2 {
        return Err(TestCaseError::fail("more edges than node pairs"));
    }

    if generate_random_graph(&params) != graph {
        return Err(TestCaseError::fail(format!("seed {seed} is not reproducible")));
    }
    Ok(())
}
