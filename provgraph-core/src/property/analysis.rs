//! Structural analysis properties.
//!
//! - Two nodes share a component id exactly when the oracle connects them.
//! - `has_cycle` holds exactly when some component has at least as many
//!   edges as nodes.
//! - Density follows `2|E| / (|V|(|V|-1))`.
//! - The average path length, when defined, is the oracle's mean distance.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{StructuralSummary, components, has_cycle};

use super::{oracle::DistanceOracle, types::GraphFixture};

pub(super) fn run_components_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let oracle = DistanceOracle::new(graph);
    let assignment = components(graph);
    for left in graph.nodes() {
        for right in graph.nodes() {
            if assignment.same_component(left, right) != oracle.connected(left, right) {
                return Err(TestCaseError::fail(format!(
                    "{left:?} and {right:?}: component ids disagree with reachability"
                )));
            }
        }
    }
    let sizes = assignment.sizes();
    for node in graph.nodes() {
        let id = assignment
            .component_of(node)
            .ok_or_else(|| TestCaseError::fail(format!("{node:?} has no component")))?;
        if sizes.get(id) != Some(&oracle.component_size(node)) {
            return Err(TestCaseError::fail(format!(
                "component {id} size disagrees with the oracle"
            )));
        }
    }
    Ok(())
}

pub(super) fn run_cycle_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let assignment = components(graph);
    let sizes = assignment.sizes();
    let mut edge_counts = vec![0_usize; assignment.count()];
    for &(left, _) in graph.edges() {
        if let Some(id) = assignment.component_of(left) {
            edge_counts[id] += 1;
        }
    }
    let expected = edge_counts
        .iter()
        .zip(&sizes)
        .any(|(edges, nodes)| edges >= nodes);
    if has_cycle(graph) != expected {
        return Err(TestCaseError::fail(format!(
            "has_cycle disagrees with edge/node counts {edge_counts:?} vs {sizes:?} ({:?})",
            fixture.topology
        )));
    }
    Ok(())
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "oracle means are real-valued"
)]
pub(super) fn run_summary_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let oracle = DistanceOracle::new(graph);
    let summary = StructuralSummary::analyze(graph);
    let n = graph.node_count();

    let expected_density = if n < 2 {
        0.0
    } else {
        2.0 * graph.edge_count() as f64 / (n as f64 * (n - 1) as f64)
    };
    if (summary.density - expected_density).abs() > 1e-12 {
        return Err(TestCaseError::fail(format!(
            "density {} but expected {expected_density}",
            summary.density
        )));
    }

    let isolated = graph.nodes().filter(|&node| graph.degree(node) == 0).count();
    if summary.isolates.len() != isolated {
        return Err(TestCaseError::fail("isolate count mismatch"));
    }

    match summary.average_shortest_path {
        None if summary.component_count == 1 => {
            return Err(TestCaseError::fail("connected graph has undefined average"));
        }
        None => {}
        Some(_) if summary.component_count != 1 => {
            return Err(TestCaseError::fail("disconnected graph has an average"));
        }
        Some(average) => {
            let mut total = 0_usize;
            for from in graph.nodes() {
                for to in graph.nodes() {
                    total += oracle.distance(from, to).unwrap_or_default();
                }
            }
            let expected = if n < 2 {
                0.0
            } else {
                total as f64 / (n as f64 * (n - 1) as f64)
            };
            if (average - expected).abs() > 1e-9 {
                return Err(TestCaseError::fail(format!(
                    "average {average} but oracle says {expected}"
                )));
            }
        }
    }
    Ok(())
}
