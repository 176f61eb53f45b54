//! Metadata round-trip: attaching results and reading them back yields
//! equal results, and every node carries every per-node key.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    StructuralSummary, components,
    metadata::{attach_analysis, attach_bfs, keys, read_bfs, read_components, read_summary},
    multi_source_bfs,
};

use super::types::GraphFixture;

pub(super) fn run_round_trip_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = fixture.graph.clone();
    let bfs = multi_source_bfs(&graph, &fixture.roots);
    let assignment = components(&graph);
    let summary = StructuralSummary::analyze(&graph);
    attach_bfs(&mut graph, &bfs);
    attach_analysis(&mut graph, &assignment, &summary);

    for node in graph.nodes() {
        for key in [
            keys::DIST,
            keys::SOURCE,
            keys::PARENT,
            keys::COMPONENT_ID,
            keys::ISOLATE,
        ] {
            if graph.attr(node, key).is_none() {
                return Err(TestCaseError::fail(format!("{node:?} lacks `{key}`")));
            }
        }
    }

    let fail = |err: crate::GraphError| TestCaseError::fail(format!("read-back failed: {err}"));
    if read_bfs(&graph).map_err(fail)? != bfs {
        return Err(TestCaseError::fail("bfs result changed on round trip"));
    }
    if read_components(&graph).map_err(fail)? != assignment {
        return Err(TestCaseError::fail("components changed on round trip"));
    }
    if read_summary(&graph).map_err(fail)? != summary {
        return Err(TestCaseError::fail("summary changed on round trip"));
    }
    Ok(())
}
