//! Multi-source BFS and shortest-path tree properties.
//!
//! For the combined traversal and every reached node `v`:
//!
//! - `dist[v]` equals the minimum oracle distance from any root.
//! - `source[v]` is the earliest listed root achieving that minimum.
//! - `parent[v]` is adjacent to `v`, one hop closer, and shares its source.
//!
//! Nodes are reached exactly when some root reaches them. Each per-root tree
//! agrees with the oracle for its own root alone.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{RootPolicy, multi_source_bfs, shortest_path_trees};

use super::{
    oracle::{DistanceOracle, known_roots},
    types::GraphFixture,
};

pub(super) fn run_multi_source_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let oracle = DistanceOracle::new(graph);
    let roots = known_roots(graph, &fixture.roots);
    let result = multi_source_bfs(graph, &fixture.roots);

    for node in graph.nodes() {
        let expected = oracle.nearest_root(&roots, node);
        let Some(entry) = result.entry(node) else {
            if expected.is_some() {
                return Err(TestCaseError::fail(format!(
                    "node {node:?} is reachable from a root but was not reached ({:?})",
                    fixture.topology,
                )));
            }
            continue;
        };
        let Some((nearest, distance)) = expected else {
            return Err(TestCaseError::fail(format!(
                "node {node:?} was reached but no root can reach it"
            )));
        };
        if entry.distance() != distance {
            return Err(TestCaseError::fail(format!(
                "node {node:?}: dist {} but nearest root is {distance} hops away",
                entry.distance()
            )));
        }
        if entry.source() != nearest {
            return Err(TestCaseError::fail(format!(
                "node {node:?}: source {:?} but first nearest root is {nearest:?}",
                entry.source()
            )));
        }
        match entry.parent() {
            None if distance != 0 => {
                return Err(TestCaseError::fail(format!(
                    "non-root node {node:?} has no parent"
                )));
            }
            None => {}
            Some(parent) => {
                if !graph.neighbors(node).contains(&parent) {
                    return Err(TestCaseError::fail(format!(
                        "parent {parent:?} of {node:?} is not adjacent"
                    )));
                }
                if result.distance(parent) != Some(distance - 1) {
                    return Err(TestCaseError::fail(format!(
                        "parent {parent:?} of {node:?} is not one hop closer"
                    )));
                }
                if result.source(parent) != Some(entry.source()) {
                    return Err(TestCaseError::fail(format!(
                        "parent {parent:?} of {node:?} is attributed to another root"
                    )));
                }
            }
        }
    }
    Ok(())
}

pub(super) fn run_tree_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let oracle = DistanceOracle::new(graph);
    let roots = known_roots(graph, &fixture.roots);
    let trees = shortest_path_trees(graph, &fixture.roots, RootPolicy::DropUnknown)
        .map_err(|err| TestCaseError::fail(format!("drop policy must not fail: {err}")))?;

    if trees.len() != roots.len() {
        return Err(TestCaseError::fail(format!(
            "expected {} trees, got {}",
            roots.len(),
            trees.len()
        )));
    }
    for (tree, &root) in trees.iter().zip(&roots) {
        if tree.root() != root {
            return Err(TestCaseError::fail("trees are not in root order"));
        }
        for node in graph.nodes() {
            let expected = oracle.distance(root, node);
            if tree.depth(node) != expected {
                return Err(TestCaseError::fail(format!(
                    "tree of {root:?}: depth of {node:?} is {:?}, oracle says {expected:?}",
                    tree.depth(node)
                )));
            }
            if let Some(path) = tree.path_to(node) {
                let hops_ok = path
                    .windows(2)
                    .all(|pair| matches!(pair, [a, b] if graph.neighbors(*a).contains(b)));
                if !hops_ok || Some(path.len() - 1) != expected || path.first() != Some(&root) {
                    return Err(TestCaseError::fail(format!(
                        "tree of {root:?}: {path:?} is not a shortest path to {node:?}"
                    )));
                }
            }
        }
        let level_edges: usize = tree.levels().iter().map(Vec::len).sum();
        if level_edges + 1 != tree.reached().len() {
            return Err(TestCaseError::fail(format!(
                "tree of {root:?}: {level_edges} level edges for {} nodes",
                tree.reached().len()
            )));
        }
    }
    Ok(())
}
