//! Floyd–Warshall all-pairs hop distances.
//!
//! Deliberately shares no code with the BFS machinery it checks.

use crate::{GraphModel, NodeId};

/// Hop distance between every ordered pair of nodes; `None` when
/// unreachable.
#[derive(Clone, Debug)]
pub(super) struct DistanceOracle {
    distances: Vec<Vec<Option<usize>>>,
}

impl DistanceOracle {
    pub(super) fn new(graph: &GraphModel) -> Self {
        let n = graph.node_count();
        let mut distances = vec![vec![None; n]; n];
        for (index, row) in distances.iter_mut().enumerate() {
            row[index] = Some(0);
        }
        for &(left, right) in graph.edges() {
            distances[left.index()][right.index()] = Some(1);
            distances[right.index()][left.index()] = Some(1);
        }
        for via in 0..n {
            for from in 0..n {
                let Some(first) = distances[from][via] else {
                    continue;
                };
                for to in 0..n {
                    if let Some(second) = distances[via][to] {
                        let candidate = first + second;
                        if distances[from][to].is_none_or(|current| candidate < current) {
                            distances[from][to] = Some(candidate);
                        }
                    }
                }
            }
        }
        Self { distances }
    }

    pub(super) fn distance(&self, from: NodeId, to: NodeId) -> Option<usize> {
        self.distances[from.index()][to.index()]
    }

    pub(super) fn connected(&self, from: NodeId, to: NodeId) -> bool {
        self.distance(from, to).is_some()
    }

    /// Nearest root to `node` and its distance, earliest root on ties.
    pub(super) fn nearest_root(&self, roots: &[NodeId], node: NodeId) -> Option<(NodeId, usize)> {
        roots
            .iter()
            .filter_map(|&root| self.distance(root, node).map(|d| (root, d)))
            .fold(None, |best, (root, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((root, d)),
            })
    }

    /// Nodes reachable from `node`, itself included.
    pub(super) fn component_size(&self, node: NodeId) -> usize {
        self.distances[node.index()].iter().flatten().count()
    }
}

/// Resolves the identities in `roots` that name nodes, keeping order.
pub(super) fn known_roots(graph: &GraphModel, roots: &[String]) -> Vec<NodeId> {
    roots.iter().filter_map(|root| graph.node_id(root)).collect()
}
