//! Breadth-first traversals with provenance.
//!
//! Two modes are offered:
//!
//! - [`multi_source_bfs`] runs one traversal seeded from every root at once
//!   and attributes each reached node to exactly one nearest root, recording
//!   its distance and BFS parent.
//! - [`shortest_path_trees`] runs an independent traversal per root and
//!   returns one [`ShortestPathTree`] each, with no interaction between
//!   roots.
//!
//! Traversal state lives in buffers owned by each call, never on the graph,
//! so concurrent read-only queries over one [`GraphModel`] are safe.

mod multi_source;
mod trees;

use std::collections::VecDeque;

use tracing::debug;

use crate::{
    Result,
    error::GraphError,
    graph::{GraphModel, NodeId},
};

pub use self::{
    multi_source::{BfsEntry, BfsResult, multi_source_bfs, multi_source_bfs_with_policy},
    trees::{ShortestPathTree, shortest_path_trees},
};

/// How root identities that are not nodes of the graph are handled.
///
/// Loosely validated root lists are common at the command surface, so the
/// default silently drops unknown roots. `Strict` turns them into
/// [`GraphError::UnknownRoot`].
///
/// # Examples
/// ```
/// use provgraph_core::{GraphModel, RootPolicy, multi_source_bfs_with_policy};
///
/// let graph = GraphModel::from_edges(["0", "1"], [("0", "1")])?;
/// assert!(multi_source_bfs_with_policy(&graph, &["9"], RootPolicy::Strict).is_err());
/// let lenient = multi_source_bfs_with_policy(&graph, &["9"], RootPolicy::DropUnknown)?;
/// assert_eq!(lenient.reached_count(), 0);
/// # Ok::<(), provgraph_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RootPolicy {
    /// Ignore roots that do not name a node.
    #[default]
    DropUnknown,
    /// Reject the whole request when any root does not name a node.
    Strict,
}

/// Maps root identities to node ids according to `policy`, preserving order.
pub(crate) fn resolve_roots<S: AsRef<str>>(
    graph: &GraphModel,
    roots: &[S],
    policy: RootPolicy,
) -> Result<Vec<NodeId>> {
    let mut resolved = Vec::with_capacity(roots.len());
    let mut dropped = 0_usize;
    for root in roots {
        let label = root.as_ref();
        match (graph.node_id(label), policy) {
            (Some(id), _) => resolved.push(id),
            (None, RootPolicy::DropUnknown) => dropped += 1,
            (None, RootPolicy::Strict) => {
                return Err(GraphError::UnknownRoot {
                    node: label.to_owned(),
                });
            }
        }
    }
    if dropped > 0 {
        debug!(dropped, kept = resolved.len(), "dropped unknown roots");
    }
    Ok(resolved)
}

/// Level-order traversal seeded from `seeds` in order.
///
/// `discover` is called exactly once per reached node with the node, its BFS
/// parent (`None` for seeds), and its depth. Seeds repeated in the list are
/// discovered once.
pub(crate) fn level_order<F>(graph: &GraphModel, seeds: &[NodeId], mut discover: F)
where
    F: FnMut(NodeId, Option<NodeId>, usize),
{
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::with_capacity(seeds.len());
    for &seed in seeds {
        if mark(&mut visited, seed) {
            discover(seed, None, 0);
            queue.push_back((seed, 0_usize));
        }
    }

    while let Some((current, depth)) = queue.pop_front() {
        let next_depth = depth + 1;
        for &next in graph.neighbors(current) {
            if mark(&mut visited, next) {
                discover(next, Some(current), next_depth);
                queue.push_back((next, next_depth));
            }
        }
    }
}

/// Marks `node` visited, returning `true` when it was not visited before.
fn mark(visited: &mut [bool], node: NodeId) -> bool {
    match visited.get_mut(node.index()) {
        Some(slot) if !*slot => {
            *slot = true;
            true
        }
        _ => false,
    }
}
