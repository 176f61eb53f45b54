//! Combined multi-source BFS with nearest-root attribution.

use tracing::{debug, instrument};

use crate::{
    Result,
    graph::{GraphModel, NodeId},
};

use super::{RootPolicy, level_order, resolve_roots};

/// Provenance recorded for one reached node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BfsEntry {
    distance: usize,
    parent: Option<NodeId>,
    source: NodeId,
}

impl BfsEntry {
    /// Creates an entry; used when rebuilding results from attributes.
    #[must_use]
    pub const fn new(distance: usize, parent: Option<NodeId>, source: NodeId) -> Self {
        Self {
            distance,
            parent,
            source,
        }
    }

    /// Hop count to the nearest root.
    #[rustfmt::skip]
    #[must_use]
    pub const fn distance(&self) -> usize { self.distance }

    /// BFS parent, or `None` for a root.
    #[rustfmt::skip]
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> { self.parent }

    /// Root this node was reached from.
    #[rustfmt::skip]
    #[must_use]
    pub const fn source(&self) -> NodeId { self.source }
}

/// Per-node distance, parent, and source of a multi-source traversal.
///
/// Nodes not reachable from any root have no entry; callers must treat the
/// absence as "undefined", never as distance zero.
///
/// # Examples
/// ```
/// use provgraph_core::{GraphModel, multi_source_bfs};
///
/// let graph = GraphModel::from_edges(
///     ["0", "1", "2", "3", "4"],
///     [("0", "1"), ("1", "2"), ("2", "3"), ("3", "4")],
/// )?;
/// let result = multi_source_bfs(&graph, &["0", "3"]);
/// let node = |label| graph.node_id(label).expect("node exists");
/// assert_eq!(result.distance(node("2")), Some(1));
/// assert_eq!(result.source(node("2")), Some(node("3")));
/// assert_eq!(result.parent(node("2")), Some(node("3")));
/// assert_eq!(result.source(node("4")), Some(node("3")));
/// # Ok::<(), provgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BfsResult {
    entries: Vec<Option<BfsEntry>>,
}

impl BfsResult {
    /// Builds a result from per-node entries indexed by [`NodeId`].
    #[must_use]
    pub const fn from_entries(entries: Vec<Option<BfsEntry>>) -> Self {
        Self { entries }
    }

    /// Entry for `node`, if it was reached.
    #[must_use]
    pub fn entry(&self, node: NodeId) -> Option<&BfsEntry> {
        self.entries.get(node.index()).and_then(Option::as_ref)
    }

    /// Distance of `node` from its nearest root.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<usize> {
        self.entry(node).map(BfsEntry::distance)
    }

    /// BFS parent of `node`; `None` for roots and unreached nodes.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.entry(node).and_then(BfsEntry::parent)
    }

    /// Root `node` was attributed to.
    #[must_use]
    pub fn source(&self, node: NodeId) -> Option<NodeId> {
        self.entry(node).map(BfsEntry::source)
    }

    /// Returns `true` when `node` was reached.
    #[must_use]
    pub fn is_reached(&self, node: NodeId) -> bool {
        self.entry(node).is_some()
    }

    /// Number of reached nodes.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// Roots that seeded the traversal, in node order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(|(_, entry)| entry.parent.is_none())
            .map(|(node, _)| node)
    }

    /// Reached nodes with their entries, in node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &BfsEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.as_ref().map(|entry| (NodeId::new(index), entry)))
    }
}

/// Runs the combined traversal, silently dropping roots that are not nodes.
///
/// Ties between roots at equal distance go to the root listed first.
#[must_use]
pub fn multi_source_bfs<S: AsRef<str>>(graph: &GraphModel, roots: &[S]) -> BfsResult {
    let resolved = resolve_roots(graph, roots, RootPolicy::DropUnknown).unwrap_or_default();
    traverse(graph, &resolved)
}

/// Runs the combined traversal under an explicit [`RootPolicy`].
///
/// # Errors
/// Returns [`crate::GraphError::UnknownRoot`] under [`RootPolicy::Strict`]
/// when a root does not name a node.
pub fn multi_source_bfs_with_policy<S: AsRef<str>>(
    graph: &GraphModel,
    roots: &[S],
    policy: RootPolicy,
) -> Result<BfsResult> {
    let resolved = resolve_roots(graph, roots, policy)?;
    Ok(traverse(graph, &resolved))
}

#[instrument(
    name = "core.multi_source_bfs",
    skip_all,
    fields(nodes = graph.node_count(), roots = roots.len()),
)]
fn traverse(graph: &GraphModel, roots: &[NodeId]) -> BfsResult {
    let mut entries: Vec<Option<BfsEntry>> = vec![None; graph.node_count()];
    level_order(graph, roots, |node, parent, distance| {
        let source = parent
            .and_then(|parent| entries.get(parent.index()).copied().flatten())
            .map_or(node, |entry| entry.source);
        if let Some(slot) = entries.get_mut(node.index()) {
            *slot = Some(BfsEntry {
                distance,
                parent,
                source,
            });
        }
    });
    let result = BfsResult { entries };
    debug!(reached = result.reached_count(), "multi-source bfs completed");
    result
}
