//! Independent single-root shortest-path trees.

use tracing::{debug, instrument};

use crate::{
    Result,
    graph::{GraphModel, NodeId},
};

use super::{RootPolicy, level_order, resolve_roots};

/// BFS tree rooted at one node, covering only nodes reachable from it.
///
/// # Examples
/// ```
/// use provgraph_core::{GraphModel, RootPolicy, shortest_path_trees};
///
/// let graph = GraphModel::from_edges(["a", "b", "c"], [("a", "b"), ("b", "c")])?;
/// let trees = shortest_path_trees(&graph, &["a"], RootPolicy::Strict)?;
/// let c = graph.node_id("c").expect("c exists");
/// let path: Vec<&str> = trees[0]
///     .path_to(c)
///     .expect("c is reachable")
///     .into_iter()
///     .filter_map(|node| graph.label(node))
///     .collect();
/// assert_eq!(path, ["a", "b", "c"]);
/// # Ok::<(), provgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPathTree {
    root: NodeId,
    depth: Vec<Option<usize>>,
    parent: Vec<Option<NodeId>>,
    order: Vec<NodeId>,
}

impl ShortestPathTree {
    /// Root of the tree.
    #[rustfmt::skip]
    #[must_use]
    pub const fn root(&self) -> NodeId { self.root }

    /// Reached nodes in discovery order, starting with the root.
    #[must_use]
    pub fn reached(&self) -> &[NodeId] {
        &self.order
    }

    /// Returns `true` when `node` is reachable from the root.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.depth(node).is_some()
    }

    /// Hop count from the root to `node`.
    #[must_use]
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.depth.get(node.index()).copied().flatten()
    }

    /// Tree parent of `node`; `None` for the root and unreached nodes.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(node.index()).copied().flatten()
    }

    /// Shortest path from the root to `node`, both ends included.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        let depth = self.depth(node)?;
        let mut path = Vec::with_capacity(depth + 1);
        let mut current = Some(node);
        while let Some(step) = current {
            path.push(step);
            current = self.parent(step);
        }
        path.reverse();
        Some(path)
    }

    /// Shortest paths to every reached node, in discovery order.
    pub fn paths(&self) -> impl Iterator<Item = (NodeId, Vec<NodeId>)> + '_ {
        self.order
            .iter()
            .filter_map(|&node| self.path_to(node).map(|path| (node, path)))
    }

    /// Tree edges grouped by level.
    ///
    /// Row `i` holds the `(parent, child)` edges whose child sits at depth
    /// `i + 1`, in discovery order. A tree with a lone root has no rows.
    #[must_use]
    pub fn levels(&self) -> Vec<Vec<(NodeId, NodeId)>> {
        let mut rows: Vec<Vec<(NodeId, NodeId)>> = Vec::new();
        for &node in &self.order {
            let (Some(parent), Some(depth)) = (self.parent(node), self.depth(node)) else {
                continue;
            };
            let row = depth - 1;
            if rows.len() <= row {
                rows.resize_with(row + 1, Vec::new);
            }
            if let Some(edges) = rows.get_mut(row) {
                edges.push((parent, node));
            }
        }
        rows
    }

    /// Greatest depth reached.
    #[must_use]
    pub fn height(&self) -> usize {
        self.order
            .last()
            .and_then(|&node| self.depth(node))
            .unwrap_or(0)
    }
}

/// Builds one independent shortest-path tree per root, in root order.
///
/// Unknown roots are dropped or rejected according to `policy`.
///
/// # Errors
/// Returns [`crate::GraphError::UnknownRoot`] under [`RootPolicy::Strict`]
/// when a root does not name a node.
#[instrument(
    name = "core.shortest_path_trees",
    skip_all,
    fields(nodes = graph.node_count(), roots = roots.len()),
)]
pub fn shortest_path_trees<S: AsRef<str>>(
    graph: &GraphModel,
    roots: &[S],
    policy: RootPolicy,
) -> Result<Vec<ShortestPathTree>> {
    let resolved = resolve_roots(graph, roots, policy)?;
    let trees: Vec<ShortestPathTree> = resolved
        .iter()
        .map(|&root| single_root_tree(graph, root))
        .collect();
    debug!(trees = trees.len(), "shortest-path trees built");
    Ok(trees)
}

fn single_root_tree(graph: &GraphModel, root: NodeId) -> ShortestPathTree {
    let node_count = graph.node_count();
    let mut tree = ShortestPathTree {
        root,
        depth: vec![None; node_count],
        parent: vec![None; node_count],
        order: Vec::new(),
    };
    level_order(graph, &[root], |node, parent, depth| {
        if let Some(slot) = tree.depth.get_mut(node.index()) {
            *slot = Some(depth);
        }
        if let Some(slot) = tree.parent.get_mut(node.index()) {
            *slot = parent;
        }
        tree.order.push(node);
    });
    tree
}
