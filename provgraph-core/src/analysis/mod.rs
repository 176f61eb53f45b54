//! Structural queries over a [`GraphModel`].
//!
//! Every query is read-only and independent of the others, so they compose in
//! any order and may run concurrently over the same graph.

mod paths;
mod union_find;

use tracing::{debug, instrument};

use crate::{
    bfs::level_order,
    graph::{GraphModel, NodeId},
};

use self::union_find::DisjointSet;

pub use self::paths::average_shortest_path_length;

/// Component id per node, numbered in discovery order from zero.
///
/// Two nodes share an id exactly when a path connects them.
///
/// # Examples
/// ```
/// use provgraph_core::{GraphModel, components};
///
/// let graph = GraphModel::from_edges(["a", "b", "c"], [("a", "c")])?;
/// let assignment = components(&graph);
/// let id = |label| graph.node_id(label).expect("node exists");
/// assert_eq!(assignment.count(), 2);
/// assert_eq!(assignment.component_of(id("a")), Some(0));
/// assert_eq!(assignment.component_of(id("b")), Some(1));
/// assert!(assignment.same_component(id("a"), id("c")));
/// # Ok::<(), provgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ComponentAssignment {
    ids: Vec<usize>,
    count: usize,
}

impl ComponentAssignment {
    /// Builds an assignment from per-node ids indexed by [`NodeId`].
    ///
    /// The component count is one more than the largest id.
    #[must_use]
    pub fn from_ids(ids: Vec<usize>) -> Self {
        let count = ids.iter().max().map_or(0, |max| max + 1);
        Self { ids, count }
    }

    /// Number of connected components.
    #[rustfmt::skip]
    #[must_use]
    pub const fn count(&self) -> usize { self.count }

    /// Component id of `node`.
    #[must_use]
    pub fn component_of(&self, node: NodeId) -> Option<usize> {
        self.ids.get(node.index()).copied()
    }

    /// Returns `true` when both nodes lie in the same component.
    #[must_use]
    pub fn same_component(&self, left: NodeId, right: NodeId) -> bool {
        match (self.component_of(left), self.component_of(right)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Component ids indexed by node.
    #[must_use]
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// Number of nodes in each component, indexed by component id.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0_usize; self.count];
        for &id in &self.ids {
            if let Some(size) = sizes.get_mut(id) {
                *size += 1;
            }
        }
        sizes
    }

    /// Members of component `id` in node order.
    #[must_use]
    pub fn members(&self, id: usize) -> Vec<NodeId> {
        self.ids
            .iter()
            .enumerate()
            .filter(|&(_, &component)| component == id)
            .map(|(index, _)| NodeId::new(index))
            .collect()
    }
}

/// Labels connected components by BFS, scanning nodes in insertion order.
#[instrument(name = "core.components", skip_all, fields(nodes = graph.node_count()))]
#[must_use]
pub fn components(graph: &GraphModel) -> ComponentAssignment {
    let mut ids: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut count = 0_usize;
    for start in graph.nodes() {
        if ids.get(start.index()).copied().flatten().is_some() {
            continue;
        }
        level_order(graph, &[start], |node, _, _| {
            if let Some(slot) = ids.get_mut(node.index()) {
                *slot = Some(count);
            }
        });
        count += 1;
    }
    debug!(components = count, "components labelled");
    ComponentAssignment {
        ids: ids.into_iter().map(|id| id.unwrap_or_default()).collect(),
        count,
    }
}

/// Returns `true` when the graph is not a forest.
///
/// Equivalent to some component having at least as many edges as nodes.
#[must_use]
pub fn has_cycle(graph: &GraphModel) -> bool {
    let mut set = DisjointSet::new(graph.node_count());
    graph
        .edges()
        .iter()
        .any(|&(left, right)| !set.union(left.index(), right.index()))
}

/// Nodes with no incident edges, in node order.
#[must_use]
pub fn isolates(graph: &GraphModel) -> Vec<NodeId> {
    graph.nodes().filter(|&node| graph.degree(node) == 0).collect()
}

/// Fraction of possible edges present: `2|E| / (|V|(|V|-1))`.
///
/// Graphs with fewer than two nodes have density zero.
///
/// # Examples
/// ```
/// use provgraph_core::{GraphModel, density};
///
/// let graph = GraphModel::from_edges(["0", "1", "2", "3"], [("0", "1"), ("2", "3")])?;
/// assert!((density(&graph) - 1.0 / 3.0).abs() < 1e-12);
/// # Ok::<(), provgraph_core::GraphError>(())
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "density is a real-valued ratio"
)]
pub fn density(graph: &GraphModel) -> f64 {
    let nodes = graph.node_count();
    if nodes < 2 {
        return 0.0;
    }
    let possible = nodes as f64 * (nodes - 1) as f64;
    2.0 * graph.edge_count() as f64 / possible
}

/// Scalar and set-valued structure of a graph, computed in one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuralSummary {
    /// Number of connected components.
    pub component_count: usize,
    /// Whether the graph contains a cycle.
    pub has_cycle: bool,
    /// Nodes of degree zero.
    pub isolates: Vec<NodeId>,
    /// Edge density.
    pub density: f64,
    /// Mean shortest-path length; `None` when the graph is disconnected.
    pub average_shortest_path: Option<f64>,
}

impl StructuralSummary {
    /// Runs every structural query against `graph`.
    ///
    /// # Examples
    /// ```
    /// use provgraph_core::{GraphModel, StructuralSummary};
    ///
    /// let graph = GraphModel::from_edges(["0", "1", "2"], [("0", "1"), ("1", "2")])?;
    /// let summary = StructuralSummary::analyze(&graph);
    /// assert_eq!(summary.component_count, 1);
    /// assert!(!summary.has_cycle);
    /// assert!(summary.isolates.is_empty());
    /// let average = summary.average_shortest_path.expect("path graphs are connected");
    /// assert!((average - 4.0 / 3.0).abs() < 1e-12);
    /// # Ok::<(), provgraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn analyze(graph: &GraphModel) -> Self {
        Self::from_components(graph, &components(graph))
    }

    /// Completes the summary from an assignment the caller already holds,
    /// so components are not labelled twice.
    #[must_use]
    pub fn from_components(graph: &GraphModel, assignment: &ComponentAssignment) -> Self {
        Self {
            component_count: assignment.count(),
            has_cycle: has_cycle(graph),
            isolates: isolates(graph),
            density: density(graph),
            average_shortest_path: paths::average_for_components(graph, assignment.count()),
        }
    }

    /// Returns `true` when the graph is a single component.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.component_count == 1
    }
}
