//! In-memory undirected simple graph with string identities and attribute
//! bags.
//!
//! Nodes are stored densely and addressed by [`NodeId`]; the string identity
//! supplied by a loader or generator is kept alongside and indexed for
//! lookup. Topology is fixed once a [`GraphModel`] leaves its
//! [`GraphBuilder`]; only attributes change afterwards.

mod builder;

use std::collections::HashMap;

use crate::attr::{AttrValue, Attributes};

pub use self::builder::GraphBuilder;

/// Dense index of a node within a [`GraphModel`].
///
/// # Examples
/// ```
/// use provgraph_core::NodeId;
///
/// let id = NodeId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a dense node index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the dense node index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn index(self) -> usize { self.0 }
}

/// Undirected simple graph owning its nodes, edges, and attributes.
///
/// # Examples
/// ```
/// use provgraph_core::GraphModel;
///
/// let graph = GraphModel::from_edges(["a", "b", "c"], [("a", "b")])?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// let a = graph.node_id("a").expect("a exists");
/// assert_eq!(graph.degree(a), 1);
/// # Ok::<(), provgraph_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphModel {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
    edges: Vec<(NodeId, NodeId)>,
    node_attrs: Vec<Attributes>,
    graph_attrs: Attributes,
}

impl GraphModel {
    /// Creates a graph with no nodes.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a graph from node identities and identity pairs.
    ///
    /// # Errors
    /// Returns a malformed-graph [`crate::GraphError`] when a node repeats,
    /// an edge names a missing node, forms a self-loop, or repeats a pair.
    pub fn from_edges<N, E, S>(nodes: N, edges: E) -> crate::Result<Self>
    where
        N: IntoIterator<Item = S>,
        E: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::new();
        for node in nodes {
            builder.add_node(node.as_ref())?;
        }
        for (left, right) in edges {
            builder.add_edge(left.as_ref(), right.as_ref())?;
        }
        Ok(builder.build())
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates node ids in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + use<> {
        (0..self.labels.len()).map(NodeId::new)
    }

    /// Looks up a node by identity.
    #[must_use]
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Returns `true` when `label` names a node.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Returns the identity of `node`.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node.index()).map(String::as_str)
    }

    /// Neighbours of `node` in edge insertion order. Unknown ids have none.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(node.index()).map_or(&[], Vec::as_slice)
    }

    /// Number of edges incident to `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Edges as `(smaller, larger)` id pairs in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Attribute bag of `node`.
    #[must_use]
    pub fn attrs(&self, node: NodeId) -> Option<&Attributes> {
        self.node_attrs.get(node.index())
    }

    /// Reads a single node attribute.
    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&AttrValue> {
        self.attrs(node).and_then(|attrs| attrs.get(name))
    }

    /// Writes a node attribute, returning `false` when `node` is unknown.
    pub fn set_attr(
        &mut self,
        node: NodeId,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> bool {
        let Some(attrs) = self.node_attrs.get_mut(node.index()) else {
            return false;
        };
        attrs.insert(name.into(), value.into());
        true
    }

    /// Graph-level attribute bag.
    #[must_use]
    pub fn graph_attrs(&self) -> &Attributes {
        &self.graph_attrs
    }

    /// Reads a graph-level attribute.
    #[must_use]
    pub fn graph_attr(&self, name: &str) -> Option<&AttrValue> {
        self.graph_attrs.get(name)
    }

    /// Writes a graph-level attribute.
    pub fn set_graph_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.graph_attrs.insert(name.into(), value.into());
    }

    /// Resolves `node` to its identity, falling back to the raw index.
    pub(crate) fn display_label(&self, node: NodeId) -> String {
        self.label(node)
            .map_or_else(|| format!("#{}", node.index()), ToOwned::to_owned)
    }
}
