//! Validating construction surface for [`GraphModel`].

use std::collections::HashSet;

use crate::{
    Result,
    attr::{AttrValue, Attributes},
    error::GraphError,
};

use super::{GraphModel, NodeId};

/// Assembles a [`GraphModel`] while enforcing the simple-graph invariants.
///
/// # Examples
/// ```
/// use provgraph_core::{GraphBuilder, GraphError};
///
/// let mut builder = GraphBuilder::new();
/// builder.add_node("0")?;
/// builder.add_node("1")?;
/// builder.add_edge("0", "1")?;
/// let err = builder.add_edge("1", "0").expect_err("pairs are unordered");
/// assert!(matches!(err, GraphError::DuplicateEdge { .. }));
/// assert_eq!(builder.build().edge_count(), 1);
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: GraphModel,
    seen_edges: HashSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        let mut builder = Self::default();
        builder.graph.labels.reserve(nodes);
        builder.graph.index.reserve(nodes);
        builder.graph.adjacency.reserve(nodes);
        builder.graph.node_attrs.reserve(nodes);
        builder
    }

    /// Adds a node with an empty attribute bag.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNode`] when `label` already exists.
    pub fn add_node(&mut self, label: impl Into<String>) -> Result<NodeId> {
        self.add_node_with_attrs(label, Attributes::new())
    }

    /// Adds a node carrying `attrs`.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNode`] when `label` already exists.
    pub fn add_node_with_attrs(
        &mut self,
        label: impl Into<String>,
        attrs: Attributes,
    ) -> Result<NodeId> {
        let label = label.into();
        if self.graph.index.contains_key(&label) {
            return Err(GraphError::DuplicateNode { node: label });
        }
        Ok(self.push_node(label, attrs))
    }

    /// Adds a node whose label is known to be unused.
    pub(crate) fn push_node(&mut self, label: String, attrs: Attributes) -> NodeId {
        let id = NodeId::new(self.graph.labels.len());
        self.graph.index.insert(label.clone(), id);
        self.graph.labels.push(label);
        self.graph.adjacency.push(Vec::new());
        self.graph.node_attrs.push(attrs);
        id
    }

    /// Connects two nodes by identity.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownEndpoint`], [`GraphError::SelfLoop`], or
    /// [`GraphError::DuplicateEdge`] when the pair would break the
    /// simple-graph invariants.
    pub fn add_edge(&mut self, left: &str, right: &str) -> Result<()> {
        let left_id = self.resolve(left)?;
        let right_id = self.resolve(right)?;
        self.add_edge_ids(left_id, right_id)
    }

    /// Connects two nodes by id.
    ///
    /// # Errors
    /// Same conditions as [`Self::add_edge`].
    pub fn add_edge_ids(&mut self, left: NodeId, right: NodeId) -> Result<()> {
        let node_count = self.graph.labels.len();
        for endpoint in [left, right] {
            if endpoint.index() >= node_count {
                return Err(GraphError::UnknownEndpoint {
                    node: self.graph.display_label(endpoint),
                });
            }
        }
        if left == right {
            return Err(GraphError::SelfLoop {
                node: self.graph.display_label(left),
            });
        }
        let key = (left.min(right), left.max(right));
        if !self.seen_edges.insert(key) {
            return Err(GraphError::DuplicateEdge {
                left: self.graph.display_label(left),
                right: self.graph.display_label(right),
            });
        }
        self.push_edge(key);
        Ok(())
    }

    /// Adds a pair already known to be valid and unseen.
    pub(crate) fn push_edge(&mut self, key: (NodeId, NodeId)) {
        let (low, high) = key;
        if let Some(list) = self.graph.adjacency.get_mut(low.index()) {
            list.push(high);
        }
        if let Some(list) = self.graph.adjacency.get_mut(high.index()) {
            list.push(low);
        }
        self.graph.edges.push(key);
    }

    /// Sets a graph-level attribute on the graph under construction.
    pub fn set_graph_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.graph.set_graph_attr(name, value);
    }

    /// Number of nodes added so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> GraphModel {
        self.graph
    }

    fn resolve(&self, label: &str) -> Result<NodeId> {
        self.graph
            .node_id(label)
            .ok_or_else(|| GraphError::UnknownEndpoint {
                node: label.to_owned(),
            })
    }
}
