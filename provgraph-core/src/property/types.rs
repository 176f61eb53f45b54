//! Fixture types shared by the property strategies and runners.

use test_strategy::Arbitrary;

use crate::GraphModel;

/// Shape of the graph produced by a [`GraphFixture`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Topology {
    /// Few random edges; usually several components.
    #[weight(3)]
    Sparse,
    /// Many random edges on a small node set; almost always cyclic.
    #[weight(2)]
    Dense,
    /// Random spanning trees over a partition of the nodes.
    #[weight(2)]
    Forest,
    /// Two dense blocks with no edge between them.
    #[weight(2)]
    Disconnected,
    /// Nodes only.
    #[weight(1)]
    Edgeless,
}

/// A generated graph plus a root list to traverse it from.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub topology: Topology,
    pub graph: GraphModel,
    /// Root identities; may repeat and may name nodes that do not exist.
    pub roots: Vec<String>,
}
