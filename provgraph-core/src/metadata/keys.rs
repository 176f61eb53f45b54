//! Attribute names written by the metadata attacher.

/// Node: hop count to the nearest root, or undefined.
pub const DIST: &str = "dist";
/// Node: identity of the attributed root, or undefined.
pub const SOURCE: &str = "source";
/// Node: identity of the BFS parent, or undefined for roots and unreached
/// nodes.
pub const PARENT: &str = "parent";
/// Node: connected component id.
pub const COMPONENT_ID: &str = "componentID";
/// Node: `"true"` for degree-zero nodes, `"false"` otherwise.
pub const ISOLATE: &str = "isolate";
/// Graph: number of connected components.
pub const NUM_COMPONENTS: &str = "num_components";
/// Graph: `1` when the graph contains a cycle, `0` otherwise.
pub const HAS_CYCLE: &str = "has_cycle";
/// Graph: edge density.
pub const DENSITY: &str = "density";
/// Graph: mean shortest-path length, or undefined when disconnected.
pub const AVG_SHORTEST_PATH: &str = "avg_shortest_path";
