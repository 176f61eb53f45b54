//! Average shortest-path length via all-sources BFS.
//!
//! With the `parallel` feature the per-source traversals run on the Rayon
//! pool; each traversal owns its own buffers.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    bfs::level_order,
    graph::{GraphModel, NodeId},
};

use super::components;

/// Mean shortest-path length over all unordered node pairs.
///
/// Returns `None` when the graph is empty or has more than one component. A
/// single-node graph is connected with no pairs and yields `Some(0.0)`.
///
/// # Examples
/// ```
/// use provgraph_core::{GraphModel, average_shortest_path_length};
///
/// let connected = GraphModel::from_edges(["0", "1", "2"], [("0", "1"), ("1", "2")])?;
/// let average = average_shortest_path_length(&connected).expect("graph is connected");
/// assert!((average - 4.0 / 3.0).abs() < 1e-12);
///
/// let split = GraphModel::from_edges(["0", "1", "2"], [("0", "1")])?;
/// assert_eq!(average_shortest_path_length(&split), None);
/// # Ok::<(), provgraph_core::GraphError>(())
/// ```
#[must_use]
pub fn average_shortest_path_length(graph: &GraphModel) -> Option<f64> {
    average_for_components(graph, components(graph).count())
}

#[instrument(
    name = "core.average_shortest_path",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "the average is a real-valued mean of integer hop counts"
)]
pub(super) fn average_for_components(graph: &GraphModel, component_count: usize) -> Option<f64> {
    if component_count != 1 {
        debug!(component_count, "average shortest path undefined");
        return None;
    }
    let nodes = graph.node_count();
    if nodes < 2 {
        return Some(0.0);
    }
    let total = total_pairwise_distance(graph);
    // Every ordered pair is counted once, i.e. each unordered pair twice.
    let pairs = nodes as f64 * (nodes - 1) as f64;
    let average = total as f64 / pairs;
    debug!(average, "average shortest path computed");
    Some(average)
}

#[cfg(feature = "parallel")]
fn total_pairwise_distance(graph: &GraphModel) -> u64 {
    (0..graph.node_count())
        .into_par_iter()
        .map(|index| distance_sum_from(graph, NodeId::new(index)))
        .sum()
}

#[cfg(not(feature = "parallel"))]
fn total_pairwise_distance(graph: &GraphModel) -> u64 {
    graph
        .nodes()
        .map(|source| distance_sum_from(graph, source))
        .sum()
}

fn distance_sum_from(graph: &GraphModel, source: NodeId) -> u64 {
    let mut sum = 0_u64;
    level_order(graph, &[source], |_, _, depth| {
        sum = sum.saturating_add(depth as u64);
    });
    sum
}
