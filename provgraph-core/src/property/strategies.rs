//! Graph fixture generators.
//!
//! Node identities are decimal strings inserted in shuffled order, so dense
//! indices and identities never coincide by accident.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::{GraphBuilder, GraphModel};

use super::types::{GraphFixture, Topology};

const MAX_NODES: usize = 24;
const DENSE_MAX_NODES: usize = 12;
const MAX_ROOTS: usize = 4;
/// A root identity no generated graph contains.
pub(super) const MISSING_ROOT: &str = "missing";

/// Fixtures across every [`Topology`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Builds a fixture of the given shape from `rng`.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let (node_count, edges) = match topology {
        Topology::Sparse => {
            let n = rng.gen_range(1..=MAX_NODES);
            let probability = rng.gen_range(0.02..0.15);
            (n, random_edges(rng, 0..n, probability))
        }
        Topology::Dense => {
            let n = rng.gen_range(2..=DENSE_MAX_NODES);
            let probability = rng.gen_range(0.5..0.95);
            (n, random_edges(rng, 0..n, probability))
        }
        Topology::Forest => {
            let n = rng.gen_range(1..=MAX_NODES);
            (n, random_forest(rng, n))
        }
        Topology::Disconnected => {
            let n = rng.gen_range(4..=MAX_NODES);
            let split = rng.gen_range(1..n);
            let mut edges = random_edges(rng, 0..split, 0.6);
            edges.extend(random_edges(rng, split..n, 0.6));
            (n, edges)
        }
        Topology::Edgeless => (rng.gen_range(1..=MAX_NODES), Vec::new()),
    };
    let graph = build(rng, node_count, &edges);
    let roots = pick_roots(rng, node_count);
    GraphFixture {
        topology,
        graph,
        roots,
    }
}

fn random_edges(
    rng: &mut SmallRng,
    nodes: std::ops::Range<usize>,
    probability: f64,
) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for left in nodes.clone() {
        for right in (left + 1)..nodes.end {
            if rng.gen_bool(probability) {
                edges.push((left, right));
            }
        }
    }
    edges
}

/// Attaches each node to a random earlier node, except for fresh tree roots.
fn random_forest(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for child in 1..node_count {
        if rng.gen_bool(0.85) {
            edges.push((rng.gen_range(0..child), child));
        }
    }
    edges
}

fn build(rng: &mut SmallRng, node_count: usize, edges: &[(usize, usize)]) -> GraphModel {
    let mut order: Vec<usize> = (0..node_count).collect();
    order.shuffle(rng);
    let mut builder = GraphBuilder::with_capacity(node_count);
    for label in order {
        builder
            .add_node(label.to_string())
            .expect("generated identities are unique");
    }
    for &(left, right) in edges {
        builder
            .add_edge(&left.to_string(), &right.to_string())
            .expect("generated edges are simple");
    }
    builder.build()
}

fn pick_roots(rng: &mut SmallRng, node_count: usize) -> Vec<String> {
    let count = rng.gen_range(0..=MAX_ROOTS);
    let mut roots: Vec<String> = (0..count)
        .map(|_| rng.gen_range(0..node_count).to_string())
        .collect();
    if rng.gen_bool(0.2) {
        roots.push(MISSING_ROOT.to_owned());
    }
    roots
}
