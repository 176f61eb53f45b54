//! Erdős–Rényi random graph generation.
//!
//! Each unordered pair of distinct nodes is joined independently with
//! probability `p = c·ln(n)/n`, clamped to `[0, 1]`. Node identities are the
//! decimal strings `"0"..="n-1"` and each node carries a matching `label`
//! attribute.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    Result,
    attr::{AttrValue, Attributes},
    error::GraphError,
    graph::{GraphBuilder, GraphModel, NodeId},
};

/// Attribute written on every generated node, mirroring its identity.
pub const LABEL_ATTR: &str = "label";

/// Seed used by [`GeneratorParams::new`] until [`GeneratorParams::with_seed`]
/// overrides it.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Validated parameters for [`generate_random_graph`].
///
/// # Examples
/// ```
/// use provgraph_core::GeneratorParams;
///
/// let params = GeneratorParams::new(100, 1.5)?.with_seed(7);
/// assert_eq!(params.node_count(), 100);
/// assert_eq!(params.seed(), 7);
/// assert!(params.edge_probability() > 0.0);
/// # Ok::<(), provgraph_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorParams {
    node_count: usize,
    coefficient: f64,
    seed: u64,
}

impl GeneratorParams {
    /// Validates the node count and density coefficient.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeCount`] when `node_count < 2` (the
    /// edge probability is undefined because `ln(n) <= 0`) and
    /// [`GraphError::InvalidDensityCoefficient`] when `coefficient` is
    /// negative or not finite.
    pub fn new(node_count: usize, coefficient: f64) -> Result<Self> {
        if node_count < 2 {
            return Err(GraphError::InvalidNodeCount { got: node_count });
        }
        if !coefficient.is_finite() || coefficient < 0.0 {
            return Err(GraphError::InvalidDensityCoefficient { got: coefficient });
        }
        Ok(Self {
            node_count,
            coefficient,
            seed: DEFAULT_SEED,
        })
    }

    /// Seeds the generator so repeated runs produce identical edge sets.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of nodes to generate.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Density coefficient `c`.
    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Seed used by [`generate_random_graph`].
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Per-pair edge probability `c·ln(n)/n`, clamped to `[0, 1]`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "the Erdős–Rényi edge probability is a real-valued formula"
    )]
    pub fn edge_probability(&self) -> f64 {
        let n = self.node_count as f64;
        (self.coefficient * n.ln() / n).clamp(0.0, 1.0)
    }
}

/// Derives a seed from wall-clock seconds for interactive use.
#[must_use]
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(DEFAULT_SEED, |elapsed| elapsed.as_secs())
}

/// Generates a random graph seeded from `params`.
///
/// # Examples
/// ```
/// use provgraph_core::{GeneratorParams, generate_random_graph};
///
/// let params = GeneratorParams::new(20, 2.0)?.with_seed(42);
/// let first = generate_random_graph(&params);
/// let second = generate_random_graph(&params);
/// assert_eq!(first.node_count(), 20);
/// assert_eq!(first.edges(), second.edges());
/// # Ok::<(), provgraph_core::GraphError>(())
/// ```
#[must_use]
pub fn generate_random_graph(params: &GeneratorParams) -> GraphModel {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    generate_random_graph_with_rng(params, &mut rng)
}

/// Generates a random graph drawing from a caller-supplied random source.
#[instrument(
    name = "core.generate",
    skip(params, rng),
    fields(nodes = params.node_count, coefficient = params.coefficient, seed = params.seed),
)]
pub fn generate_random_graph_with_rng<R: Rng + ?Sized>(
    params: &GeneratorParams,
    rng: &mut R,
) -> GraphModel {
    let probability = params.edge_probability();
    let mut builder = GraphBuilder::with_capacity(params.node_count);
    for index in 0..params.node_count {
        let label = index.to_string();
        let mut attrs = Attributes::new();
        attrs.insert(LABEL_ATTR.to_owned(), AttrValue::Str(label.clone()));
        builder.push_node(label, attrs);
    }

    for low in 0..params.node_count {
        for high in (low + 1)..params.node_count {
            if rng.gen_bool(probability) {
                builder.push_edge((NodeId::new(low), NodeId::new(high)));
            }
        }
    }

    let graph = builder.build();
    debug!(
        edges = graph.edge_count(),
        probability, "random graph generated"
    );
    graph
}
