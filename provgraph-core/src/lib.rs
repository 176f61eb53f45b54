//! Provgraph core library.
//!
//! Undirected simple graphs with string node identities and attribute bags,
//! an Erdős–Rényi generator, multi-source breadth-first search with
//! provenance, structural analysis, and a metadata layer that writes results
//! back onto the graph.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod attr;
mod bfs;
mod error;
mod generator;
mod graph;
pub mod metadata;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    analysis::{
        ComponentAssignment, StructuralSummary, average_shortest_path_length, components, density,
        has_cycle, isolates,
    },
    attr::{AttrValue, Attributes, UNDEFINED_LITERAL},
    bfs::{
        BfsEntry, BfsResult, RootPolicy, ShortestPathTree, multi_source_bfs,
        multi_source_bfs_with_policy, shortest_path_trees,
    },
    error::{ErrorClass, GraphError, GraphErrorCode, Result},
    generator::{
        DEFAULT_SEED, GeneratorParams, LABEL_ATTR, generate_random_graph,
        generate_random_graph_with_rng, seed_from_clock,
    },
    graph::{GraphBuilder, GraphModel, NodeId},
};
