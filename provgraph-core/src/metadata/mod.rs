//! Writes traversal and analysis results onto attribute bags, and reads them
//! back.
//!
//! Writers cannot fail on a well-formed [`GraphModel`]. Nodes a BFS did not
//! reach receive [`AttrValue::Undefined`] for `dist`, `source`, and `parent`
//! rather than being left unset, so persistence layers can round-trip the
//! distinction between "not computed" and "computed, no value".

pub mod keys;

use tracing::{debug, instrument};

use crate::{
    Result,
    analysis::{ComponentAssignment, StructuralSummary},
    attr::AttrValue,
    bfs::{BfsEntry, BfsResult},
    error::GraphError,
    graph::{GraphModel, NodeId},
};

const GRAPH_SCOPE: &str = "<graph>";
const TRUE_LITERAL: &str = "true";
const FALSE_LITERAL: &str = "false";

/// Writes `dist`, `source`, and `parent` on every node.
///
/// Roots get distance zero and an undefined parent.
#[instrument(name = "core.attach_bfs", skip_all, fields(nodes = graph.node_count()))]
pub fn attach_bfs(graph: &mut GraphModel, result: &BfsResult) {
    let nodes: Vec<NodeId> = graph.nodes().collect();
    for node in nodes {
        let (dist, source, parent) = match result.entry(node) {
            Some(entry) => (
                AttrValue::Int(saturating_i64(entry.distance())),
                label_value(graph, Some(entry.source())),
                label_value(graph, entry.parent()),
            ),
            None => (AttrValue::Undefined, AttrValue::Undefined, AttrValue::Undefined),
        };
        graph.set_attr(node, keys::DIST, dist);
        graph.set_attr(node, keys::SOURCE, source);
        graph.set_attr(node, keys::PARENT, parent);
    }
    debug!(reached = result.reached_count(), "bfs metadata attached");
}

/// Writes `componentID` on every node.
#[instrument(name = "core.attach_components", skip_all, fields(components = assignment.count()))]
pub fn attach_components(graph: &mut GraphModel, assignment: &ComponentAssignment) {
    let nodes: Vec<NodeId> = graph.nodes().collect();
    for node in nodes {
        if let Some(id) = assignment.component_of(node) {
            graph.set_attr(node, keys::COMPONENT_ID, AttrValue::Int(saturating_i64(id)));
        }
    }
}

/// Writes `isolate` as `"true"` or `"false"` on every node.
#[instrument(name = "core.attach_isolates", skip_all, fields(isolates = isolates.len()))]
pub fn attach_isolates(graph: &mut GraphModel, isolates: &[NodeId]) {
    let mut mask = vec![false; graph.node_count()];
    for node in isolates {
        if let Some(slot) = mask.get_mut(node.index()) {
            *slot = true;
        }
    }
    for (node, isolated) in graph.nodes().zip(mask) {
        let flag = if isolated {
            TRUE_LITERAL
        } else {
            FALSE_LITERAL
        };
        graph.set_attr(node, keys::ISOLATE, flag);
    }
}

/// Writes the graph-level scalars of `summary`.
///
/// `has_cycle` is stored as integer `1`/`0`; an undefined average path length
/// is stored as [`AttrValue::Undefined`].
#[instrument(name = "core.attach_summary", skip_all)]
pub fn attach_summary(graph: &mut GraphModel, summary: &StructuralSummary) {
    graph.set_graph_attr(
        keys::NUM_COMPONENTS,
        AttrValue::Int(saturating_i64(summary.component_count)),
    );
    graph.set_graph_attr(keys::HAS_CYCLE, summary.has_cycle);
    graph.set_graph_attr(keys::DENSITY, summary.density);
    graph.set_graph_attr(keys::AVG_SHORTEST_PATH, summary.average_shortest_path);
}

/// Attaches a full structural summary: node component ids, isolate flags,
/// and graph-level scalars.
pub fn attach_analysis(
    graph: &mut GraphModel,
    assignment: &ComponentAssignment,
    summary: &StructuralSummary,
) {
    attach_components(graph, assignment);
    attach_isolates(graph, &summary.isolates);
    attach_summary(graph, summary);
}

/// Rebuilds a [`BfsResult`] from `dist`/`source`/`parent` attributes.
///
/// # Errors
/// Returns [`GraphError::MissingAttribute`] when a node lacks `dist`, and
/// [`GraphError::InvalidAttribute`] when a value has the wrong kind or names
/// an unknown node.
pub fn read_bfs(graph: &GraphModel) -> Result<BfsResult> {
    let mut entries = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let dist = required(graph, node, keys::DIST)?;
        let entry = match dist {
            AttrValue::Undefined => None,
            AttrValue::Int(raw) => {
                let distance =
                    usize::try_from(*raw).map_err(|_| invalid(graph, node, keys::DIST, dist))?;
                let source = read_node_ref(graph, node, keys::SOURCE)?
                    .ok_or_else(|| invalid(graph, node, keys::SOURCE, &AttrValue::Undefined))?;
                let parent = read_node_ref(graph, node, keys::PARENT)?;
                Some(BfsEntry::new(distance, parent, source))
            }
            other => return Err(invalid(graph, node, keys::DIST, other)),
        };
        entries.push(entry);
    }
    Ok(BfsResult::from_entries(entries))
}

/// Rebuilds a [`ComponentAssignment`] from `componentID` attributes.
///
/// # Errors
/// Returns [`GraphError::MissingAttribute`] or
/// [`GraphError::InvalidAttribute`] when an id is absent or not a
/// non-negative integer.
pub fn read_components(graph: &GraphModel) -> Result<ComponentAssignment> {
    let mut ids = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let value = required(graph, node, keys::COMPONENT_ID)?;
        let id = value
            .as_int()
            .and_then(|raw| usize::try_from(raw).ok())
            .ok_or_else(|| invalid(graph, node, keys::COMPONENT_ID, value))?;
        ids.push(id);
    }
    Ok(ComponentAssignment::from_ids(ids))
}

/// Collects nodes flagged `isolate = "true"`, in node order.
///
/// # Errors
/// Returns [`GraphError::MissingAttribute`] or
/// [`GraphError::InvalidAttribute`] when a flag is absent or not
/// `"true"`/`"false"`.
pub fn read_isolates(graph: &GraphModel) -> Result<Vec<NodeId>> {
    let mut isolates = Vec::new();
    for node in graph.nodes() {
        let value = required(graph, node, keys::ISOLATE)?;
        match value.as_str() {
            Some(TRUE_LITERAL) => isolates.push(node),
            Some(FALSE_LITERAL) => {}
            _ => return Err(invalid(graph, node, keys::ISOLATE, value)),
        }
    }
    Ok(isolates)
}

/// Rebuilds a [`StructuralSummary`] from graph-level scalars and node
/// isolate flags.
///
/// # Errors
/// Returns [`GraphError::MissingAttribute`] or
/// [`GraphError::InvalidAttribute`] when a scalar is absent or mistyped.
pub fn read_summary(graph: &GraphModel) -> Result<StructuralSummary> {
    let components = graph_scalar(graph, keys::NUM_COMPONENTS)?;
    let component_count = components
        .as_int()
        .and_then(|raw| usize::try_from(raw).ok())
        .ok_or_else(|| invalid_graph(keys::NUM_COMPONENTS, components))?;

    let cycle = graph_scalar(graph, keys::HAS_CYCLE)?;
    let has_cycle = match cycle.as_int() {
        Some(0) => false,
        Some(1) => true,
        _ => return Err(invalid_graph(keys::HAS_CYCLE, cycle)),
    };

    let raw_density = graph_scalar(graph, keys::DENSITY)?;
    let density = raw_density
        .as_float()
        .ok_or_else(|| invalid_graph(keys::DENSITY, raw_density))?;

    let raw_average = graph_scalar(graph, keys::AVG_SHORTEST_PATH)?;
    let average_shortest_path = match raw_average {
        AttrValue::Undefined => None,
        other => Some(
            other
                .as_float()
                .ok_or_else(|| invalid_graph(keys::AVG_SHORTEST_PATH, other))?,
        ),
    };

    Ok(StructuralSummary {
        component_count,
        has_cycle,
        isolates: read_isolates(graph)?,
        density,
        average_shortest_path,
    })
}

fn label_value(graph: &GraphModel, node: Option<NodeId>) -> AttrValue {
    node.and_then(|id| graph.label(id))
        .map_or(AttrValue::Undefined, AttrValue::from)
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn required<'g>(graph: &'g GraphModel, node: NodeId, name: &'static str) -> Result<&'g AttrValue> {
    graph
        .attr(node, name)
        .ok_or_else(|| GraphError::MissingAttribute {
            node: graph.display_label(node),
            name,
        })
}

fn read_node_ref(graph: &GraphModel, node: NodeId, name: &'static str) -> Result<Option<NodeId>> {
    match required(graph, node, name)? {
        AttrValue::Undefined => Ok(None),
        AttrValue::Str(label) => graph
            .node_id(label)
            .map(Some)
            .ok_or_else(|| invalid(graph, node, name, &AttrValue::Str(label.clone()))),
        other => Err(invalid(graph, node, name, other)),
    }
}

fn graph_scalar<'g>(graph: &'g GraphModel, name: &'static str) -> Result<&'g AttrValue> {
    graph
        .graph_attr(name)
        .ok_or_else(|| GraphError::MissingAttribute {
            node: GRAPH_SCOPE.to_owned(),
            name,
        })
}

fn invalid(graph: &GraphModel, node: NodeId, name: &'static str, value: &AttrValue) -> GraphError {
    GraphError::InvalidAttribute {
        node: graph.display_label(node),
        name,
        value: value.to_string(),
    }
}

fn invalid_graph(name: &'static str, value: &AttrValue) -> GraphError {
    GraphError::InvalidAttribute {
        node: GRAPH_SCOPE.to_owned(),
        name,
        value: value.to_string(),
    }
}
