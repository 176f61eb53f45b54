//! GML serialisation of a [`GraphModel`].

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use provgraph_core::{AttrValue, Attributes, GraphModel, UNDEFINED_LITERAL};
use tracing::{debug, instrument};

use crate::{GML_EXTENSION, errors::GmlError};

/// Node keys owned by the format; attributes with these names are not
/// written.
const RESERVED_NODE_KEYS: [&str; 2] = ["id", "label"];
/// Graph keys with structural meaning on read.
const RESERVED_GRAPH_KEYS: [&str; 4] = ["node", "edge", "directed", "multigraph"];

/// Writes `graph` as GML to `writer`.
///
/// Graph attributes come first, then every node as `id <index> label
/// "<identity>"` followed by its attributes, then every edge. Attributes
/// named `id` or `label` on nodes, and `node`, `edge`, `directed`, or
/// `multigraph` on the graph, are skipped.
///
/// # Errors
/// Returns [`GmlError::InvalidKey`] when an attribute name is not a GML key
/// and [`GmlError::Io`] when writing fails.
#[instrument(
    name = "gml.write",
    skip_all,
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
    err,
)]
pub fn write_to<W: Write>(graph: &GraphModel, writer: W) -> Result<(), GmlError> {
    let mut out = BufWriter::new(writer);
    writeln!(out, "graph [")?;
    write_attrs(&mut out, 1, graph.graph_attrs(), &RESERVED_GRAPH_KEYS)?;
    for node in graph.nodes() {
        let identity = graph.label(node).unwrap_or_default();
        writeln!(out, "  node [")?;
        writeln!(out, "    id {}", node.index())?;
        writeln!(out, "    label {}", quote(identity))?;
        if let Some(attrs) = graph.attrs(node) {
            write_attrs(&mut out, 2, attrs, &RESERVED_NODE_KEYS)?;
        }
        writeln!(out, "  ]")?;
    }
    for (left, right) in graph.edges() {
        writeln!(out, "  edge [")?;
        writeln!(out, "    source {}", left.index())?;
        writeln!(out, "    target {}", right.index())?;
        writeln!(out, "  ]")?;
    }
    writeln!(out, "]")?;
    out.flush()?;
    debug!("gml graph written");
    Ok(())
}

/// Renders `graph` as a GML string.
///
/// # Errors
/// Returns [`GmlError::InvalidKey`] when an attribute name is not a GML key.
///
/// # Examples
/// ```
/// use provgraph_core::GraphModel;
/// use provgraph_providers_gml::to_gml_string;
///
/// let mut graph = GraphModel::from_edges(["0", "1"], [("0", "1")])?;
/// graph.set_graph_attr("density", 1.0);
/// let text = to_gml_string(&graph)?;
/// assert!(text.starts_with("graph [\n  density 1.0\n"));
/// assert!(text.contains("  edge [\n    source 0\n    target 1\n  ]\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn to_gml_string(graph: &GraphModel) -> Result<String, GmlError> {
    let mut buffer = Vec::new();
    write_to(graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| {
        GmlError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}

/// Writes `graph` to a `.gml` file, replacing any existing file.
///
/// # Errors
/// Returns [`GmlError::UnsupportedExtension`] for other extensions,
/// [`GmlError::File`] when the file cannot be created, otherwise as
/// [`write_to`].
pub fn write_path(graph: &GraphModel, path: impl AsRef<Path>) -> Result<(), GmlError> {
    let path = path.as_ref();
    ensure_gml_extension(path)?;
    let file = File::create(path).map_err(|source| GmlError::File {
        path: path.to_path_buf(),
        source,
    })?;
    write_to(graph, file)
}

pub(crate) fn ensure_gml_extension(path: &Path) -> Result<(), GmlError> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(GML_EXTENSION));
    if matches {
        Ok(())
    } else {
        Err(GmlError::UnsupportedExtension {
            path: path.to_path_buf(),
        })
    }
}

fn write_attrs<W: Write>(
    out: &mut W,
    depth: usize,
    attrs: &Attributes,
    reserved: &[&str],
) -> Result<(), GmlError> {
    let indent = "  ".repeat(depth);
    for (name, value) in attrs {
        if reserved.contains(&name.as_str()) {
            continue;
        }
        if !is_valid_key(name) {
            return Err(GmlError::InvalidKey { name: name.clone() });
        }
        writeln!(out, "{indent}{name} {}", render(value))?;
    }
    Ok(())
}

fn is_valid_key(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn render(value: &AttrValue) -> String {
    match value {
        AttrValue::Int(value) => value.to_string(),
        AttrValue::Float(value) => render_float(*value),
        AttrValue::Str(value) => quote(value),
        AttrValue::Undefined => quote(UNDEFINED_LITERAL),
    }
}

fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-INF" } else { "INF" }.to_owned();
    }
    let text = format!("{value:?}");
    if text.contains('.') {
        text
    } else {
        // `{:?}` prints e.g. `1e-7`; keep the decimal point.
        text.replacen('e', ".0e", 1)
    }
}

fn quote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c => out.push_str(&format!("&#{};", u32::from(c))),
        }
    }
    out.push('"');
    out
}
