//! GML parsing into a [`GraphModel`].

use std::{
    collections::HashMap,
    fs,
    io::Read,
    path::Path,
    vec::IntoIter,
};

use provgraph_core::{AttrValue, Attributes, GraphBuilder, GraphModel, UNDEFINED_LITERAL};
use tracing::{debug, instrument};

use crate::{
    errors::GmlError,
    lexer::{Spanned, Token, special_real, tokenize},
    writer::ensure_gml_extension,
};

/// Which node labels are accepted as identities.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LabelPolicy {
    /// Labels must be non-empty strings of ASCII digits.
    #[default]
    Numeric,
    /// Any label is accepted.
    Any,
}

impl LabelPolicy {
    fn check(self, label: &str) -> Result<(), GmlError> {
        let numeric = !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit());
        if self == Self::Numeric && !numeric {
            return Err(GmlError::NonNumericLabel {
                label: label.to_owned(),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Value {
    Int(i64),
    Real(f64),
    Str(String),
    List(Vec<(String, Value)>),
}

impl Value {
    fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    fn into_attr(self) -> Option<AttrValue> {
        match self {
            Self::Int(value) => Some(AttrValue::Int(value)),
            Self::Real(value) => Some(AttrValue::Float(value)),
            Self::Str(value) if value == UNDEFINED_LITERAL => Some(AttrValue::Undefined),
            Self::Str(value) => Some(AttrValue::Str(value)),
            Self::List(_) => None,
        }
    }
}

/// Parses GML text into a graph.
///
/// # Errors
/// Returns [`GmlError`] when the text is not valid GML, describes a directed
/// graph or multigraph, breaks `policy`, or violates the simple-graph
/// invariants.
///
/// # Examples
/// ```
/// use provgraph_core::AttrValue;
/// use provgraph_providers_gml::{LabelPolicy, parse_str};
///
/// let graph = parse_str(
///     r#"graph [ node [ id 0 label "0" dist "undefined" ] node [ id 1 label "1" ]
///        edge [ source 0 target 1 ] ]"#,
///     LabelPolicy::Numeric,
/// )?;
/// let zero = graph.node_id("0").expect("node 0 exists");
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.attr(zero, "dist"), Some(&AttrValue::Undefined));
/// # Ok::<(), provgraph_providers_gml::GmlError>(())
/// ```
#[instrument(name = "gml.read", skip(input), fields(bytes = input.len()), err)]
pub fn parse_str(input: &str, policy: LabelPolicy) -> Result<GraphModel, GmlError> {
    let tokens = tokenize(input)?;
    let document = Parser {
        tokens: tokens.into_iter(),
    }
    .document()?;
    let graph = build_graph(document, policy)?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "gml graph parsed"
    );
    Ok(graph)
}

/// Reads GML from any byte source.
///
/// # Errors
/// Returns [`GmlError::Io`] when reading fails, otherwise as [`parse_str`].
pub fn read_from<R: Read>(mut reader: R, policy: LabelPolicy) -> Result<GraphModel, GmlError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_str(&text, policy)
}

/// Reads a `.gml` file.
///
/// # Errors
/// Returns [`GmlError::UnsupportedExtension`] for other extensions,
/// [`GmlError::File`] when the file cannot be read, otherwise as
/// [`parse_str`].
pub fn read_path(path: impl AsRef<Path>, policy: LabelPolicy) -> Result<GraphModel, GmlError> {
    let path = path.as_ref();
    ensure_gml_extension(path)?;
    let text = fs::read_to_string(path).map_err(|source| GmlError::File {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text, policy)
}

struct Parser {
    tokens: IntoIter<Spanned>,
}

impl Parser {
    fn document(mut self) -> Result<Vec<(String, Value)>, GmlError> {
        let items = self.items()?;
        match self.tokens.next() {
            None => Ok(items),
            Some(Spanned { token, line }) => Err(GmlError::UnexpectedToken {
                line,
                expected: "a key",
                found: token.describe(),
            }),
        }
    }

    /// Reads `key value` pairs until `]` or end of input, leaving the `]`.
    fn items(&mut self) -> Result<Vec<(String, Value)>, GmlError> {
        let mut items = Vec::new();
        loop {
            match self.tokens.as_slice().first() {
                None
                | Some(Spanned {
                    token: Token::Close,
                    ..
                }) => return Ok(items),
                Some(_) => {}
            }
            let key = match self.tokens.next() {
                Some(Spanned {
                    token: Token::Key(key),
                    ..
                }) => key,
                Some(Spanned { token, line }) => {
                    return Err(GmlError::UnexpectedToken {
                        line,
                        expected: "a key",
                        found: token.describe(),
                    });
                }
                None => return Ok(items),
            };
            let value = self.value()?;
            items.push((key, value));
        }
    }

    fn value(&mut self) -> Result<Value, GmlError> {
        let Some(Spanned { token, line }) = self.tokens.next() else {
            return Err(GmlError::UnexpectedEof { expected: "a value" });
        };
        match token {
            Token::Int(value) => Ok(Value::Int(value)),
            Token::Real(value) => Ok(Value::Real(value)),
            Token::Str(value) => Ok(Value::Str(value)),
            Token::Open => {
                let items = self.items()?;
                match self.tokens.next() {
                    Some(Spanned {
                        token: Token::Close,
                        ..
                    }) => Ok(Value::List(items)),
                    _ => Err(GmlError::UnexpectedEof { expected: "`]`" }),
                }
            }
            Token::Key(word) => special_real(&word)
                .map(Value::Real)
                .ok_or_else(|| GmlError::UnexpectedToken {
                    line,
                    expected: "a value",
                    found: format!("key `{word}`"),
                }),
            Token::Close => Err(GmlError::UnexpectedToken {
                line,
                expected: "a value",
                found: token.describe(),
            }),
        }
    }
}

fn build_graph(document: Vec<(String, Value)>, policy: LabelPolicy) -> Result<GraphModel, GmlError> {
    let body = document
        .into_iter()
        .find_map(|(key, value)| match (key.as_str(), value) {
            ("graph", Value::List(items)) => Some(items),
            _ => None,
        })
        .ok_or(GmlError::MissingGraph)?;

    let mut builder = GraphBuilder::new();
    let mut labels_by_id: HashMap<i64, String> = HashMap::new();
    let mut edges = Vec::new();
    let mut node_position = 0_usize;

    for (key, value) in body {
        match key.as_str() {
            "directed" | "multigraph" => {
                if value.as_int().is_some_and(|flag| flag != 0) {
                    let kind = if key == "directed" { "directed" } else { "multigraph" };
                    return Err(GmlError::UnsupportedGraphKind { key: kind });
                }
            }
            "node" => {
                let Value::List(items) = value else {
                    continue;
                };
                let (id, label, attrs) = parse_node(items, node_position, policy)?;
                node_position += 1;
                if labels_by_id.contains_key(&id) {
                    return Err(GmlError::DuplicateNodeId { id });
                }
                builder.add_node_with_attrs(label.clone(), attrs)?;
                labels_by_id.insert(id, label);
            }
            "edge" => {
                if let Value::List(items) = value {
                    edges.push(items);
                }
            }
            _ => {
                if let Some(attr) = value.into_attr() {
                    builder.set_graph_attr(key, attr);
                }
            }
        }
    }

    for (position, items) in edges.into_iter().enumerate() {
        let source = endpoint(&items, "source", position)?;
        let target = endpoint(&items, "target", position)?;
        let lookup = |id: i64| {
            labels_by_id
                .get(&id)
                .ok_or(GmlError::UnknownNodeId { position, id })
        };
        builder.add_edge(lookup(source)?, lookup(target)?)?;
    }
    Ok(builder.build())
}

fn parse_node(
    items: Vec<(String, Value)>,
    position: usize,
    policy: LabelPolicy,
) -> Result<(i64, String, Attributes), GmlError> {
    let mut id = None;
    let mut label = None;
    let mut attrs = Attributes::new();
    for (key, value) in items {
        match (key.as_str(), &value) {
            ("id", Value::Int(raw)) => id = Some(*raw),
            ("label", Value::Int(raw)) => label = Some(raw.to_string()),
            ("label", Value::Str(_)) => {
                if let Value::Str(text) = value {
                    label = Some(text);
                }
            }
            _ => {
                if let Some(attr) = value.into_attr() {
                    attrs.insert(key, attr);
                }
            }
        }
    }
    let id = id.ok_or(GmlError::MissingNodeId { position })?;
    let label = label.unwrap_or_else(|| id.to_string());
    policy.check(&label)?;
    Ok((id, label, attrs))
}

fn endpoint(items: &[(String, Value)], key: &'static str, position: usize) -> Result<i64, GmlError> {
    items
        .iter()
        .find(|(name, _)| name == key)
        .and_then(|(_, value)| value.as_int())
        .ok_or(GmlError::MissingEndpoint { position, key })
}
