use std::{io, path::PathBuf};

use provgraph_core::GraphError;
use thiserror::Error;

/// Errors raised while reading or writing GML.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GmlError {
    #[error("`{path}` must have a `.gml` extension")]
    UnsupportedExtension { path: PathBuf },
    #[error("failed to access `{path}`: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: unexpected character {found:?}")]
    UnexpectedCharacter { line: usize, found: char },
    #[error("line {line}: unterminated string")]
    UnterminatedString { line: usize },
    #[error("line {line}: invalid number `{text}`")]
    InvalidNumber { line: usize, text: String },
    #[error("line {line}: expected {expected} but found {found}")]
    UnexpectedToken {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("input contains no `graph` list")]
    MissingGraph,
    #[error("`{key} 1` graphs are not supported")]
    UnsupportedGraphKind { key: &'static str },
    #[error("node #{position} has no integer `id`")]
    MissingNodeId { position: usize },
    #[error("node id {id} appears more than once")]
    DuplicateNodeId { id: i64 },
    #[error("node label `{label}` is not a non-negative integer")]
    NonNumericLabel { label: String },
    #[error("edge #{position} has no integer `{key}`")]
    MissingEndpoint { position: usize, key: &'static str },
    #[error("edge #{position} references unknown node id {id}")]
    UnknownNodeId { position: usize, id: i64 },
    #[error("attribute name `{name}` is not a valid GML key")]
    InvalidKey { name: String },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Stable machine-readable codes for [`GmlError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GmlErrorCode {
    /// Path lacked the `.gml` extension.
    UnsupportedExtension,
    /// Opening, reading, or writing failed.
    Io,
    /// The input was not lexically or syntactically valid GML.
    Syntax,
    /// Valid GML describing an unsupported or inconsistent graph.
    Structure,
    /// The graph could not be built or serialised.
    Graph,
}

impl GmlErrorCode {
    /// Return the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnsupportedExtension => "GML_UNSUPPORTED_EXTENSION",
            Self::Io => "GML_IO",
            Self::Syntax => "GML_SYNTAX",
            Self::Structure => "GML_STRUCTURE",
            Self::Graph => "GML_GRAPH",
        }
    }
}

impl GmlError {
    /// Retrieve the stable [`GmlErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> GmlErrorCode {
        match self {
            Self::UnsupportedExtension { .. } => GmlErrorCode::UnsupportedExtension,
            Self::File { .. } | Self::Io(_) => GmlErrorCode::Io,
            Self::UnexpectedCharacter { .. }
            | Self::UnterminatedString { .. }
            | Self::InvalidNumber { .. }
            | Self::UnexpectedToken { .. }
            | Self::UnexpectedEof { .. } => GmlErrorCode::Syntax,
            Self::MissingGraph
            | Self::UnsupportedGraphKind { .. }
            | Self::MissingNodeId { .. }
            | Self::DuplicateNodeId { .. }
            | Self::NonNumericLabel { .. }
            | Self::MissingEndpoint { .. }
            | Self::UnknownNodeId { .. } => GmlErrorCode::Structure,
            Self::InvalidKey { .. } | Self::Graph(_) => GmlErrorCode::Graph,
        }
    }

    /// The core error code when this error wraps a [`GraphError`].
    #[must_use]
    pub const fn graph_code(&self) -> Option<provgraph_core::GraphErrorCode> {
        match self {
            Self::Graph(err) => Some(err.code()),
            _ => None,
        }
    }
}
