//! Error types for the provgraph core library.
//!
//! Defines the error enum exposed by the public API, its stable codes, and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr, $class:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Return the broad failure class this code belongs to.
            #[must_use]
            pub const fn class(self) -> ErrorClass {
                match self {
                    $(Self::$CodeVariant => ErrorClass::$class,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad failure classes shared by every [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    /// Caller-supplied parameters were rejected before any work started.
    InvalidParameter,
    /// Graph topology violated the simple-graph invariants.
    MalformedGraph,
    /// Attributes written on a graph could not be read back as results.
    MalformedMetadata,
}

/// Error type produced by graph construction, generation, and traversal.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// Random graphs need at least two nodes for `ln(n)` to be positive.
    #[error("node_count must be at least 2 (got {got})")]
    InvalidNodeCount {
        /// The rejected node count.
        got: usize,
    },
    /// The density coefficient must be finite and non-negative.
    #[error("density coefficient must be finite and non-negative (got {got})")]
    InvalidDensityCoefficient {
        /// The rejected coefficient.
        got: f64,
    },
    /// A root was not present in the graph and the strict root policy was
    /// selected.
    #[error("root `{node}` is not a node of the graph")]
    UnknownRoot {
        /// Identity of the missing root.
        node: String,
    },
    /// A node identity was added twice.
    #[error("node `{node}` already exists")]
    DuplicateNode {
        /// The repeated identity.
        node: String,
    },
    /// An edge referenced a node that does not exist.
    #[error("edge endpoint `{node}` is not a node of the graph")]
    UnknownEndpoint {
        /// The missing endpoint identity.
        node: String,
    },
    /// An edge connected a node to itself.
    #[error("self-loop on node `{node}` is not allowed in a simple graph")]
    SelfLoop {
        /// The node carrying the loop.
        node: String,
    },
    /// The same unordered pair was added twice.
    #[error("edge `{left}` -- `{right}` already exists")]
    DuplicateEdge {
        /// First endpoint as supplied.
        left: String,
        /// Second endpoint as supplied.
        right: String,
    },
    /// A node lacked an attribute required to rebuild a result.
    #[error("node `{node}` is missing attribute `{name}`")]
    MissingAttribute {
        /// Node (or `<graph>`) that lacked the attribute.
        node: String,
        /// Attribute name.
        name: &'static str,
    },
    /// An attribute held a value of the wrong kind.
    #[error("attribute `{name}` on `{node}` holds unexpected value `{value}`")]
    InvalidAttribute {
        /// Node (or `<graph>`) holding the attribute.
        node: String,
        /// Attribute name.
        name: &'static str,
        /// Rendered offending value.
        value: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Random graphs need at least two nodes.
        InvalidNodeCount => InvalidNodeCount { .. } => "GRAPH_INVALID_NODE_COUNT", InvalidParameter,
        /// The density coefficient was negative or non-finite.
        InvalidDensityCoefficient => InvalidDensityCoefficient { .. } => "GRAPH_INVALID_DENSITY_COEFFICIENT", InvalidParameter,
        /// A root was missing under the strict root policy.
        UnknownRoot => UnknownRoot { .. } => "GRAPH_UNKNOWN_ROOT", InvalidParameter,
        /// A node identity was added twice.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE", MalformedGraph,
        /// An edge referenced a node that does not exist.
        UnknownEndpoint => UnknownEndpoint { .. } => "GRAPH_UNKNOWN_ENDPOINT", MalformedGraph,
        /// An edge connected a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP", MalformedGraph,
        /// The same unordered pair was added twice.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE", MalformedGraph,
        /// A required attribute was absent.
        MissingAttribute => MissingAttribute { .. } => "GRAPH_MISSING_ATTRIBUTE", MalformedMetadata,
        /// An attribute held a value of the wrong kind.
        InvalidAttribute => InvalidAttribute { .. } => "GRAPH_INVALID_ATTRIBUTE", MalformedMetadata,
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
