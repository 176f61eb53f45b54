//! GML reader and writer for provgraph graphs.
//!
//! Reads undirected simple graphs whose node identity is the GML `label`
//! (falling back to the numeric `id`) and writes annotated graphs back out,
//! preserving [`AttrValue::Undefined`](provgraph_core::AttrValue::Undefined)
//! as the string `"undefined"`.

mod errors;
mod lexer;
mod reader;
mod writer;

pub use errors::{GmlError, GmlErrorCode};
pub use reader::{LabelPolicy, parse_str, read_from, read_path};
pub use writer::{to_gml_string, write_path, write_to};

/// File extension accepted by [`read_path`] and [`write_path`].
pub const GML_EXTENSION: &str = "gml";
