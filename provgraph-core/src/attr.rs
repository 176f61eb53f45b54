//! Tagged attribute values stored on nodes and on the graph itself.
//!
//! Attribute bags are ordered maps from name to [`AttrValue`]. The
//! [`AttrValue::Undefined`] variant is a first-class value: it marks results
//! that were computed but have no meaningful value (an unreached node, a
//! disconnected graph) and must survive persistence distinctly from an absent
//! attribute.

use std::{collections::BTreeMap, fmt};

/// Literal used by interchange formats to spell [`AttrValue::Undefined`].
pub const UNDEFINED_LITERAL: &str = "undefined";

/// Ordered attribute bag keyed by attribute name.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A dynamically typed attribute value.
///
/// # Examples
/// ```
/// use provgraph_core::AttrValue;
///
/// assert_eq!(AttrValue::from(3_i64).as_int(), Some(3));
/// assert_eq!(AttrValue::from("0").as_str(), Some("0"));
/// assert!(AttrValue::Undefined.is_undefined());
/// assert_eq!(AttrValue::Undefined.to_string(), "undefined");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Signed integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// UTF-8 string value.
    Str(String),
    /// Explicit "no value" marker.
    Undefined,
}

impl AttrValue {
    /// Returns the integer payload, if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float payload, widening integers.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "interchange formats may store whole-number floats as integers"
    )]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` for [`AttrValue::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Str(value) => f.write_str(value),
            Self::Undefined => f.write_str(UNDEFINED_LITERAL),
        }
    }
}
