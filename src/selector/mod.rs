//! Selector rules for noise detection.
//!
//! A [`NoiseRule`] is a pattern matched against an element: by tag name, by
//! attribute presence/value, by attribute-value prefix, or by a substring
//! marker over the element's combined class/id string. The Noise Filter
//! holds an ordered list of rules, but matching is set-membership - rule
//! order never affects the outcome.

use dom_query::Selection;

pub mod noise;
pub mod utils;

pub use noise::default_rules;

/// A pattern matched against a single element during noise filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoiseRule {
    /// Matches elements with this (lower-cased) tag name.
    Tag(String),

    /// Matches elements carrying the attribute; with `value` set, the
    /// attribute value must match exactly.
    Attr {
        /// Attribute name.
        name: String,
        /// Required attribute value, or `None` for bare presence.
        value: Option<String>,
    },

    /// Matches elements whose attribute value starts with the prefix.
    AttrPrefix {
        /// Attribute name.
        name: String,
        /// Required value prefix.
        prefix: String,
    },

    /// Matches elements whose combined class + id string contains the marker
    /// (case-insensitive).
    Marker(String),
}

impl NoiseRule {
    /// Rule matching a tag name.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    /// Rule matching bare attribute presence.
    #[must_use]
    pub fn attr_present(name: impl Into<String>) -> Self {
        Self::Attr {
            name: name.into(),
            value: None,
        }
    }

    /// Rule matching an exact attribute value.
    #[must_use]
    pub fn attr_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attr {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Rule matching an attribute-value prefix.
    #[must_use]
    pub fn attr_prefix(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::AttrPrefix {
            name: name.into(),
            prefix: prefix.into(),
        }
    }

    /// Rule matching a class/id substring marker.
    #[must_use]
    pub fn marker(marker: impl Into<String>) -> Self {
        Self::Marker(marker.into())
    }

    /// Test whether this rule matches the element.
    #[must_use]
    pub fn matches(&self, sel: &Selection) -> bool {
        match self {
            Self::Tag(tag) => utils::tag(sel) == *tag,
            Self::Attr { name, value } => {
                crate::dom::has_attribute(sel, name)
                    && value.as_ref().is_none_or(|v| utils::attr(sel, name) == *v)
            }
            Self::AttrPrefix { name, prefix } => utils::attr(sel, name).starts_with(prefix),
            Self::Marker(marker) => utils::id_class(sel).to_lowercase().contains(marker),
        }
    }
}
