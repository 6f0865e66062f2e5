//! UI element selectors
//!
//! Selectors identify a view on screen by a single attribute, rendered in
//! the automation library's query language as `* <attribute>:'<value>'`.
//! This is the only place selector strings are built; every action target
//! goes through one of the constructors here.
//!
//! # Example
//!
//! ```
//! use tapkit_steps::Selector;
//!
//! let sel = Selector::id("submitBtn");
//! assert_eq!(sel.to_string(), "* id:'submitBtn'");
//! ```

use serde::Serialize;
use std::fmt;

/// Attribute a selector queries on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectorAttribute {
    /// Android view id
    Id,
    /// Accessibility content description
    ContentDescription,
    /// Visible text content
    Text,
}

impl SelectorAttribute {
    /// Attribute name as it appears in the query language.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorAttribute::Id => "id",
            SelectorAttribute::ContentDescription => "contentDescription",
            SelectorAttribute::Text => "text",
        }
    }
}

/// A query identifying a UI element by a single attribute.
///
/// The value is interpolated verbatim; quoting rules belong to the
/// driver's query language, not this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selector {
    /// Attribute to match on
    pub attribute: SelectorAttribute,
    /// Value the attribute must equal
    pub value: String,
}

impl Selector {
    /// Select a view by its id.
    pub fn id(value: impl Into<String>) -> Self {
        Self {
            attribute: SelectorAttribute::Id,
            value: value.into(),
        }
    }

    /// Select a view by its content description.
    pub fn description(value: impl Into<String>) -> Self {
        Self {
            attribute: SelectorAttribute::ContentDescription,
            value: value.into(),
        }
    }

    /// Select a view by its text content.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            attribute: SelectorAttribute::Text,
            value: value.into(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {}:'{}'", self.attribute.as_str(), self.value)
    }
}
