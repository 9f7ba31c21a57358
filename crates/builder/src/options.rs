//! Configuration knobs for fragments whose historical form is known to be off.

use serde::{Deserialize, Serialize};

/// How `where_attribute_starts_with` renders its predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartsWithStyle {
    /// `[starts-with(@a='v')])`, byte-compatible with queries generated by
    /// earlier releases. Not valid XPath: `=` stands where `,` belongs and the
    /// closing paren is doubled.
    #[default]
    Legacy,
    /// `[starts-with(@a,'v')]`, the XPath 1.0 function-call form.
    Function,
}

/// Options carried by an [`XPathBuilder`](crate::XPathBuilder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuilderOptions {
    pub starts_with: StartsWithStyle,
}

impl BuilderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starts-with rendering style.
    pub fn starts_with(mut self, style: StartsWithStyle) -> Self {
        self.starts_with = style;
        self
    }

    /// Parses options from a JSON object such as `{"startsWith": "function"}`.
    /// Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
