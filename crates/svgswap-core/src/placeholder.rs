//! Placeholder elements and the attribute allowlist copied onto inlined SVG.

use crate::error::SwapError;

/// Attributes copied from the placeholder onto the produced `<svg>`, in this order.
pub const COPIED_ATTRIBUTES: [&str; 4] = ["id", "class", "width", "height"];

/// Attribute naming the URL of the SVG source.
pub const SRC_ATTRIBUTE: &str = "src";

/// Attribute naming a symbol inside an SVG sprite.
pub const SYMBOL_ATTRIBUTE: &str = "sprite-symbol";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The parts of a placeholder element needed to produce its replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholder {
    /// Raw `src` value, relative or absolute. `None` if absent or empty.
    pub src: Option<String>,
    /// `sprite-symbol` value. `None` means the whole document is inlined.
    pub symbol: Option<String>,
    /// Allowlisted attributes present on the element, in allowlist order.
    pub attributes: Vec<Attribute>,
}

impl Placeholder {
    /// Build a placeholder from an attribute accessor (e.g. an HTML element's getter).
    ///
    /// Empty values count as absent.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| get(name).filter(|v| !v.is_empty());
        let attributes = COPIED_ATTRIBUTES
            .iter()
            .filter_map(|name| non_empty(name).map(|value| Attribute::new(*name, value)))
            .collect();
        Self {
            src: non_empty(SRC_ATTRIBUTE),
            symbol: non_empty(SYMBOL_ATTRIBUTE),
            attributes,
        }
    }

    pub fn require_src(&self) -> Result<&str, SwapError> {
        self.src.as_deref().ok_or(SwapError::MissingSrc)
    }

    /// Value of an allowlisted attribute, if the placeholder carries it.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}
