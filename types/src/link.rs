//! Parsed link targets.

use serde::{Deserialize, Serialize};

/// Parsed form of an anchor `href`.
///
/// This is a real sum type so the router never has to re-inspect raw
/// strings: a bare `#`, a same-page fragment, and everything else are
/// distinct cases with distinct handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkTarget {
    /// A bare `#` with no fragment name. Left to default behavior.
    Bare,
    /// A same-page fragment reference (`#pricing` -> `pricing`).
    Fragment(String),
    /// Anything that is not a same-page reference.
    External(String),
}

impl LinkTarget {
    /// Parse a raw `href` value.
    ///
    /// Any target that does not start with `#` is external; this type never
    /// rejects input, since unknown targets still have defined behavior
    /// (no interception).
    #[must_use]
    pub fn parse(href: &str) -> Self {
        match href.strip_prefix('#') {
            Some("") => LinkTarget::Bare,
            Some(fragment) => LinkTarget::Fragment(fragment.to_string()),
            None => LinkTarget::External(href.to_string()),
        }
    }

    /// The fragment name, if this is a same-page reference.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        match self {
            LinkTarget::Fragment(name) => Some(name),
            LinkTarget::Bare | LinkTarget::External(_) => None,
        }
    }

    /// Render back to the `href` form it was parsed from.
    #[must_use]
    pub fn as_href(&self) -> String {
        match self {
            LinkTarget::Bare => "#".to_string(),
            LinkTarget::Fragment(name) => format!("#{name}"),
            LinkTarget::External(url) => url.clone(),
        }
    }
}

impl From<String> for LinkTarget {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<LinkTarget> for String {
    fn from(value: LinkTarget) -> Self {
        value.as_href()
    }
}

impl std::fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_href())
    }
}
