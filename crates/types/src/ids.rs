//! Cross-reference labels.
//!
//! A `Label` is minted once when a referenceable node is constructed and
//! never changes afterwards. Minted labels are 128 random bits rendered as
//! 32 lowercase hex digits, which keeps them valid inside `\label{..}` and
//! unique across concurrently running report passes.

use rand::Rng;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A label used by `\label{..}` and `\autoref{..}`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Label(Arc<str>);

impl Label {
    /// Creates a label from an explicit string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh, process-unique label.
    pub fn mint() -> Self {
        let bits: u128 = rand::rng().random();
        Self(format!("{:032x}", bits).into())
    }

    /// Returns the string representation of this label
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
