// ============================================================
// Layer 3 — GeneralizedQuestion Domain Type
// ============================================================
// A question template with lexical specifics (the predicate,
// tense, auxiliaries) abstracted away, e.g. "who V something"
// or "what be V-ed". It is only ever used as a key, so it is
// an opaque string newtype that hashes, orders and prints as
// its template text.
//
// `#[serde(transparent)]` makes it read and write as a plain
// JSON string, which is what the distribution file needs for
// its outer keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneralizedQuestion(String);

impl GeneralizedQuestion {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneralizedQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GeneralizedQuestion {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Raised when a raw question string cannot be turned into a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneralizeError {
    #[error("malformed question '{0}': expected seven slots followed by '?'")]
    MalformedQuestion(String),

    #[error("unknown wh-word '{wh}' in question '{question}'")]
    UnknownWh { wh: String, question: String },
}
