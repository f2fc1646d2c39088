//! Scheme-qualified identifiers

use serde::{Deserialize, Serialize};

/// An identifier qualified by its scheme (e.g. `{"scheme": "isbn", "identifier": "..."}`)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identifier {
    pub scheme: String,
    pub identifier: String,
}

impl Identifier {
    pub fn new(scheme: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            identifier: identifier.into(),
        }
    }

    /// Check the scheme against a name, ignoring ASCII case
    pub fn has_scheme(&self, scheme: &str) -> bool {
        self.scheme.eq_ignore_ascii_case(scheme)
    }
}

/// Find the first identifier with the given scheme (case-insensitive)
pub fn find_by_scheme<'a>(identifiers: &'a [Identifier], scheme: &str) -> Option<&'a Identifier> {
    identifiers.iter().find(|id| id.has_scheme(scheme))
}
