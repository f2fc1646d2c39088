//! Lookup services consulted during projection
//!
//! The projector resolves a record's resource type to a CSL type and, for
//! funders given only by id, the funder's name and identifiers. Both come
//! from vocabularies owned by the host repository; these traits are the seam.

use rdm_records::{Funder, ResourceType};
use std::collections::HashMap;
use thiserror::Error;

/// Errors returned by lookup services
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Lookup backend error: {0}")]
    Backend(String),
}

impl LookupError {
    pub fn resource_type_not_found(id: impl Into<String>) -> Self {
        LookupError::NotFound {
            kind: "resource type",
            id: id.into(),
        }
    }

    pub fn funder_not_found(id: impl Into<String>) -> Self {
        LookupError::NotFound {
            kind: "funder",
            id: id.into(),
        }
    }
}

/// Resource-type vocabulary
pub trait VocabularyService: Send + Sync {
    /// Read a resource-type entry by id
    fn read_resource_type(&self, id: &str) -> Result<ResourceType, LookupError>;
}

/// Funders vocabulary
pub trait FunderService: Send + Sync {
    /// Read a funder by id
    fn read_funder(&self, id: &str) -> Result<Funder, LookupError>;
}

/// In-memory resource-type vocabulary
#[derive(Debug, Clone, Default)]
pub struct InMemoryVocabulary {
    entries: HashMap<String, ResourceType>,
}

impl InMemoryVocabulary {
    pub fn new(entries: impl IntoIterator<Item = ResourceType>) -> Self {
        Self {
            entries: entries.into_iter().map(|rt| (rt.id.clone(), rt)).collect(),
        }
    }

    /// Load from a JSON array of `{"id": ..., "props": {...}}` entries
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<ResourceType> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VocabularyService for InMemoryVocabulary {
    fn read_resource_type(&self, id: &str) -> Result<ResourceType, LookupError> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| LookupError::resource_type_not_found(id))
    }
}

/// In-memory funders vocabulary
///
/// Entries without an `id` cannot be looked up and are skipped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFunders {
    entries: HashMap<String, Funder>,
}

impl InMemoryFunders {
    pub fn new(entries: impl IntoIterator<Item = Funder>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .filter_map(|f| f.id.clone().map(|id| (id, f)))
                .collect(),
        }
    }

    /// Load from a JSON array of `{"id": ..., "name": ..., "identifiers": [...]}` entries
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<Funder> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FunderService for InMemoryFunders {
    fn read_funder(&self, id: &str) -> Result<Funder, LookupError> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| LookupError::funder_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_lookup() {
        let vocab = InMemoryVocabulary::from_json(
            r#"[
                {"id": "publication-article", "props": {"csl": "article-journal"}},
                {"id": "dataset", "props": {"csl": "dataset"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(vocab.len(), 2);

        let rt = vocab.read_resource_type("dataset").unwrap();
        assert_eq!(rt.csl_type(), Some("dataset"));

        assert_eq!(
            vocab.read_resource_type("poster"),
            Err(LookupError::resource_type_not_found("poster"))
        );
    }

    #[test]
    fn test_funder_lookup() {
        let funders = InMemoryFunders::new(vec![
            Funder::reference("00k4n6c32").with_identifier("ror", "00k4n6c32"),
            Funder::named("No id, skipped"),
        ]);
        assert_eq!(funders.len(), 1);

        let funder = funders.read_funder("00k4n6c32").unwrap();
        assert_eq!(funder.identifiers[0].scheme, "ror");

        let err = funders.read_funder("missing").unwrap_err();
        assert_eq!(err.to_string(), "funder not found: missing");
    }
}
