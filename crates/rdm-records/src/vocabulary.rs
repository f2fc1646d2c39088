//! Vocabulary references and resource-type entries

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference to a vocabulary entry by id (languages, resource types, roles)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct VocabularyRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<serde_json::Value>,
}

impl VocabularyRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }
}

/// A resource-type vocabulary entry as returned by the vocabulary service
///
/// `props` carries per-format mappings such as `csl`, `datacite_general`
/// or `openaire_type`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceType {
    pub id: String,
    #[serde(default)]
    pub props: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<serde_json::Value>,
}

impl ResourceType {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Builder method to set a string prop
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props
            .insert(key.into(), serde_json::Value::String(value.into()));
        self
    }

    /// Get a prop as a string, if present and a string
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(|v| v.as_str())
    }

    /// The CSL type code mapped to this resource type
    pub fn csl_type(&self) -> Option<&str> {
        self.prop("csl")
    }
}
