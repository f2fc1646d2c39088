//! Funding references

use crate::Identifier;
use serde::{Deserialize, Serialize};

/// A funder, either inline (`name`, `identifiers`) or by vocabulary `id`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Funder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
}

impl Funder {
    /// Create an inline funder with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Create a funder that only references a vocabulary entry
    pub fn reference(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Builder method to add an identifier
    pub fn with_identifier(mut self, scheme: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.identifiers.push(Identifier::new(scheme, identifier));
        self
    }

    /// Vocabulary id, if this funder points at a funders vocabulary entry
    pub fn reference_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A funding entry: funder plus optional award
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Funding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funder: Option<Funder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub award: Option<serde_json::Value>,
}

impl Funding {
    pub fn new(funder: Funder) -> Self {
        Self {
            funder: Some(funder),
            award: None,
        }
    }
}
