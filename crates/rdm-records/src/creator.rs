//! Creator representation

use crate::{Identifier, VocabularyRef};
use serde::{Deserialize, Serialize};

/// Whether a creator is a person or an organization
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PersonOrOrgKind {
    Personal,
    Organizational,
}

/// Name and identifiers of a creator
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PersonOrOrg {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PersonOrOrgKind>,
    /// Full display name; the only name an organization carries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
}

impl PersonOrOrg {
    /// Create a person with family and given names
    pub fn person(family_name: impl Into<String>, given_name: impl Into<String>) -> Self {
        let family_name = family_name.into();
        let given_name = given_name.into();
        Self {
            kind: Some(PersonOrOrgKind::Personal),
            name: Some(format!("{}, {}", family_name, given_name)),
            given_name: Some(given_name),
            family_name: Some(family_name),
            identifiers: Vec::new(),
        }
    }

    /// Create an organization, which only has a display name
    pub fn organization(name: impl Into<String>) -> Self {
        Self {
            kind: Some(PersonOrOrgKind::Organizational),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Family name to cite under: the personal family name, else the display name.
    ///
    /// Empty strings count as missing.
    pub fn citation_family_name(&self) -> Option<&str> {
        non_empty(self.family_name.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }
}

/// A creator (author) of a record
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Creator {
    #[serde(default)]
    pub person_or_org: PersonOrOrg,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<VocabularyRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affiliations: Vec<serde_json::Value>,
}

impl Creator {
    pub fn new(person_or_org: PersonOrOrg) -> Self {
        Self {
            person_or_org,
            role: None,
            affiliations: Vec::new(),
        }
    }

    /// Copy the display name into `family_name` when no family name is set.
    ///
    /// Citation formats require a family name, which organizations lack.
    /// Returns whether the creator was changed. Calling it again is a no-op.
    pub fn normalize_family_name(&mut self) -> bool {
        let person = &mut self.person_or_org;
        if non_empty(person.family_name.as_deref()).is_some() {
            return false;
        }
        match non_empty(person.name.as_deref()) {
            Some(name) => {
                person.family_name = Some(name.to_string());
                true
            }
            None => false,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
