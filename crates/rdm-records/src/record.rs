//! Record domain model

use crate::{Creator, CustomFields, Funding, Identifier, Meeting, VocabularyRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Descriptive metadata of a record
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Abstract; may contain HTML
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub creators: Vec<Creator>,
    /// EDTF date or interval, e.g. `2020-05`, `2020/2021`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub funding: Vec<Funding>,
    /// Legacy location of meeting data; new records use `meeting:meeting`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting: Option<Meeting>,
}

/// A persistent identifier registered for a record
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Pid {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

/// A repository record in its dictionary representation
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub metadata: Metadata,
    pub custom_fields: CustomFields,
    /// Persistent identifiers keyed by scheme (`doi`, `oai`, ...)
    pub pids: BTreeMap<String, Pid>,
}

impl Record {
    /// Create an empty record with an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Parse a record from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builder method to set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Builder method to set the EDTF publication date
    pub fn with_publication_date(mut self, date: impl Into<String>) -> Self {
        self.metadata.publication_date = Some(date.into());
        self
    }

    /// Builder method to add a creator
    pub fn with_creator(mut self, creator: Creator) -> Self {
        self.metadata.creators.push(creator);
        self
    }

    /// Builder method to register a persistent identifier
    pub fn with_pid(mut self, scheme: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.pids.insert(
            scheme.into(),
            Pid {
                identifier: identifier.into(),
                provider: None,
                client: None,
            },
        );
        self
    }

    /// Get a persistent identifier by scheme
    pub fn pid(&self, scheme: &str) -> Option<&str> {
        self.pids.get(scheme).map(|p| p.identifier.as_str())
    }

    /// Backfill missing creator family names from their display names.
    ///
    /// This mutates the record in place and returns how many creators
    /// changed. Running it twice changes nothing the second time.
    pub fn normalize_creator_names(&mut self) -> usize {
        self.metadata
            .creators
            .iter_mut()
            .map(Creator::normalize_family_name)
            .filter(|changed| *changed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PersonOrOrg;

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "id": "abcd-1234",
            "metadata": {
                "resource_type": {"id": "publication-article"},
                "title": "A Record",
                "creators": [{"person_or_org": {"type": "organizational", "name": "CERN"}}],
                "publication_date": "2020-05-12",
                "languages": [{"id": "eng"}],
                "identifiers": [{"scheme": "isbn", "identifier": "978-3-16-148410-0"}]
            },
            "pids": {"doi": {"identifier": "10.1234/abcd-1234", "provider": "datacite"}},
            "access": {"record": "public"}
        }"#;
        let record = Record::from_json(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("abcd-1234"));
        assert_eq!(record.metadata.title.as_deref(), Some("A Record"));
        assert_eq!(record.metadata.creators.len(), 1);
        assert_eq!(record.metadata.languages[0].id, "eng");
        assert_eq!(record.pid("doi"), Some("10.1234/abcd-1234"));
        assert_eq!(record.pid("oai"), None);
    }

    #[test]
    fn test_missing_sections_default() {
        let record = Record::from_json(r#"{"id": "x"}"#).unwrap();
        assert!(record.metadata.creators.is_empty());
        assert!(record.custom_fields.journal.is_none());
        assert!(record.pids.is_empty());
    }

    #[test]
    fn test_normalize_creator_names() {
        let mut record = Record::new("x")
            .with_creator(Creator::new(PersonOrOrg::organization("Acme Corp")))
            .with_creator(Creator::new(PersonOrOrg::person("Doe", "Jane")));

        assert_eq!(record.normalize_creator_names(), 1);
        assert_eq!(
            record.metadata.creators[0].person_or_org.family_name.as_deref(),
            Some("Acme Corp")
        );
        assert_eq!(record.normalize_creator_names(), 0);
    }
}
