//! Namespaced custom fields
//!
//! Custom fields are keyed `<namespace>:<field>`. The journal, imprint and
//! meeting namespaces each store a nested object; any other field (e.g.
//! `thesis:university`) is kept as raw JSON in [`CustomFields::other`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `journal:journal` custom field
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Journal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
}

/// `imprint:imprint` custom field (book or chapter the record is part of)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Imprint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
}

/// `meeting:meeting` custom field (conference the record was presented at)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Meeting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_part: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// All custom fields of a record
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomFields {
    #[serde(
        rename = "journal:journal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub journal: Option<Journal>,
    #[serde(
        rename = "imprint:imprint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub imprint: Option<Imprint>,
    #[serde(
        rename = "meeting:meeting",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub meeting: Option<Meeting>,
    /// Fields from other namespaces, untouched
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl CustomFields {
    /// Get a text custom field from another namespace (e.g. `thesis:university`)
    pub fn text(&self, name: &str) -> Option<&str> {
        self.other.get(name).and_then(|v| v.as_str())
    }
}
