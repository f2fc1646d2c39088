//! CSL-JSON output types
//!
//! Field names follow CSL-JSON (`container-title`, `DOI`, ...). Optional
//! fields that could not be derived are left out of the JSON entirely rather
//! than serialized as `null` or `""`.

use serde::{Deserialize, Serialize};

/// A personal or organizational name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CslName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
}

/// A date variable: one `date-parts` entry for a date, two for a range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CslDate {
    #[serde(rename = "date-parts")]
    pub date_parts: Vec<Vec<i32>>,
}

/// A bibliographic item in CSL-JSON format
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CslItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// CSL item type (e.g. "article-journal", "dataset")
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<CslName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<CslDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "DOI", skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "ISBN", skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(rename = "ISSN", skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(rename = "container-title", skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(rename = "publisher-place", skip_serializing_if = "Option::is_none")]
    pub publisher_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(rename = "event-place", skip_serializing_if = "Option::is_none")]
    pub event_place: Option<String>,
}

impl CslItem {
    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let item = CslItem {
            id: Some("abcd".to_string()),
            item_type: "dataset".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"id": "abcd", "type": "dataset"}));
    }

    #[test]
    fn test_empty_string_is_kept() {
        let item = CslItem {
            item_type: "article".to_string(),
            title: Some(String::new()),
            ..Default::default()
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["title"], json!(""));
    }

    #[test]
    fn test_csl_key_names() {
        let item = CslItem {
            item_type: "paper-conference".to_string(),
            abstract_text: Some("text".to_string()),
            issued: Some(CslDate {
                date_parts: vec![vec![2020, 5]],
            }),
            doi: Some("10.1234/x".to_string()),
            container_title: Some("Proc.".to_string()),
            publisher_place: Some("Geneva".to_string()),
            event_place: Some("Bern".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["abstract"], json!("text"));
        assert_eq!(value["issued"], json!({"date-parts": [[2020, 5]]}));
        assert_eq!(value["DOI"], json!("10.1234/x"));
        assert_eq!(value["container-title"], json!("Proc."));
        assert_eq!(value["publisher-place"], json!("Geneva"));
        assert_eq!(value["event-place"], json!("Bern"));
    }

    #[test]
    fn test_json_round_trip() {
        let item = CslItem {
            id: Some("x".to_string()),
            item_type: "book".to_string(),
            author: Some(vec![CslName {
                family: Some("Doe".to_string()),
                given: Some("Jane".to_string()),
            }]),
            ..Default::default()
        };
        let parsed = CslItem::from_json(&item.to_json().unwrap()).unwrap();
        assert_eq!(parsed, item);
    }
}
