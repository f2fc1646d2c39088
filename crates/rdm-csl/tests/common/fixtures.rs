//! Test fixture loading utilities

#![allow(dead_code)]

use std::path::PathBuf;

use rdm_csl::{InMemoryFunders, InMemoryVocabulary};
use rdm_records::Record;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load a record fixture
#[allow(dead_code)]
pub fn load_record(name: &str) -> Record {
    Record::from_json(&load_fixture(&format!("records/{}", name)))
        .unwrap_or_else(|e| panic!("Invalid record fixture {}: {}", name, e))
}

/// Resource-type vocabulary used across tests
pub fn vocabulary() -> InMemoryVocabulary {
    InMemoryVocabulary::from_json(&load_fixture("vocabularies/resource_types.json"))
        .expect("valid resource type fixture")
}

/// Funders vocabulary used across tests
pub fn funders() -> InMemoryFunders {
    InMemoryFunders::from_json(&load_fixture("vocabularies/funders.json"))
        .expect("valid funders fixture")
}
