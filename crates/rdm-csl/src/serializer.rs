//! CSL-JSON serialization of one or many records

use rdm_records::Record;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::projector::CslProjector;

/// `{"hits": {"hits": [...]}}` search result envelope
#[derive(Deserialize)]
struct SearchResult {
    hits: SearchHits,
}

#[derive(Deserialize)]
struct SearchHits {
    hits: Vec<Record>,
}

/// Serialize one record as a CSL-JSON object
pub fn serialize_record(
    projector: &CslProjector<'_>,
    record: &Record,
    pretty: bool,
) -> Result<String> {
    let item = projector.project(record)?;
    to_json(&item, pretty)
}

/// Serialize records as a CSL-JSON array
pub fn serialize_records(
    projector: &CslProjector<'_>,
    records: &[Record],
    pretty: bool,
) -> Result<String> {
    let items = projector.project_all(records)?;
    to_json(&items, pretty)
}

/// Parse records from JSON.
///
/// Accepts a single record object, an array of records, or a search result
/// envelope with records under `hits.hits`.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(json)?;
    let is_search_result = value.get("hits").map_or(false, Value::is_object);

    let records: Vec<Record> = if value.is_array() {
        serde_json::from_value(value)?
    } else if is_search_result {
        let result: SearchResult = serde_json::from_value(value)?;
        result.hits.hits
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(records)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
