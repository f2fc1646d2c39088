//! Error types for CSL projection

use crate::config::ConfigError;
use crate::lookup::LookupError;
use thiserror::Error;

/// Result type alias using [`CslError`]
pub type Result<T> = std::result::Result<T, CslError>;

/// Errors from projecting or serializing records
///
/// Gaps in a record (unparsable dates, missing identifiers) are not errors;
/// they leave the corresponding output field absent.
#[derive(Error, Debug)]
pub enum CslError {
    /// A vocabulary or funder lookup failed
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Input or output JSON could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CslError {
    fn from(e: ConfigError) -> Self {
        CslError::Config(e.to_string())
    }
}
