//! Record types for research-data repository records
//!
//! This crate models the dictionary form of a repository record as handed out
//! by the hosting framework:
//! - Record: id, metadata, custom fields, persistent identifiers
//! - Metadata: title, description, creators, dates, languages, funding
//! - Creator: person or organization with optional family/given names
//! - CustomFields: namespaced extensions (journal, imprint, meeting, ...)
//! - Funding, Funder, Identifier: funding references and scheme identifiers
//! - ResourceType: vocabulary entry for the record's resource type
//!
//! All types deserialize leniently: missing sections default to empty and
//! unknown keys are ignored.

pub mod creator;
pub mod custom_fields;
pub mod funding;
pub mod identifier;
pub mod record;
pub mod vocabulary;

pub use creator::*;
pub use custom_fields::*;
pub use funding::*;
pub use identifier::*;
pub use record::*;
pub use vocabulary::*;
