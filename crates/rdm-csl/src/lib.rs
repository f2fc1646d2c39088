//! CSL-JSON projection of research-data repository records
//!
//! This crate turns a repository record into a CSL-JSON item that reference
//! managers and citation processors can consume.
//!
//! Features:
//! - Field-by-field projection with absent (not null) output for gaps
//! - EDTF date and interval parsing into CSL `date-parts`
//! - HTML stripping for abstracts
//! - Resource-type and funder resolution through pluggable lookup services
//! - TOML configuration for defaults and funder identifier preference
//!
//! ```
//! use rdm_csl::{CslConfig, CslProjector, InMemoryFunders, InMemoryVocabulary};
//! use rdm_records::{Record, ResourceType};
//!
//! let vocabulary = InMemoryVocabulary::new(vec![
//!     ResourceType::new("publication-article").with_prop("csl", "article-journal"),
//! ]);
//! let funders = InMemoryFunders::default();
//! let projector = CslProjector::new(CslConfig::default(), &vocabulary, &funders);
//!
//! let record = Record::new("abcd-1234")
//!     .with_title("A Title")
//!     .with_publication_date("2020/2021");
//! let item = projector.project(&record).unwrap();
//!
//! assert_eq!(item.item_type, "article-journal");
//! assert_eq!(item.issued.unwrap().date_parts, vec![vec![2020], vec![2021]]);
//! ```

pub mod config;
pub mod edtf;
pub mod error;
pub mod html;
pub mod item;
pub mod lookup;
pub mod projector;
pub mod serializer;

pub use config::{ConfigError, CslConfig};
pub use edtf::{parse_edtf, Edtf, EdtfDate, EdtfParseError};
pub use error::{CslError, Result};
pub use html::strip_html;
pub use item::{CslDate, CslItem, CslName};
pub use lookup::{FunderService, InMemoryFunders, InMemoryVocabulary, LookupError, VocabularyService};
pub use projector::{collapse_dashes, preferred_identifier, CslProjector};
pub use serializer::{parse_records, serialize_record, serialize_records};
