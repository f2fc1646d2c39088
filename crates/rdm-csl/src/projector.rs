//! Record to CSL-JSON projection
//!
//! Each output field has its own extraction function; [`CslProjector::project`]
//! evaluates them in the order the fields appear in [`CslItem`]. Fields that
//! cannot be derived from the record are left as `None`.

use lazy_static::lazy_static;
use regex::Regex;

use rdm_records::{find_by_scheme, Funder, Identifier, Meeting, Record};

use crate::config::CslConfig;
use crate::edtf::parse_edtf;
use crate::error::Result;
use crate::html::strip_html;
use crate::item::{CslDate, CslItem, CslName};
use crate::lookup::{FunderService, VocabularyService};

lazy_static! {
    static ref DASH_RUN_REGEX: Regex = Regex::new(r"-+").unwrap();
}

/// Projects records into CSL items
///
/// Holds no per-record state; one projector can serve any number of records.
pub struct CslProjector<'a> {
    config: CslConfig,
    vocabulary: &'a dyn VocabularyService,
    funders: &'a dyn FunderService,
}

impl<'a> CslProjector<'a> {
    pub fn new(
        config: CslConfig,
        vocabulary: &'a dyn VocabularyService,
        funders: &'a dyn FunderService,
    ) -> Self {
        Self {
            config,
            vocabulary,
            funders,
        }
    }

    pub fn config(&self) -> &CslConfig {
        &self.config
    }

    /// Project a record into a CSL item without modifying it.
    ///
    /// Lookup failures (unknown resource type, unknown funder id) are
    /// returned as errors; everything else degrades to absent fields.
    pub fn project(&self, record: &Record) -> Result<CslItem> {
        let metadata = &record.metadata;
        let custom_fields = &record.custom_fields;
        let journal = custom_fields.journal.as_ref();
        let imprint = custom_fields.imprint.as_ref();

        Ok(CslItem {
            id: record.id.clone(),
            item_type: self.item_type(record)?,
            title: metadata.title.clone(),
            abstract_text: metadata.description.as_deref().map(strip_html),
            author: authors(record),
            issued: issued(record),
            language: metadata.languages.first().map(|lang| lang.id.clone()),
            version: metadata.version.clone(),
            note: self.note(record)?,
            doi: record.pid("doi").map(str::to_string),
            isbn: scheme_identifier(record, "isbn"),
            issn: scheme_identifier(record, "issn"),
            publisher: metadata.publisher.clone(),
            container_title: journal_or_imprint(
                journal.and_then(|j| j.title.as_deref()),
                imprint.and_then(|i| i.title.as_deref()),
            ),
            page: journal_or_imprint(
                journal.and_then(|j| j.pages.as_deref()),
                imprint.and_then(|i| i.pages.as_deref()),
            )
            .map(|pages| collapse_dashes(&pages)),
            volume: journal.and_then(|j| j.volume.clone()),
            issue: journal.and_then(|j| j.issue.clone()),
            publisher_place: imprint.and_then(|i| i.place.clone()),
            event: event(record),
            event_place: custom_fields.meeting.as_ref().and_then(|m| m.place.clone()),
        })
    }

    /// Backfill creator family names on the caller's record, then project it.
    ///
    /// Unlike [`project`](Self::project), this leaves the normalization
    /// visible to the caller. See [`Record::normalize_creator_names`].
    pub fn project_normalized(&self, record: &mut Record) -> Result<CslItem> {
        let changed = record.normalize_creator_names();
        if changed > 0 {
            tracing::debug!(changed, "Backfilled creator family names");
        }
        self.project(record)
    }

    /// Project a list of records, failing on the first lookup error
    pub fn project_all(&self, records: &[Record]) -> Result<Vec<CslItem>> {
        records.iter().map(|record| self.project(record)).collect()
    }

    /// CSL type from the resource-type vocabulary
    fn item_type(&self, record: &Record) -> Result<String> {
        let resource_type_id = record
            .metadata
            .resource_type
            .as_ref()
            .map(|rt| rt.id.as_str())
            .filter(|id| !id.is_empty())
            .unwrap_or(self.config.default_resource_type.as_str());

        tracing::debug!(resource_type = resource_type_id, "Reading resource type");
        let resource_type = self.vocabulary.read_resource_type(resource_type_id)?;

        Ok(resource_type
            .csl_type()
            .unwrap_or(self.config.default_csl_type.as_str())
            .to_string())
    }

    /// "Funding by {name}[ {SCHEME} {identifier}.]" from the first funding entry
    fn note(&self, record: &Record) -> Result<Option<String>> {
        let funder = match record.metadata.funding.first().and_then(|f| f.funder.as_ref()) {
            Some(funder) => funder,
            None => return Ok(None),
        };

        let resolved: Funder;
        let funder = match funder.reference_id() {
            Some(id) => {
                tracing::debug!(funder = id, "Resolving funder");
                resolved = self.funders.read_funder(id)?;
                &resolved
            }
            None => funder,
        };

        let name = match funder.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => {
                tracing::warn!(
                    record = record.id.as_deref().unwrap_or_default(),
                    "Funder has no name, skipping funding note"
                );
                return Ok(None);
            }
        };

        let mut note = format!("Funding by {}", name);
        if let Some(identifier) =
            preferred_identifier(self.config.funder_scheme_priority.as_slice(), &funder.identifiers)
        {
            note.push_str(&format!(
                " {} {}.",
                identifier.scheme.to_uppercase(),
                identifier.identifier
            ));
        }
        Ok(Some(note))
    }
}

/// Pick the identifier whose scheme comes first in `priority`.
///
/// Priority order wins over list order; schemes compare case-insensitively.
pub fn preferred_identifier<'i, S: AsRef<str>>(
    priority: &[S],
    identifiers: &'i [Identifier],
) -> Option<&'i Identifier> {
    priority
        .iter()
        .find_map(|scheme| find_by_scheme(identifiers, scheme.as_ref()))
}

/// Collapse runs of dashes in a page range (`12--15` becomes `12-15`)
pub fn collapse_dashes(pages: &str) -> String {
    DASH_RUN_REGEX.replace_all(pages, "-").into_owned()
}

fn authors(record: &Record) -> Option<Vec<CslName>> {
    let creators = &record.metadata.creators;
    if creators.is_empty() {
        return None;
    }
    Some(
        creators
            .iter()
            .map(|creator| {
                let person = &creator.person_or_org;
                CslName {
                    family: person.citation_family_name().map(str::to_string),
                    given: person.given_name.clone(),
                }
            })
            .collect(),
    )
}

fn issued(record: &Record) -> Option<CslDate> {
    let date = record.metadata.publication_date.as_deref()?;
    match parse_edtf(date) {
        Ok(parsed) => Some(CslDate {
            date_parts: parsed.date_parts(),
        }),
        Err(e) => {
            tracing::debug!(date, error = %e, "Unparsable publication date");
            None
        }
    }
}

fn scheme_identifier(record: &Record, scheme: &str) -> Option<String> {
    find_by_scheme(&record.metadata.identifiers, scheme).map(|id| id.identifier.clone())
}

fn journal_or_imprint(journal: Option<&str>, imprint: Option<&str>) -> Option<String> {
    non_empty(journal)
        .or_else(|| non_empty(imprint))
        .map(str::to_string)
}

/// "{title} ({acronym})", or whichever of the two is set
fn event(record: &Record) -> Option<String> {
    let meeting = record
        .custom_fields
        .meeting
        .as_ref()
        .or(record.metadata.meeting.as_ref())?;
    event_name(meeting)
}

fn event_name(meeting: &Meeting) -> Option<String> {
    match (
        non_empty(meeting.title.as_deref()),
        non_empty(meeting.acronym.as_deref()),
    ) {
        (Some(title), Some(acronym)) => Some(format!("{} ({})", title, acronym)),
        (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
        (None, None) => None,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
