//! RIS format data structures.
//!
//! This module defines the intermediate record used while folding tagged
//! lines into a [`Citation`].
//!
//! # Field Processing Strategy
//! - **Last-wins**: the reference type, resolved on every `TY` line
//! - **First-wins**: every recognized scalar tag
//! - **Accumulate**: authors and keywords, in file order
//! - **Preserve**: unknown tags, in file order, duplicates kept

use crate::ris::parse::RisLine;
use crate::ris::tags::{RepeatableTag, ScalarTag, TagAction};
use crate::{Citation, CitationError, ReferenceType, Result};
use std::collections::HashMap;
use std::ops::ControlFlow;
use tracing::trace;

/// Values gathered from a RIS record before the citation is built.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawRisData {
    /// Latest resolved `TY` value.
    pub(crate) reference_type: Option<ReferenceType>,
    /// First value seen for each scalar tag.
    pub(crate) scalars: HashMap<ScalarTag, String>,
    /// Every value seen for each repeatable tag.
    pub(crate) lists: HashMap<RepeatableTag, Vec<String>>,
    /// Tags outside the dispatch table, in file order.
    pub(crate) unknown_tags: Vec<(String, String)>,
}

impl RawRisData {
    /// Create a new empty RawRisData.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fold one line into the record.
    ///
    /// Returns `Break` once the end-of-reference tag is reached; lines after
    /// it must not be applied.
    pub(crate) fn apply(&mut self, line: &RisLine<'_>) -> Result<ControlFlow<()>> {
        match TagAction::lookup(line.tag) {
            Some(TagAction::ResolveType) => {
                self.reference_type = Some(ReferenceType::resolve(line.value)?);
            }
            Some(TagAction::Append(tag)) => self.add_value(tag, line.value),
            Some(TagAction::SetIfAbsent(tag)) => self.set_if_absent(tag, line.value),
            Some(TagAction::Terminate) => return Ok(ControlFlow::Break(())),
            None => {
                trace!(tag = line.tag, line = line.line_number, "collecting unknown tag");
                self.add_unknown(line.tag, line.value);
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Append a value to a repeatable tag.
    pub(crate) fn add_value(&mut self, tag: RepeatableTag, value: &str) {
        self.lists.entry(tag).or_default().push(value.to_string());
    }

    /// Store a scalar value unless one is already present.
    pub(crate) fn set_if_absent(&mut self, tag: ScalarTag, value: &str) {
        self.scalars
            .entry(tag)
            .or_insert_with(|| value.to_string());
    }

    /// Keep an unrecognized tag and its value.
    pub(crate) fn add_unknown(&mut self, tag: &str, value: &str) {
        self.unknown_tags.push((tag.to_string(), value.to_string()));
    }
}

impl TryFrom<RawRisData> for Citation {
    type Error = CitationError;

    fn try_from(mut raw: RawRisData) -> Result<Self> {
        let reference_type = raw.reference_type.ok_or_else(|| {
            CitationError::malformed_document("first tag is not the type-of-reference tag")
        })?;

        let mut citation = Citation::new(reference_type);
        for tag in ScalarTag::ALL {
            *tag.slot(&mut citation) = raw.scalars.remove(tag);
        }
        for tag in RepeatableTag::ALL {
            *tag.list(&mut citation) = raw.lists.remove(tag).unwrap_or_default();
        }
        citation.unknown_tags = raw.unknown_tags;

        Ok(citation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line<'a>(tag: &'a str, value: &'a str) -> RisLine<'a> {
        RisLine {
            line_number: 1,
            tag,
            value,
        }
    }

    #[test]
    fn test_raw_ris_data_new() {
        let raw = RawRisData::new();
        assert!(raw.reference_type.is_none());
        assert!(raw.scalars.is_empty());
        assert!(raw.lists.is_empty());
        assert!(raw.unknown_tags.is_empty());
    }

    #[test]
    fn test_scalar_first_value_wins() {
        let mut raw = RawRisData::new();
        raw.set_if_absent(ScalarTag::Title, "First Title");
        raw.set_if_absent(ScalarTag::Title, "Second Title");
        assert_eq!(raw.scalars[&ScalarTag::Title], "First Title");
    }

    #[test]
    fn test_empty_value_still_counts_as_set() {
        let mut raw = RawRisData::new();
        raw.apply(&line("TY", "GEN")).unwrap();
        raw.apply(&line("N1", "")).unwrap();
        raw.apply(&line("N1", "later")).unwrap();

        let citation: Citation = raw.try_into().unwrap();
        assert_eq!(citation.notes.as_deref(), Some(""));
        assert_eq!(citation.abstract_text, None);
    }

    #[test]
    fn test_reference_type_last_value_wins() {
        let mut raw = RawRisData::new();
        raw.apply(&line("TY", "JOUR")).unwrap();
        raw.apply(&line("TY", "BOOK")).unwrap();
        assert_eq!(raw.reference_type, Some(ReferenceType::BOOK));
    }

    #[test]
    fn test_apply_end_tag_breaks() {
        let mut raw = RawRisData::new();
        assert_eq!(
            raw.apply(&line("KW", "one")).unwrap(),
            ControlFlow::Continue(())
        );
        assert_eq!(raw.apply(&line("ER", "")).unwrap(), ControlFlow::Break(()));
    }

    #[test]
    fn test_unknown_tags_keep_order_and_duplicates() {
        let mut raw = RawRisData::new();
        raw.apply(&line("ZZ", "first")).unwrap();
        raw.apply(&line("A1", "Doe, Jane")).unwrap();
        raw.apply(&line("ZZ", "second")).unwrap();
        assert_eq!(
            raw.unknown_tags,
            vec![
                ("ZZ".to_string(), "first".to_string()),
                ("A1".to_string(), "Doe, Jane".to_string()),
                ("ZZ".to_string(), "second".to_string()),
            ]
        );
    }

    #[test]
    fn test_conversion_to_citation() {
        let mut raw = RawRisData::new();
        raw.apply(&line("TY", "THES")).unwrap();
        raw.apply(&line("AU", "Smith, John")).unwrap();
        raw.apply(&line("A2", "Doe, Jane")).unwrap();
        raw.apply(&line("AU", "Roe, Richard")).unwrap();
        raw.apply(&line("PB", "University Press")).unwrap();

        let citation: Citation = raw.try_into().unwrap();
        assert_eq!(citation.reference_type, ReferenceType::THES);
        assert_eq!(citation.authors, vec!["Smith, John", "Roe, Richard"]);
        assert_eq!(citation.secondary_authors, vec!["Doe, Jane"]);
        assert!(citation.tertiary_authors.is_empty());
        assert_eq!(citation.publisher.as_deref(), Some("University Press"));
    }

    #[test]
    fn test_missing_type_error() {
        let raw = RawRisData::new();
        let result: Result<Citation> = raw.try_into();
        assert!(matches!(result, Err(CitationError::MalformedDocument(_))));
    }
}
