//! RIS format parsing implementation.
//!
//! This module handles the low-level parsing of RIS formatted text: cutting
//! it into tagged lines, checking the `TY` ... `ER` framing, and folding the
//! lines into a [`Citation`].

use crate::ris::structure::RawRisData;
use crate::ris::tags::{END_TAG, TYPE_TAG};
use crate::{Citation, CitationError, Result};
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// Shortest accepted line, a bare `"ER  -"`.
const MIN_LINE_CHARS: usize = 5;
/// Character offset of the tag's value, after `"XX  - "`.
const VALUE_OFFSET: usize = 6;

/// A non-blank line split into its tag and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RisLine<'a> {
    /// 1-based physical line number in the input.
    pub(crate) line_number: usize,
    pub(crate) tag: &'a str,
    pub(crate) value: &'a str,
}

/// Parse the content of a single RIS record.
pub(crate) fn ris_parse<S: AsRef<str>>(ris_text: S) -> Result<Citation> {
    let lines = tokenize(ris_text.as_ref())?;
    validate_framing(&lines)?;
    debug!(lines = lines.len(), "parsing RIS record");

    let mut raw = RawRisData::new();
    for line in &lines {
        if let ControlFlow::Break(()) = raw.apply(line)? {
            trace!(line = line.line_number, "end of reference");
            break;
        }
    }

    raw.try_into()
}

/// Iterate the physical lines of `text`, each paired with the byte offset
/// just past its terminator.
///
/// `\n`, `\r\n` and a bare `\r` all end a line.
pub(crate) fn physical_lines(text: &str) -> impl Iterator<Item = (&str, usize)> {
    let mut offset = 0;
    std::iter::from_fn(move || {
        if offset >= text.len() {
            return None;
        }
        let rest = &text[offset..];
        let (line, consumed) = match rest.find(['\n', '\r']) {
            Some(i) if rest[i..].starts_with("\r\n") => (&rest[..i], i + 2),
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        offset += consumed;
        Some((line, offset))
    })
}

/// Split text into tagged lines, skipping blank ones.
pub(crate) fn tokenize(text: &str) -> Result<Vec<RisLine<'_>>> {
    let mut lines = Vec::new();

    for (index, (line, _)) in physical_lines(text).enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        lines.push(parse_ris_line(line, index + 1)?);
    }

    Ok(lines)
}

/// Parse a single RIS line into a tag and value.
///
/// The layout is fixed: two tag characters, two spaces, a hyphen, a space,
/// then the value. Columns are sliced, not searched.
fn parse_ris_line(line: &str, line_number: usize) -> Result<RisLine<'_>> {
    if line.chars().count() < MIN_LINE_CHARS {
        debug!(line = line_number, "line too short for RIS format");
        return Err(CitationError::MalformedLine {
            line: line_number,
            content: line.to_string(),
        });
    }

    // Offsets are counted in characters so multi-byte text never splits.
    let tag_end = line.char_indices().nth(2).map_or(line.len(), |(i, _)| i);
    let value = line
        .char_indices()
        .nth(VALUE_OFFSET)
        .map_or("", |(start, _)| &line[start..]);

    Ok(RisLine {
        line_number,
        tag: &line[..tag_end],
        value,
    })
}

/// Check that the lines open with `TY` and close with `ER`.
pub(crate) fn validate_framing(lines: &[RisLine<'_>]) -> Result<()> {
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        debug!("no tags found");
        return Err(CitationError::malformed_document("no tags found"));
    };

    if first.tag != TYPE_TAG {
        debug!(tag = first.tag, "record does not open with TY");
        return Err(CitationError::malformed_document(
            "first tag is not the type-of-reference tag",
        ));
    }

    if last.tag != END_TAG {
        debug!(tag = last.tag, "record does not close with ER");
        return Err(CitationError::malformed_document(
            "last tag is not the end-of-reference tag",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceType;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("TY  - JOUR", "TY", "JOUR")]
    #[case("TI  - Test Title", "TI", "Test Title")]
    #[case("AU  - Smith, John", "AU", "Smith, John")]
    #[case("ER  -", "ER", "")]
    #[case("ER  - ", "ER", "")]
    #[case("N1  -   padded  ", "N1", "  padded  ")]
    #[case("TI  - Ünïcödé ťîtłé", "TI", "Ünïcödé ťîtłé")]
    #[case("ÄÖ  - x", "ÄÖ", "x")]
    #[case("TY- JOUR", "TY", "UR")]
    fn test_parse_ris_line_valid(
        #[case] line: &str,
        #[case] expected_tag: &str,
        #[case] expected_value: &str,
    ) {
        let result = parse_ris_line(line, 1).unwrap();
        assert_eq!(result.tag, expected_tag);
        assert_eq!(result.value, expected_value);
    }

    #[rstest]
    #[case("A")]
    #[case("TY")]
    #[case("TY -")]
    #[case("ÄÖÜ")]
    fn test_parse_ris_line_too_short(#[case] line: &str) {
        match parse_ris_line(line, 7) {
            Err(CitationError::MalformedLine { line: n, content }) => {
                assert_eq!(n, 7);
                assert_eq!(content, line);
            }
            other => panic!("expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_tokenize_skips_blank_lines() {
        let input = "TY  - JOUR\n\n   \n\t\nTI  - Title\r\nER  -\n";
        let lines = tokenize(input).unwrap();
        let tags: Vec<_> = lines.iter().map(|l| (l.line_number, l.tag, l.value)).collect();
        assert_eq!(
            tags,
            vec![(1, "TY", "JOUR"), (5, "TI", "Title"), (6, "ER", "")]
        );
    }

    #[rstest]
    #[case("TY  - JOUR\rTI  - Title\rER  -\r")]
    #[case("TY  - JOUR\r\nTI  - Title\r\nER  -")]
    #[case("TY  - JOUR\nTI  - Title\nER  -\n")]
    fn test_tokenize_line_endings(#[case] input: &str) {
        let lines = tokenize(input).unwrap();
        let tags: Vec<_> = lines.iter().map(|l| (l.line_number, l.tag, l.value)).collect();
        assert_eq!(tags, vec![(1, "TY", "JOUR"), (2, "TI", "Title"), (3, "ER", "")]);
    }

    #[test]
    fn test_physical_lines_offsets() {
        let input = "a\r\nb\rc\n\nd";
        let lines: Vec<_> = physical_lines(input).collect();
        assert_eq!(lines, vec![("a", 3), ("b", 5), ("c", 7), ("", 8), ("d", 9)]);
    }

    #[test]
    fn test_parse_classic_mac_line_endings() {
        let citation = ris_parse("TY  - BOOK\rTI  - Old Mac\rER  -\r").unwrap();
        assert_eq!(citation.reference_type, ReferenceType::BOOK);
        assert_eq!(citation.title.as_deref(), Some("Old Mac"));
    }

    #[test]
    fn test_tokenize_reports_physical_line_number() {
        let input = "TY  - JOUR\n\nTI\nER  -";
        match tokenize(input) {
            Err(CitationError::MalformedLine { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "TI");
            }
            other => panic!("expected MalformedLine, got {:?}", other),
        }
    }

    #[rstest]
    #[case("", "no tags found")]
    #[case("  \n\n", "no tags found")]
    #[case("TI  - Title\nTY  - JOUR\nER  -", "first tag is not the type-of-reference tag")]
    #[case("TY  - JOUR\nTI  - Title", "last tag is not the end-of-reference tag")]
    #[case("TY  - JOUR", "last tag is not the end-of-reference tag")]
    #[case("ER  -", "first tag is not the type-of-reference tag")]
    fn test_framing_violations(#[case] input: &str, #[case] reason: &str) {
        match ris_parse(input) {
            Err(CitationError::MalformedDocument(msg)) => assert_eq!(msg, reason),
            other => panic!("expected MalformedDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_framing_checked_before_type_resolution() {
        let input = "TY  - NOPE\nTI  - Title";
        assert!(matches!(
            ris_parse(input),
            Err(CitationError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_parse_simple_citation() {
        let input = r#"TY  - JOUR
TI  - Test Article
AU  - Smith, John
ER  -"#;

        let citation = ris_parse(input).unwrap();
        assert_eq!(citation.reference_type, ReferenceType::JOUR);
        assert_eq!(citation.title.as_deref(), Some("Test Article"));
        assert_eq!(citation.authors, vec!["Smith, John"]);
        assert!(citation.unknown_tags.is_empty());
    }

    #[test]
    fn test_parse_stops_at_first_end_tag() {
        let input = r#"TY  - JOUR
TI  - Test Article
ER  -
KW  - after end
ER  -"#;

        let citation = ris_parse(input).unwrap();
        assert!(citation.keywords.is_empty());
        assert!(citation.unknown_tags.is_empty());
    }

    #[test]
    fn test_parse_unknown_reference_type() {
        let input = "TY  - jour\nTI  - Test\nER  -";
        match ris_parse(input) {
            Err(CitationError::UnknownReferenceType(raw)) => assert_eq!(raw, "jour"),
            other => panic!("expected UnknownReferenceType, got {:?}", other),
        }
    }
}
