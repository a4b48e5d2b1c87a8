//! RIS format parser implementation.
//!
//! Provides functionality to parse RIS formatted citations. One call parses
//! one record framed by `TY` and `ER`; [`RisParser::parse_all`] layers
//! multi-record files on top of that by splitting at each `ER` line.
//!
//! # Example
//!
//! ```
//! use risparse::{CitationParser, ReferenceType, RisParser};
//!
//! let input = r#"TY  - JOUR
//! TI  - Example Title
//! AU  - Smith, John
//! ER  -"#;
//!
//! let parser = RisParser::new();
//!
//! let citation = parser.parse(input).unwrap();
//! assert_eq!(citation.reference_type, ReferenceType::JOUR);
//! assert_eq!(citation.title.as_deref(), Some("Example Title"));
//! ```

mod parse;
mod structure;
pub mod tags;

use crate::{Citation, CitationParser, Result};
use itertools::Itertools;
use parse::{physical_lines, ris_parse};
use std::io::Read;
use tracing::debug;

/// Parser for RIS format citations.
///
/// RIS is a standardized format for bibliographic citations that uses two-letter
/// tags at the start of each line to denote different citation fields.
#[derive(Debug, Clone, Default)]
pub struct RisParser;

impl RisParser {
    /// Creates a new RIS parser instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use risparse::RisParser;
    /// let parser = RisParser::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Read `reader` to the end, then parse its content as one record.
    ///
    /// # Errors
    ///
    /// Returns `CitationError::Io` if reading fails or the bytes are not
    /// UTF-8, otherwise the same errors as [`CitationParser::parse`].
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Citation> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse(&text)
    }

    /// Parse a buffer holding any number of consecutive records.
    ///
    /// The buffer is cut after every line tagged `ER`; each piece is parsed on
    /// its own. Extra `ER` lines directly after a record belong to it, as
    /// they would for a single-record parse. Parsing stops at the first
    /// failing record.
    ///
    /// # Examples
    ///
    /// ```
    /// use risparse::RisParser;
    ///
    /// let input = "TY  - JOUR\nTI  - One\nER  -\n\nTY  - BOOK\nTI  - Two\nER  -\n";
    /// let citations = RisParser::new().parse_all(input).unwrap();
    /// assert_eq!(citations.len(), 2);
    /// ```
    pub fn parse_all(&self, input: &str) -> Result<Vec<Citation>> {
        let records = split_records(input);
        debug!(records = records.len(), "parsing RIS records");
        records.into_iter().map(|record| self.parse(record)).collect()
    }

    /// Parse independent documents, one record each.
    ///
    /// With the `parallel` feature the documents are spread across the rayon
    /// thread pool. Results keep the order of `inputs`.
    pub fn parse_many(&self, inputs: &[&str]) -> Vec<Result<Citation>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            inputs.par_iter().map(|input| self.parse(input)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            inputs.iter().map(|input| self.parse(input)).collect()
        }
    }
}

impl CitationParser for RisParser {
    /// Parses a string containing one citation in RIS format.
    ///
    /// # Arguments
    ///
    /// * `input` - The RIS formatted string to parse
    ///
    /// # Returns
    ///
    /// A Result containing the parsed Citation or a CitationError
    ///
    /// # Errors
    ///
    /// Returns `CitationError` if the input is not framed by `TY`/`ER`, has a
    /// line too short to carry a tag, or names an unknown reference type
    fn parse(&self, input: &str) -> Result<Citation> {
        ris_parse(input)
    }
}

/// Cut a buffer into record-sized slices, each ending with its `ER` line.
///
/// A run of `ER` lines with nothing else between them stays with the record
/// they follow, matching [`CitationParser::parse`], which ignores everything
/// after the first `ER`. Trailing text after the last `ER` is kept as a final
/// slice so that a truncated record still fails framing instead of vanishing.
fn split_records(input: &str) -> Vec<&str> {
    let mut records: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    let mut has_content = false;

    for (line, end) in physical_lines(input) {
        if line.starts_with(tags::END_TAG) {
            match records.last_mut() {
                Some((_, last_end)) if !has_content => *last_end = end,
                _ => records.push((start, end)),
            }
            start = end;
            has_content = false;
        } else if !line.trim().is_empty() {
            has_content = true;
        }
    }
    if has_content {
        records.push((start, input.len()));
    }

    records
        .into_iter()
        .map(|(start, end)| &input[start..end])
        .collect_vec()
}
