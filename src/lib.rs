//! A library for parsing RIS citation records.
//!
//! `risparse` turns the text of one RIS (Research Information Systems) record
//! into a [`Citation`]. RIS is a line oriented format: every line holds a
//! two-letter tag in the first two columns and its value from the seventh
//! column on, and every record is framed by a `TY` line naming its
//! [`ReferenceType`] and a closing `ER` line.
//!
//! # Key Features
//!
//! - **Typed fields**: authors and keywords accumulate in order, every other
//!   recognized tag keeps its first value
//! - **Nothing lost**: tags outside the recognized set are kept, in order,
//!   in [`Citation::unknown_tags`]
//! - **Strict framing**: a record must open with `TY` and close with `ER`
//! - **Multi-record files**: [`RisParser::parse_all`] splits at each `ER`
//!
//! # Basic Usage
//!
//! ```rust
//! use risparse::{CitationParser, ReferenceType, RisParser};
//!
//! let input = r#"TY  - ELEC
//! AU  - Chesak,Adam
//! TI  - Nim RIS module documentation
//! KW  - Nim
//! KW  - RIS
//! ER  -"#;
//!
//! let parser = RisParser::new();
//! let citation = parser.parse(input).unwrap();
//! assert_eq!(citation.reference_type, ReferenceType::ELEC);
//! assert_eq!(citation.keywords, vec!["Nim", "RIS"]);
//! ```
//!
//! # Error Handling
//!
//! The library uses a custom [`Result`] type that wraps [`CitationError`]. A
//! parse either yields a complete citation or the first fault found:
//!
//! ```rust
//! use risparse::{CitationError, CitationParser, RisParser};
//!
//! let result = RisParser::new().parse("TI  - No type line\nER  -");
//! match result {
//!     Ok(citation) => println!("Parsed {:?}", citation.title),
//!     Err(CitationError::MalformedDocument(reason)) => eprintln!("Parse error: {}", reason),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! # Logging
//!
//! Parsing emits `tracing` events at `debug` and `trace` level. The library
//! never installs a subscriber.
//!
//! # Thread Safety
//!
//! Parsing holds no shared state, so parsers can be shared between threads.
//! Enable the `parallel` feature to have [`RisParser::parse_many`] use rayon.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod reference_type;
pub mod ris;

// Reexports
pub use error::{CitationError, Result};
pub use reference_type::ReferenceType;
pub use ris::RisParser;
pub use ris::tags::{RepeatableTag, ScalarTag, TagAction};

/// Represents a single citation with its metadata.
///
/// Scalar fields are `None` until their tag appears; a tag with an empty
/// value sets the field to `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Type of the citation (TY)
    pub reference_type: ReferenceType,

    /// Authors (AU)
    pub authors: Vec<String>,
    /// Secondary authors, usually editors (A2)
    pub secondary_authors: Vec<String>,
    /// Tertiary authors (A3)
    pub tertiary_authors: Vec<String>,
    /// Subsidiary authors (A4)
    pub subsidiary_authors: Vec<String>,
    /// Keywords (KW)
    pub keywords: Vec<String>,

    /// Abstract text (AB)
    pub abstract_text: Option<String>,
    /// Author address (AD)
    pub author_address: Option<String>,
    /// Accession number (AN)
    pub accession_number: Option<String>,
    /// Custom 1 (C1)
    pub custom1: Option<String>,
    /// Custom 2 (C2)
    pub custom2: Option<String>,
    /// Custom 3 (C3)
    pub custom3: Option<String>,
    /// Custom 4 (C4)
    pub custom4: Option<String>,
    /// Custom 5 (C5)
    pub custom5: Option<String>,
    /// Custom 6 (C6)
    pub custom6: Option<String>,
    /// Custom 7 (C7)
    pub custom7: Option<String>,
    /// Custom 8 (C8)
    pub custom8: Option<String>,
    /// Caption (CA)
    pub caption: Option<String>,
    /// Call number (CN)
    pub call_number: Option<String>,
    /// Place published (CY)
    pub place_published: Option<String>,
    /// Date (DA)
    pub date: Option<String>,
    /// Name of database (DB)
    pub database_name: Option<String>,
    /// Digital Object Identifier (DO)
    pub doi: Option<String>,
    /// Database provider (DP)
    pub database_provider: Option<String>,
    /// End page (EP)
    pub end_page: Option<String>,
    /// Edition (ET)
    pub edition: Option<String>,
    /// Issue number (IS)
    pub issue: Option<String>,
    /// Alternate title, often the journal abbreviation (J2)
    pub alternate_title: Option<String>,
    /// Language (LA)
    pub language: Option<String>,
    /// Label (LB)
    pub label: Option<String>,
    /// Number (M1)
    pub number: Option<String>,
    /// Type of work (M3)
    pub type_of_work: Option<String>,
    /// Notes (N1)
    pub notes: Option<String>,
    /// Number of volumes (NV)
    pub number_of_volumes: Option<String>,
    /// Original publication (OP)
    pub original_publication: Option<String>,
    /// Publisher (PB)
    pub publisher: Option<String>,
    /// Publication year, raw `YYYY/MM/DD/other` text (PY)
    pub year: Option<String>,
    /// Research notes (RN)
    pub research_notes: Option<String>,
    /// Section (SE)
    pub section: Option<String>,
    /// ISBN or ISSN (SN)
    pub isbn_issn: Option<String>,
    /// Start page (SP)
    pub start_page: Option<String>,
    /// Short title (ST)
    pub short_title: Option<String>,
    /// Secondary title, e.g. journal or book title (T2)
    pub secondary_title: Option<String>,
    /// Tertiary title (T3)
    pub tertiary_title: Option<String>,
    /// Title of the work (TI)
    pub title: Option<String>,
    /// Translated title (TT)
    pub translated_title: Option<String>,
    /// URL (UR)
    pub url: Option<String>,
    /// Volume number (VL)
    pub volume: Option<String>,
    /// Access date (Y2)
    pub access_date: Option<String>,

    /// Tags not covered by the fields above, as `(tag, value)` in file order
    pub unknown_tags: Vec<(String, String)>,
}

impl Citation {
    /// Create an empty citation of the given type.
    pub fn new(reference_type: ReferenceType) -> Self {
        Self {
            reference_type,
            authors: Vec::new(),
            secondary_authors: Vec::new(),
            tertiary_authors: Vec::new(),
            subsidiary_authors: Vec::new(),
            keywords: Vec::new(),
            abstract_text: None,
            author_address: None,
            accession_number: None,
            custom1: None,
            custom2: None,
            custom3: None,
            custom4: None,
            custom5: None,
            custom6: None,
            custom7: None,
            custom8: None,
            caption: None,
            call_number: None,
            place_published: None,
            date: None,
            database_name: None,
            doi: None,
            database_provider: None,
            end_page: None,
            edition: None,
            issue: None,
            alternate_title: None,
            language: None,
            label: None,
            number: None,
            type_of_work: None,
            notes: None,
            number_of_volumes: None,
            original_publication: None,
            publisher: None,
            year: None,
            research_notes: None,
            section: None,
            isbn_issn: None,
            start_page: None,
            short_title: None,
            secondary_title: None,
            tertiary_title: None,
            title: None,
            translated_title: None,
            url: None,
            volume: None,
            access_date: None,
            unknown_tags: Vec::new(),
        }
    }

    /// Look up a scalar field by its RIS tag.
    ///
    /// Returns `None` for unset fields, and for tags that are not scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use risparse::{Citation, ReferenceType};
    ///
    /// let mut citation = Citation::new(ReferenceType::BOOK);
    /// citation.publisher = Some("Acme".to_string());
    /// assert_eq!(citation.get("PB"), Some("Acme"));
    /// assert_eq!(citation.get("AU"), None);
    /// ```
    pub fn get(&self, tag: &str) -> Option<&str> {
        match TagAction::lookup(tag) {
            Some(TagAction::SetIfAbsent(scalar)) => scalar.get(self),
            _ => None,
        }
    }

    /// Values of an unrecognized tag, in file order.
    pub fn unknown<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.unknown_tags
            .iter()
            .filter(move |(t, _)| t == tag)
            .map(|(_, value)| value.as_str())
    }
}

/// Trait for implementing citation parsers.
pub trait CitationParser {
    /// Parse a string containing one citation.
    ///
    /// # Arguments
    ///
    /// * `input` - The string containing citation data
    ///
    /// # Returns
    ///
    /// A Result containing the parsed Citation or a CitationError
    ///
    /// # Errors
    ///
    /// Returns `CitationError` if the input is malformed
    fn parse(&self, input: &str) -> Result<Citation>;
}
