//! Error types for RIS parsing.
//!
//! Every failure is fatal for the parse call that produced it: a caller gets
//! either a complete [`Citation`](crate::Citation) or exactly one
//! [`CitationError`] describing the first fault found.

use thiserror::Error;

/// A specialized Result type for citation operations.
pub type Result<T> = std::result::Result<T, CitationError>;

/// Represents errors that can occur during citation parsing.
#[derive(Error, Debug)]
pub enum CitationError {
    /// The record is not framed by `TY` ... `ER`, or contains no tags at all.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The `TY` value is not one of the known reference type codes.
    #[error("unknown reference type: '{0}'")]
    UnknownReferenceType(String),

    /// A non-blank line too short to hold a tag and its separator.
    #[error("malformed line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CitationError {
    pub(crate) fn malformed_document(reason: &str) -> Self {
        CitationError::MalformedDocument(reason.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_error_display() {
        let error = CitationError::malformed_document("no tags found");
        assert_eq!(error.to_string(), "malformed document: no tags found");

        let error = CitationError::UnknownReferenceType("jour".to_string());
        assert_eq!(error.to_string(), "unknown reference type: 'jour'");

        let error = CitationError::MalformedLine {
            line: 3,
            content: "TI".to_string(),
        };
        assert_eq!(error.to_string(), "malformed line 3: 'TI'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let error: CitationError = io.into();
        assert!(matches!(error, CitationError::Io(_)));
    }
}
