//! Embedded error documentation for `galaxy explain`.
//!
//! Each error code has a markdown file in this directory, embedded at
//! compile time.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::G0001, include_str!("G0001.md")),
    (ErrorCode::G0002, include_str!("G0002.md")),
    (ErrorCode::G0003, include_str!("G0003.md")),
    (ErrorCode::G0004, include_str!("G0004.md")),
    (ErrorCode::G0005, include_str!("G0005.md")),
    (ErrorCode::G0006, include_str!("G0006.md")),
    (ErrorCode::G0007, include_str!("G0007.md")),
    (ErrorCode::G0008, include_str!("G0008.md")),
];
