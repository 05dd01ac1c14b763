//! Stable error codes for `galaxy explain` lookups.

use std::fmt;

/// Error codes for all rewrite diagnostics.
///
/// Format: G#### in the order the failures can occur while reading a
/// definition, a filter chain, then a template.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Invalid start character in a name
    G0001,
    /// Invalid character in a name
    G0002,
    /// Argument list without a name
    G0003,
    /// Unclosed argument list
    G0004,
    /// Missing filter expression
    G0005,
    /// Missing template expression
    G0006,
    /// Unterminated template interpolation
    G0007,
    /// Text after a filter's argument list
    G0008,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::G0001,
        ErrorCode::G0002,
        ErrorCode::G0003,
        ErrorCode::G0004,
        ErrorCode::G0005,
        ErrorCode::G0006,
        ErrorCode::G0007,
        ErrorCode::G0008,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::G0001 => "G0001",
            ErrorCode::G0002 => "G0002",
            ErrorCode::G0003 => "G0003",
            ErrorCode::G0004 => "G0004",
            ErrorCode::G0005 => "G0005",
            ErrorCode::G0006 => "G0006",
            ErrorCode::G0007 => "G0007",
            ErrorCode::G0008 => "G0008",
        }
    }

    /// Codes raised while reading a filter or method name.
    pub fn is_definition_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::G0001
                | ErrorCode::G0002
                | ErrorCode::G0003
                | ErrorCode::G0004
                | ErrorCode::G0008
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
