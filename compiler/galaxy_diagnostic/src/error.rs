//! Rewrite error values.

use std::fmt;

use crate::{codeframe, ErrorCode};

/// What sort of name the function-definition extractor was reading.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DefinitionKind {
    /// A filter reference after `|>`.
    Filter,
    /// A `#name(...)` stateful method reference.
    StatefulMethod,
}

impl DefinitionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DefinitionKind::Filter => "filter",
            DefinitionKind::StatefulMethod => "stateful method",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// Name begins with a digit or `$`.
    #[error("invalid start character for a {0} name")]
    InvalidIdentifierStart(DefinitionKind),
    /// Non-identifier character before the argument list.
    #[error("invalid character in {0} name")]
    InvalidIdentifierChar(DefinitionKind),
    /// `(` with nothing in front of it.
    #[error("{0} must have a name")]
    MissingName(DefinitionKind),
    /// `(` never balanced by a matching `)`.
    #[error("missing closing parenthesis in {0} arguments")]
    UnclosedArguments(DefinitionKind),
    /// Text left over after a filter's closing `)`.
    #[error("unexpected characters after {0} arguments")]
    TrailingCharacters(DefinitionKind),
    /// Nothing after a `|>` separator.
    #[error("missing filter expression")]
    MissingFilterExpression,
    /// `{{ }}` with only whitespace inside.
    #[error("missing template expression")]
    MissingTemplateExpression,
    /// `{{ ...` not closed by a doubled `}}`.
    #[error("expecting closing template tag")]
    UnterminatedInterpolation,
}

impl ErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ErrorKind::InvalidIdentifierStart(_) => ErrorCode::G0001,
            ErrorKind::InvalidIdentifierChar(_) => ErrorCode::G0002,
            ErrorKind::MissingName(_) => ErrorCode::G0003,
            ErrorKind::UnclosedArguments(_) => ErrorCode::G0004,
            ErrorKind::MissingFilterExpression => ErrorCode::G0005,
            ErrorKind::MissingTemplateExpression => ErrorCode::G0006,
            ErrorKind::UnterminatedInterpolation => ErrorCode::G0007,
            ErrorKind::TrailingCharacters(_) => ErrorCode::G0008,
        }
    }
}

/// A failed rewrite.
///
/// `position` is a byte offset into the top-level input handed to the
/// rewriter, even when the failure came from a nested rewrite of a
/// substring: nested callers remap with [`offset_by`](Self::offset_by)
/// before propagating.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RewriteError {
    pub kind: ErrorKind,
    pub position: usize,
    /// Raised while rewriting the body of a `{{ ... }}` interpolation.
    pub in_template: bool,
}

impl RewriteError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self {
            kind,
            position,
            in_template: false,
        }
    }

    #[cold]
    pub fn invalid_identifier_start(what: DefinitionKind, position: usize) -> Self {
        Self::new(ErrorKind::InvalidIdentifierStart(what), position)
    }

    #[cold]
    pub fn invalid_identifier_char(what: DefinitionKind, position: usize) -> Self {
        Self::new(ErrorKind::InvalidIdentifierChar(what), position)
    }

    #[cold]
    pub fn missing_name(what: DefinitionKind, position: usize) -> Self {
        Self::new(ErrorKind::MissingName(what), position)
    }

    #[cold]
    pub fn unclosed_arguments(what: DefinitionKind, position: usize) -> Self {
        Self::new(ErrorKind::UnclosedArguments(what), position)
    }

    #[cold]
    pub fn trailing_characters(what: DefinitionKind, position: usize) -> Self {
        Self::new(ErrorKind::TrailingCharacters(what), position)
    }

    #[cold]
    pub fn missing_filter_expression(position: usize) -> Self {
        Self::new(ErrorKind::MissingFilterExpression, position)
    }

    #[cold]
    pub fn missing_template_expression(position: usize) -> Self {
        Self::new(ErrorKind::MissingTemplateExpression, position)
    }

    #[cold]
    pub fn unterminated_interpolation(position: usize) -> Self {
        Self::new(ErrorKind::UnterminatedInterpolation, position)
    }

    /// Shift the position by `base`, the offset at which the nested input
    /// this error was raised against starts inside its enclosing input.
    #[must_use]
    pub fn offset_by(mut self, base: usize) -> Self {
        self.position += base;
        self
    }

    /// Mark the error as raised inside a template interpolation body.
    #[must_use]
    pub fn in_template_expression(mut self) -> Self {
        self.in_template = true;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Render with a code frame over `source`, the input `position` refers to.
    pub fn render(&self, source: &str) -> String {
        format!(
            "error[{}]: {}",
            self.code(),
            codeframe::render(&self.to_string(), source, self.position)
        )
    }
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_template {
            write!(f, "error in template expression: {}", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl std::error::Error for RewriteError {}
