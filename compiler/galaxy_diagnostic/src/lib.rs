//! Error reporting for Galaxy expression rewriting.
//!
//! Every rewrite either succeeds or fails once with a [`RewriteError`]:
//! - WHAT: an [`ErrorKind`] with a stable [`ErrorCode`]
//! - WHERE: a byte offset into the caller's top-level input
//!
//! Presentation is kept separate from control flow: [`codeframe`] turns a
//! source text and an offset into a one-line excerpt with a caret, and is
//! only consulted when an error is rendered for a human.

pub mod codeframe;
mod error;
mod error_code;
pub mod errors;

pub use codeframe::{highlight, render};
pub use error::{DefinitionKind, ErrorKind, RewriteError};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
