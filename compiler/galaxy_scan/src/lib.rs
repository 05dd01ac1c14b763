//! Context-tracking scanner for Galaxy template and event expressions.
//!
//! The scanner does not tokenize. It walks a buffer byte by byte and
//! classifies every position as bare expression code, quoted-string
//! content, or template-literal content, keeping track of `${ ... }`
//! interpolations nested inside template literals. Callers drive it with
//! visitor closures and decide for themselves what a character means.
//!
//! Every byte the scanner reacts to is ASCII, so offsets it reports always
//! fall on UTF-8 character boundaries of the scanned `&str`.

mod cursor;

pub use cursor::{
    is_code_whitespace, is_forbidden_ident_start, is_ident_continue, Context, Cursor, Step,
};
