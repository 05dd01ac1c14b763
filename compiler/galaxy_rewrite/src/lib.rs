//! Expression rewriting passes for Galaxy templates and event handlers.
//!
//! Three independent passes turn authoring syntax into plain expression
//! source for the host runtime:
//!
//! - [`rewrite_template`]: `Hello, {{ name }}!` into a concatenation of
//!   literal segments and tag-pragma calls.
//! - [`rewrite_filters`]: `value |> upper |> truncate(10)` into nested
//!   filter-pragma calls.
//! - [`rewrite_methods`]: `#save(item)` into method-pragma calls.
//!
//! All passes share the context-tracking scanner from `galaxy_scan`, so
//! markers inside strings and template literals are never rewritten. Every
//! pass is a pure function of its input; errors carry offsets into the
//! input passed to the top-level call.

mod filter;
mod fn_def;
mod method;
mod pragma;
mod template;

pub use filter::rewrite_filters;
pub use fn_def::{extract_definition, FnArgs, FnDefinition};
pub use galaxy_diagnostic::{DefinitionKind, ErrorKind, RewriteError};
pub use method::rewrite_methods;
pub use pragma::{
    Pragmas, DEFAULT_FILTER_PRAGMA, DEFAULT_METHOD_PRAGMA, DEFAULT_TEMPLATE_PRAGMA,
};
pub use template::rewrite_template;

/// Result of a rewrite pass.
pub type RewriteResult = Result<String, RewriteError>;
