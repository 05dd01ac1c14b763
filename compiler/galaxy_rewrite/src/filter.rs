//! Filter-pipe rewriting: `value |> upper |> truncate(10)`.

use galaxy_diagnostic::{DefinitionKind, RewriteError};
use galaxy_scan::{Cursor, Step};

use crate::fn_def::extract_definition;
use crate::RewriteResult;

/// A slice of the expression between two `|>` separators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FilterSegment<'a> {
    /// Offset of `text` in the expression.
    pub start: usize,
    pub text: &'a str,
}

/// Split `expression` on every top-level `|>` seen in code context.
///
/// Separators inside parentheses, brackets or braces (including `${ }`
/// interpolations) belong to a nested expression and are left alone. The
/// first segment is the base expression; the rest are filters. There is
/// always at least one segment.
pub(crate) fn split_filters(expression: &str) -> Vec<FilterSegment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut nesting = 0u32;
    let mut cursor = Cursor::new(expression);
    cursor.scan_code(|c| {
        match c.current() {
            b'(' | b'[' => nesting += 1,
            b')' | b']' => nesting = nesting.saturating_sub(1),
            _ => {}
        }
        let top_level = nesting == 0 && c.brace_depth() == 0;
        if top_level && c.current() == b'>' && c.prev() == b'|' {
            segments.push(FilterSegment {
                start,
                text: &expression[start..c.pos() - 1],
            });
            start = c.pos() + 1;
        }
        Step::Continue
    });
    segments.push(FilterSegment {
        start,
        text: &expression[start..],
    });
    segments
}

/// Fold a filter chain into nested `pragma('name', value[, args])` calls.
///
/// Filter arguments are copied verbatim. Error positions are offsets into
/// `expression`.
pub fn rewrite_filters(expression: &str, pragma: &str) -> RewriteResult {
    let segments = split_filters(expression);
    let Some((base, filters)) = segments.split_first() else {
        return Ok(String::new());
    };
    tracing::debug!(filters = filters.len(), "rewriting filter chain");

    let mut folded = base.text.trim().to_string();
    for segment in filters {
        let filter = segment.text.trim();
        if filter.is_empty() {
            return Err(RewriteError::missing_filter_expression(segment.start));
        }
        let offset = segment.start + (segment.text.len() - segment.text.trim_start().len());

        let definition = extract_definition(DefinitionKind::Filter, filter, 0)
            .map_err(|err| err.offset_by(offset))?;

        let rest = &filter[definition.end..];
        if !rest.trim().is_empty() {
            let trailing = definition.end + (rest.len() - rest.trim_start().len());
            return Err(RewriteError::trailing_characters(
                DefinitionKind::Filter,
                offset + trailing,
            ));
        }

        tracing::trace!(filter = definition.name, "folding filter");
        folded = match definition.args {
            Some(args) if !args.text.trim().is_empty() => {
                format!("{pragma}('{}', {folded}, {})", definition.name, args.text)
            }
            Some(_) => format!("{pragma}('{}', {folded})", definition.name),
            // A bare filter is named by its whole (trimmed) segment.
            None => format!("{pragma}('{filter}', {folded})"),
        };
    }

    Ok(folded)
}
