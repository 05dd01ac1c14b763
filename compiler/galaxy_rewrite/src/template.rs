//! Template interpolation rewriting: `Hello, {{ name |> upper }}!`.
//!
//! Literal text outside tags is emitted as backtick literals; each tag body
//! goes through the filter rewriter and is wrapped in the tag pragma. The
//! pieces are joined with ` + `.

use galaxy_diagnostic::RewriteError;
use galaxy_scan::{Cursor, Step};
use memchr::memmem;

use crate::filter::rewrite_filters;
use crate::RewriteResult;

const OPEN_TAG: &[u8] = b"{{";

/// Rewrite every `{{ ... }}` tag in `template`.
///
/// Text outside tags is literal: quotes in it mean nothing, and only `{{`
/// is looked for. Inside a tag the body is scanned as code, so braces in
/// strings, template literals and object literals do not end the tag.
///
/// An empty template yields an empty string.
pub fn rewrite_template(template: &str, tag_pragma: &str, filter_pragma: &str) -> RewriteResult {
    tracing::debug!(len = template.len(), "rewriting template");

    let mut segments = Vec::new();
    let mut literal_start = 0;
    let finder = memmem::Finder::new(OPEN_TAG);

    while let Some(found) = finder.find(&template.as_bytes()[literal_start..]) {
        let open = literal_start + found;
        let body_start = open + OPEN_TAG.len();
        let close = find_closing_tag(template, body_start)?;

        push_literal(&mut segments, &template[literal_start..open]);

        let raw_body = &template[body_start..close];
        let body = raw_body.trim();
        if body.is_empty() {
            return Err(RewriteError::missing_template_expression(close - 1));
        }
        let body_offset = body_start + (raw_body.len() - raw_body.trim_start().len());

        let expression = rewrite_filters(body, filter_pragma)
            .map_err(|err| err.offset_by(body_offset).in_template_expression())?;
        tracing::trace!(open, close, "rewrote template tag");
        segments.push(format!("{tag_pragma}({expression})"));

        literal_start = close + 2;
    }

    push_literal(&mut segments, &template[literal_start..]);
    Ok(segments.join(" + "))
}

/// Find the first `}` of the `}}` that closes a tag whose body starts at
/// `body_start`.
fn find_closing_tag(template: &str, body_start: usize) -> Result<usize, RewriteError> {
    let mut depth = 1u32;
    let mut close = None;
    let mut cursor = Cursor::at(template, body_start);
    cursor.try_scan_code(|c| {
        match c.current() {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    if c.peek() != b'}' {
                        return Err(RewriteError::unterminated_interpolation(c.pos() + 1));
                    }
                    close = Some(c.pos());
                    return Ok(Step::Stop);
                }
            }
            _ => {}
        }
        Ok(Step::Continue)
    })?;
    close.ok_or_else(|| RewriteError::unterminated_interpolation(template.len()))
}

fn push_literal(segments: &mut Vec<String>, text: &str) {
    if !text.is_empty() {
        segments.push(format!("`{}`", escape_literal(text)));
    }
}

/// Escape text for a backtick literal: `\`, `` ` `` and the `$` of `${`.
fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' | '`' => escaped.push('\\'),
            '$' if chars.peek() == Some(&'{') => escaped.push('\\'),
            _ => {}
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests;
