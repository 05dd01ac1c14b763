//! Function-definition extraction: `name` or `name(raw args)`.

use std::cell::Cell;

use galaxy_diagnostic::{DefinitionKind, RewriteError};
use galaxy_scan::{
    is_code_whitespace, is_forbidden_ident_start, is_ident_continue, Cursor, Step,
};

/// Raw, unparsed argument text of a definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FnArgs<'a> {
    /// Text between the parentheses, verbatim.
    pub text: &'a str,
    /// Offset of `text` in the scanned buffer.
    pub start: usize,
}

/// A name with an optional parenthesized argument list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FnDefinition<'a> {
    pub name: &'a str,
    /// `None` when no `(` followed the name.
    pub args: Option<FnArgs<'a>>,
    /// Offset just past the definition: after the closing `)`, or the end
    /// of the buffer for a bare name.
    pub end: usize,
}

/// Read a definition from `source` starting at `start`.
///
/// The name runs up to the first `(` seen in code context; the arguments
/// run to the `)` that balances it, skipping parentheses inside strings
/// and template literals. Without a `(` the whole rest of the buffer must
/// be the name.
///
/// Error positions are offsets into `source`.
pub fn extract_definition(
    kind: DefinitionKind,
    source: &str,
    start: usize,
) -> Result<FnDefinition<'_>, RewriteError> {
    let mut cursor = Cursor::at(source, start);
    let start = cursor.pos();

    let first = start + leading_whitespace(&source[start..]);
    if is_forbidden_ident_start(cursor.byte_at(first)) {
        return Err(RewriteError::invalid_identifier_start(kind, first));
    }

    // Code-context scanning hides whitespace and quote delimiters from the
    // visitor; `visited_to` lets us check those gaps so quotes cannot slip
    // into a name.
    let visited_to = Cell::new(start);
    let mut open_paren = None;
    cursor.try_scan(
        |c| {
            check_gap(kind, c.source(), visited_to.get(), c.pos())?;
            let b = c.current();
            if b == b'(' {
                open_paren = Some(c.pos());
                return Ok(Step::Stop);
            }
            if !is_ident_continue(b) {
                return Err(RewriteError::invalid_identifier_char(kind, c.pos()));
            }
            visited_to.set(c.pos() + 1);
            Ok(Step::Continue)
        },
        |c| {
            check_gap(kind, c.source(), visited_to.get(), c.pos())?;
            Err(RewriteError::invalid_identifier_char(kind, c.pos()))
        },
    )?;

    let Some(open) = open_paren else {
        check_gap(kind, source, visited_to.get(), source.len())?;
        let name = source[start..].trim();
        if name.is_empty() {
            return Err(RewriteError::missing_name(kind, start));
        }
        return Ok(FnDefinition {
            name,
            args: None,
            end: source.len(),
        });
    };

    let name = source[start..open].trim();
    if name.is_empty() {
        return Err(RewriteError::missing_name(kind, start));
    }

    cursor.advance(); // consume '('
    let args_start = cursor.pos();
    let mut depth = 1u32;
    let mut close = None;
    cursor.scan_code(|c| {
        match c.current() {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(c.pos());
                    return Step::Stop;
                }
            }
            _ => {}
        }
        Step::Continue
    });

    let Some(close) = close else {
        return Err(RewriteError::unclosed_arguments(kind, open));
    };

    Ok(FnDefinition {
        name,
        args: Some(FnArgs {
            text: &source[args_start..close],
            start: args_start,
        }),
        end: close + 1,
    })
}

fn leading_whitespace(text: &str) -> usize {
    text.len() - text.trim_start().len()
}

/// Everything the scanner skipped between two visited characters must be
/// whitespace; anything else is a quote delimiter.
fn check_gap(
    kind: DefinitionKind,
    source: &str,
    from: usize,
    to: usize,
) -> Result<(), RewriteError> {
    let skipped = source.as_bytes().get(from..to).unwrap_or_default();
    match skipped.iter().position(|&b| !is_code_whitespace(b)) {
        Some(offset) => Err(RewriteError::invalid_identifier_char(kind, from + offset)),
        None => Ok(()),
    }
}
