//! Stateful method rewriting: `#save(item)` into `pragma('save', item)`.

use galaxy_diagnostic::{DefinitionKind, RewriteError};
use galaxy_scan::{Cursor, Step};

use crate::fn_def::extract_definition;
use crate::RewriteResult;

/// Marker that introduces a stateful method reference.
const METHOD_MARKER: u8 = b'#';

/// Replace every `#name` / `#name(args)` in code context with a call to
/// `pragma`. Arguments are rewritten recursively, so references nested in
/// them are replaced too; everything else is copied through unchanged.
pub fn rewrite_methods(expression: &str, pragma: &str) -> RewriteResult {
    tracing::debug!(len = expression.len(), "rewriting stateful methods");

    let mut rewritten = String::with_capacity(expression.len());
    let mut copied_to = 0;
    let mut cursor = Cursor::new(expression);
    cursor.try_scan_code(|c| -> Result<Step, RewriteError> {
        if c.current() != METHOD_MARKER {
            return Ok(Step::Continue);
        }
        let marker = c.pos();
        let definition =
            extract_definition(DefinitionKind::StatefulMethod, expression, marker + 1)?;

        rewritten.push_str(&expression[copied_to..marker]);
        match definition.args {
            Some(args) if !args.text.trim().is_empty() => {
                let inner = rewrite_methods(args.text, pragma)
                    .map_err(|err| err.offset_by(args.start))?;
                rewritten.push_str(&format!("{pragma}('{}', {inner})", definition.name));
            }
            _ => rewritten.push_str(&format!("{pragma}('{}')", definition.name)),
        }
        tracing::trace!(method = definition.name, "rewrote stateful method");

        copied_to = definition.end;
        c.resume_at(definition.end);
        Ok(Step::Continue)
    })?;

    rewritten.push_str(&expression[copied_to..]);
    Ok(rewritten)
}
