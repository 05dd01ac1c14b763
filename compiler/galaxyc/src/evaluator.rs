//! Evaluator descriptors.

use std::fmt;

/// A compiled evaluator: two parameters and a scoped function body.
///
/// The first parameter receives the caller's locals, the second is a rest
/// parameter holding extra arguments (setters read their value from its
/// first element). The body runs with the receiver, its `state` and the
/// locals layered as lookup scopes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluator {
    locals: String,
    args: String,
    body: String,
}

impl Evaluator {
    pub(crate) fn new(compiler_id: &str, body: String) -> Self {
        Evaluator {
            locals: locals_param(compiler_id),
            args: args_param(compiler_id),
            body,
        }
    }

    /// Name of the locals parameter.
    pub fn locals_param(&self) -> &str {
        &self.locals
    }

    /// Name of the rest-arguments parameter, without the `...`.
    pub fn args_param(&self) -> &str {
        &self.args
    }

    /// Parameter list as written in source: `[locals, "...args"]`.
    pub fn params(&self) -> [String; 2] {
        [self.locals.clone(), format!("...{}", self.args)]
    }

    /// The unscoped body this evaluator was compiled from.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The body wrapped in its three lookup scopes.
    pub fn scoped_body(&self) -> String {
        format!(
            "with (this) {{with (state) {{with ({}) {{{}}}}}}}",
            self.locals, self.body
        )
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [locals, args] = self.params();
        write!(f, "function ({locals}, {args}) {{{}}}", self.scoped_body())
    }
}

fn locals_param(compiler_id: &str) -> String {
    format!("__locals_{compiler_id}__")
}

pub(crate) fn args_param(compiler_id: &str) -> String {
    format!("__args_{compiler_id}__")
}
