//! The outer compiler: rewrite passes plus a per-compiler evaluator cache.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use galaxy_rewrite::{rewrite_filters, rewrite_methods, rewrite_template, Pragmas, RewriteError};

use crate::evaluator::{args_param, Evaluator};

static NEXT_COMPILER_ID: AtomicU64 = AtomicU64::new(0);

/// Options for a [`Compiler`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompilerOptions {
    pub pragmas: Pragmas,
}

impl CompilerOptions {
    #[must_use]
    pub fn with_pragmas(mut self, pragmas: Pragmas) -> Self {
        self.pragmas = pragmas;
        self
    }
}

/// Compiles Galaxy source text into cached [`Evaluator`]s.
///
/// Every compiler has a process-unique id that names the hidden parameters
/// of its evaluators, so evaluators from different compilers never share
/// parameter names. The cache is keyed by the exact body text and can be
/// used from several threads at once.
#[derive(Debug)]
pub struct Compiler {
    id: String,
    pragmas: Pragmas,
    evaluators: DashMap<String, Arc<Evaluator>>,
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new(CompilerOptions::default())
    }
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        let id = NEXT_COMPILER_ID.fetch_add(1, Ordering::Relaxed).to_string();
        tracing::debug!(id = %id, "created compiler");
        Compiler {
            id,
            pragmas: options.pragmas,
            evaluators: DashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pragmas(&self) -> &Pragmas {
        &self.pragmas
    }

    /// Number of distinct evaluator bodies compiled so far.
    pub fn cached_evaluators(&self) -> usize {
        self.evaluators.len()
    }

    /// Compile template text such as `Hello, {{ name }}!` into a getter.
    pub fn compile_template(&self, template: &str) -> Result<Arc<Evaluator>, RewriteError> {
        let expression =
            rewrite_template(template, &self.pragmas.template, &self.pragmas.filter)?;
        Ok(self.compile_getter(&expression))
    }

    /// Compile a bound expression, filters allowed, into a getter.
    pub fn compile_expression(&self, expression: &str) -> Result<Arc<Evaluator>, RewriteError> {
        let expression = rewrite_filters(expression, &self.pragmas.filter)?;
        Ok(self.compile_getter(&expression))
    }

    /// Compile an event handler; `#method(...)` calls become method pragma calls.
    pub fn compile_event(&self, expression: &str) -> Result<Arc<Evaluator>, RewriteError> {
        let body = rewrite_methods(expression, &self.pragmas.method)?;
        Ok(self.compile_evaluator(&body))
    }

    /// Compile an assignment of the evaluator's first extra argument to
    /// `expression`.
    pub fn compile_setter(&self, expression: &str) -> Arc<Evaluator> {
        let args = args_param(&self.id);
        self.compile_evaluator(&format!("({expression} = {args}[0])"))
    }

    /// Compile an evaluator returning `expression`.
    pub fn compile_getter(&self, expression: &str) -> Arc<Evaluator> {
        self.compile_evaluator(&format!("return {expression}"))
    }

    /// Compile a raw function body, reusing the cached evaluator when the
    /// same body was compiled before.
    pub fn compile_evaluator(&self, body: &str) -> Arc<Evaluator> {
        // Fast path: already compiled
        if let Some(evaluator) = self.evaluators.get(body) {
            tracing::trace!(body, "evaluator cache hit");
            return Arc::clone(evaluator.value());
        }

        // Slow path: the entry API keeps concurrent misses from racing
        let evaluator = self
            .evaluators
            .entry(body.to_string())
            .or_insert_with(|| {
                tracing::trace!(body, "evaluator cache miss");
                Arc::new(Evaluator::new(&self.id, body.to_string()))
            });
        Arc::clone(evaluator.value())
    }
}
