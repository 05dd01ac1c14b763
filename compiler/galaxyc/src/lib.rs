//! Galaxy Expression Compiler
//!
//! Turns template text, bound expressions and event handlers into
//! [`Evaluator`] descriptors: a parameter list plus a function body that a
//! host runtime can instantiate.
//!
//! ```text
//! template ──► rewrite_template ──┐
//! expr     ──► rewrite_filters  ──┼──► compile_getter ──┐
//! event    ──► rewrite_methods  ──┼─────────────────────┼──► compile_evaluator ──► Arc<Evaluator>
//! setter   ───────────────────────┘                     │
//!                                                       └─ cached by body text
//! ```

use std::sync::Once;

pub mod commands;
mod compiler;
mod evaluator;

pub use compiler::{Compiler, CompilerOptions};
pub use evaluator::Evaluator;
pub use galaxy_rewrite::{Pragmas, RewriteError};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
