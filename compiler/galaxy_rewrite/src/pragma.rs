//! Names of the runtime functions rewritten code calls into.

/// Default template tag pragma.
pub const DEFAULT_TEMPLATE_PRAGMA: &str = "__$n";
/// Default filter pragma.
pub const DEFAULT_FILTER_PRAGMA: &str = "$filter";
/// Default stateful method pragma.
pub const DEFAULT_METHOD_PRAGMA: &str = "$commit";

/// The set of pragma names used by the rewrite passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pragmas {
    /// Wraps each interpolated template expression.
    pub template: String,
    /// Applies a filter: `filter(name, value, ...args)`.
    pub filter: String,
    /// Invokes a stateful method: `method(name, ...args)`.
    pub method: String,
}

impl Default for Pragmas {
    fn default() -> Self {
        Pragmas {
            template: DEFAULT_TEMPLATE_PRAGMA.to_string(),
            filter: DEFAULT_FILTER_PRAGMA.to_string(),
            method: DEFAULT_METHOD_PRAGMA.to_string(),
        }
    }
}

impl Pragmas {
    #[must_use]
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template = name.into();
        self
    }

    #[must_use]
    pub fn with_filter(mut self, name: impl Into<String>) -> Self {
        self.filter = name.into();
        self
    }

    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.method = name.into();
        self
    }
}
