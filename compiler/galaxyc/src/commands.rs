//! Command handlers for the `galaxy` CLI.

use std::sync::Arc;

use galaxy_diagnostic::{ErrorCode, ErrorDocs};

use crate::{Compiler, CompilerOptions, Evaluator, Pragmas, RewriteError};

/// What a compile command treats its input as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompileMode {
    /// Template text with `{{ }}` interpolations.
    Template,
    /// A bound expression, filters allowed.
    Expression,
    /// An event handler, `#method` calls allowed.
    Event,
}

impl CompileMode {
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "template" => Some(CompileMode::Template),
            "expr" | "expression" => Some(CompileMode::Expression),
            "event" => Some(CompileMode::Event),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompileMode::Template => "template",
            CompileMode::Expression => "expr",
            CompileMode::Event => "event",
        }
    }

    pub fn compile(self, compiler: &Compiler, text: &str) -> Result<Arc<Evaluator>, RewriteError> {
        match self {
            CompileMode::Template => compiler.compile_template(text),
            CompileMode::Expression => compiler.compile_expression(text),
            CompileMode::Event => compiler.compile_event(text),
        }
    }
}

/// Arguments of a compile command after the mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileArgs {
    pub text: String,
    pub options: CompilerOptions,
}

/// Parse `<text> [--template-pragma=<name>] [--filter-pragma=<name>]
/// [--method-pragma=<name>]`, flags in any position.
pub fn parse_compile_args(args: &[String]) -> Result<CompileArgs, String> {
    let mut text = None;
    let mut pragmas = Pragmas::default();

    for arg in args {
        if let Some(name) = arg.strip_prefix("--template-pragma=") {
            pragmas = pragmas.with_template(name);
        } else if let Some(name) = arg.strip_prefix("--filter-pragma=") {
            pragmas = pragmas.with_filter(name);
        } else if let Some(name) = arg.strip_prefix("--method-pragma=") {
            pragmas = pragmas.with_method(name);
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else if text.is_none() {
            text = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let Some(text) = text else {
        return Err("missing source text".to_string());
    };
    Ok(CompileArgs {
        text,
        options: CompilerOptions::default().with_pragmas(pragmas),
    })
}

/// Compile `args` in `mode` and print the evaluator source.
///
/// Exits with status 1 on bad arguments or a rewrite error, printing the
/// rendered diagnostic to stderr.
pub fn compile_command(mode: CompileMode, args: &[String]) {
    let parsed = match parse_compile_args(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Usage: galaxy {} <text> [options]", mode.as_str());
            std::process::exit(1);
        }
    };

    let compiler = Compiler::new(parsed.options);
    match mode.compile(&compiler, &parsed.text) {
        Ok(evaluator) => println!("{evaluator}"),
        Err(err) => {
            eprint!("{}", err.render(&parsed.text));
            eprintln!();
            eprintln!("For more information about this error, try `galaxy explain {}`.", err.code());
            std::process::exit(1);
        }
    }
}

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Some(code) = code_str.parse::<ErrorCode>().ok() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format GXXXX where X is a digit.");
        eprintln!("Examples: G0001, G0006");
        std::process::exit(1);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
    } else {
        eprintln!("No documentation available for {code_str}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
