//! End-to-end tests for the outer compiler.

use std::sync::Arc;

use galaxyc::{Compiler, CompilerOptions, Pragmas};
use pretty_assertions::assert_eq;

fn body(result: Result<Arc<galaxyc::Evaluator>, galaxyc::RewriteError>) -> String {
    match result {
        Ok(evaluator) => evaluator.body().to_string(),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn template_becomes_getter() {
    let compiler = Compiler::default();
    assert_eq!(
        body(compiler.compile_template("Hello, {{ name |> upper }}!")),
        "return `Hello, ` + __$n($filter('upper', name)) + `!`"
    );
}

#[test]
fn expression_becomes_getter() {
    let compiler = Compiler::default();
    assert_eq!(
        body(compiler.compile_expression("items |> take(3) |> join(', ')")),
        "return $filter('join', $filter('take', items, 3), ', ')"
    );
}

#[test]
fn event_body_is_not_wrapped_in_return() {
    let compiler = Compiler::default();
    assert_eq!(
        body(compiler.compile_event("#save(#clone(item)); done = true")),
        "$commit('save', $commit('clone', item)); done = true"
    );
}

#[test]
fn setter_assigns_first_extra_argument() {
    let compiler = Compiler::default();
    let setter = compiler.compile_setter("user.name");
    assert_eq!(
        setter.body(),
        format!("(user.name = __args_{}__[0])", compiler.id())
    );
    assert_eq!(setter.args_param(), format!("__args_{}__", compiler.id()));
}

#[test]
fn custom_pragmas_are_used() {
    let options = CompilerOptions::default()
        .with_pragmas(Pragmas::default().with_template("t").with_filter("f"));
    let compiler = Compiler::new(options);
    assert_eq!(
        body(compiler.compile_template("{{ a |> b }}")),
        "return t(f('b', a))"
    );
    assert_eq!(compiler.pragmas().method, "$commit");
}

#[test]
fn compilers_have_distinct_ids() {
    let a = Compiler::default();
    let b = Compiler::default();
    assert!(a.id() != b.id());
    let getter_a = a.compile_getter("x");
    let getter_b = b.compile_getter("x");
    assert!(getter_a.locals_param() != getter_b.locals_param());
}

#[test]
fn same_body_returns_cached_evaluator() {
    let compiler = Compiler::default();
    let first = compiler.compile_getter("a");
    let again = compiler.compile_getter("a");
    let other = compiler.compile_getter("b");
    assert!(Arc::ptr_eq(&first, &again));
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(compiler.cached_evaluators(), 2);

    // Different source, same rewritten body.
    let via_expression = match compiler.compile_expression(" a ") {
        Ok(evaluator) => evaluator,
        Err(err) => panic!("unexpected error: {err}"),
    };
    assert!(Arc::ptr_eq(&first, &via_expression));
}

#[test]
fn cache_is_shared_across_threads() {
    let compiler = Compiler::default();
    let evaluators: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| compiler.compile_getter("shared")))
            .collect();
        handles
            .into_iter()
            .filter_map(|handle| handle.join().ok())
            .collect()
    });
    assert_eq!(evaluators.len(), 4);
    assert!(evaluators.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(compiler.cached_evaluators(), 1);
}

#[test]
fn errors_keep_top_level_positions() {
    let compiler = Compiler::default();
    let Err(err) = compiler.compile_template("Hi {{ value |> }}") else {
        panic!("missing filter should fail");
    };
    assert_eq!(err.position, 14);
    assert!(err.in_template);
    assert_eq!(compiler.cached_evaluators(), 0);

    let Err(err) = compiler.compile_event("#1()") else {
        panic!("bad method name should fail");
    };
    assert_eq!(err.position, 1);
}

#[test]
fn rendered_error_points_at_position() {
    let compiler = Compiler::default();
    let Err(err) = compiler.compile_expression("a |> #b") else {
        panic!("bad filter name should fail");
    };
    assert_eq!(
        err.render("a |> #b"),
        "error[G0002]: Invalid character in filter name:\n\n\ta |> #b\n\t     ^\n"
    );
}
