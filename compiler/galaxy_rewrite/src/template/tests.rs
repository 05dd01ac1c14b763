use super::*;
use galaxy_diagnostic::{DefinitionKind, ErrorKind};
use pretty_assertions::assert_eq;

fn rewrite(template: &str) -> String {
    match rewrite_template(template, "T", "F") {
        Ok(out) => out,
        Err(err) => panic!("{template:?} failed: {err} at {}", err.position),
    }
}

fn rewrite_err(template: &str) -> RewriteError {
    match rewrite_template(template, "T", "F") {
        Ok(out) => panic!("{template:?} should fail, got {out:?}"),
        Err(err) => err,
    }
}

// === Literal Text ===

#[test]
fn empty_template_is_empty_expression() {
    assert_eq!(rewrite(""), "");
}

#[test]
fn text_without_tags_is_one_literal() {
    assert_eq!(rewrite("plain text"), "`plain text`");
    assert_eq!(rewrite("  "), "`  `");
}

#[test]
fn quotes_in_literal_text_are_not_special() {
    assert_eq!(rewrite(r#"it's "{{ x }}""#), r#"`it's "` + T(x) + `"`"#);
}

#[test]
fn literal_text_is_escaped_for_backticks() {
    assert_eq!(rewrite(r"a `b` \ ${c} $d"), r"`a \`b\` \\ \${c} $d`");
}

#[test]
fn single_braces_are_literal() {
    assert_eq!(rewrite("{ a } }"), "`{ a } }`");
}

// === Tags ===

#[test]
fn tag_between_literals() {
    assert_eq!(rewrite("Hello, {{ name }}!"), "`Hello, ` + T(name) + `!`");
}

#[test]
fn lone_tag_has_no_empty_literals() {
    assert_eq!(rewrite("{{ name }}"), "T(name)");
}

#[test]
fn adjacent_and_separated_tags() {
    assert_eq!(rewrite("{{ a }}{{ b }}"), "T(a) + T(b)");
    assert_eq!(rewrite("{{ a }} and {{ b }}"), "T(a) + ` and ` + T(b)");
}

#[test]
fn tag_bodies_go_through_filters() {
    assert_eq!(
        rewrite("Total: {{ price |> currency('EUR') }}"),
        "`Total: ` + T(F('currency', price, 'EUR'))"
    );
}

#[test]
fn object_literal_braces_are_balanced() {
    assert_eq!(rewrite("{{ {a: 1}.a }}"), "T({a: 1}.a)");
}

#[test]
fn braces_in_strings_do_not_close_tag() {
    assert_eq!(rewrite("{{ '}}' + x }}"), "T('}}' + x)");
    assert_eq!(rewrite(r#"{{ "{" }}"#), r#"T("{")"#);
}

#[test]
fn template_literal_in_body() {
    assert_eq!(rewrite("{{ `${a}}` }}"), "T(`${a}}`)");
}

#[test]
fn line_breaks_inside_tag_body() {
    assert_eq!(rewrite("{{\n  name\n    |> upper\n}}"), "T(F('upper', name))");
    assert_eq!(rewrite("a\n{{ b }}\nc"), "`a\n` + T(b) + `\nc`");
}

#[test]
fn custom_pragmas() {
    assert_eq!(
        rewrite_template("{{ x |> y }}", "__$n", "$filter").ok(),
        Some("__$n($filter('y', x))".to_string())
    );
}

// === Errors ===

#[test]
fn empty_tag_body() {
    let err = rewrite_err("{{ }}");
    assert_eq!(err.kind, ErrorKind::MissingTemplateExpression);
    assert_eq!(err.position, 2);

    let err = rewrite_err("{{}}");
    assert_eq!(err.kind, ErrorKind::MissingTemplateExpression);
    assert_eq!(err.position, 1);
}

#[test]
fn single_closing_brace() {
    let err = rewrite_err("Hi {{ name }!");
    assert_eq!(err.kind, ErrorKind::UnterminatedInterpolation);
    assert_eq!(err.position, 12);
    assert_eq!(err.to_string(), "expecting closing template tag");
}

#[test]
fn tag_never_closed() {
    let err = rewrite_err("Hi {{ name");
    assert_eq!(err.kind, ErrorKind::UnterminatedInterpolation);
    assert_eq!(err.position, 10);

    // The quote swallows the rest of the template.
    let err = rewrite_err("{{ 'abc }}");
    assert_eq!(err.kind, ErrorKind::UnterminatedInterpolation);
    assert_eq!(err.position, 10);
}

#[test]
fn filter_errors_are_marked_and_remapped() {
    let err = rewrite_err("Hi {{ value |> }}");
    assert_eq!(err.kind, ErrorKind::MissingFilterExpression);
    assert!(err.in_template);
    assert_eq!(err.position, 14);
    assert_eq!(
        err.to_string(),
        "error in template expression: missing filter expression"
    );

    let err = rewrite_err("Hi {{ x |> 1up }}");
    assert_eq!(err.kind, ErrorKind::InvalidIdentifierStart(DefinitionKind::Filter));
    assert_eq!(err.position, 11);
}

#[test]
fn first_tag_error_wins() {
    let err = rewrite_err("{{ }} {{ x |> }}");
    assert_eq!(err.kind, ErrorKind::MissingTemplateExpression);
    assert_eq!(err.position, 2);
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_template {
    use super::super::rewrite_template;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn text_without_tags_passes_through(text in "[a-zA-Z0-9 ,.!?'\"\n]{1,40}") {
            prop_assert_eq!(
                rewrite_template(&text, "T", "F"),
                Ok(format!("`{text}`"))
            );
        }

        #[test]
        fn tags_keep_surrounding_text(
            before in "[a-z ]{0,10}",
            name in "[a-z][a-z0-9_]{0,8}",
            after in "[a-z ]{0,10}",
        ) {
            let template = format!("{before}{{{{ {name} }}}}{after}");
            let mut expected = Vec::new();
            if !before.is_empty() {
                expected.push(format!("`{before}`"));
            }
            expected.push(format!("T({name})"));
            if !after.is_empty() {
                expected.push(format!("`{after}`"));
            }
            prop_assert_eq!(rewrite_template(&template, "T", "F"), Ok(expected.join(" + ")));
        }
    }
}
