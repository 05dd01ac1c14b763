use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn modes_parse_from_command_names() {
    assert_eq!(CompileMode::parse("template"), Some(CompileMode::Template));
    assert_eq!(CompileMode::parse("expr"), Some(CompileMode::Expression));
    assert_eq!(CompileMode::parse("expression"), Some(CompileMode::Expression));
    assert_eq!(CompileMode::parse("event"), Some(CompileMode::Event));
    assert_eq!(CompileMode::parse("explain"), None);
}

#[test]
fn text_without_flags_uses_default_pragmas() {
    let parsed = parse_compile_args(&args(&["a |> b"])).ok();
    assert_eq!(
        parsed,
        Some(CompileArgs {
            text: "a |> b".to_string(),
            options: CompilerOptions::default(),
        })
    );
}

#[test]
fn pragma_flags_in_any_position() {
    let parsed = parse_compile_args(&args(&[
        "--filter-pragma=F",
        "{{ a }}",
        "--template-pragma=T",
        "--method-pragma=M",
    ]));
    let Ok(parsed) = parsed else {
        panic!("flags should parse");
    };
    assert_eq!(parsed.text, "{{ a }}");
    assert_eq!(
        parsed.options.pragmas,
        Pragmas::default().with_template("T").with_filter("F").with_method("M")
    );
}

#[test]
fn argument_errors() {
    assert_eq!(
        parse_compile_args(&args(&[])),
        Err("missing source text".to_string())
    );
    assert_eq!(
        parse_compile_args(&args(&["a", "b"])),
        Err("unexpected argument 'b'".to_string())
    );
    assert_eq!(
        parse_compile_args(&args(&["a", "--pragma=x"])),
        Err("unknown option '--pragma=x'".to_string())
    );
}

#[test]
fn mode_dispatches_to_matching_pass() {
    let compiler = Compiler::default();
    let compile = |mode: CompileMode, text: &str| {
        mode.compile(&compiler, text)
            .map(|evaluator| evaluator.body().to_string())
            .ok()
    };
    assert_eq!(
        compile(CompileMode::Template, "{{ a }}"),
        Some("return __$n(a)".to_string())
    );
    assert_eq!(
        compile(CompileMode::Expression, "a |> b"),
        Some("return $filter('b', a)".to_string())
    );
    assert_eq!(
        compile(CompileMode::Event, "#go()"),
        Some("$commit('go')".to_string())
    );
}
