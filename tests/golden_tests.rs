use std::fs;
use std::path::PathBuf;
use std::process::Command;

use def2js::{compile, parse_source, Scaffold};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn assert_golden(src: &str, expected: &str) {
    let got = compile(src).unwrap();
    assert_eq!(got, expected);
}

#[test]
fn golden_nested_calls() {
    assert_golden(
        "def f(x) g(h(x), 1) end",
        "function f(x) { return g(h(x), 1) }",
    );
}

#[test]
fn golden_zero_arity() {
    assert_golden("def f() 42 end", "function f() { return 42 }");
}

#[test]
fn golden_identity() {
    assert_golden("def id(x) x end", "function id(x) { return x }");
}

#[test]
fn golden_integer_wider_than_64_bits() {
    assert_golden(
        "def f() g(18446744073709551615, 18446744073709551616) end",
        "function f() { return g(18446744073709551615, 18446744073709551616) }",
    );
}

#[test]
fn golden_multiline_source() {
    assert_golden(
        "def f(x,\n      y)\n  add(x,y)\nend\n",
        "function f(x, y) { return add(x, y) }",
    );
}

#[test]
fn golden_keyword_prefixed_identifiers() {
    assert_golden(
        "def define(ending) endx(ending) end",
        "function define(ending) { return endx(ending) }",
    );
}

#[test]
fn compile_fails_without_output_on_bad_input() {
    let err = compile("def f(x) # end").unwrap_err();
    assert_eq!(err.code(), "TokenizationError");
    let err = compile("def f(x").unwrap_err();
    assert_eq!(err.code(), "UnexpectedEndOfInputError");
}

#[test]
fn error_messages_carry_location() {
    let err = compile("def f(x)\n  g(x,,1)\nend").unwrap_err();
    assert_eq!(err.to_string(), "2:7: expected identifier, found `,`");
}

#[test]
fn scaffold_wraps_generated_code() {
    let code = compile("def f(x, y) add(x, y) end").unwrap();
    assert_eq!(
        Scaffold::default().wrap(&code),
        "function add(x, y) { return x + y };\n\
         function f(x, y) { return add(x, y) }\n\
         console.log(f(1, 2));\n"
    );
}

#[test]
fn scaffold_skips_empty_parts() {
    let scaffold = Scaffold {
        preamble: String::new(),
        trailer: "f();".into(),
    };
    assert_eq!(scaffold.wrap("function f() { return 1 }"), "function f() { return 1 }\nf();\n");
}

/// 生成的 JavaScript 必须能被 node 执行（环境里没有 node 时跳过）。
#[test]
fn generated_js_runs_under_node() {
    if Command::new("node").arg("--version").output().is_err() {
        eprintln!("node not found, skipping");
        return;
    }

    let code = compile("def f(x, y) add(x, add(y, 10)) end").unwrap();
    let script = Scaffold::default().wrap(&code);

    let mut path: PathBuf = std::env::temp_dir();
    path.push(format!("def2js_golden_{}.js", std::process::id()));
    fs::write(&path, script).unwrap();

    let out = Command::new("node").arg(&path).output().unwrap();
    let _ = fs::remove_file(&path);
    assert!(
        out.status.success(),
        "node failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "13");
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}".prop_filter("keyword", |s| s != "def" && s != "end")
}

fn expr_src() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..1000).prop_map(|n| n.to_string()), ident()];
    leaf.prop_recursive(3, 16, 4, |inner| {
        (ident(), prop::collection::vec(inner, 0..4))
            .prop_map(|(name, args)| format!("{name}({})", args.join(", ")))
    })
}

proptest! {
    #[test]
    fn generated_function_matches_definition(
        name in ident(),
        params in prop::collection::vec(ident(), 0..4),
        body in expr_src(),
    ) {
        let src = format!("def {name}({}) {body} end", params.join(","));
        let d = parse_source(&src).unwrap();
        prop_assert_eq!(&d.name, &name);
        prop_assert_eq!(&d.param_names, &params);
        prop_assert_eq!(
            compile(&src).unwrap(),
            format!("function {name}({}) {{ return {body} }}", params.join(", "))
        );
    }
}
