use def2js::{generate, generate_expr, Call, Expr, FunctionDef, Integer};
use pretty_assertions::assert_eq;

fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Call(Call {
        name: name.into(),
        args,
    })
}

#[test]
fn generate_integer_literal() {
    assert_eq!(generate_expr(&Expr::IntegerLiteral(Integer::from(0))), "0");
    assert_eq!(generate_expr(&Expr::IntegerLiteral(Integer::from(1234))), "1234");
}

#[test]
fn generate_integer_wider_than_64_bits() {
    let big: Integer = "340282366920938463463374607431768211456".parse().unwrap();
    assert_eq!(
        generate_expr(&Expr::IntegerLiteral(big)),
        "340282366920938463463374607431768211456"
    );
}

#[test]
fn generate_var_ref() {
    assert_eq!(generate_expr(&Expr::VarRef("abc1".into())), "abc1");
}

#[test]
fn generate_call_preserves_argument_order() {
    let e = call(
        "g",
        vec![
            Expr::VarRef("b".into()),
            Expr::IntegerLiteral(Integer::from(2)),
            call("h", vec![]),
            Expr::VarRef("a".into()),
        ],
    );
    assert_eq!(generate_expr(&e), "g(b, 2, h(), a)");
}

#[test]
fn generate_function_def() {
    let d = FunctionDef {
        name: "f".into(),
        param_names: vec!["x".into(), "y".into()],
        body: call("add", vec![Expr::VarRef("x".into()), Expr::VarRef("y".into())]),
    };
    assert_eq!(generate(&d), "function f(x, y) { return add(x, y) }");
}

#[test]
fn generate_zero_params() {
    let d = FunctionDef {
        name: "answer".into(),
        param_names: vec![],
        body: Expr::IntegerLiteral(Integer::from(42)),
    };
    assert_eq!(generate(&d), "function answer() { return 42 }");
}

#[test]
fn generate_duplicate_params_verbatim() {
    let d = FunctionDef {
        name: "f".into(),
        param_names: vec!["x".into(), "x".into()],
        body: Expr::VarRef("x".into()),
    };
    assert_eq!(generate(&d), "function f(x, x) { return x }");
}

#[test]
fn generate_is_idempotent() {
    let d = FunctionDef {
        name: "f".into(),
        param_names: vec!["x".into()],
        body: call("g", vec![call("h", vec![Expr::VarRef("x".into())])]),
    };
    assert_eq!(generate(&d), generate(&d));
}
