use crate::ast::{Call, Expr, FunctionDef};
use tracing::instrument;

/// CodeGen 的对外入口：把函数定义生成 JavaScript 源码片段。
///
/// 输出格式（固定，单行）：
/// ```text
/// function NAME(P1, P2) { return EXPR }
/// ```
///
/// 只生成这一段；外围的运行时前言和测试调用由调用方拼接（见 `Scaffold`）。
#[instrument(skip_all, fields(name = %def.name))]
pub fn generate(def: &FunctionDef) -> String {
    format!(
        "function {}({}) {{ return {} }}",
        def.name,
        def.param_names.join(", "),
        generate_expr(&def.body)
    )
}

/// 生成表达式。
///
/// 映射规则：
/// - 整数 -> 十进制文本
/// - 变量引用 -> 原样标识符
/// - 调用 -> `name(a, b)`，保持实参顺序
pub fn generate_expr(expr: &Expr) -> String {
    match expr {
        Expr::IntegerLiteral(value) => value.to_string(),
        Expr::VarRef(name) => name.clone(),
        Expr::Call(call) => gen_call(call),
    }
}

fn gen_call(call: &Call) -> String {
    let args = call
        .args
        .iter()
        .map(generate_expr)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({args})", call.name)
}
