pub mod ast;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

// 对外公开的核心类型/函数（给 CLI 和测试使用）。
pub use ast::{Call, Expr, FunctionDef, Integer, InvalidInteger};
pub use codegen::{generate, generate_expr};
pub use error::Error;
pub use lexer::{lex, Token, TokenKind};
pub use parser::parse;
pub use span::{Position, Span};

use tracing::instrument;

/// 编译入口：源码 -> tokens -> 语法树 -> JavaScript 片段。
///
/// 任一阶段失败都直接返回错误，不产生部分输出。
#[instrument(skip_all)]
pub fn compile(src: &str) -> Result<String, Error> {
    let def = parse_source(src)?;
    Ok(generate(&def))
}

/// 词法 + 语法分析，返回语法树。
pub fn parse_source(src: &str) -> Result<FunctionDef, Error> {
    let tokens = lex(src)?;
    parse(&tokens)
}

/// 生成代码外围的固定文本：运行时前言 + 测试调用。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scaffold {
    pub preamble: String,
    pub trailer: String,
}

impl Default for Scaffold {
    /// 默认前言提供 `add`，默认调用 `f(1, 2)` 并打印结果。
    fn default() -> Self {
        Self {
            preamble: "function add(x, y) { return x + y };".to_string(),
            trailer: "console.log(f(1, 2));".to_string(),
        }
    }
}

impl Scaffold {
    /// 按 前言 / 生成代码 / 调用 的顺序拼接，每段一行。
    pub fn wrap(&self, generated: &str) -> String {
        let mut out = String::new();
        for part in [self.preamble.as_str(), generated, self.trailer.as_str()] {
            if part.is_empty() {
                continue;
            }
            out.push_str(part);
            out.push('\n');
        }
        out
    }
}
