use crate::span::Span;
use std::fmt;

/// 一个 Token = 词法分析后的最小语法单元。
///
/// 例子：`def f(x) x end`
/// 会被切成：Def, Whitespace, Identifier `f`, OpenParen, Identifier `x`, CloseParen, ...
///
/// 空白也是 token：所有 token 的 `value` 依次拼接就是原始输入。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 匹配到的原始子串
    pub value: String,
    pub span: Span,
}

impl Token {
    /// 空白 token 会留在 token 流里，但解析器在每个决策点都会跳过它。
    pub fn is_trivia(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Token 的种类，封闭枚举。
///
/// 声明顺序就是词法规则的尝试顺序（见 `lexer::RULES`）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Def,
    End,
    Integer,
    Identifier,
    OpenParen,
    CloseParen,
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Def => "`def`",
            TokenKind::End => "`end`",
            TokenKind::Integer => "integer literal",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Comma => "`,`",
        };
        f.write_str(s)
    }
}
