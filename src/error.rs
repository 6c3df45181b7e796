use crate::lexer::TokenKind;
use crate::span::Span;
use thiserror::Error;

/// 编译流水线的统一错误类型。
///
/// 所有错误都是终止性的：不做恢复，也不产生部分输出。
/// - `code()`：机器可读的错误码，便于测试断言。
/// - `span()`：错误发生的位置。
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// 剩余输入的开头没有任何词法规则能匹配。
    #[error("{span}: no token matches the remaining input {remaining:?}")]
    Tokenization { remaining: String, span: Span },

    #[error("{span}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    /// Token 流在找到下一个有意义的 token 之前就用完了。
    /// `expected` 是此处所有可以接受的 token 种类。
    #[error("{span}: unexpected end of input, expected {}", one_of(.expected))]
    UnexpectedEndOfInput {
        expected: Vec<TokenKind>,
        span: Span,
    },

    /// `end` 之后还有内容（一个源文件只允许一个定义）。
    #[error("{span}: unexpected {found} after the end of the definition")]
    TrailingInput { found: TokenKind, span: Span },
}

impl Error {
    /// 稳定的错误码，例如 `TokenizationError`。
    pub fn code(&self) -> &'static str {
        match self {
            Error::Tokenization { .. } => "TokenizationError",
            Error::UnexpectedToken { .. } => "UnexpectedTokenError",
            Error::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInputError",
            Error::TrailingInput { .. } => "TrailingInputError",
        }
    }

    /// 错误发生的位置。
    pub fn span(&self) -> Span {
        match self {
            Error::Tokenization { span, .. }
            | Error::UnexpectedToken { span, .. }
            | Error::UnexpectedEndOfInput { span, .. }
            | Error::TrailingInput { span, .. } => *span,
        }
    }
}

/// `a`、`a or b`、`a, b or c`
fn one_of(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {last}", init.join(", "))
        }
    }
}
