//! 词法分析：源码 -> Token 流（空白也保留为 token）。

pub mod lexer;
pub mod token;

pub use lexer::lex;
pub use token::{Token, TokenKind};
