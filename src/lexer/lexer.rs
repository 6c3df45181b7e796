use crate::error::Error;
use crate::lexer::token::{Token, TokenKind};
use crate::span::{Position, Span};
use tracing::{debug, instrument, trace};

/// 词法分析入口：把源代码切成一串 Token（包含空白 token）。
///
/// 出错时返回 `Error::Tokenization`，携带无法匹配的剩余文本。
#[instrument(skip_all, fields(len = src.len()))]
pub fn lex(src: &str) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(src).lex_all()?;
    debug!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

/// 匹配函数：返回剩余文本开头能匹配的字节长度，匹配不上返回 `None`。
type Matcher = fn(&str) -> Option<usize>;

/// 词法规则表，按固定顺序逐条尝试，第一条匹配的规则胜出。
///
/// 关键字必须排在标识符之前，否则 `def` 会被当成标识符。
const RULES: &[(TokenKind, Matcher)] = &[
    (TokenKind::Whitespace, match_whitespace),
    (TokenKind::Def, match_def),
    (TokenKind::End, match_end),
    (TokenKind::Integer, match_integer),
    (TokenKind::Identifier, match_identifier),
    (TokenKind::OpenParen, match_open_paren),
    (TokenKind::CloseParen, match_close_paren),
    (TokenKind::Comma, match_comma),
];

/// 词法分析器的内部状态（扫描指针）。
struct Lexer<'a> {
    src: &'a str,
    pos: Position,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: Position::default(),
        }
    }

    /// 扫描整个输入，直到 EOF。每一步至少消费一个字符，所以一定会结束。
    fn lex_all(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        while !self.is_eof() {
            let rest = self.rest();
            let Some((kind, len)) = RULES
                .iter()
                .find_map(|(kind, matcher)| matcher(rest).map(|len| (*kind, len)))
            else {
                return Err(Error::Tokenization {
                    remaining: rest.to_string(),
                    span: Span::point(self.pos),
                });
            };

            let value = &rest[..len];
            let start = self.pos;
            self.pos = start.advance(value);
            trace!(?kind, value, "token");
            tokens.push(Token {
                kind,
                value: value.to_string(),
                span: Span::between(start, self.pos),
            });
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos.offset..]
    }

    fn is_eof(&self) -> bool {
        self.pos.offset >= self.src.len()
    }
}

fn match_whitespace(s: &str) -> Option<usize> {
    non_empty(take_while(s, char::is_whitespace))
}

fn match_def(s: &str) -> Option<usize> {
    match_keyword(s, "def")
}

fn match_end(s: &str) -> Option<usize> {
    match_keyword(s, "end")
}

/// 关键字后面不能紧跟标识符字符：`define` 是标识符，不是 `def` + `ine`。
fn match_keyword(s: &str, keyword: &str) -> Option<usize> {
    let tail = s.strip_prefix(keyword)?;
    match tail.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() => None,
        _ => Some(keyword.len()),
    }
}

fn match_integer(s: &str) -> Option<usize> {
    non_empty(take_while(s, |c| c.is_ascii_digit()))
}

/// 标识符：`[a-zA-Z][a-zA-Z0-9]*`
fn match_identifier(s: &str) -> Option<usize> {
    let first = s.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    Some(take_while(s, |c| c.is_ascii_alphanumeric()))
}

fn match_open_paren(s: &str) -> Option<usize> {
    match_char(s, '(')
}

fn match_close_paren(s: &str) -> Option<usize> {
    match_char(s, ')')
}

fn match_comma(s: &str) -> Option<usize> {
    match_char(s, ',')
}

fn match_char(s: &str, expected: char) -> Option<usize> {
    s.starts_with(expected).then(|| expected.len_utf8())
}

/// 从开头连续满足 `pred` 的字符的字节长度。
fn take_while(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|(_, c)| !pred(*c))
        .map_or(s.len(), |(i, _)| i)
}

fn non_empty(len: usize) -> Option<usize> {
    (len > 0).then_some(len)
}
