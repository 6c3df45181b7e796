use crate::ast::{Call, Expr, FunctionDef, Integer};
use crate::error::Error;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use tracing::{debug, instrument, trace};

/// 解析器入口：把 Token 列表解析成一个函数定义。
///
/// 文法（空白 token 在每个决策点都被跳过）：
/// ```text
/// Def      := 'def' IDENT ArgNames Expr 'end'
/// ArgNames := '(' [ IDENT (',' IDENT)* ] ')'
/// Expr     := Integer | Call | VarRef
/// Call     := IDENT ArgExprs
/// ArgExprs := '(' [ Expr (',' Expr)* ] ')'
/// VarRef   := IDENT
/// ```
///
/// `end` 之后只允许出现空白。
#[instrument(skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<FunctionDef, Error> {
    let mut parser = Parser::new(tokens);
    let def = parser.parse_def()?;
    parser.expect_eof()?;
    debug!(name = %def.name, params = def.param_names.len(), "parsed definition");
    Ok(def)
}

/// 表达式可以开头的 token。
const EXPR_START: &[TokenKind] = &[TokenKind::Integer, TokenKind::Identifier];
/// 实参 / 形参之后可以接受的 token。
const LIST_FOLLOW: &[TokenKind] = &[TokenKind::Comma, TokenKind::CloseParen];

/// 递归下降解析器。
///
/// 只借用 token 缓冲区，`i` 是读取位置；`consume` 前移光标，从不修改缓冲区。
struct Parser<'a> {
    tokens: &'a [Token],
    i: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, i: 0 }
    }

    fn parse_def(&mut self) -> Result<FunctionDef, Error> {
        self.consume(TokenKind::Def)?;
        let name = self.consume(TokenKind::Identifier)?.value.clone();
        let param_names = self.parse_arg_names()?;
        let body = self.parse_expr(&[TokenKind::End])?;
        self.consume(TokenKind::End)?;
        Ok(FunctionDef {
            name,
            param_names,
            body,
        })
    }

    /// `( a, b, c )`，允许为空。
    fn parse_arg_names(&mut self) -> Result<Vec<String>, Error> {
        let mut names = Vec::new();
        self.consume(TokenKind::OpenParen)?;
        if self.peek(TokenKind::Identifier, 0, &[TokenKind::Identifier, TokenKind::CloseParen])? {
            names.push(self.consume(TokenKind::Identifier)?.value.clone());
            while self.peek(TokenKind::Comma, 0, LIST_FOLLOW)? {
                self.consume(TokenKind::Comma)?;
                names.push(self.consume(TokenKind::Identifier)?.value.clone());
            }
        }
        self.consume(TokenKind::CloseParen)?;
        Ok(names)
    }

    /// 表达式分派：
    /// - 整数字面量 -> Integer
    /// - 标识符且下一个 token 是 `(` -> Call
    /// - 其它 -> VarRef（不是标识符时由 `consume` 报错）
    ///
    /// `follow` 是表达式结束后可以接受的 token，只用于 EOF 报错。
    fn parse_expr(&mut self, follow: &[TokenKind]) -> Result<Expr, Error> {
        if self.peek(TokenKind::Integer, 0, EXPR_START)? {
            self.parse_integer()
        } else if self.peek(TokenKind::Identifier, 0, EXPR_START)?
            && self.peek(TokenKind::OpenParen, 1, &call_or(follow))?
        {
            self.parse_call()
        } else {
            self.parse_var_ref()
        }
    }

    fn parse_integer(&mut self) -> Result<Expr, Error> {
        let token = self.consume(TokenKind::Integer)?;
        Ok(Expr::IntegerLiteral(Integer::from_digits(&token.value)))
    }

    fn parse_call(&mut self) -> Result<Expr, Error> {
        let name = self.consume(TokenKind::Identifier)?.value.clone();
        let args = self.parse_arg_exprs()?;
        Ok(Expr::Call(Call { name, args }))
    }

    fn parse_arg_exprs(&mut self) -> Result<Vec<Expr>, Error> {
        let mut args = Vec::new();
        self.consume(TokenKind::OpenParen)?;
        let accept = [TokenKind::CloseParen, TokenKind::Integer, TokenKind::Identifier];
        if !self.peek(TokenKind::CloseParen, 0, &accept)? {
            args.push(self.parse_expr(LIST_FOLLOW)?);
            while self.peek(TokenKind::Comma, 0, LIST_FOLLOW)? {
                self.consume(TokenKind::Comma)?;
                args.push(self.parse_expr(LIST_FOLLOW)?);
            }
        }
        self.consume(TokenKind::CloseParen)?;
        Ok(args)
    }

    fn parse_var_ref(&mut self) -> Result<Expr, Error> {
        let name = self.consume(TokenKind::Identifier)?.value.clone();
        Ok(Expr::VarRef(name))
    }

    /// 偷看第 `offset` 个有意义的 token 是否为 `kind`（不前进）。
    ///
    /// token 不够时报 `UnexpectedEndOfInput`，`accept` 是此处所有合法的 token 种类。
    fn peek(&self, kind: TokenKind, offset: usize, accept: &[TokenKind]) -> Result<bool, Error> {
        match self.significant(offset) {
            Some((_, token)) => Ok(token.kind == kind),
            None => Err(self.end_of_input(accept)),
        }
    }

    /// 吃掉下一个有意义的 token，并断言它的种类。
    fn consume(&mut self, kind: TokenKind) -> Result<&'a Token, Error> {
        let Some((index, token)) = self.significant(0) else {
            return Err(self.end_of_input(&[kind]));
        };
        if token.kind != kind {
            return Err(Error::UnexpectedToken {
                expected: kind,
                found: token.kind,
                span: token.span,
            });
        }
        trace!(?kind, value = %token.value, "consume");
        self.i = index + 1;
        Ok(token)
    }

    /// 定义结束后剩下的必须全是空白。
    fn expect_eof(&self) -> Result<(), Error> {
        match self.significant(0) {
            Some((_, token)) => Err(Error::TrailingInput {
                found: token.kind,
                span: token.span,
            }),
            None => Ok(()),
        }
    }

    /// 从光标开始跳过空白，找第 `offset` 个有意义的 token 及其下标。
    fn significant(&self, offset: usize) -> Option<(usize, &'a Token)> {
        let tokens = self.tokens;
        tokens[self.i..]
            .iter()
            .enumerate()
            .filter(|(_, token)| !token.is_trivia())
            .nth(offset)
            .map(|(j, token)| (self.i + j, token))
    }

    fn end_of_input(&self, accept: &[TokenKind]) -> Error {
        Error::UnexpectedEndOfInput {
            expected: accept.to_vec(),
            span: self.eof_span(),
        }
    }

    /// EOF 的位置：最后一个 token 的末尾；没有 token 时为 1:1。
    fn eof_span(&self) -> Span {
        self.tokens
            .last()
            .map(|t| Span::point(t.span.end_position()))
            .unwrap_or_default()
    }
}

/// 标识符之后：`(` 开始调用，否则是变量引用，后面跟 `follow`。
fn call_or(follow: &[TokenKind]) -> Vec<TokenKind> {
    let mut accept = vec![TokenKind::OpenParen];
    accept.extend_from_slice(follow);
    accept
}
