use std::fmt;

/// 源码中的一个区间位置。
///
/// - `start/end`：byte offset（UTF-8 字节），左闭右开。
/// - `*_line/*_col`：行列号（从 1 开始），用于报错信息。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            start: 0,
            end: 0,
            start_line: 1,
            start_col: 1,
            end_line: 1,
            end_col: 1,
        }
    }
}

impl Span {
    /// 长度为 0 的区间，起止点都落在 `pos` 上。
    pub fn point(pos: Position) -> Self {
        Self::between(pos, pos)
    }

    /// 由两个扫描位置构造区间。
    pub fn between(start: Position, end: Position) -> Self {
        Self {
            start: start.offset,
            end: end.offset,
            start_line: start.line,
            start_col: start.col,
            end_line: end.line,
            end_col: end.col,
        }
    }

    /// 区间终点对应的位置（用于 EOF 报错）。
    pub fn end_position(&self) -> Position {
        Position {
            offset: self.end,
            line: self.end_line,
            col: self.end_col,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// 扫描指针的位置（byte offset + line/col）。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}

impl Position {
    /// 越过一段文本后的新位置；换行时行号加一、列号归 1。
    pub fn advance(self, text: &str) -> Self {
        let mut next = self;
        for ch in text.chars() {
            next.offset += ch.len_utf8();
            if ch == '\n' {
                next.line += 1;
                next.col = 1;
            } else {
                next.col += 1;
            }
        }
        next
    }
}
