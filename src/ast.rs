use std::fmt;
use std::str::FromStr;

/// 顶层函数定义，也是语法树唯一可能的根：`def NAME(P1, ..., Pn) BODY end`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    /// 形参名，保持源码顺序；不去重
    pub param_names: Vec<String>,
    pub body: Expr,
}

/// 表达式。函数定义不能出现在表达式位置。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// 整数字面量：`42`
    IntegerLiteral(Integer),
    /// 函数调用：`g(h(x), 1)`
    Call(Call),
    /// 变量引用：`x`
    VarRef(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    /// 实参列表，不检查个数
    pub args: Vec<Expr>,
}

/// 任意精度的非负整数。
///
/// 保存去掉前导零的十进制数字，所以 `007` 与 `7` 相等，且永远不会溢出。
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer(String);

impl Integer {
    /// 由词法分析保证全是 ASCII 数字的文本构造。
    pub(crate) fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// 十进制文本。
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("integer literal must be one or more ASCII digits")]
pub struct InvalidInteger;

impl FromStr for Integer {
    type Err = InvalidInteger;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidInteger);
        }
        Ok(Self::from_digits(s))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
