//! 递归下降解析：Token 流 -> `FunctionDef`。

pub mod parser;

pub use parser::parse;
