use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use def2js::{compile, lex, parse_source, Scaffold, Token};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "def2js",
    version,
    about = "Translate a single `def ... end` definition into JavaScript",
    long_about = None
)]
struct Cli {
    /// 源文件路径，`-` 表示标准输入
    input: PathBuf,

    /// 输出文件，缺省写到标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 输出内容
    #[arg(long, value_enum, default_value_t = Emit::Js)]
    emit: Emit,

    /// 只输出生成的函数，不拼接运行时前言和测试调用
    #[arg(long)]
    bare: bool,

    /// 日志详细程度（可重复，RUST_LOG 优先）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// 生成的 JavaScript
    Js,
    /// 有意义的 token，每行一个
    Tokens,
    /// 语法树
    Ast,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<def2js::Error>() {
            Some(compile_err) => {
                eprintln!("{}:{compile_err}", cli.input.display());
                ExitCode::from(1)
            }
            None => {
                eprintln!("error: {err:#}");
                ExitCode::from(2)
            }
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    let src = read_input(&cli.input)?;
    let rendered = match cli.emit {
        Emit::Tokens => render_tokens(&lex(&src)?),
        Emit::Ast => format!("{:#?}\n", parse_source(&src)?),
        Emit::Js => {
            let code = compile(&src)?;
            if cli.bare {
                format!("{code}\n")
            } else {
                Scaffold::default().wrap(&code)
            }
        }
    };
    write_output(cli.output.as_deref(), &rendered)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).context("failed to read standard input");
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => {
            io::stdout()
                .write_all(text.as_bytes())
                .context("failed to write standard output")?;
        }
    }
    Ok(())
}

/// `line:col KIND "value"`，跳过空白 token。
fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens.iter().filter(|t| !t.is_trivia()) {
        let _ = writeln!(out, "{} {:?} {:?}", token.span, token.kind, token.value);
    }
    out
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
