//! Rinha CLI - runs programs given as JSON syntax trees.
//! Rinha CLI - 运行以 JSON 语法树形式给出的程序。

mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::Options;
use rinha_eval::EvalConfig;
use std::time::Instant;

/// Where the document is looked for when no file is given.
/// 未指定文件时读取的文档路径。
const DEFAULT_FILE: &str = "/var/rinha/source.rinha.json";

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "rinha")]
#[command(author, version, about = "Rinha - evaluate programs from their JSON syntax tree", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The document to run when no command is given. / 未指定命令时运行的文档。
    file: Option<String>,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress the final error summary. / 抑制最终的错误摘要。
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print elapsed time to stderr. / 将耗时打印到标准错误。
    #[arg(long, global = true)]
    time: bool,

    /// Maximum evaluation depth. / 最大求值深度。
    #[arg(long, global = true, default_value_t = EvalConfig::default().max_depth)]
    max_depth: usize,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Run a document. / 运行文档。
    Run {
        /// The document to run. / 要运行的文档。
        file: String,
    },

    /// Decode a document without running it. / 只解码文档而不运行。
    Check {
        /// The document to check. / 要检查的文档。
        file: String,
    },

    /// Decode a document and print it re-encoded. / 解码文档并重新编码输出。
    Dump {
        /// The document to dump. / 要输出的文档。
        file: String,
    },
}

/// Install a stderr log subscriber when `RUST_LOG` is set, or at debug
/// level for `--verbose`.
/// 设置了 `RUST_LOG` 或使用 `--verbose` 时安装日志订阅者。
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("rinha=debug,rinha_parser=debug,rinha_eval=debug"),
        Err(_) => return,
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
        .with(filter)
        .try_init();
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = Options {
        verbose: cli.verbose,
        time: cli.time,
        max_depth: cli.max_depth,
    };

    let started = Instant::now();
    let result = match &cli.command {
        Some(Commands::Run { file }) => commands::run::run(file, &options),
        Some(Commands::Check { file }) => commands::check::run(file, &options),
        Some(Commands::Dump { file }) => commands::dump::run(file, &options),
        None => commands::run::run(cli.file.as_deref().unwrap_or(DEFAULT_FILE), &options),
    };

    if options.time {
        output::timing(started.elapsed());
    }

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
