// apps/tt_cli/src/main.rs

//! TrendyTime 命令行界面
//!
//! TRENDY 档案时间轴的普查、标准化和复核工具。
//!
//! # 架构层级
//!
//! 本模块属于应用层：只做参数解析、日志初始化和目录装配，
//! 全部领域逻辑在 `tt_core`/`tt_io`/`tt_pipeline` 中。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// TrendyTime 时间轴标准化命令行工具
#[derive(Parser)]
#[command(name = "tt_cli")]
#[command(author = "TrendyTime Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TRENDY archive time axis toolkit", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 普查原始档案，写出时间轴元数据报表
    Inspect(commands::inspect::InspectArgs),
    /// 把某个模式的时间轴标准化到规范窗口
    Standardise(commands::standardise::StandardiseArgs),
    /// 复核标准化输出
    Validate(commands::validate::ValidateArgs),
    /// 抽取单格点时间序列做人工核对
    Probe(commands::probe::ProbeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Inspect(args) => commands::inspect::execute(args),
        Commands::Standardise(args) => commands::standardise::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Probe(args) => commands::probe::execute(args),
    }
}
