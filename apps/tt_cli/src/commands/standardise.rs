// apps/tt_cli/src/commands/standardise.rs

//! 标准化命令
//!
//! 按 `Num_Timesteps` 报表里的普查结果，把一个模式的全部
//! 原始文件的时间轴重写到规范窗口 1900-01-01 .. 2023-12-31。
//! 需要 PATH 里有可用的 `cdo`。

use anyhow::Result;
use clap::Args;
use tracing::info;
use tt_config::Catalog;
use tt_pipeline::Canonicalizer;

use super::LayoutArgs;

/// 标准化参数
#[derive(Args)]
pub struct StandardiseArgs {
    /// 要处理的模式
    #[arg(short, long)]
    pub model: String,

    /// 覆盖已有输出
    #[arg(long)]
    pub overwrite: bool,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// 执行标准化命令
pub fn execute(args: StandardiseArgs) -> Result<()> {
    info!("=== TrendyTime 时间轴标准化 ===");

    let layout = args.layout.layout();
    let catalog = Catalog::default();
    anyhow::ensure!(catalog.has_model(&args.model), "未登记的模式: {}", args.model);
    layout.ensure_output_dirs()?;

    info!("模式: {}", args.model);
    info!("输出树: {}", layout.canonical_root.display());

    let canonicalizer = Canonicalizer::new(layout, catalog).overwrite(args.overwrite);
    let summary = canonicalizer.run_model(&args.model)?;

    info!("=== 标准化完成 ===");
    info!("写出: {}", summary.written);
    info!("跳过: {}", summary.skipped);
    info!("失败: {}", summary.failed);

    if summary.failed > 0 {
        anyhow::bail!("{} 个文件标准化失败，详见日志", summary.failed);
    }
    Ok(())
}
