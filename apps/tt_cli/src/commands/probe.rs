// apps/tt_cli/src/commands/probe.rs

//! 抽查命令
//!
//! 抽取单个文件里离给定经纬度最近网格点的完整时间序列，
//! 用于人工核对标准化前后的数据是否一致。可选做零均值单位
//! 方差标准化，便于对比量纲不同的变量。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use tt_core::standardize_series;

/// 抽查参数
#[derive(Args)]
pub struct ProbeArgs {
    /// NetCDF 文件路径
    #[arg(short, long)]
    pub file: PathBuf,

    /// 变量名
    #[arg(short, long)]
    pub variable: String,

    /// 纬度
    #[arg(long, default_value = "51.25")]
    pub lat: f64,

    /// 经度
    #[arg(long, default_value = "0.25")]
    pub lon: f64,

    /// 输出标准化后的序列
    #[arg(long)]
    pub standardize: bool,
}

/// 执行抽查命令
pub fn execute(args: ProbeArgs) -> Result<()> {
    info!("=== TrendyTime 格点抽查 ===");
    info!("文件: {}", args.file.display());
    info!("变量: {}, 格点: ({}, {})", args.variable, args.lat, args.lon);

    let series = tt_io::cell_series(&args.file, &args.variable, args.lat, args.lon)
        .context("抽取格点序列失败")?;
    info!("时间步数: {}", series.len());

    let values = if args.standardize {
        standardize_series(&series).context("标准化失败")?
    } else {
        series
    };

    for (i, v) in values.iter().enumerate() {
        println!("{i}\t{v}");
    }

    Ok(())
}
