// apps/tt_cli/src/commands/mod.rs

//! 子命令实现

pub mod inspect;
pub mod probe;
pub mod standardise;
pub mod validate;

use clap::Args;
use std::path::PathBuf;
use tt_config::ArchiveLayout;

/// 档案目录参数（各子命令共用）
#[derive(Args)]
pub struct LayoutArgs {
    /// 原始数据根目录
    #[arg(long, default_value = "TRENDY/Raw/OUTPUT")]
    pub raw_root: PathBuf,

    /// 标准化输出根目录
    #[arg(long, default_value = "TRENDY/Standard_Time/OUTPUT")]
    pub canonical_root: PathBuf,

    /// 报表 CSV 根目录
    #[arg(long, default_value = "Outputs/CSVs/Timesteps")]
    pub report_root: PathBuf,
}

impl LayoutArgs {
    /// 装配目录布局
    pub fn layout(&self) -> ArchiveLayout {
        ArchiveLayout::new(
            self.raw_root.clone(),
            self.canonical_root.clone(),
            self.report_root.clone(),
        )
    }
}
