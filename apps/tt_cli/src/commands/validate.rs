// apps/tt_cli/src/commands/validate.rs

//! 复核命令
//!
//! 对标准化输出树做独立复核：每个文件的时间轴长度、日历和
//! 解码出的首末日期必须与规范序列一致。

use anyhow::Result;
use clap::Args;
use tracing::{error, info};
use tt_config::{ArchiveLayout, Catalog};
use tt_pipeline::validate_file;

use super::LayoutArgs;

/// 复核参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 只复核指定模式（默认全部）
    #[arg(short, long)]
    pub model: Option<String>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// 执行复核命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== TrendyTime 输出复核 ===");

    let layout = args.layout.layout();
    let catalog = Catalog::default();
    if let Some(model) = &args.model {
        anyhow::ensure!(catalog.has_model(model), "未登记的模式: {model}");
    }

    // 输出树和原始树同构，借同一套扫描逻辑遍历
    let output_view = ArchiveLayout::new(
        layout.canonical_root.clone(),
        layout.canonical_root.clone(),
        layout.report_root.clone(),
    );

    let models: Vec<String> = match &args.model {
        Some(m) => vec![m.clone()],
        None => catalog.models.clone(),
    };

    let mut passed = 0usize;
    let mut failures: Vec<String> = Vec::new();
    for model in &models {
        for scenario in tt_io::scan_model(&output_view, &catalog, model)? {
            for file in &scenario.files {
                match validate_file(file) {
                    Ok(()) => passed += 1,
                    Err(e) => {
                        error!(file = %file.display(), error = %e, "validation failed");
                        failures.push(file.display().to_string());
                    }
                }
            }
        }
    }

    info!("=== 复核完成 ===");
    info!("通过: {passed}");
    info!("失败: {}", failures.len());

    if failures.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} 个文件未通过复核", failures.len());
    }
}
