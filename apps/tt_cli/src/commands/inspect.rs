// apps/tt_cli/src/commands/inspect.rs

//! 普查命令
//!
//! 扫描原始档案，对每个 NetCDF 文件提取时间轴元数据并更新
//! 七张 CSV 报表。单个文件的失败记入日志后继续，普查不中断。

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};
use tt_config::Catalog;
use tt_io::{inspect_file, ReportKey, ReportTable};

use super::LayoutArgs;

/// 普查参数
#[derive(Args)]
pub struct InspectArgs {
    /// 只普查指定模式（默认全部）
    #[arg(short, long)]
    pub model: Option<String>,

    /// 同时解码首末日期（慢，逐文件走单位解码）
    #[arg(long)]
    pub decoded: bool,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// 执行普查命令
pub fn execute(args: InspectArgs) -> Result<()> {
    info!("=== TrendyTime 档案普查 ===");

    let layout = args.layout.layout();
    let catalog = Catalog::default();
    layout.ensure_output_dirs().context("创建输出目录失败")?;

    if let Some(model) = &args.model {
        anyhow::ensure!(catalog.has_model(model), "未登记的模式: {model}");
    }
    let models: Vec<String> = match &args.model {
        Some(m) => vec![m.clone()],
        None => catalog.models.clone(),
    };

    // 报表一起加载，普查完一起写回；日期范围报表只在 --decoded 时更新
    let keys: Vec<ReportKey> = ReportKey::ALL
        .into_iter()
        .filter(|k| args.decoded || *k != ReportKey::DateRange)
        .collect();
    let variables: Vec<&str> = catalog.variables.iter().map(|v| v.as_str()).collect();
    let mut tables: Vec<(ReportKey, ReportTable)> = Vec::new();
    for key in keys {
        let path = layout.report_path(key.file_stem());
        let table = ReportTable::load_or_create(&path, &variables)
            .with_context(|| format!("加载报表 {} 失败", path.display()))?;
        tables.push((key, table));
    }

    let mut inspected = 0usize;
    let mut failed = 0usize;
    for model in &models {
        for scenario in tt_io::scan_model(&layout, &catalog, model)? {
            let column = scenario.column_key();
            info!(column = column.as_str(), files = scenario.files.len(), "scanning");

            for file in &scenario.files {
                let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                // 未登记变量的文件不进报表
                let Some(variable) = catalog.variable_of(name) else {
                    continue;
                };
                let variable = variable.to_string();

                match inspect_file(file) {
                    Ok(meta) => {
                        inspected += 1;
                        for (key, table) in &mut tables {
                            if let Some(value) = meta.field(*key) {
                                table.set(&variable, &column, value);
                            }
                        }
                    }
                    Err(e) => {
                        failed += 1;
                        warn!(file = %file.display(), error = %e, "inspection failed, continuing");
                    }
                }
            }
        }
    }

    for (key, table) in &tables {
        let path = layout.report_path(key.file_stem());
        table
            .save(&path)
            .with_context(|| format!("写出报表 {} 失败", path.display()))?;
    }

    info!("=== 普查完成 ===");
    info!("已普查文件: {inspected}");
    info!("失败文件: {failed}");
    info!("报表目录: {}", layout.report_root.display());

    Ok(())
}
