// crates/tt_io/src/scan.rs

//! 档案目录扫描
//!
//! 枚举 Raw 档案里每个 模式/情景 目录下的 NetCDF 文件。
//! 目录缺失视为正常（并非所有模式提交了所有情景），跳过不报错。

use crate::error::IoResult;
use std::path::{Path, PathBuf};
use tt_config::{ArchiveLayout, Catalog};

/// 某个 模式/情景 目录下的文件清单
#[derive(Debug, Clone)]
pub struct ScenarioFiles {
    /// 模式名
    pub model: String,
    /// 情景名
    pub scenario: String,
    /// NetCDF 文件路径（按文件名排序）
    pub files: Vec<PathBuf>,
}

impl ScenarioFiles {
    /// 报表列键 "model/scenario"
    pub fn column_key(&self) -> String {
        Catalog::column_key(&self.model, &self.scenario)
    }
}

/// 列出单个目录下的 .nc 文件（排序）
fn list_netcdf_files(dir: &Path) -> IoResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("nc") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// 扫描单个模式的全部情景目录
///
/// 返回存在的情景目录清单，缺失目录被跳过。
pub fn scan_model(
    layout: &ArchiveLayout,
    catalog: &Catalog,
    model: &str,
) -> IoResult<Vec<ScenarioFiles>> {
    let mut out = Vec::new();
    for scenario in &catalog.scenarios {
        let dir = layout.raw_scenario_dir(model, scenario);
        if !dir.is_dir() {
            tracing::debug!(model, scenario = scenario.as_str(), "scenario dir missing, skipped");
            continue;
        }
        out.push(ScenarioFiles {
            model: model.to_string(),
            scenario: scenario.clone(),
            files: list_netcdf_files(&dir)?,
        });
    }
    Ok(out)
}

/// 扫描全部模式
pub fn scan_archive(layout: &ArchiveLayout, catalog: &Catalog) -> IoResult<Vec<ScenarioFiles>> {
    let mut out = Vec::new();
    for model in &catalog.models {
        out.extend(scan_model(layout, catalog, model)?);
    }
    Ok(out)
}

/// 在文件清单里找承载指定变量的文件
pub fn find_variable_file<'a>(
    catalog: &Catalog,
    files: &'a [PathBuf],
    variable: &str,
) -> Option<&'a PathBuf> {
    files.iter().find(|f| {
        f.file_name()
            .and_then(|n| n.to_str())
            .map(|n| catalog.matches_variable(n, variable))
            .unwrap_or(false)
    })
}
