// crates/tt_config/src/layout.rs

//! 档案目录布局
//!
//! 原始数据和标准化输出是两棵镜像目录树：
//! `{root}/{model}/{scenario}/{file}.nc`。报表 CSV 单独一棵。
//! 布局作为显式配置传入，不做环境相关的默认路径猜测。

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 档案目录布局
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveLayout {
    /// 原始数据根目录
    pub raw_root: PathBuf,
    /// 标准化输出根目录
    pub canonical_root: PathBuf,
    /// 报表 CSV 根目录
    pub report_root: PathBuf,
}

impl ArchiveLayout {
    /// 创建布局
    pub fn new(
        raw_root: impl Into<PathBuf>,
        canonical_root: impl Into<PathBuf>,
        report_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            raw_root: raw_root.into(),
            canonical_root: canonical_root.into(),
            report_root: report_root.into(),
        }
    }

    /// 原始数据中某模式/情景的目录
    pub fn raw_scenario_dir(&self, model: &str, scenario: &str) -> PathBuf {
        self.raw_root.join(model).join(scenario)
    }

    /// 把原始文件路径映射到镜像的输出路径
    ///
    /// 输入必须位于 `raw_root` 之下。
    pub fn mirrored_output(&self, raw_file: &Path) -> Result<PathBuf, ConfigError> {
        let relative = raw_file
            .strip_prefix(&self.raw_root)
            .map_err(|_| ConfigError::OutsideArchive {
                path: raw_file.display().to_string(),
            })?;
        Ok(self.canonical_root.join(relative))
    }

    /// 指定报表键的 CSV 路径
    pub fn report_path(&self, key: &str) -> PathBuf {
        self.report_root.join(format!("{key}.csv"))
    }

    /// 确保输出目录存在
    pub fn ensure_output_dirs(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.canonical_root)?;
        std::fs::create_dir_all(&self.report_root)?;
        Ok(())
    }
}
