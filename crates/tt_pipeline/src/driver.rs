// crates/tt_pipeline/src/driver.rs

//! 时间轴标准化驱动
//!
//! 按签名目录把每个原始文件的时间轴重写到规范窗口
//! 1900-01-01 .. 2023-12-31。时间步数不从文件现读，而是读
//! 普查阶段写出的 `Num_Timesteps` 报表，保证标准化处理的
//! 就是普查核对过的那份数据。
//!
//! 常规序列四步：校准日历 → 重建时间轴 → 重设参考时间 →
//! 截取规范窗口。退化序列三步：取首步 → 校准日历 → 重建单步
//! 时间轴。所有中间产物放在临时暂存目录，只有完整走完的结果
//! 才落到输出树，失败不会留下半成品。

use crate::cdo::CdoTool;
use crate::error::{PipelineError, PipelineResult};
use std::path::Path;
use tt_config::{ArchiveLayout, Catalog};
use tt_core::{Interval, Signature};
use tt_io::{find_variable_file, scan_model, ReportKey, ReportTable};

/// 规范窗口起点
pub const CANONICAL_START: &str = "1900-01-01";
/// 规范窗口终点
pub const CANONICAL_END: &str = "2023-12-31";

/// 退化序列的固定纪元和日历
const DEGENERATE_EPOCH: &str = "1700-01-01";
const DEGENERATE_CALENDAR: &str = "365_day";
const DEGENERATE_INCREMENT: &str = "365day";

/// 单文件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 输出已写入
    Written,
    /// 输出已存在且未要求覆盖
    SkippedExisting,
}

/// 一次运行的汇总
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// 写出的文件数
    pub written: usize,
    /// 跳过的文件数
    pub skipped: usize,
    /// 失败的文件数
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Written => self.written += 1,
            Outcome::SkippedExisting => self.skipped += 1,
        }
    }
}

/// 标准化驱动
pub struct Canonicalizer {
    cdo: CdoTool,
    layout: ArchiveLayout,
    catalog: Catalog,
    overwrite: bool,
}

impl Canonicalizer {
    /// 创建驱动
    pub fn new(layout: ArchiveLayout, catalog: Catalog) -> Self {
        Self {
            cdo: CdoTool::new(),
            layout,
            catalog,
            overwrite: false,
        }
    }

    /// 替换 CDO 封装（测试或非 PATH 安装）
    pub fn with_cdo(mut self, cdo: CdoTool) -> Self {
        self.cdo = cdo;
        self
    }

    /// 是否覆盖已有输出
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// 从报表读某变量在某 模式/情景 下的时间步数
    fn timestep_count(
        &self,
        table: &ReportTable,
        variable: &str,
        column: &str,
    ) -> PipelineResult<usize> {
        let cell = table
            .get(variable, column)
            .ok_or_else(|| PipelineError::MissingReportCell {
                report: ReportKey::NumTimesteps.file_stem().to_string(),
                row: variable.to_string(),
                column: column.to_string(),
            })?;
        cell.parse().map_err(|_| PipelineError::BadReportCell {
            row: variable.to_string(),
            column: column.to_string(),
            value: cell.to_string(),
        })
    }

    /// 标准化单个文件
    ///
    /// `count` 是普查报表里登记的时间步数。
    pub fn canonicalize_file(&self, raw: &Path, count: usize) -> PipelineResult<Outcome> {
        let sig = tt_core::lookup(count)?;
        let output = self.layout.mirrored_output(raw)?;

        if output.exists() && !self.overwrite {
            tracing::debug!(output = %output.display(), "output exists, skipped");
            return Ok(Outcome::SkippedExisting);
        }
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let stage = tempfile::tempdir()?;
        let staged = if sig.is_degenerate() {
            self.stage_degenerate(raw, stage.path())?
        } else {
            self.stage_regular(raw, stage.path(), &sig)?
        };
        move_into_place(&staged, &output)?;

        tracing::info!(
            input = %raw.display(),
            output = %output.display(),
            count,
            interval = %sig.interval,
            "time axis canonicalized"
        );
        Ok(Outcome::Written)
    }

    /// 常规序列：setcalendar → settaxis → setreftime → seldate
    fn stage_regular(
        &self,
        raw: &Path,
        stage: &Path,
        sig: &Signature,
    ) -> PipelineResult<std::path::PathBuf> {
        let increment = match sig.interval {
            Interval::Monthly => "1mon",
            Interval::Yearly => "1year",
            Interval::Once => unreachable!("degenerate signatures take the short path"),
        };

        let s1 = stage.join("step1.nc");
        let s2 = stage.join("step2.nc");
        let s3 = stage.join("step3.nc");
        let s4 = stage.join("step4.nc");

        self.cdo.set_calendar("standard", raw, &s1)?;
        let epoch = sig.epoch();
        self.cdo.set_time_axis(&epoch, increment, &s1, &s2)?;
        self.cdo.set_reference_time(&epoch, &s2, &s3)?;
        self.cdo
            .select_date_range(CANONICAL_START, CANONICAL_END, &s3, &s4)?;
        Ok(s4)
    }

    /// 退化序列：seltimestep,1 → setcalendar,365_day → settaxis
    fn stage_degenerate(&self, raw: &Path, stage: &Path) -> PipelineResult<std::path::PathBuf> {
        let s1 = stage.join("step1.nc");
        let s2 = stage.join("step2.nc");
        let s3 = stage.join("step3.nc");

        self.cdo.select_timestep(1, raw, &s1)?;
        self.cdo.set_calendar(DEGENERATE_CALENDAR, &s1, &s2)?;
        self.cdo
            .set_time_axis(DEGENERATE_EPOCH, DEGENERATE_INCREMENT, &s2, &s3)?;
        Ok(s3)
    }

    /// 标准化单个模式的全部情景
    ///
    /// 单个文件失败只记日志并计入汇总，继续处理其余文件。
    pub fn run_model(&self, model: &str) -> PipelineResult<RunSummary> {
        if !self.catalog.has_model(model) {
            return Err(tt_config::ConfigError::UnknownModel {
                model: model.to_string(),
            }
            .into());
        }

        let report_path = self
            .layout
            .report_path(ReportKey::NumTimesteps.file_stem());
        let variables: Vec<&str> = self.catalog.variables.iter().map(|v| v.as_str()).collect();
        let table = ReportTable::load_or_create(&report_path, &variables)?;

        let mut summary = RunSummary::default();
        for scenario in scan_model(&self.layout, &self.catalog, model)? {
            let column = scenario.column_key();
            for variable in &self.catalog.variables {
                let Some(file) = find_variable_file(&self.catalog, &scenario.files, variable)
                else {
                    continue;
                };

                let result = self
                    .timestep_count(&table, variable, &column)
                    .and_then(|count| self.canonicalize_file(file, count));
                match result {
                    Ok(outcome) => summary.record(outcome),
                    Err(e) => {
                        summary.failed += 1;
                        tracing::warn!(
                            file = %file.display(),
                            error = %e,
                            "canonicalization failed, continuing"
                        );
                    }
                }
            }
        }
        Ok(summary)
    }
}

/// 把暂存结果移到最终位置
///
/// 跨设备时 rename 会失败，退回复制加删除。
fn move_into_place(staged: &Path, output: &Path) -> PipelineResult<()> {
    if std::fs::rename(staged, output).is_err() {
        std::fs::copy(staged, output)?;
        std::fs::remove_file(staged)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn layout_in(dir: &Path) -> ArchiveLayout {
        ArchiveLayout::new(
            dir.join("Raw"),
            dir.join("Standard_Time"),
            dir.join("CSVs"),
        )
    }

    #[test]
    fn test_timestep_count_from_report() {
        let tmp = tempfile::tempdir().unwrap();
        let canon = Canonicalizer::new(layout_in(tmp.path()), Catalog::default());

        let mut table = ReportTable::new(&["gpp"]);
        table.set("gpp", "CLASSIC/S2", "1488");
        table.set("gpp", "JULES/S2", "not a number");

        assert_eq!(
            canon.timestep_count(&table, "gpp", "CLASSIC/S2").unwrap(),
            1488
        );
        assert!(matches!(
            canon.timestep_count(&table, "gpp", "JULES/S2").unwrap_err(),
            PipelineError::BadReportCell { .. }
        ));
        assert!(matches!(
            canon.timestep_count(&table, "gpp", "OCN/S2").unwrap_err(),
            PipelineError::MissingReportCell { .. }
        ));
    }

    #[test]
    fn test_unknown_count_rejected_before_cdo() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_in(tmp.path());
        let raw = layout.raw_scenario_dir("CLASSIC", "S2").join("f.nc");
        fs::create_dir_all(raw.parent().unwrap()).unwrap();
        fs::write(&raw, b"").unwrap();

        let canon = Canonicalizer::new(layout, Catalog::default());
        let err = canon.canonicalize_file(&raw, 777).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Time(tt_core::TimeError::UnrecognizedSignature { count: 777 })
        ));
    }

    #[test]
    fn test_existing_output_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_in(tmp.path());
        let raw = layout.raw_scenario_dir("CLASSIC", "S2").join("f.nc");
        let out = layout.mirrored_output(&raw).unwrap();
        fs::create_dir_all(raw.parent().unwrap()).unwrap();
        fs::write(&raw, b"").unwrap();
        fs::create_dir_all(out.parent().unwrap()).unwrap();
        fs::write(&out, b"done").unwrap();

        let canon = Canonicalizer::new(layout, Catalog::default());
        let outcome = canon.canonicalize_file(&raw, 1488).unwrap();
        assert_eq!(outcome, Outcome::SkippedExisting);
        // 原有输出未被触碰
        assert_eq!(fs::read(&out).unwrap(), b"done");
    }

    #[test]
    fn test_missing_cdo_surfaces_as_tool_error() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_in(tmp.path());
        let raw = layout.raw_scenario_dir("OCN", "S3").join("OCN_S3_gpp.nc");
        fs::create_dir_all(raw.parent().unwrap()).unwrap();
        fs::write(&raw, b"").unwrap();

        let canon = Canonicalizer::new(layout, Catalog::default())
            .with_cdo(CdoTool::with_program("/nonexistent/cdo-binary"));
        let err = canon.canonicalize_file(&raw, 1488).unwrap_err();
        assert!(matches!(err, PipelineError::ToolNotFound { .. }));
    }

    #[test]
    fn test_run_model_counts_failures_and_continues() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = layout_in(tmp.path());
        let dir = layout.raw_scenario_dir("CLASSIC", "S2");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("CLASSIC_S2_gpp.nc"), b"").unwrap();
        fs::write(dir.join("CLASSIC_S2_lai.nc"), b"").unwrap();
        fs::create_dir_all(&layout.report_root).unwrap();

        let mut table = ReportTable::new(&["gpp", "lai"]);
        table.set("gpp", "CLASSIC/S2", "777");
        // lai 无单元格
        table
            .save(&layout.report_path(ReportKey::NumTimesteps.file_stem()))
            .unwrap();

        let canon = Canonicalizer::new(layout, Catalog::default());
        let summary = canon.run_model("CLASSIC").unwrap();
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.written, 0);
    }

    #[test]
    fn test_unknown_model_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let canon = Canonicalizer::new(layout_in(tmp.path()), Catalog::default());
        assert!(matches!(
            canon.run_model("CESM2").unwrap_err(),
            PipelineError::Config(_)
        ));
    }

    #[test]
    fn test_move_into_place() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("staged.nc");
        let dst = tmp.path().join("final.nc");
        fs::write(&src, b"payload").unwrap();
        move_into_place(&src, &dst).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"payload");
    }
}
