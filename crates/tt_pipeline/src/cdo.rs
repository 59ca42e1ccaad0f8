// crates/tt_pipeline/src/cdo.rs

//! CDO 外部工具封装
//!
//! 时间轴重写交给 CDO（Climate Data Operators）完成，本模块只负责
//! 组装算子字符串、调用进程并把失败翻译成 [`PipelineError`]。
//! 每次调用一个算子：`cdo {operator} {input} {output}`。

use crate::error::{PipelineError, PipelineResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// CDO 进程封装
#[derive(Debug, Clone)]
pub struct CdoTool {
    program: PathBuf,
}

impl Default for CdoTool {
    fn default() -> Self {
        Self::new()
    }
}

impl CdoTool {
    /// 使用 PATH 里的 `cdo`
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("cdo"),
        }
    }

    /// 指定可执行文件路径
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 执行单个算子
    fn run(&self, operator: &str, input: &Path, output: &Path) -> PipelineResult<()> {
        tracing::debug!(operator, input = %input.display(), "invoking cdo");
        let result = Command::new(&self.program)
            .arg(operator)
            .arg(input)
            .arg(output)
            .output();

        let out = match result {
            Ok(out) => out,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PipelineError::ToolNotFound {
                    tool: self.program.display().to_string(),
                    message: e.to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        if !out.status.success() {
            return Err(PipelineError::ExternalTool {
                operator: operator.to_string(),
                status: out
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            });
        }
        Ok(())
    }

    /// `setcalendar,{calendar}`
    pub fn set_calendar(&self, calendar: &str, input: &Path, output: &Path) -> PipelineResult<()> {
        self.run(&op_set_calendar(calendar), input, output)
    }

    /// `settaxis,{date},00:00:00,{increment}`
    pub fn set_time_axis(
        &self,
        date: &str,
        increment: &str,
        input: &Path,
        output: &Path,
    ) -> PipelineResult<()> {
        self.run(&op_set_time_axis(date, increment), input, output)
    }

    /// `setreftime,{date},00:00:00`
    pub fn set_reference_time(&self, date: &str, input: &Path, output: &Path) -> PipelineResult<()> {
        self.run(&op_set_reference_time(date), input, output)
    }

    /// `seldate,{start},{end}`
    pub fn select_date_range(
        &self,
        start: &str,
        end: &str,
        input: &Path,
        output: &Path,
    ) -> PipelineResult<()> {
        self.run(&op_select_date_range(start, end), input, output)
    }

    /// `seltimestep,{step}`（1 起始）
    pub fn select_timestep(&self, step: usize, input: &Path, output: &Path) -> PipelineResult<()> {
        self.run(&op_select_timestep(step), input, output)
    }
}

fn op_set_calendar(calendar: &str) -> String {
    format!("setcalendar,{calendar}")
}

fn op_set_time_axis(date: &str, increment: &str) -> String {
    format!("settaxis,{date},00:00:00,{increment}")
}

fn op_set_reference_time(date: &str) -> String {
    format!("setreftime,{date},00:00:00")
}

fn op_select_date_range(start: &str, end: &str) -> String {
    format!("seldate,{start},{end}")
}

fn op_select_timestep(step: usize) -> String {
    format!("seltimestep,{step}")
}
