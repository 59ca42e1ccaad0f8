// crates/tt_pipeline/src/validate.rs

//! 标准化结果校验
//!
//! 对输出树里的文件做独立复核：时间步数必须精确命中规范长度，
//! 日历和解码出的首末日期必须与重建的规范序列一致。校验只读，
//! 不会修改任何文件。

use crate::error::{PipelineError, PipelineResult};
use tt_io::TimeAxis;

/// 退化输出的固定属性
const DEGENERATE_CALENDAR: &str = "365_day";
const DEGENERATE_EPOCH: &str = "1700-01-01";

/// 校验单条时间轴，返回全部问题（空即通过）
///
/// `year_offset` 是本次运行的规范窗口前移年数，0 表示完整窗口。
pub fn validate_axis(axis: &TimeAxis, year_offset: usize) -> Vec<String> {
    let mut issues = Vec::new();
    let n = axis.len();
    let units = axis.units.as_deref().unwrap_or("");
    let calendar = axis.calendar.as_deref().unwrap_or("");

    if n == 1 {
        // 退化输出：单步，365_day 日历，纪元 1700-01-01
        if calendar != DEGENERATE_CALENDAR {
            issues.push(format!(
                "degenerate output must use calendar {DEGENERATE_CALENDAR}, got {calendar:?}"
            ));
        }
        match tt_core::decode_range(units, calendar, &axis.values) {
            Ok(tt_core::DecodedRange::Range { first, .. }) => {
                if first.format_date() != DEGENERATE_EPOCH {
                    issues.push(format!(
                        "degenerate timestep decodes to {}, expected {DEGENERATE_EPOCH}",
                        first.format_date()
                    ));
                }
            }
            Ok(tt_core::DecodedRange::Empty) => {
                issues.push("time variable has no values".to_string())
            }
            Err(e) => issues.push(format!("time axis does not decode: {e}")),
        }
        return issues;
    }

    if calendar != "standard" {
        issues.push(format!("calendar must be standard, got {calendar:?}"));
    }

    // 长度门禁和首末日期都与重建的规范序列比对
    let expected = match tt_core::generate(n, year_offset) {
        Ok(dates) => dates,
        Err(e) => {
            issues.push(format!("canonical sequence rejected length {n}: {e}"));
            return issues;
        }
    };
    match tt_core::decode_range(units, calendar, &axis.values) {
        Ok(tt_core::DecodedRange::Range { first, last }) => {
            let want_first = expected[0].format_date();
            let want_last = expected[expected.len() - 1].format_date();
            if first.format_date() != want_first {
                issues.push(format!(
                    "first timestep decodes to {}, expected {want_first}",
                    first.format_date()
                ));
            }
            if last.format_date() != want_last {
                issues.push(format!(
                    "last timestep decodes to {}, expected {want_last}",
                    last.format_date()
                ));
            }
        }
        Ok(tt_core::DecodedRange::Empty) => issues.push("time variable has no values".to_string()),
        Err(e) => issues.push(format!("time axis does not decode: {e}")),
    }

    issues
}

/// 校验输出树里的单个文件
#[cfg(feature = "netcdf")]
pub fn validate_file(path: &std::path::Path) -> PipelineResult<()> {
    use tt_io::NetCdfDriver;

    let driver = NetCdfDriver::open(path).map_err(tt_io::IoError::from)?;
    let axis = driver
        .time_axis()
        .map_err(tt_io::IoError::from)?
        .ok_or_else(|| PipelineError::Validation {
            path: path.display().to_string(),
            message: "time variable is missing".to_string(),
        })?;

    let issues = validate_axis(&axis, 0);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::Validation {
            path: path.display().to_string(),
            message: issues.join("; "),
        })
    }
}

/// 校验输出树里的单个文件 (无 NetCDF 支持)
#[cfg(not(feature = "netcdf"))]
pub fn validate_file(path: &std::path::Path) -> PipelineResult<()> {
    let _ = path;
    Err(PipelineError::Io(tt_io::NetCdfError::NotAvailable.into()))
}
