// crates/tt_core/src/decode.rs

//! 异构时间单位的优先级分派解码
//!
//! TRENDY 各模式的时间单位五花八门，按以下优先级分派（顺序敏感，
//! 有的分支的匹配串是别的分支输入的子串）：
//!
//! 1. `day as %Y%m%d.%f`: 打包十进制日期（CLM5.0）
//! 2. `years since ...`: 年伪单位，按 365.2425 天/年换算（iMAPLE）
//! 3. `months since ...` + 360_day 日历: 精确 30 天/月算术
//! 4. `months since ...` + 其他日历: 按 30.4368 天/月换算（CABLE-POP）
//! 5. 其余: 标准 CF 解码
//!
//! 每个分支只捕获自己内部的失败并以分支名标记，空序列返回
//! [`DecodedRange::Empty`] 而不是错误。
//!
//! # 关于平均年/月长
//!
//! 365.2425 与 30.4368 是平坦近似，对月长可变的日历有固有偏差。
//! 是否可接受是领域方的政策问题，这里按档案惯例原样保留。

use crate::calendar::CfCalendar;
use crate::datetime::CfDateTime;
use crate::error::{DecodeBranch, TimeResult};
use crate::units::{reference_date_of, CfTimeUnits};

/// 平均格里高利年长（天）
pub const DAYS_PER_YEAR_AVG: f64 = 365.2425;

/// 平均月长（天）
pub const DAYS_PER_MONTH_AVG: f64 = 30.4368;

/// 解码结果
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedRange {
    /// 空数据集（时间变量存在但没有值）
    Empty,
    /// 首末日期
    Range {
        /// 第一个时间步对应的日期
        first: CfDateTime,
        /// 最后一个时间步对应的日期
        last: CfDateTime,
    },
}

impl DecodedRange {
    /// 按报表格式输出 `first : last`
    pub fn format_range(&self) -> String {
        match self {
            Self::Empty => "Empty dataset : Empty dataset".to_string(),
            Self::Range { first, last } => {
                format!("{} : {}", first.format_date(), last.format_date())
            }
        }
    }
}

/// 按单位字符串内容选择解码分支
fn classify(units: &str, calendar: &str) -> (DecodeBranch, bool) {
    if units.contains("day as %Y%m%d.%f") {
        (DecodeBranch::Ymd, false)
    } else if units.contains("years") {
        (DecodeBranch::Year, false)
    } else if units.contains("months") {
        (DecodeBranch::Month, calendar.trim() == "360_day")
    } else {
        (DecodeBranch::Standard, false)
    }
}

/// 解码时间轴首末日期
///
/// `values` 为未解码的原始时间值，`units`/`calendar` 为对应的
/// NetCDF 属性字符串。
pub fn decode_range(units: &str, calendar: &str, values: &[f64]) -> TimeResult<DecodedRange> {
    let (first_val, last_val) = match (values.first(), values.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return Ok(DecodedRange::Empty),
    };

    let (branch, is_360) = classify(units, calendar);
    tracing::trace!(%branch, units, calendar, "units classified");

    let result = match branch {
        DecodeBranch::Ymd => decode_packed_ymd(calendar, first_val, last_val),
        DecodeBranch::Year => decode_year_fraction(units, calendar, first_val, last_val),
        DecodeBranch::Month if is_360 => decode_months_360(units, first_val, last_val),
        DecodeBranch::Month => decode_month_fraction(units, calendar, first_val, last_val),
        DecodeBranch::Standard => decode_standard(units, calendar, first_val, last_val),
    };

    result.map_err(|e| e.tag_branch(branch, units))
}

/// 分支 1: "day as %Y%m%d.%f" 打包日期
fn decode_packed_ymd(calendar: &str, first: f64, last: f64) -> TimeResult<DecodedRange> {
    let cal = CfCalendar::from_str(calendar)?;
    Ok(DecodedRange::Range {
        first: CfDateTime::from_packed_ymd(first, cal)?,
        last: CfDateTime::from_packed_ymd(last, cal)?,
    })
}

/// 分支 2: "years since" 伪单位
///
/// 基准日期截断到参考年的 1 月 1 日，数值按平均年长换算成天数。
fn decode_year_fraction(
    units: &str,
    calendar: &str,
    first: f64,
    last: f64,
) -> TimeResult<DecodedRange> {
    let cal = CfCalendar::from_str(calendar)?;
    let base = reference_date_of(units)?;
    let base = CfDateTime::from_ymd(base.year, 1, 1);
    Ok(DecodedRange::Range {
        first: base.add_days(first * DAYS_PER_YEAR_AVG, cal),
        last: base.add_days(last * DAYS_PER_YEAR_AVG, cal),
    })
}

/// 分支 3: "months since" + 360_day 日历，每月精确 30 天
fn decode_months_360(units: &str, first: f64, last: f64) -> TimeResult<DecodedRange> {
    let base = reference_date_of(units)?;
    Ok(DecodedRange::Range {
        first: base.add_days(first * 30.0, CfCalendar::Day360),
        last: base.add_days(last * 30.0, CfCalendar::Day360),
    })
}

/// 分支 4: "months since" + 非 360_day 日历
fn decode_month_fraction(
    units: &str,
    calendar: &str,
    first: f64,
    last: f64,
) -> TimeResult<DecodedRange> {
    let cal = CfCalendar::from_str(calendar)?;
    let base = reference_date_of(units)?;
    Ok(DecodedRange::Range {
        first: base.add_days(first * DAYS_PER_MONTH_AVG, cal),
        last: base.add_days(last * DAYS_PER_MONTH_AVG, cal),
    })
}

/// 分支 5: 标准 CF 解码
fn decode_standard(units: &str, calendar: &str, first: f64, last: f64) -> TimeResult<DecodedRange> {
    let parsed = CfTimeUnits::parse_with_calendar(units, calendar)?;
    Ok(DecodedRange::Range {
        first: parsed.to_datetime(first),
        last: parsed.to_datetime(last),
    })
}
