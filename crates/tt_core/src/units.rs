// crates/tt_core/src/units.rs

//! CF 时间单位解析
//!
//! 解析 "units since reference_time" 格式的时间单位字符串，如
//! `days since 1900-01-01 00:00:00`。年/月伪单位（"years since"、
//! "months since"）不属于标准 CF 单位，由 [`crate::decode`] 按
//! 优先级分派，本模块只负责标准单位和参考时间的提取。

use crate::calendar::CfCalendar;
use crate::datetime::CfDateTime;
use crate::error::{TimeError, TimeResult};
use std::fmt;

/// 标准 CF 时间单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// 秒
    Seconds,
    /// 分钟
    Minutes,
    /// 小时
    Hours,
    /// 天
    Days,
}

impl TimeUnit {
    /// 从字符串解析
    pub fn from_str(s: &str) -> TimeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "second" | "seconds" | "s" => Ok(Self::Seconds),
            "minute" | "minutes" | "min" => Ok(Self::Minutes),
            "hour" | "hours" | "h" | "hr" => Ok(Self::Hours),
            "day" | "days" | "d" => Ok(Self::Days),
            _ => Err(TimeError::InvalidUnits {
                units: s.to_string(),
            }),
        }
    }

    /// 将该单位下的数值换算为天数
    pub fn to_days(&self, value: f64) -> f64 {
        match self {
            Self::Seconds => value / 86400.0,
            Self::Minutes => value / 1440.0,
            Self::Hours => value / 24.0,
            Self::Days => value,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds => write!(f, "seconds"),
            Self::Minutes => write!(f, "minutes"),
            Self::Hours => write!(f, "hours"),
            Self::Days => write!(f, "days"),
        }
    }
}

/// 已解析的 CF 时间单位
///
/// 表示 "unit since reference_time" 加日历的完整解码上下文。
#[derive(Debug, Clone)]
pub struct CfTimeUnits {
    /// 时间单位
    pub unit: TimeUnit,
    /// 参考时间
    pub reference_time: CfDateTime,
    /// 日历类型
    pub calendar: CfCalendar,
}

impl CfTimeUnits {
    /// 解析 units 属性字符串（日历默认 standard）
    pub fn parse(units_str: &str) -> TimeResult<Self> {
        let unit_str = before_since(units_str)?;
        let unit = TimeUnit::from_str(unit_str)?;
        let reference_time = reference_date_of(units_str)?;
        Ok(Self {
            unit,
            reference_time,
            calendar: CfCalendar::Standard,
        })
    }

    /// 同时解析单位和日历
    pub fn parse_with_calendar(units_str: &str, calendar_str: &str) -> TimeResult<Self> {
        let mut parsed = Self::parse(units_str)?;
        parsed.calendar = CfCalendar::from_str(calendar_str)?;
        Ok(parsed)
    }

    /// 将单个时间值解码为日期时间
    pub fn to_datetime(&self, value: f64) -> CfDateTime {
        self.reference_time
            .add_days(self.unit.to_days(value), self.calendar)
    }
}

impl fmt::Display for CfTimeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} since {}", self.unit, self.reference_time)
    }
}

/// 取 " since " 之前的单位部分
fn before_since(units_str: &str) -> TimeResult<&str> {
    let lower = units_str.to_lowercase();
    let pos = lower.find(" since ").ok_or_else(|| TimeError::InvalidUnits {
        units: units_str.to_string(),
    })?;
    Ok(units_str[..pos].trim())
}

/// 提取 "since" 之后的参考日期
///
/// 年/月伪单位分支也用它取基准日期，所以独立成函数。
pub fn reference_date_of(units_str: &str) -> TimeResult<CfDateTime> {
    let lower = units_str.to_lowercase();
    let pos = lower.rfind("since").ok_or_else(|| TimeError::InvalidUnits {
        units: units_str.to_string(),
    })?;
    CfDateTime::parse(units_str[pos + 5..].trim())
}
