// crates/tt_core/src/calendar.rs

//! CF 日历类型
//!
//! TRENDY 档案中的文件混用多种 CF 日历，同一变量在不同模式下
//! 可能是 standard、noleap 或 360_day。本模块提供统一的日历枚举
//! 和闰年/月长规则，日期算术见 [`crate::datetime`]。

use crate::error::{TimeError, TimeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 各月累计天数（平年）
pub(crate) const DAYS_BEFORE_MONTH: [i64; 13] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// 各月累计天数（闰年）
pub(crate) const DAYS_BEFORE_MONTH_LEAP: [i64; 13] =
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// CF 日历类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CfCalendar {
    /// 标准格里高利历
    #[default]
    Standard,
    /// 无闰年（每年365天）
    NoLeap,
    /// 全闰年（每年366天）
    AllLeap,
    /// 360 天历（每月30天）
    Day360,
    /// 儒略历
    Julian,
    /// 预期格里高利历
    Proleptic,
}

impl CfCalendar {
    /// 从 CF calendar 属性字符串解析日历类型
    pub fn from_str(s: &str) -> TimeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "gregorian" => Ok(Self::Standard),
            "noleap" | "365_day" | "no_leap" => Ok(Self::NoLeap),
            "all_leap" | "366_day" | "allleap" => Ok(Self::AllLeap),
            "360_day" => Ok(Self::Day360),
            "julian" => Ok(Self::Julian),
            "proleptic_gregorian" | "proleptic" => Ok(Self::Proleptic),
            _ => Err(TimeError::InvalidCalendar {
                name: s.to_string(),
            }),
        }
    }

    /// 容错解析，失败时回退到 Standard
    ///
    /// 仅用于报表展示路径；解码路径必须用 [`CfCalendar::from_str`]。
    pub fn from_str_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    /// 判断某年是否为闰年
    pub fn is_leap_year(&self, year: i32) -> bool {
        match self {
            Self::NoLeap | Self::Day360 => false,
            Self::AllLeap => true,
            Self::Julian => year % 4 == 0,
            Self::Standard | Self::Proleptic => {
                (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
            }
        }
    }

    /// 获取某年某月的天数
    pub fn days_in_month(&self, year: i32, month: u32) -> u32 {
        if *self == Self::Day360 {
            return 30;
        }
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            _ => 0,
        }
    }

    /// 获取某年的天数
    pub fn days_in_year(&self, year: i32) -> u32 {
        match self {
            Self::NoLeap => 365,
            Self::AllLeap => 366,
            Self::Day360 => 360,
            _ => {
                if self.is_leap_year(year) {
                    366
                } else {
                    365
                }
            }
        }
    }
}

impl fmt::Display for CfCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::NoLeap => write!(f, "noleap"),
            Self::AllLeap => write!(f, "all_leap"),
            Self::Day360 => write!(f, "360_day"),
            Self::Julian => write!(f, "julian"),
            Self::Proleptic => write!(f, "proleptic_gregorian"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_aliases() {
        assert_eq!(CfCalendar::from_str("standard").unwrap(), CfCalendar::Standard);
        assert_eq!(CfCalendar::from_str("Gregorian").unwrap(), CfCalendar::Standard);
        assert_eq!(CfCalendar::from_str("365_day").unwrap(), CfCalendar::NoLeap);
        assert_eq!(CfCalendar::from_str("noleap").unwrap(), CfCalendar::NoLeap);
        assert_eq!(CfCalendar::from_str("360_day").unwrap(), CfCalendar::Day360);
        assert_eq!(CfCalendar::from_str("366_day").unwrap(), CfCalendar::AllLeap);
    }

    #[test]
    fn test_unknown_calendar_is_error() {
        assert!(CfCalendar::from_str("not_specified").is_err());
        assert_eq!(
            CfCalendar::from_str_or_default("not_specified"),
            CfCalendar::Standard
        );
    }

    #[test]
    fn test_leap_year_rules() {
        let std = CfCalendar::Standard;
        assert!(std.is_leap_year(2000));
        assert!(!std.is_leap_year(1900));
        assert!(std.is_leap_year(2004));

        assert!(!CfCalendar::NoLeap.is_leap_year(2000));
        assert!(CfCalendar::AllLeap.is_leap_year(1901));
        assert!(CfCalendar::Julian.is_leap_year(1900));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(CfCalendar::Standard.days_in_month(2020, 2), 29);
        assert_eq!(CfCalendar::NoLeap.days_in_month(2020, 2), 28);
        assert_eq!(CfCalendar::Day360.days_in_month(2020, 2), 30);
        assert_eq!(CfCalendar::Day360.days_in_month(2020, 1), 30);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(CfCalendar::Standard.days_in_year(1900), 365);
        assert_eq!(CfCalendar::Standard.days_in_year(2000), 366);
        assert_eq!(CfCalendar::Day360.days_in_year(2000), 360);
        assert_eq!(CfCalendar::AllLeap.days_in_year(1900), 366);
    }
}
