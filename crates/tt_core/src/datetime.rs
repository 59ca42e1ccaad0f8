// crates/tt_core/src/datetime.rs

//! 日历感知的日期时间
//!
//! 提供 [`CfDateTime`] 结构和各日历下的序列日换算。标准/儒略历走
//! 儒略日算法，noleap/all_leap/360_day 走各自的固定年长算术。
//!
//! 序列日是日历内部的线性天数编号，仅用于同一日历下的差值和偏移
//! 计算，不同日历的序列日不可混用。

use crate::calendar::{CfCalendar, DAYS_BEFORE_MONTH, DAYS_BEFORE_MONTH_LEAP};
use crate::error::{TimeError, TimeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 日历感知日期时间
///
/// 字段顺序即比较顺序（年、月、日、时、分、秒）。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct CfDateTime {
    /// 年
    pub year: i32,
    /// 月 (1-12)
    pub month: u32,
    /// 日 (1-31)
    pub day: u32,
    /// 时 (0-23)
    pub hour: u32,
    /// 分 (0-59)
    pub minute: u32,
    /// 秒 (0.0-60.0)
    pub second: f64,
}

impl CfDateTime {
    /// 创建新的日期时间
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// 创建日期（时间部分为 00:00:00）
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// 从 ISO 8601 风格字符串解析
    ///
    /// 支持 `YYYY-MM-DD`、`YYYY-MM-DD HH:MM:SS`、`YYYY-MM-DDTHH:MM:SSZ`，
    /// 也接受 `YYYY` / `YYYY-MM`（缺省部分补 1 月 1 日），
    /// 对应档案中 "years since 1700" 这类只有年份的参考时间。
    pub fn parse(s: &str) -> TimeResult<Self> {
        let s = s.trim().replace('T', " ");
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.is_empty() {
            return Err(TimeError::InvalidDate {
                message: "空日期字符串".into(),
            });
        }

        let date_parts: Vec<&str> = parts[0].split('-').collect();
        if date_parts.is_empty() || date_parts.len() > 3 {
            return Err(TimeError::InvalidDate {
                message: format!("无效的日期格式: {}", parts[0]),
            });
        }

        let year: i32 = date_parts[0].parse().map_err(|_| TimeError::InvalidDate {
            message: format!("无效的年份: {}", date_parts[0]),
        })?;
        let month: u32 = match date_parts.get(1) {
            Some(p) => p.parse().map_err(|_| TimeError::InvalidDate {
                message: format!("无效的月份: {p}"),
            })?,
            None => 1,
        };
        let day: u32 = match date_parts.get(2) {
            Some(p) => p.parse().map_err(|_| TimeError::InvalidDate {
                message: format!("无效的日期: {p}"),
            })?,
            None => 1,
        };

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDate {
                message: format!("日期分量超出范围: {}", parts[0]),
            });
        }

        let (hour, minute, second) = if let Some(time_str) = parts.get(1) {
            let time_str = time_str.trim_end_matches('Z');
            let time_parts: Vec<&str> = time_str.split(':').collect();
            let h: u32 = time_parts.first().and_then(|s| s.parse().ok()).unwrap_or(0);
            let m: u32 = time_parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(0);
            let s: f64 = time_parts.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.0);
            (h, m, s)
        } else {
            (0, 0, 0.0)
        };

        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// 从打包的 YYYYMMDD.f 浮点数解码
    ///
    /// CLM5.0 等模式把日期写成 `day as %Y%m%d.%f`。零的年/月/日是
    /// 该模式的已知坏数据，报 [`TimeError::ZeroDate`]，绝不默默修正。
    pub fn from_packed_ymd(value: f64, calendar: CfCalendar) -> TimeResult<Self> {
        if !value.is_finite() {
            return Err(TimeError::InvalidDate {
                message: format!("非有限的打包日期: {value}"),
            });
        }

        let date_int = value as i64;
        let year = date_int / 10000;
        let month = (date_int % 10000) / 100;
        let day = date_int % 100;

        if year == 0 || month == 0 || day == 0 {
            return Err(TimeError::ZeroDate { value });
        }
        if !(1..=12).contains(&month) || day < 1 || year < 0 {
            return Err(TimeError::InvalidDate {
                message: format!("无效的打包日期: {value}"),
            });
        }

        let year = year as i32;
        let month = month as u32;
        let day = day as u32;
        if day > calendar.days_in_month(year, month) {
            return Err(TimeError::InvalidDate {
                message: format!(
                    "日期在 {calendar} 日历下不存在: {year:04}-{month:02}-{day:02}"
                ),
            });
        }

        Ok(Self::from_ymd(year, month, day))
    }

    /// 转换为日历内序列日（天数 + 当日小数）
    pub fn to_serial_day(&self, calendar: CfCalendar) -> f64 {
        let (y, m, d) = (self.year as i64, self.month as i64, self.day as i64);

        let day_number = match calendar {
            CfCalendar::Day360 => y * 360 + (m - 1) * 30 + (d - 1),
            CfCalendar::NoLeap => y * 365 + DAYS_BEFORE_MONTH[(m - 1) as usize] + (d - 1),
            CfCalendar::AllLeap => y * 366 + DAYS_BEFORE_MONTH_LEAP[(m - 1) as usize] + (d - 1),
            CfCalendar::Julian => {
                let a = (14 - m) / 12;
                let y_adj = y + 4800 - a;
                let m_adj = m + 12 * a - 3;
                d + (153 * m_adj + 2) / 5 + 365 * y_adj + y_adj / 4 - 32083
            }
            CfCalendar::Standard | CfCalendar::Proleptic => {
                let a = (14 - m) / 12;
                let y_adj = y + 4800 - a;
                let m_adj = m + 12 * a - 3;
                d + (153 * m_adj + 2) / 5 + 365 * y_adj + y_adj / 4 - y_adj / 100 + y_adj / 400
                    - 32045
            }
        };

        let time_fraction =
            (self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second) / 86400.0;
        day_number as f64 + time_fraction
    }

    /// 从日历内序列日还原日期时间
    pub fn from_serial_day(serial: f64, calendar: CfCalendar) -> Self {
        let day_number = serial.floor() as i64;
        let time_fraction = serial - day_number as f64;

        let (year, month, day) = match calendar {
            CfCalendar::Day360 => {
                let y = day_number.div_euclid(360);
                let rem = day_number.rem_euclid(360);
                (y as i32, (rem / 30 + 1) as u32, (rem % 30 + 1) as u32)
            }
            CfCalendar::NoLeap => {
                let y = day_number.div_euclid(365);
                let doy = day_number.rem_euclid(365);
                let (m, d) = month_day_from_doy(doy, &DAYS_BEFORE_MONTH);
                (y as i32, m, d)
            }
            CfCalendar::AllLeap => {
                let y = day_number.div_euclid(366);
                let doy = day_number.rem_euclid(366);
                let (m, d) = month_day_from_doy(doy, &DAYS_BEFORE_MONTH_LEAP);
                (y as i32, m, d)
            }
            CfCalendar::Julian => {
                let c = day_number + 32082;
                let d1 = (4 * c + 3) / 1461;
                let e = c - (1461 * d1) / 4;
                let m1 = (5 * e + 2) / 153;
                let day = e - (153 * m1 + 2) / 5 + 1;
                let month = m1 + 3 - 12 * (m1 / 10);
                let year = d1 - 4800 + m1 / 10;
                (year as i32, month as u32, day as u32)
            }
            CfCalendar::Standard | CfCalendar::Proleptic => {
                let a = day_number + 32044;
                let b = (4 * a + 3) / 146097;
                let c = a - (146097 * b) / 4;
                let d1 = (4 * c + 3) / 1461;
                let e = c - (1461 * d1) / 4;
                let m1 = (5 * e + 2) / 153;
                let day = e - (153 * m1 + 2) / 5 + 1;
                let month = m1 + 3 - 12 * (m1 / 10);
                let year = 100 * b + d1 - 4800 + m1 / 10;
                (year as i32, month as u32, day as u32)
            }
        };

        // 0.5s 舍入，避免浮点尾差把 00:00:00 显示成 23:59:59
        let total_seconds = (time_fraction * 86400.0 + 0.5).floor();
        let hour = (total_seconds / 3600.0) as u32 % 24;
        let minute = ((total_seconds / 60.0) as u32) % 60;
        let second = total_seconds % 60.0;

        Self::new(year, month, day, hour, minute, second)
    }

    /// 在当前日期上增加天数（可为负、可带小数）
    pub fn add_days(&self, days: f64, calendar: CfCalendar) -> Self {
        Self::from_serial_day(self.to_serial_day(calendar) + days, calendar)
    }

    /// 格式化日期部分为 `YYYY-MM-DD`
    pub fn format_date(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// 由年内天数（0 起）查月/日
fn month_day_from_doy(doy: i64, table: &[i64; 13]) -> (u32, u32) {
    let mut month = 12;
    for m in 1..=12 {
        if table[m] > doy {
            month = m;
            break;
        }
    }
    let day = doy - table[month - 1] + 1;
    (month as u32, day as u32)
}

impl fmt::Display for CfDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_datetime() {
        let dt = CfDateTime::parse("2020-06-15 12:30:45").unwrap();
        assert_eq!(dt.year, 2020);
        assert_eq!(dt.month, 6);
        assert_eq!(dt.day, 15);
        assert_eq!(dt.hour, 12);
        assert_eq!(dt.minute, 30);
        assert!((dt.second - 45.0).abs() < 1e-10);
    }

    #[test]
    fn test_parse_date_only() {
        let dt = CfDateTime::parse("1900-01-01").unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (1900, 1, 1));
        assert_eq!((dt.hour, dt.minute), (0, 0));
    }

    #[test]
    fn test_parse_year_only() {
        // iMAPLE 的 "years since 1700"
        let dt = CfDateTime::parse("1700").unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (1700, 1, 1));
    }

    #[test]
    fn test_parse_iso_t_separator() {
        let dt = CfDateTime::parse("2020-06-15T00:00:00Z").unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (2020, 6, 15));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CfDateTime::parse("").is_err());
        assert!(CfDateTime::parse("abcd-ef-gh").is_err());
        assert!(CfDateTime::parse("2020-13-01").is_err());
    }

    #[test]
    fn test_serial_roundtrip_standard() {
        let cal = CfCalendar::Standard;
        for (y, m, d) in [(1700, 1, 1), (1900, 2, 28), (2000, 2, 29), (2023, 12, 31)] {
            let dt = CfDateTime::from_ymd(y, m, d);
            let back = CfDateTime::from_serial_day(dt.to_serial_day(cal), cal);
            assert_eq!((back.year, back.month, back.day), (y, m, d));
        }
    }

    #[test]
    fn test_serial_roundtrip_noleap() {
        let cal = CfCalendar::NoLeap;
        for (y, m, d) in [(1700, 1, 1), (1900, 12, 31), (2000, 2, 28), (2023, 6, 15)] {
            let dt = CfDateTime::from_ymd(y, m, d);
            let back = CfDateTime::from_serial_day(dt.to_serial_day(cal), cal);
            assert_eq!((back.year, back.month, back.day), (y, m, d));
        }
    }

    #[test]
    fn test_serial_roundtrip_360day() {
        let cal = CfCalendar::Day360;
        let dt = CfDateTime::from_ymd(1901, 12, 30);
        let back = CfDateTime::from_serial_day(dt.to_serial_day(cal), cal);
        assert_eq!((back.year, back.month, back.day), (1901, 12, 30));
    }

    #[test]
    fn test_add_days_standard() {
        let cal = CfCalendar::Standard;
        let dt = CfDateTime::from_ymd(2020, 1, 1).add_days(31.0, cal);
        assert_eq!((dt.year, dt.month, dt.day), (2020, 2, 1));
        // 闰日
        let dt = CfDateTime::from_ymd(2020, 2, 28).add_days(1.0, cal);
        assert_eq!((dt.month, dt.day), (2, 29));
    }

    #[test]
    fn test_add_days_noleap_skips_feb29() {
        let dt = CfDateTime::from_ymd(2020, 2, 28).add_days(1.0, CfCalendar::NoLeap);
        assert_eq!((dt.month, dt.day), (3, 1));
    }

    #[test]
    fn test_add_days_360day_month() {
        let dt = CfDateTime::from_ymd(1900, 1, 1).add_days(30.0, CfCalendar::Day360);
        assert_eq!((dt.year, dt.month, dt.day), (1900, 2, 1));
    }

    #[test]
    fn test_packed_ymd_decode() {
        let dt = CfDateTime::from_packed_ymd(19000115.5, CfCalendar::Standard).unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (1900, 1, 15));
    }

    #[test]
    fn test_packed_ymd_zero_date() {
        // CLM5.0 的零日期
        let err = CfDateTime::from_packed_ymd(0.0, CfCalendar::Standard).unwrap_err();
        assert!(matches!(err, TimeError::ZeroDate { .. }));
        let err = CfDateTime::from_packed_ymd(19000100.0, CfCalendar::Standard).unwrap_err();
        assert!(matches!(err, TimeError::ZeroDate { .. }));
    }

    #[test]
    fn test_packed_ymd_nonexistent_date() {
        // 1900 年在标准历和 noleap 历下都没有 2 月 29 日
        assert!(CfDateTime::from_packed_ymd(19000229.0, CfCalendar::NoLeap).is_err());
        assert!(CfDateTime::from_packed_ymd(19000229.0, CfCalendar::Standard).is_err());
        // 2000 年有
        assert!(CfDateTime::from_packed_ymd(20000229.0, CfCalendar::Standard).is_ok());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(CfDateTime::from_ymd(1900, 1, 1).format_date(), "1900-01-01");
    }

    #[test]
    fn test_ordering() {
        let a = CfDateTime::from_ymd(1900, 1, 1);
        let b = CfDateTime::from_ymd(1900, 1, 2);
        assert!(a < b);
    }
}
