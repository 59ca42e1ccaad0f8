// crates/tt_io/src/inspect.rs

//! 时间轴元数据普查
//!
//! 对每个文件提取一次 [`TimeAxisMetadata`]，之后只读。解码失败
//! 记录为字符串写进元数据（供报表诊断），不中断整个扫描。

use crate::drivers::netcdf::TimeAxis;
use serde::{Deserialize, Serialize};

/// 属性缺失时的占位值
const NOT_SPECIFIED: &str = "not_specified";

/// 报表键
///
/// 每个键对应一张 CSV 报表（变量 × 模式/情景）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKey {
    /// 时间变量是否存在
    Exists,
    /// units 属性
    Units,
    /// calendar 属性
    Calendar,
    /// 时间步数
    NumTimesteps,
    /// 推断的间隔
    Interval,
    /// 数据类型
    Dtype,
    /// 解码出的首末日期
    DateRange,
}

impl ReportKey {
    /// 全部报表键（固定顺序）
    pub const ALL: [ReportKey; 7] = [
        ReportKey::Exists,
        ReportKey::Units,
        ReportKey::Calendar,
        ReportKey::NumTimesteps,
        ReportKey::Interval,
        ReportKey::Dtype,
        ReportKey::DateRange,
    ];

    /// CSV 文件名（不含扩展名）
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Exists => "Exists",
            Self::Units => "Units",
            Self::Calendar => "Calendar",
            Self::NumTimesteps => "Num_Timesteps",
            Self::Interval => "Interval",
            Self::Dtype => "dtype",
            Self::DateRange => "date_range",
        }
    }
}

/// 单个文件的时间轴元数据
///
/// 每次扫描按文件生成一次，生成后不再修改。CSV 报表只是它的
/// 快照，真实状态永远以档案文件本身为准。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeAxisMetadata {
    /// 时间变量是否存在
    pub exists: bool,
    /// units 属性
    pub units: Option<String>,
    /// calendar 属性
    pub calendar: Option<String>,
    /// 数据类型
    pub dtype: Option<String>,
    /// 时间步数
    pub n_timesteps: Option<usize>,
    /// 按签名目录推断的间隔
    pub interval: Option<String>,
    /// 解码出的首末日期（或错误描述）
    pub date_range: Option<String>,
}

impl TimeAxisMetadata {
    /// 时间变量缺失的元数据
    pub fn missing() -> Self {
        Self {
            exists: false,
            units: None,
            calendar: None,
            dtype: None,
            n_timesteps: None,
            interval: None,
            date_range: None,
        }
    }

    /// 从时间轴构建元数据
    pub fn from_axis(axis: &TimeAxis) -> Self {
        let units = axis.units.clone().unwrap_or_else(|| NOT_SPECIFIED.into());
        let calendar = axis
            .calendar
            .clone()
            .unwrap_or_else(|| NOT_SPECIFIED.into());

        let interval = match tt_core::lookup(axis.len()) {
            Ok(sig) => sig.interval.to_string(),
            Err(e) => e.to_string(),
        };

        // 解码失败也要进报表，错误信息本身就是诊断数据
        let date_range = match tt_core::decode_range(&units, &calendar, &axis.values) {
            Ok(range) => range.format_range(),
            Err(e) => format!("{e} : {e}"),
        };

        Self {
            exists: true,
            units: Some(units),
            calendar: Some(calendar),
            dtype: Some(axis.dtype.clone()),
            n_timesteps: Some(axis.len()),
            interval: Some(interval),
            date_range: Some(date_range),
        }
    }

    /// 取指定报表键对应的单元格值
    pub fn field(&self, key: ReportKey) -> Option<String> {
        match key {
            ReportKey::Exists => Some(if self.exists {
                "Time exists".to_string()
            } else {
                "Missing".to_string()
            }),
            ReportKey::Units => self.units.clone(),
            ReportKey::Calendar => self.calendar.clone(),
            ReportKey::NumTimesteps => self.n_timesteps.map(|n| n.to_string()),
            ReportKey::Interval => self.interval.clone(),
            ReportKey::Dtype => self.dtype.clone(),
            ReportKey::DateRange => self.date_range.clone(),
        }
    }
}

/// 普查单个文件
#[cfg(feature = "netcdf")]
pub fn inspect_file(path: &std::path::Path) -> crate::error::IoResult<TimeAxisMetadata> {
    use crate::drivers::netcdf::NetCdfDriver;

    let driver = NetCdfDriver::open(path)?;
    match driver.time_axis()? {
        Some(axis) => Ok(TimeAxisMetadata::from_axis(&axis)),
        None => Ok(TimeAxisMetadata::missing()),
    }
}

/// 普查单个文件 (无 NetCDF 支持)
#[cfg(not(feature = "netcdf"))]
pub fn inspect_file(_path: &std::path::Path) -> crate::error::IoResult<TimeAxisMetadata> {
    Err(crate::drivers::netcdf::NetCdfError::NotAvailable.into())
}

/// 抽取离 (lat, lon) 最近网格点的单格点时间序列
#[cfg(feature = "netcdf")]
pub fn cell_series(
    path: &std::path::Path,
    variable: &str,
    lat: f64,
    lon: f64,
) -> crate::error::IoResult<Vec<f64>> {
    use crate::drivers::netcdf::NetCdfDriver;

    let driver = NetCdfDriver::open(path)?;
    Ok(driver.nearest_cell_series(variable, lat, lon)?)
}

/// 抽取单格点时间序列 (无 NetCDF 支持)
#[cfg(not(feature = "netcdf"))]
pub fn cell_series(
    _path: &std::path::Path,
    _variable: &str,
    _lat: f64,
    _lon: f64,
) -> crate::error::IoResult<Vec<f64>> {
    Err(crate::drivers::netcdf::NetCdfError::NotAvailable.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(n: usize, units: &str, calendar: &str) -> TimeAxis {
        TimeAxis {
            values: (0..n).map(|i| i as f64).collect(),
            units: Some(units.to_string()),
            calendar: Some(calendar.to_string()),
            dtype: "Double".to_string(),
        }
    }

    #[test]
    fn test_metadata_for_canonical_axis() {
        let meta = TimeAxisMetadata::from_axis(&axis(1488, "days since 1900-01-01", "standard"));
        assert!(meta.exists);
        assert_eq!(meta.n_timesteps, Some(1488));
        assert_eq!(meta.interval.as_deref(), Some("monthly"));
        let range = meta.date_range.unwrap();
        assert!(range.starts_with("1900-01-01 : "), "range={range}");
    }

    #[test]
    fn test_metadata_unknown_count() {
        let meta = TimeAxisMetadata::from_axis(&axis(777, "days since 1900-01-01", "standard"));
        let interval = meta.interval.unwrap();
        assert!(interval.contains("777"), "interval={interval}");
    }

    #[test]
    fn test_metadata_decode_error_recorded() {
        // 单位无法识别时错误进 date_range，不抛出
        let meta = TimeAxisMetadata::from_axis(&axis(10, "fortnights since 1900", "standard"));
        let range = meta.date_range.unwrap();
        assert!(range.contains("Standard Error"), "range={range}");
    }

    #[test]
    fn test_metadata_missing_attrs() {
        let a = TimeAxis {
            values: vec![0.0],
            units: None,
            calendar: None,
            dtype: "Float".into(),
        };
        let meta = TimeAxisMetadata::from_axis(&a);
        assert_eq!(meta.units.as_deref(), Some("not_specified"));
        assert_eq!(meta.calendar.as_deref(), Some("not_specified"));
    }

    #[test]
    fn test_missing_metadata_fields() {
        let meta = TimeAxisMetadata::missing();
        assert_eq!(meta.field(ReportKey::Exists).as_deref(), Some("Missing"));
        assert_eq!(meta.field(ReportKey::Units), None);
    }

    #[test]
    fn test_field_mapping() {
        let meta = TimeAxisMetadata::from_axis(&axis(124, "days since 1900-01-01", "noleap"));
        assert_eq!(meta.field(ReportKey::NumTimesteps).as_deref(), Some("124"));
        assert_eq!(meta.field(ReportKey::Calendar).as_deref(), Some("noleap"));
        assert_eq!(meta.field(ReportKey::Dtype).as_deref(), Some("Double"));
    }

    #[test]
    fn test_report_key_stems() {
        let stems: Vec<_> = ReportKey::ALL.iter().map(|k| k.file_stem()).collect();
        assert_eq!(
            stems,
            ["Exists", "Units", "Calendar", "Num_Timesteps", "Interval", "dtype", "date_range"]
        );
    }
}
