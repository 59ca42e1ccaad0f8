// crates/tt_io/src/drivers/netcdf/driver.rs

//! NetCDF 驱动实现
//!
//! 读取时间变量原始值（不解码）及其 units/calendar 属性，
//! 以及按最近网格点抽取单格点序列。

use super::error::NetCdfError;
use std::path::Path;

/// 未解码的时间轴
///
/// `values` 是原始数值，解码交给 `tt_core::decode`。
#[derive(Debug, Clone)]
pub struct TimeAxis {
    /// 原始时间值
    pub values: Vec<f64>,
    /// units 属性（缺失时为 None）
    pub units: Option<String>,
    /// calendar 属性（缺失时为 None）
    pub calendar: Option<String>,
    /// 数据类型名
    pub dtype: String,
}

impl TimeAxis {
    /// 时间步数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// NetCDF 驱动
#[cfg(feature = "netcdf")]
pub struct NetCdfDriver {
    file: netcdf::File,
}

#[cfg(feature = "netcdf")]
impl NetCdfDriver {
    /// 打开 NetCDF 文件
    pub fn open(path: impl AsRef<Path>) -> Result<Self, NetCdfError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NetCdfError::FileNotFound(path.display().to_string()));
        }
        let file = netcdf::open(path)?;
        Ok(Self { file })
    }

    /// 读取字符串属性
    fn string_attr(var: &netcdf::Variable<'_>, name: &str) -> Option<String> {
        var.attribute(name)
            .and_then(|a| a.value().ok())
            .and_then(|v| match v {
                netcdf::AttrValue::Str(s) => Some(s),
                _ => None,
            })
    }

    /// 读取时间变量（不解码）
    ///
    /// 文件没有 time 变量时返回 `Ok(None)`。
    pub fn time_axis(&self) -> Result<Option<TimeAxis>, NetCdfError> {
        let var = match self.file.variable("time") {
            Some(v) => v,
            None => return Ok(None),
        };

        let values: Vec<f64> = var
            .values::<f64, _>(..)
            .map_err(|e| NetCdfError::ReadFailed(e.to_string()))?;

        Ok(Some(TimeAxis {
            values,
            units: Self::string_attr(&var, "units"),
            calendar: Self::string_attr(&var, "calendar"),
            dtype: format!("{:?}", var.vartype()),
        }))
    }

    /// 读取一维坐标变量（按候选名依次尝试）
    fn coordinate(&self, names: &[&str]) -> Result<Vec<f64>, NetCdfError> {
        for name in names {
            if let Some(var) = self.file.variable(name) {
                return var
                    .values::<f64, _>(..)
                    .map_err(|e| NetCdfError::ReadFailed(e.to_string()));
            }
        }
        Err(NetCdfError::CoordinateNotFound(names.join("/")))
    }

    /// 抽取离 (lat, lon) 最近网格点的完整时间序列
    ///
    /// 假定变量维度顺序为 (time, lat, lon)，TRENDY 档案均如此。
    pub fn nearest_cell_series(
        &self,
        variable: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<f64>, NetCdfError> {
        let lats = self.coordinate(&["lat", "latitude"])?;
        let lons = self.coordinate(&["lon", "longitude"])?;
        let lat_idx = nearest_index(&lats, lat);
        let lon_idx = nearest_index(&lons, lon);

        let var = self
            .file
            .variable(variable)
            .ok_or_else(|| NetCdfError::VariableNotFound(variable.to_string()))?;

        let n_time = var
            .dimensions()
            .first()
            .map(|d| d.len())
            .unwrap_or(0);

        let extents = [0..n_time, lat_idx..lat_idx + 1, lon_idx..lon_idx + 1];
        let data: Vec<f64> = var
            .values::<f64, _>(extents.as_slice())
            .map_err(|e| NetCdfError::ReadFailed(e.to_string()))?;
        Ok(data)
    }
}

/// 最近坐标索引
#[cfg(any(feature = "netcdf", test))]
fn nearest_index(coords: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &c) in coords.iter().enumerate() {
        let d = (c - target).abs();
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// 无 NetCDF 支持时的占位实现
#[cfg(not(feature = "netcdf"))]
pub struct NetCdfDriver;

#[cfg(not(feature = "netcdf"))]
impl NetCdfDriver {
    /// 打开 NetCDF 文件 (无 NetCDF 支持)
    pub fn open(_path: impl AsRef<Path>) -> Result<Self, NetCdfError> {
        Err(NetCdfError::NotAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_index() {
        let coords = [-89.75, -89.25, 50.75, 51.25];
        assert_eq!(nearest_index(&coords, 51.0), 2);
        assert_eq!(nearest_index(&coords, 51.3), 3);
        assert_eq!(nearest_index(&coords, -90.0), 0);
    }

    #[test]
    fn test_time_axis_len() {
        let axis = TimeAxis {
            values: vec![0.0, 1.0, 2.0],
            units: Some("days since 1900-01-01".into()),
            calendar: None,
            dtype: "Double".into(),
        };
        assert_eq!(axis.len(), 3);
        assert!(!axis.is_empty());
    }

    #[cfg(not(feature = "netcdf"))]
    #[test]
    fn test_open_without_feature_fails() {
        assert!(NetCdfDriver::open("missing.nc").is_err());
    }
}
