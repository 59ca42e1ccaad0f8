// crates/tt_io/src/lib.rs

//! # tt_io - TrendyTime 档案读写层
//!
//! 负责 TRENDY 档案与磁盘之间的一切往来：
//!
//! - [`drivers::netcdf`]: 只读 NetCDF 驱动（feature 门控）
//! - [`scan`]: 枚举 模式/情景 目录下的文件
//! - [`inspect`]: 提取单个文件的时间轴元数据
//! - [`report`]: 变量 × 模式/情景 的 CSV 报表
//!
//! ## 设计原则
//!
//! 本层不做时间解码，原始值和属性原样交给 `tt_core`。
//! 元数据提取失败以字符串形式记录在报表里，扫描永不中断。

#![warn(missing_docs)]

pub mod drivers;
pub mod error;
pub mod inspect;
pub mod report;
pub mod scan;

pub use drivers::netcdf::{NetCdfDriver, NetCdfError, TimeAxis};
pub use error::{IoError, IoResult};
pub use inspect::{cell_series, inspect_file, ReportKey, TimeAxisMetadata};
pub use report::ReportTable;
pub use scan::{find_variable_file, scan_archive, scan_model, ScenarioFiles};
