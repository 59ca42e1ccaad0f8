// crates/tt_io/src/drivers/netcdf/mod.rs

//! NetCDF 驱动
//!
//! 只读访问 TRENDY 档案文件的时间变量和网格切片。
//! 需启用 `netcdf` feature，否则所有操作返回 [`NetCdfError::NotAvailable`]。

mod driver;
mod error;

pub use driver::{NetCdfDriver, TimeAxis};
pub use error::NetCdfError;
