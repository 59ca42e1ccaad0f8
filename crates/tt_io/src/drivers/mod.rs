// crates/tt_io/src/drivers/mod.rs

//! 数据读取驱动

pub mod netcdf;
