// crates/tt_io/src/error.rs

//! IO 错误类型定义
//!
//! 提供 IO 模块的统一错误枚举，底层 NetCDF/文件系统错误通过
//! thiserror 自动转换。

use crate::drivers::netcdf::NetCdfError;
use thiserror::Error;

/// IO 模块结果类型别名
pub type IoResult<T> = Result<T, IoError>;

/// IO 错误枚举
#[derive(Error, Debug)]
pub enum IoError {
    /// 文件系统错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// NetCDF 驱动错误
    #[error("NetCDF 错误: {0}")]
    NetCdf(#[from] NetCdfError),

    /// CSV 解析错误
    #[error("CSV 解析错误: {file}:{line} - {message}")]
    CsvParse {
        /// 文件路径
        file: String,
        /// 行号
        line: usize,
        /// 错误信息
        message: String,
    },

    /// 配置层错误
    #[error("配置错误: {0}")]
    Config(#[from] tt_config::ConfigError),
}
