// crates/tt_pipeline/src/lib.rs

//! # tt_pipeline - TrendyTime 标准化流水线
//!
//! 把普查（`tt_io`）和时间算术（`tt_core`）串成对档案的三类操作：
//!
//! - [`cdo`]: CDO 外部工具封装
//! - [`driver`]: 按签名目录重写时间轴到规范窗口
//! - [`validate`]: 对输出做独立复核
//!
//! ## 失败处理
//!
//! 批处理逐文件隔离失败：单个文件出错记日志、计入汇总并继续，
//! 不中断整个模式的处理。所有重写经过临时暂存目录，失败不留
//! 半成品。

#![warn(missing_docs)]

pub mod cdo;
pub mod driver;
pub mod error;
pub mod validate;

pub use cdo::CdoTool;
pub use driver::{Canonicalizer, Outcome, RunSummary, CANONICAL_END, CANONICAL_START};
pub use error::{PipelineError, PipelineResult};
pub use validate::{validate_axis, validate_file};
