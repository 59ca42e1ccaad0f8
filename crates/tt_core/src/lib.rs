// crates/tt_core/src/lib.rs

//! TrendyTime Core Layer
//!
//! 时间轴签名分类与日历解码的核心层，不触碰文件系统。
//!
//! # 模块概览
//!
//! - [`calendar`]: CF 日历类型和闰年/月长规则
//! - [`datetime`]: 日历感知的日期时间与序列日换算
//! - [`units`]: 标准 CF 时间单位解析
//! - [`decode`]: 异构单位的优先级分派解码
//! - [`signature`]: 时间步数签名目录
//! - [`trim`]: 裁剪对齐到规范窗口
//! - [`generate`]: 规范日期序列生成与长度门禁
//! - [`stats`]: 序列标准化
//! - [`error`]: 统一错误类型
//!
//! # 数据流
//!
//! 原始时间值 + units/calendar 属性 → [`decode`] 得到首末日期；
//! 时间步数 → [`signature`] 查出 (纪元, 间隔, 裁剪偏移) →
//! [`trim`] 切片对齐 → [`generate`] 校验长度并重建日期序列。
//!
//! # 设计原则
//!
//! 1. **封闭目录**: 签名目录不做启发式外推，未知步数就是错误
//! 2. **分支自报**: 单位解码的每个分支只捕获自己的失败并署名
//! 3. **硬门禁**: 裁剪后长度必须精确命中规范长度，不接受"接近"

#![warn(missing_docs)]

pub mod calendar;
pub mod datetime;
pub mod decode;
pub mod error;
pub mod generate;
pub mod signature;
pub mod stats;
pub mod trim;
pub mod units;

pub use calendar::CfCalendar;
pub use datetime::CfDateTime;
pub use decode::{decode_range, DecodedRange};
pub use error::{DecodeBranch, TimeError, TimeResult};
pub use generate::{generate, CANONICAL_EPOCH_YEAR, CANONICAL_MONTHLY_STEPS, CANONICAL_YEARLY_STEPS};
pub use signature::{lookup, lookup_with_offset, Interval, Signature};
pub use stats::standardize_series;
pub use trim::{trim, trim_classified, trim_with_offset};
pub use units::{CfTimeUnits, TimeUnit};
