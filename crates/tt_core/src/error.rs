// crates/tt_core/src/error.rs

//! 核心层错误类型
//!
//! 提供 `TimeError` 枚举和 `TimeResult` 类型别名，用于时间轴解码和
//! 签名分类的错误传递。
//!
//! # 设计原则
//!
//! 1. **不猜测**: 未登记的时间步数、零日期等一律报错，不做近似修正
//! 2. **分支标记**: 单位解码错误携带所属分支，便于逐文件诊断
//! 3. **可追溯**: 错误信息保留原始单位字符串和原始数值

use thiserror::Error;

/// 核心层结果类型
pub type TimeResult<T> = Result<T, TimeError>;

/// 单位解码分支
///
/// 时间单位字符串按优先级分派到五个解码分支之一，
/// 错误信息必须标明出错的分支（见 [`TimeError::UnitDecode`]）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeBranch {
    /// "day as %Y%m%d.%f" 打包日期
    Ymd,
    /// "years since" 伪单位
    Year,
    /// "months since" 伪单位
    Month,
    /// 标准 CF 单位
    Standard,
}

impl std::fmt::Display for DecodeBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ymd => write!(f, "YMD"),
            Self::Year => write!(f, "Year"),
            Self::Month => write!(f, "Month"),
            Self::Standard => write!(f, "Standard"),
        }
    }
}

/// 核心层错误类型
#[derive(Error, Debug)]
pub enum TimeError {
    /// 无效的时间单位字符串
    #[error("无效的时间单位: {units}")]
    InvalidUnits {
        /// 原始单位字符串
        units: String,
    },

    /// 无效的日期
    #[error("无效的日期: {message}")]
    InvalidDate {
        /// 具体错误信息
        message: String,
    },

    /// 无效的日历类型
    #[error("无效的日历类型: {name}")]
    InvalidCalendar {
        /// 原始日历字符串
        name: String,
    },

    /// 打包日期中出现零的年/月/日
    #[error("Zero date not allowed: {value}")]
    ZeroDate {
        /// 原始打包数值
        value: f64,
    },

    /// 单位解码失败（携带分支标记）
    #[error("{branch} Error: {message} (units: {units})")]
    UnitDecode {
        /// 出错的解码分支
        branch: DecodeBranch,
        /// 原始单位字符串
        units: String,
        /// 具体错误信息
        message: String,
    },

    /// 时间步数未登记在签名目录中
    #[error("未登记的时间步数: {count}")]
    UnrecognizedSignature {
        /// 观测到的时间步数
        count: usize,
    },

    /// 裁剪后长度不符合任何规范长度
    #[error("裁剪后长度无效: {length}, 期望 1488-12*offset, 124-offset 或 1")]
    InvalidLength {
        /// 实际长度
        length: usize,
    },

    /// 裁剪偏移超出序列长度
    #[error("裁剪偏移超出范围: 偏移 {trim} > 序列长度 {count}")]
    TrimOutOfRange {
        /// 序列长度
        count: usize,
        /// 调整后的裁剪偏移
        trim: usize,
    },

    /// 标准差为零，无法标准化
    #[error("标准差为零，无法标准化")]
    ZeroStd,

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },
}

impl TimeError {
    /// 将错误包装为指定分支的解码错误
    ///
    /// [`TimeError::ZeroDate`] 保持原样，它本身就是一类独立的诊断信息。
    pub fn tag_branch(self, branch: DecodeBranch, units: &str) -> Self {
        match self {
            e @ Self::ZeroDate { .. } => e,
            e @ Self::UnitDecode { .. } => e,
            other => Self::UnitDecode {
                branch,
                units: units.to_string(),
                message: other.to_string(),
            },
        }
    }
}
