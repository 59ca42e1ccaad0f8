// crates/tt_core/src/signature.rs

//! 时间步签名目录
//!
//! TRENDY 各模式对同一类变量输出的时间步数各不相同，但数量本身
//! 就能唯一指认其起始日期和步长。本目录是人工核对过的封闭映射：
//! 步数 → (起始日期, 间隔, 裁剪偏移)，裁剪偏移把序列对齐到
//! 1900-01-01。未登记的步数一律报 `UnrecognizedSignature`，
//! 绝不外推：步数到日期范围是多对一的，猜测会无声地污染数据。
//!
//! 1 步和 10 步是退化情形：这些文件的所有时间步取值相同
//! （CABLE-POP 的常量场），统一折叠为单个规范时间步。

use crate::datetime::CfDateTime;
use crate::error::{TimeError, TimeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 月/日固定为 1 月 1 日，目录里的纪元只差在年份
const EPOCH_MONTH: u32 = 1;
const EPOCH_DAY: u32 = 1;

/// 时间步间隔
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    /// 逐月
    Monthly,
    /// 逐年
    Yearly,
    /// 单步（退化序列）
    Once,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
            Self::Once => write!(f, "once"),
        }
    }
}

/// 目录条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureEntry {
    /// 原始时间步数
    pub count: usize,
    /// 序列起始的纪元年（起始日总是该年 1 月 1 日）
    pub epoch_year: i32,
    /// 步长间隔
    pub interval: Interval,
    /// 对齐到 1900-01-01 需要丢弃的前导步数
    pub trim_offset: usize,
}

/// 签名目录
///
/// 人工核对的封闭目录，保持按 count 可审计。来源是对全部
/// 18 个模式原始输出的普查。
const CATALOG: &[SignatureEntry] = &[
    SignatureEntry { count: 3888, epoch_year: 1700, interval: Interval::Monthly, trim_offset: 2400 },
    SignatureEntry { count: 324, epoch_year: 1700, interval: Interval::Yearly, trim_offset: 200 },
    SignatureEntry { count: 3876, epoch_year: 1701, interval: Interval::Monthly, trim_offset: 2388 },
    SignatureEntry { count: 323, epoch_year: 1701, interval: Interval::Yearly, trim_offset: 199 },
    SignatureEntry { count: 1968, epoch_year: 1860, interval: Interval::Monthly, trim_offset: 480 },
    SignatureEntry { count: 164, epoch_year: 1860, interval: Interval::Yearly, trim_offset: 40 },
    SignatureEntry { count: 1488, epoch_year: 1900, interval: Interval::Monthly, trim_offset: 0 },
    // 退化情形：所有时间步取值相同，折叠为单步
    SignatureEntry { count: 1, epoch_year: 1700, interval: Interval::Once, trim_offset: 0 },
    SignatureEntry { count: 10, epoch_year: 1700, interval: Interval::Once, trim_offset: 9 },
];

/// 带调整后裁剪偏移的签名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// 原始时间步数
    pub count: usize,
    /// 序列起始的纪元年
    pub epoch_year: i32,
    /// 步长间隔
    pub interval: Interval,
    /// 实际裁剪偏移（已计入年偏移）
    pub trim_offset: usize,
}

impl Signature {
    /// 起始日期
    pub fn epoch_date(&self) -> CfDateTime {
        CfDateTime::from_ymd(self.epoch_year, EPOCH_MONTH, EPOCH_DAY)
    }

    /// 起始日期的 ISO 字符串（外部工具的算子参数用）
    pub fn epoch(&self) -> String {
        self.epoch_date().format_date()
    }

    /// 是否为退化（单步折叠）签名
    pub fn is_degenerate(&self) -> bool {
        self.interval == Interval::Once
    }
}

/// 按时间步数查目录
pub fn lookup(count: usize) -> TimeResult<Signature> {
    lookup_with_offset(count, 0)
}

/// 按时间步数查目录，并把规范窗口前移 `years_after_1900` 年
///
/// 月间隔的裁剪偏移加 `years_after_1900 * 12`，年间隔加
/// `years_after_1900`；退化签名不受年偏移影响。
pub fn lookup_with_offset(count: usize, years_after_1900: usize) -> TimeResult<Signature> {
    let entry = CATALOG
        .iter()
        .find(|e| e.count == count)
        .ok_or(TimeError::UnrecognizedSignature { count })?;

    let trim = match entry.interval {
        Interval::Monthly => entry.trim_offset + years_after_1900 * 12,
        Interval::Yearly => entry.trim_offset + years_after_1900,
        Interval::Once => entry.trim_offset,
    };

    if trim > count {
        return Err(TimeError::TrimOutOfRange { count, trim });
    }

    Ok(Signature {
        count: entry.count,
        epoch_year: entry.epoch_year,
        interval: entry.interval,
        trim_offset: trim,
    })
}

/// 目录中登记的全部时间步数（供报表和测试使用）
pub fn known_counts() -> impl Iterator<Item = usize> {
    CATALOG.iter().map(|e| e.count)
}
