// crates/tt_core/src/generate.rs

//! 规范日期序列生成
//!
//! 给定裁剪后的序列长度，重建显式的月初/年初日期序列。长度校验
//! 是硬门禁：任何不符合规范长度的输入都说明上游签名目录或裁剪
//! 出了错，必须在这里拦住，不能让错误标注的数据流向下游。

use crate::datetime::CfDateTime;
use crate::error::{TimeError, TimeResult};

/// 规范月序列长度（1900-01 到 2023-12）
pub const CANONICAL_MONTHLY_STEPS: usize = 1488;

/// 规范年序列长度（1900 到 2023）
pub const CANONICAL_YEARLY_STEPS: usize = 124;

/// 规范纪元年
pub const CANONICAL_EPOCH_YEAR: i32 = 1900;

/// 生成规范日期序列
///
/// 接受三种长度（`off = year_offset`）：
/// - `1488 - off*12`: 从 `1900-01 + off` 年起的连续月初
/// - `124 - off`: 从 `1900 + off` 年起的连续年初
/// - `1`: 单个日期 `1900 + off`（退化序列）
///
/// 其余长度一律 [`TimeError::InvalidLength`]。
pub fn generate(length: usize, year_offset: usize) -> TimeResult<Vec<CfDateTime>> {
    let start_year = CANONICAL_EPOCH_YEAR + year_offset as i32;

    if length == 1 {
        return Ok(vec![CfDateTime::from_ymd(start_year, 1, 1)]);
    }

    let monthly_len = CANONICAL_MONTHLY_STEPS.checked_sub(year_offset * 12);
    let yearly_len = CANONICAL_YEARLY_STEPS.checked_sub(year_offset);

    if Some(length) == monthly_len {
        let dates = (0..length)
            .map(|i| {
                let year = start_year + (i / 12) as i32;
                let month = (i % 12) as u32 + 1;
                CfDateTime::from_ymd(year, month, 1)
            })
            .collect();
        return Ok(dates);
    }

    if Some(length) == yearly_len {
        let dates = (0..length)
            .map(|i| CfDateTime::from_ymd(start_year + i as i32, 1, 1))
            .collect();
        return Ok(dates);
    }

    Err(TimeError::InvalidLength { length })
}
