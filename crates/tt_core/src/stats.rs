// crates/tt_core/src/stats.rs

//! 序列标准化
//!
//! 零均值单位方差变换。标准差为零说明序列是常量场
//! （退化签名的典型症状），此时标准化无定义，硬性报错而不是
//! 用兜底分母掩盖。

use crate::error::{TimeError, TimeResult};

/// 标准化序列：减均值、除以标准差（总体标准差）
pub fn standardize_series(series: &[f64]) -> TimeResult<Vec<f64>> {
    if series.is_empty() {
        return Err(TimeError::InvalidInput {
            message: "空序列无法标准化".into(),
        });
    }

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    if std == 0.0 {
        return Err(TimeError::ZeroStd);
    }

    Ok(series.iter().map(|v| (v - mean) / std).collect())
}
