// crates/tt_core/src/trim.rs

//! 裁剪对齐
//!
//! 把原始序列按签名目录裁剪到规范窗口：丢弃前 `trim_offset` 个
//! 时间步，使序列从 1900-01-01（或前移后的纪元）开始。纯切片，
//! 不插值、不重采样。

use crate::error::TimeResult;
use crate::signature::{self, Signature};

/// 按签名裁剪序列，对齐到 1900-01-01
pub fn trim(series: &[f64]) -> TimeResult<&[f64]> {
    trim_with_offset(series, 0)
}

/// 按签名裁剪序列，规范窗口前移 `years_after_1900` 年
///
/// 保证 `len(输出) = len(输入) - trim_offset`。
pub fn trim_with_offset(series: &[f64], years_after_1900: usize) -> TimeResult<&[f64]> {
    let sig = signature::lookup_with_offset(series.len(), years_after_1900)?;
    Ok(&series[sig.trim_offset..])
}

/// 裁剪并同时返回使用的签名
pub fn trim_classified(
    series: &[f64],
    years_after_1900: usize,
) -> TimeResult<(&[f64], Signature)> {
    let sig = signature::lookup_with_offset(series.len(), years_after_1900)?;
    Ok((&series[sig.trim_offset..], sig))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeError;
    use crate::signature::known_counts;

    #[test]
    fn test_trim_1488_is_identity() {
        let series: Vec<f64> = (0..1488).map(|i| i as f64).collect();
        let trimmed = trim(&series).unwrap();
        assert_eq!(trimmed.len(), 1488);
        assert_eq!(trimmed[0], 0.0);
    }

    #[test]
    fn test_trim_3888_drops_pre_1900() {
        let series: Vec<f64> = (0..3888).map(|i| i as f64).collect();
        let trimmed = trim(&series).unwrap();
        assert_eq!(trimmed.len(), 1488);
        // 前 2400 步（1700-01 到 1899-12）被丢弃
        assert_eq!(trimmed[0], 2400.0);
    }

    #[test]
    fn test_length_accounting_for_all_signatures() {
        for count in known_counts() {
            let series = vec![0.0; count];
            let (trimmed, sig) = trim_classified(&series, 0).unwrap();
            assert_eq!(trimmed.len() + sig.trim_offset, series.len(), "count={count}");
        }
    }

    #[test]
    fn test_trim_with_offset() {
        let series = vec![1.0; 3888];
        let trimmed = trim_with_offset(&series, 5).unwrap();
        assert_eq!(trimmed.len(), 3888 - 2460);
    }

    #[test]
    fn test_unknown_length_is_error() {
        let series = vec![0.0; 777];
        let err = trim(&series).unwrap_err();
        assert!(matches!(err, TimeError::UnrecognizedSignature { count: 777 }));
    }

    #[test]
    fn test_trim_is_pure_slice() {
        let series: Vec<f64> = (0..324).map(|i| i as f64 * 0.5).collect();
        let trimmed = trim(&series).unwrap();
        // 只是切片，值不被改写
        assert_eq!(trimmed, &series[200..]);
    }
}
