// crates/tt_pipeline/src/error.rs

//! 流水线错误类型

use thiserror::Error;

/// 流水线操作结果
pub type PipelineResult<T> = Result<T, PipelineError>;

/// 流水线错误
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 时间轴分类/解码失败
    #[error("时间轴处理失败: {0}")]
    Time(#[from] tt_core::TimeError),

    /// IO 层失败
    #[error("IO 失败: {0}")]
    Io(#[from] tt_io::IoError),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] tt_config::ConfigError),

    /// 文件系统操作失败
    #[error("文件系统操作失败: {0}")]
    Fs(#[from] std::io::Error),

    /// 外部工具执行失败
    #[error("cdo {operator} 失败 (exit {status}): {stderr}")]
    ExternalTool {
        /// 失败的 CDO 算子
        operator: String,
        /// 退出码描述
        status: String,
        /// 标准输出
        stdout: String,
        /// 标准错误
        stderr: String,
    },

    /// 外部工具不可用
    #[error("找不到外部工具 {tool}: {message}")]
    ToolNotFound {
        /// 工具名
        tool: String,
        /// 系统错误信息
        message: String,
    },

    /// 报表缺少所需单元格
    #[error("报表 {report} 缺少单元格 [{row}, {column}]")]
    MissingReportCell {
        /// 报表名
        report: String,
        /// 行名
        row: String,
        /// 列键
        column: String,
    },

    /// 报表单元格无法解析
    #[error("报表单元格 [{row}, {column}] 的值 {value:?} 无法解析为时间步数")]
    BadReportCell {
        /// 行名
        row: String,
        /// 列键
        column: String,
        /// 原始单元格内容
        value: String,
    },

    /// 校验失败
    #[error("校验失败 {path}: {message}")]
    Validation {
        /// 被校验文件
        path: String,
        /// 失败原因
        message: String,
    },
}
