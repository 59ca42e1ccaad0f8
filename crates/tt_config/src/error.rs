// crates/tt_config/src/error.rs

//! 配置层错误类型

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 路径不在档案根目录下
    #[error("路径不在档案根目录下: {path}")]
    OutsideArchive {
        /// 违规路径
        path: String,
    },

    /// 未知模式
    #[error("未知模式: {model}")]
    UnknownModel {
        /// 模式名
        model: String,
    },
}
