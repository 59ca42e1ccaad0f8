// crates/tt_config/src/lib.rs

//! TrendyTime Config Layer
//!
//! 配置层，把原脚本里的环境相关全局常量（路径、模式/变量清单）
//! 收敛为显式传入的配置对象，使核心层和管线层可以脱离具体
//! 文件系统布局独立测试。
//!
//! # 模块概览
//!
//! - [`layout`]: 档案目录布局（原始/标准化/报表三棵树）
//! - [`catalog`]: 模式/变量/情景普查目录
//! - [`error`]: 配置错误类型

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod layout;

pub use catalog::{Catalog, MODELS, SCENARIOS, VARIABLES};
pub use error::ConfigError;
pub use layout::ArchiveLayout;
