//! 工具模块 - 错误类型与日志
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - handler 的 Result 别名
//! - 日志初始化

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
