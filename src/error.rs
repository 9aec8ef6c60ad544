//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，二进制入口统一返回 `Result<(), AppError>`。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 提供 `From` 转换，无需手动 map。

use crate::icon_converter::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标转换流水线错误（读取 / 解码 / 编码 / 写盘）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 命令行参数错误
    #[error("参数错误: {0}")]
    Args(String),
}

impl From<pico_args::Error> for AppError {
    fn from(error: pico_args::Error) -> Self {
        AppError::Args(error.to_string())
    }
}
