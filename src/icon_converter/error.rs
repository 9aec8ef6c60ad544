//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载转换链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 所有分支归入两类失败：解码类（输入侧）与编码类（输出侧），见 [`ErrorStage`]。

/// 错误发生的阶段分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    /// 输入不存在、不可读、格式无法识别或超出资源限制。
    Decode,
    /// PNG 编码失败或目标路径不可写。
    Encode,
}

impl ErrorStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Encode => "encode",
        }
    }
}

/// 图标转换统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("配置错误：{0}")]
    Config(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("写入错误：{0}")]
    Write(String),
}

impl IconError {
    /// 稳定的机器可读错误码。
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileSystem(_) => "INPUT_UNREADABLE",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::Decode(_) => "DECODE_FAILED",
            Self::ResourceLimit(_) => "RESOURCE_LIMIT",
            Self::Config(_) => "INVALID_CONFIG",
            Self::Encode(_) => "ENCODE_FAILED",
            Self::Write(_) => "WRITE_FAILED",
        }
    }

    /// 错误所属阶段。
    ///
    /// 配置错误发生在读取输入之前，归入解码类。
    pub fn stage(&self) -> ErrorStage {
        match self {
            Self::FileSystem(_)
            | Self::InvalidFormat(_)
            | Self::Decode(_)
            | Self::ResourceLimit(_)
            | Self::Config(_) => ErrorStage::Decode,
            Self::Encode(_) | Self::Write(_) => ErrorStage::Encode,
        }
    }
}
