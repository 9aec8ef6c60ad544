//! # 中间数据模型
//!
//! - `RawImageData` 表示已加载但未解码的字节
//! - `ConversionReport` 表示一次转换的结果摘要

use std::path::PathBuf;

/// 加载阶段输出：原始字节与来源路径。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源路径（用于日志与诊断）。
    pub(crate) source_hint: String,
}

/// 单次转换结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// 已写入的 PNG 路径。
    pub output_path: PathBuf,
    /// 输出宽度（与输入一致）。
    pub width: u32,
    /// 输出高度（与输入一致）。
    pub height: u32,
    /// 不透明黑色像素数。
    pub opaque_pixels: u64,
    /// 透明像素数。
    pub transparent_pixels: u64,
}

impl ConversionReport {
    /// 面向用户的成功确认信息。
    pub fn confirmation(&self) -> String {
        format!("✅ 已保存图标风格图片到：{}", self.output_path.display())
    }
}
