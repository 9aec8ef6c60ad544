//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `IconConfig`，保证运行时行为可观测、可调整、可测试。
//!
//! ## 实现思路
//!
//! - `Default` 只拒绝解压炸弹级别的输入，普通照片、扫描件都能直接转换。
//! - `LumaWeights` 负责权重字符串解析与反向输出。
//! - 阈值不做范围校验：越界值按比较规则自然退化。

use super::IconError;

/// 默认二值化阈值。
pub const DEFAULT_THRESHOLD: i32 = 200;

/// 默认像素预算，约 1.79 亿像素（常见解压炸弹判定线）。
pub const DEFAULT_MAX_PIXELS: u64 = 178_956_970;

/// 图标转换配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 二值化阈值：灰度 `> threshold` 视为背景（透明），否则为前景（不透明黑）。
    pub threshold: i32,
    /// 灰度化使用的亮度权重。
    pub luma: LumaWeights,
    /// 允许读取的最大文件体积（字节），默认不限制。
    pub max_file_size: u64,
    /// 解码前按图片头尺寸检查的像素预算（`width * height`）。
    pub max_pixels: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            luma: LumaWeights::Bt601,
            max_file_size: u64::MAX,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

impl IconConfig {
    /// 校验资源上限。阈值不在校验范围内。
    pub(crate) fn validate(&self) -> Result<(), IconError> {
        if self.max_file_size == 0 {
            return Err(IconError::Config("max_file_size 不能为 0".to_string()));
        }
        if self.max_pixels == 0 {
            return Err(IconError::Config("max_pixels 不能为 0".to_string()));
        }
        Ok(())
    }
}

/// 灰度化亮度权重。
///
/// - `Bt601`：ITU-R BT.601（0.299 / 0.587 / 0.114），16 位定点并四舍五入
/// - `Bt709`：ITU-R BT.709（0.2126 / 0.7152 / 0.0722），即 `image` 自带的灰度转换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LumaWeights {
    #[default]
    Bt601,
    Bt709,
}

impl LumaWeights {
    /// 从外部字符串解析权重。
    ///
    /// # 示例
    /// ```rust
    /// use icon_converter::icon_converter::LumaWeights;
    ///
    /// let weights = LumaWeights::parse("BT709")?;
    /// assert_eq!(weights.as_str(), "bt709");
    /// # Ok::<(), icon_converter::icon_converter::IconError>(())
    /// ```
    pub fn parse(value: &str) -> Result<Self, IconError> {
        match value.trim().to_lowercase().as_str() {
            "bt601" => Ok(Self::Bt601),
            "bt709" => Ok(Self::Bt709),
            other => Err(IconError::Config(format!(
                "未知灰度权重：{}（可选：bt601 / bt709）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bt601 => "bt601",
            Self::Bt709 => "bt709",
        }
    }
}
