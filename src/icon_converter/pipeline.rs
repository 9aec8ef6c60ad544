//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → 灰度 → 二值 → RGBA”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码，降低恶意输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限快速拒绝
//! 3. 完整解码
//! 4. 按固定亮度权重灰度化（忽略 alpha）
//! 5. 严格大于阈值的像素置 255，其余置 0
//! 6. 255 → 透明白，其余 → 不透明黑
//!
//! 逐像素步骤按行优先顺序执行，像素之间互不依赖。

use image::{DynamicImage, GrayImage, ImageFormat, ImageReader, Luma, Rgba, RgbaImage};
use std::io::Cursor;

use super::source::RawImageData;
use super::{IconConfig, IconConverter, IconError, LumaWeights};

/// 背景像素：透明白。
pub const TRANSPARENT_PIXEL: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// 前景像素：不透明黑。
pub const OPAQUE_PIXEL: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// BT.601 亮度（16 位定点，四舍五入），与常见图像库的 "L" 模式转换一致。
pub fn luminance_bt601([r, g, b]: [u8; 3]) -> u8 {
    let weighted = 19_595 * r as u32 + 38_470 * g as u32 + 7_471 * b as u32 + 0x8000;
    (weighted >> 16) as u8
}

/// 将任意色彩模型的图像转换为单通道灰度图。
///
/// alpha 通道被直接忽略；16 位与浮点图像先由 `image` 缩减到 8 位。
/// `Bt709` 直接使用 `image` 自带的灰度转换。
pub fn to_grayscale(image: &DynamicImage, weights: LumaWeights) -> GrayImage {
    match (image, weights) {
        (DynamicImage::ImageLuma8(gray), _) => gray.clone(),
        (_, LumaWeights::Bt709) => image.to_luma8(),
        (_, LumaWeights::Bt601) => {
            let rgb = image.to_rgb8();
            let mut gray = GrayImage::new(rgb.width(), rgb.height());
            for (src, dst) in rgb.pixels().zip(gray.pixels_mut()) {
                *dst = Luma([luminance_bt601(src.0)]);
            }
            gray
        }
    }
}

/// 阈值二值化：`intensity > threshold` 为 255，否则为 0。
///
/// 阈值不做范围限制：负数使全部像素为 255，`>= 255` 使全部像素为 0。
pub fn binarize(mut gray: GrayImage, threshold: i32) -> GrayImage {
    for pixel in gray.pixels_mut() {
        pixel.0[0] = if i32::from(pixel.0[0]) > threshold { 255 } else { 0 };
    }
    gray
}

/// 二值图着色：255 映射为透明白，其余映射为不透明黑。
pub fn colorize(binary: &GrayImage) -> RgbaImage {
    let mut rgba = RgbaImage::new(binary.width(), binary.height());
    for (src, dst) in binary.pixels().zip(rgba.pixels_mut()) {
        *dst = if src.0[0] == 255 {
            TRANSPARENT_PIXEL
        } else {
            OPAQUE_PIXEL
        };
    }
    rgba
}

/// 内存中的完整变换：灰度 → 二值 → RGBA。
///
/// # 示例
/// ```rust
/// use icon_converter::icon_converter::LumaWeights;
/// use icon_converter::icon_converter::pipeline::{convert_image, OPAQUE_PIXEL};
/// use image::{DynamicImage, GrayImage, Luma};
///
/// let source = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([200])));
/// let icon = convert_image(&source, 200, LumaWeights::Bt601);
/// assert!(icon.pixels().all(|p| *p == OPAQUE_PIXEL));
/// ```
pub fn convert_image(image: &DynamicImage, threshold: i32, weights: LumaWeights) -> RgbaImage {
    let gray = to_grayscale(image, weights);
    let binary = binarize(gray, threshold);
    colorize(&binary)
}

impl IconConverter {
    /// 将原始字节解码并变换为图标风格 RGBA 图像。
    ///
    /// 像素预算只在读取图片头后检查一次；通过后解码器自身的内存上限被关闭，
    /// 以免比预算更严格。
    pub(crate) fn decode_and_transform(
        &self,
        raw: RawImageData,
        config: &IconConfig,
    ) -> Result<RgbaImage, IconError> {
        let format = image::guess_format(&raw.bytes)
            .map_err(|e| IconError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

        let (width, height) = Self::reader_for(&raw.bytes, format)
            .into_dimensions()
            .map_err(|e| IconError::Decode(format!("{:?} 图片头损坏：{}", format, e)))?;
        Self::check_pixel_budget(config, width, height)?;

        let mut reader = Self::reader_for(&raw.bytes, format);
        reader.no_limits();
        let decoded = reader
            .decode()
            .map_err(|e| IconError::Decode(format!("{:?} 解码失败：{}", format, e)))?;

        log::debug!(
            "🔍 解码完成 - 来源: {} 格式: {:?} 色彩模型: {:?} 尺寸: {}x{}",
            raw.source_hint,
            format,
            decoded.color(),
            width,
            height
        );

        let icon = convert_image(&decoded, config.threshold, config.luma);

        log::info!(
            "✅ 图标变换完成 - 来源: {} 尺寸: {}x{} 阈值: {} 权重: {}",
            raw.source_hint,
            width,
            height,
            config.threshold,
            config.luma.as_str()
        );

        Ok(icon)
    }

    fn reader_for(bytes: &[u8], format: ImageFormat) -> ImageReader<Cursor<&[u8]>> {
        ImageReader::with_format(Cursor::new(bytes), format)
    }

    /// 按图片头尺寸检查像素预算，返回像素总数。
    pub(crate) fn check_pixel_budget(
        config: &IconConfig,
        width: u32,
        height: u32,
    ) -> Result<u64, IconError> {
        let pixels = u64::from(width) * u64::from(height);
        if pixels > config.max_pixels {
            log::warn!("🚫 {}x{} 超出像素预算 {}", width, height, config.max_pixels);
            return Err(IconError::ResourceLimit(format!(
                "{}x{} 共 {} 像素，超出预算 {} 像素",
                width, height, pixels, config.max_pixels
            )));
        }
        Ok(pixels)
    }
}
