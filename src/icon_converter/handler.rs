//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconConverter` 只负责流程编排与配置持有。
//! 处理链路固定为：
//! 1. 按路径加载原始字节
//! 2. 解码并变换为图标风格 RGBA
//! 3. 编码为 PNG 并写盘
//!
//! ## 实现思路
//!
//! - 配置在构造时校验一次，单次转换内不会变化。
//! - 记录 `load/transform/save/total` 阶段耗时，便于性能诊断。

use std::path::Path;
use std::time::Instant;

use super::pipeline::OPAQUE_PIXEL;
use super::{ConversionReport, IconConfig, IconError};

/// 图标转换器。
#[derive(Debug, Clone)]
pub struct IconConverter {
    pub(super) config: IconConfig,
}

impl IconConverter {
    /// 根据配置创建转换器。
    ///
    /// # 示例
    /// ```rust
    /// use icon_converter::icon_converter::{IconConfig, IconConverter};
    ///
    /// let converter = IconConverter::new(IconConfig::default())?;
    /// assert_eq!(converter.config().threshold, 200);
    /// # Ok::<(), icon_converter::icon_converter::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 处理主入口：读取 `input_path`，写出图标风格 PNG 到 `output_path`。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use icon_converter::icon_converter::{IconConfig, IconConverter};
    ///
    /// let converter = IconConverter::new(IconConfig::default())?;
    /// let report = converter.convert("logo.png", "output_icon.png")?;
    /// println!("{}x{}", report.width, report.height);
    /// # Ok::<(), icon_converter::icon_converter::IconError>(())
    /// ```
    pub fn convert(
        &self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<ConversionReport, IconError> {
        let input_path = input_path.as_ref();
        self.run(input_path, output_path.as_ref())
            .inspect_err(|error| {
                log::error!("❌ 图标转换失败 - 输入: {} {}", input_path.display(), failure_line(error));
            })
    }

    fn run(&self, input_path: &Path, output_path: &Path) -> Result<ConversionReport, IconError> {
        let config = &self.config;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_from_file(input_path, config)?;
        let load_elapsed = load_start.elapsed();

        let transform_start = Instant::now();
        let icon = self.decode_and_transform(raw, config)?;
        let transform_elapsed = transform_start.elapsed();

        let save_start = Instant::now();
        Self::write_png(&icon, output_path)?;
        let save_elapsed = save_start.elapsed();

        let total_pixels = u64::from(icon.width()) * u64::from(icon.height());
        let opaque_pixels = icon.pixels().filter(|p| **p == OPAQUE_PIXEL).count() as u64;

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ 图标转换完成 - load={}ms transform={}ms save={}ms total={}ms",
            load_elapsed.as_millis(),
            transform_elapsed.as_millis(),
            save_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(ConversionReport {
            output_path: output_path.to_path_buf(),
            width: icon.width(),
            height: icon.height(),
            opaque_pixels,
            transparent_pixels: total_pixels - opaque_pixels,
        })
    }
}

/// 失败日志的阶段/错误码前缀，如 `[decode/INPUT_UNREADABLE] ...`。
fn failure_line(error: &IconError) -> String {
    format!("[{}/{}] {}", error.stage().as_str(), error.code(), error)
}
