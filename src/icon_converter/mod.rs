//! # 图标风格转换模块（icon_converter）
//!
//! ## 设计思路
//!
//! 该模块将“读取校验 → 解码 → 灰度 → 二值化 → 透明化 → PNG 写盘”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线并记录阶段耗时
//! - `loader`：负责本地文件读取与签名/体积校验
//! - `pipeline`：负责解码、像素限制、灰度化、二值化、RGBA 着色
//! - `writer`：负责 PNG 编码与写盘
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! convert(input, output, threshold)
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（读取 + 签名/体积校验）
//!    ├─ pipeline.rs（解码 + 灰度 + 二值化 + 着色）
//!    └─ writer.rs（PNG 编码 + 写盘）
//!    ↓
//! 返回 IconError 给调用方
//! ```
//!
//! 所有步骤均为同步阻塞执行，不持有跨步骤的文件句柄。

mod config;
mod error;
mod handler;
mod loader;
pub mod pipeline;
mod source;
mod writer;

use std::path::Path;

pub use config::{DEFAULT_THRESHOLD, IconConfig, LumaWeights};
pub use error::{ErrorStage, IconError};
pub use handler::IconConverter;
pub use source::ConversionReport;

/// 单次转换入口：使用默认配置与给定阈值生成图标风格 PNG。
///
/// 成功后在标准输出打印一行确认信息。
///
/// # 示例
/// ```rust,no_run
/// use icon_converter::{convert, DEFAULT_THRESHOLD};
///
/// convert("logo.png", "output_icon.png", DEFAULT_THRESHOLD)?;
/// # Ok::<(), icon_converter::icon_converter::IconError>(())
/// ```
pub fn convert(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    threshold: i32,
) -> Result<(), IconError> {
    let config = IconConfig {
        threshold,
        ..IconConfig::default()
    };

    let report = IconConverter::new(config)?.convert(input_path, output_path)?;
    println!("{}", report.confirmation());

    Ok(())
}
