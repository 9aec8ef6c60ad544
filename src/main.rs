//! # 图标风格转换工具 — 命令行入口
//!
//! 本文件仅负责日志初始化与参数转交，转换逻辑见 `icon_converter` 模块。
//!
//! ```text
//! icon-converter <input> [output] [threshold] [--luma bt601|bt709]
//! ```

use std::path::PathBuf;

use icon_converter::error::AppError;
use icon_converter::icon_converter::{IconConfig, IconConverter, LumaWeights};
use icon_converter::DEFAULT_THRESHOLD;

const DEFAULT_OUTPUT: &str = "output_icon.png";

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    // 选项必须先于位置参数取出
    let luma = args
        .opt_value_from_fn("--luma", LumaWeights::parse)?
        .unwrap_or_default();
    let input: PathBuf = args.free_from_str()?;
    let output: PathBuf = args
        .opt_free_from_str()?
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let threshold: i32 = args.opt_free_from_str()?.unwrap_or(DEFAULT_THRESHOLD);

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(AppError::Args(format!("多余的参数：{:?}", remaining)));
    }

    log::info!(
        "setup: input={} output={} threshold={} luma={}",
        input.display(),
        output.display(),
        threshold,
        luma.as_str()
    );

    let converter = IconConverter::new(IconConfig {
        threshold,
        luma,
        ..IconConfig::default()
    })?;
    let report = converter.convert(&input, &output)?;

    println!("{}", report.confirmation());

    Ok(())
}
