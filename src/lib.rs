//! # 图标风格转换工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  调用方（main.rs / 外部代码）                              │
//! │       │  convert(input, output, threshold)                │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↓
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────────── AppError (统一错误类型)              │
//! │  │                                                       │
//! │  └─ icon_converter   图标风格转换                         │
//! │      ├─ loader       读取 + 签名/体积校验                  │
//! │      ├─ pipeline     解码 → 灰度 → 二值化 → RGBA           │
//! │      └─ writer       PNG 编码 + 写盘                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，二进制入口的返回类型 |
//! | [`icon_converter`] | 将任意位图转换为透明背景的黑白图标 PNG |

pub mod error;
pub mod icon_converter;

pub use icon_converter::{DEFAULT_THRESHOLD, convert};
