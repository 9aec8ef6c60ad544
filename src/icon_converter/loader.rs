//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验，尽快失败，减少不必要内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! - 一次 metadata 查询区分缺失 / 无权限 / 目录 / 超限，再一次性读取（读完即释放句柄）。
//! - 通过文件签名拒绝已知的非图片内容，再交给解码阶段。

use std::io::ErrorKind;
use std::path::Path;

use super::source::RawImageData;
use super::{IconConfig, IconError, IconConverter};

impl IconConverter {
    /// 读取输入文件的全部字节。
    ///
    /// 缺失、不可读、是目录或超出 `max_file_size` 时均归入解码类错误。
    pub(super) fn load_from_file(
        &self,
        path: &Path,
        config: &IconConfig,
    ) -> Result<RawImageData, IconError> {
        log::info!("📁 读取输入图片 - {}", path.display());

        let unreadable = |e: std::io::Error| match e.kind() {
            ErrorKind::NotFound => IconError::FileSystem(format!("输入不存在：{}", path.display())),
            ErrorKind::PermissionDenied => {
                IconError::FileSystem(format!("无权读取输入：{}", path.display()))
            }
            _ => IconError::FileSystem(format!("读取输入 {} 失败：{}", path.display(), e)),
        };

        let metadata = std::fs::metadata(path).map_err(unreadable)?;
        if metadata.is_dir() {
            return Err(IconError::FileSystem(format!(
                "输入是目录而非图片：{}",
                path.display()
            )));
        }
        if metadata.len() > config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "输入 {} 字节，超出上限 {} 字节",
                metadata.len(),
                config.max_file_size
            )));
        }

        let bytes = std::fs::read(path).map_err(unreadable)?;
        Self::validate_image_signature(&bytes)?;
        log::debug!("📦 已读取 {} 字节", bytes.len());

        Ok(RawImageData {
            bytes,
            source_hint: path.display().to_string(),
        })
    }

    /// 通过文件头魔数拒绝明确不是图片的内容。
    ///
    /// 无法识别的签名（如 TGA）放行，交由解码阶段的格式猜测判定。
    pub(super) fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidFormat("图片内容为空".to_string()));
        }

        match infer::get(bytes) {
            Some(kind) if kind.matcher_type() != infer::MatcherType::Image => {
                Err(IconError::InvalidFormat(format!(
                    "文件签名不是图片类型：{}",
                    kind.mime_type()
                )))
            }
            _ => Ok(()),
        }
    }
}
