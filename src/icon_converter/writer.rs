//! # PNG 写盘模块
//!
//! ## 设计思路
//!
//! 先在内存中完成 PNG 编码，再一次性写入目标路径，编码失败与写盘失败分别归类。
//! 输出格式固定为 PNG，与目标文件扩展名无关；目标目录必须已存在，这里不会创建目录。
//! 写盘中途失败时不清理残留文件。

use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use super::{IconConverter, IconError};

impl IconConverter {
    /// 将 RGBA 图像编码为 PNG 并写入 `path`，返回写入字节数。
    pub(super) fn write_png(image: &RgbaImage, path: &Path) -> Result<usize, IconError> {
        let mut cursor = Cursor::new(Vec::new());
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;
        let bytes = cursor.into_inner();

        std::fs::write(path, &bytes).map_err(|e| {
            IconError::Write(format!("无法写入文件 '{}'：{}", path.display(), e))
        })?;

        log::debug!("💾 PNG 已写入 - 路径: {} 大小: {}KB", path.display(), bytes.len() / 1024);

        Ok(bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_converter::pipeline::{OPAQUE_PIXEL, TRANSPARENT_PIXEL};

    #[test]
    fn writes_png_even_with_other_extension() {
        let path = std::env::temp_dir().join(format!(
            "icon-converter-writer-{}.jpg",
            std::process::id()
        ));
        let image = RgbaImage::from_fn(3, 3, |x, _| {
            if x == 1 { OPAQUE_PIXEL } else { TRANSPARENT_PIXEL }
        });

        let written = IconConverter::write_png(&image, &path).expect("write should succeed");
        let bytes = std::fs::read(&path).expect("read back failed");
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, bytes.len());
        assert_eq!(image::guess_format(&bytes).ok(), Some(ImageFormat::Png));

        let decoded = image::load_from_memory(&bytes).expect("decode failed").to_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn missing_directory_is_write_error() {
        let path = std::env::temp_dir()
            .join("icon-converter-writer-no-such-dir")
            .join("nested")
            .join("out.png");
        let image = RgbaImage::from_pixel(1, 1, OPAQUE_PIXEL);

        let result = IconConverter::write_png(&image, &path);
        assert!(matches!(result, Err(IconError::Write(_))));
        assert!(!path.exists());
    }
}
