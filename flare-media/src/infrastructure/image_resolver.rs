//! 图片尺寸探测
//!
//! 使用 image crate 按内容猜测格式，只解析头部获取宽高，不解码像素。

use std::io::{BufReader, Read, Seek, SeekFrom};

use image::ImageReader;

use crate::domain::models::ImageSize;
use crate::error::{ProbeError, ProbeResult};

/// 探测图片格式与宽高，完成后重新定位到起始位置
pub fn resolve_image<R: Read + Seek + ?Sized>(reader: &mut R) -> ProbeResult<ImageSize> {
    reader.seek(SeekFrom::Start(0))?;
    let result = resolve_from_start(&mut *reader);
    reader.seek(SeekFrom::Start(0))?;
    result
}

fn resolve_from_start<R: Read + Seek + ?Sized>(reader: &mut R) -> ProbeResult<ImageSize> {
    let image_reader = ImageReader::new(BufReader::new(reader)).with_guessed_format()?;
    let format = image_reader.format().ok_or(ProbeError::UnknownFormat)?;
    let (width, height) = image_reader.into_dimensions()?;

    Ok(ImageSize {
        format,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        RgbImage::new(width, height)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_resolve_png_dimensions() {
        let mut cursor = Cursor::new(png_bytes(64, 48));
        let size = resolve_image(&mut cursor).unwrap();
        assert_eq!(size.format, ImageFormat::Png);
        assert_eq!((size.width, size.height), (64, 48));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_resolve_garbage_fails_and_rewinds() {
        let mut cursor = Cursor::new(b"definitely not an image".to_vec());
        cursor.set_position(3);
        assert!(resolve_image(&mut cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_resolve_empty_fails() {
        let mut cursor = Cursor::new(Vec::new());
        assert!(resolve_image(&mut cursor).is_err());
    }
}
