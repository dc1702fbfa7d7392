//! Image decoding into the quantizer's pixel buffer.

use std::path::Path;

use xga_quant::PixelBuffer;

use crate::error::ConvertError;

/// Decode an image file into an RGB pixel buffer.
///
/// Any format the `image` crate recognises is accepted. Alpha is dropped
/// and other color types are converted to 8-bit RGB.
pub fn load_rgb(path: &Path) -> Result<PixelBuffer, ConvertError> {
    let decoded = image::open(path).map_err(|source| ConvertError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    tracing::debug!(path = %path.display(), width, height, "Loaded image");

    Ok(PixelBuffer::from_rgb_bytes(rgb.as_raw(), width, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rgb(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, ConvertError::Load { .. }));
    }

    #[test]
    fn test_garbage_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_rgb(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Load { .. }));
    }

    #[test]
    fn test_rgba_png_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        let mut file = std::fs::File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(&mut file, 2, 1);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&[255, 0, 0, 0, 0, 0, 255, 128])
            .unwrap();
        writer.finish().unwrap();
        drop(file);

        let buffer = load_rgb(&path).unwrap();
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 1);
        assert_eq!(buffer.to_rgb_bytes(), vec![255, 0, 0, 0, 0, 255]);
    }
}
