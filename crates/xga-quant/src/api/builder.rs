//! Quantizer -- the primary entry point for the crate.
//!
//! [`Quantizer`] owns a [`Palette`] and runs the dithering pipeline over
//! pixel buffers, producing [`QuantizedImage`]s.

use crate::buffer::PixelBuffer;
use crate::dither::{Dither, FloydSteinberg};
use crate::output::QuantizedImage;
use crate::palette::Palette;

use super::error::XgaError;

/// Perceptual 16-color quantizer with Floyd-Steinberg dithering.
///
/// - The palette is built once, at construction, and never changes.
/// - All quantize methods take `&self`, so one quantizer can process any
///   number of images, and a shared reference can be used from several
///   threads, each with its own buffer.
///
/// # Example
///
/// ```
/// use xga_quant::{PixelBuffer, Quantizer, Rgb};
///
/// let quantizer = Quantizer::default();
/// let buffer = PixelBuffer::new(
///     vec![
///         Rgb::new(255, 255, 255),
///         Rgb::new(0, 0, 0),
///         Rgb::new(0, 0, 0),
///         Rgb::new(255, 255, 255),
///     ],
///     2,
///     2,
/// )
/// .unwrap();
///
/// assert_eq!(quantizer.quantize(buffer).encode(), "2x2;p2ap\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Quantizer {
    palette: Palette,
}

impl Quantizer {
    /// Create a quantizer for the given palette.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Quantize an owned buffer, consuming it.
    pub fn quantize(&self, mut buffer: PixelBuffer) -> QuantizedImage {
        self.quantize_in_place(&mut buffer)
    }

    /// Quantize a buffer, leaving every pixel replaced by its palette color.
    pub fn quantize_in_place(&self, buffer: &mut PixelBuffer) -> QuantizedImage {
        let indices = FloydSteinberg.dither(buffer, &self.palette);
        let image = QuantizedImage::new(
            indices,
            buffer.width(),
            buffer.height(),
            self.palette.clone(),
        );
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            runs = image.runs().count(),
            "Quantized image"
        );
        image
    }

    /// Quantize packed `[R, G, B, ...]` bytes.
    pub fn quantize_rgb(
        &self,
        bytes: &[u8],
        width: usize,
        height: usize,
    ) -> Result<QuantizedImage, XgaError> {
        let buffer = PixelBuffer::from_rgb_bytes(bytes, width, height)?;
        Ok(self.quantize(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::palette::XGA_COLORS;

    #[test]
    fn test_quantizer_is_reusable() {
        let quantizer = Quantizer::new(Palette::xga());
        let a = quantizer.quantize_rgb(&[255, 0, 0, 0, 255, 0], 2, 1).unwrap();
        let b = quantizer.quantize_rgb(&[0, 0, 255], 1, 1).unwrap();
        assert_eq!(a.indices(), &[9, 10]);
        assert_eq!(b.indices(), &[12]);
    }

    #[test]
    fn test_quantize_in_place_rewrites_buffer() {
        let quantizer = Quantizer::default();
        let mut buffer = PixelBuffer::filled(Rgb::new(100, 100, 100), 3, 3).unwrap();
        let image = quantizer.quantize_in_place(&mut buffer);
        assert_eq!(buffer.to_rgb_bytes(), image.to_rgb());
    }

    #[test]
    fn test_quantize_rgb_rejects_bad_length() {
        let err = Quantizer::default().quantize_rgb(&[1, 2, 3, 4], 2, 1).unwrap_err();
        assert!(matches!(err, XgaError::Buffer(_)));
    }

    #[test]
    fn test_custom_palette_is_used() {
        let mut colors = XGA_COLORS;
        colors[0] = Rgb::new(10, 10, 10);
        let quantizer = Quantizer::new(Palette::new(colors));
        let image = quantizer.quantize_rgb(&[10, 10, 10], 1, 1).unwrap();
        assert_eq!(image.indices(), &[0]);
        assert_eq!(image.to_rgb(), vec![10, 10, 10]);
    }

    #[test]
    fn test_quantizer_shared_across_threads() {
        let quantizer = Quantizer::default();
        let bytes: Vec<u8> = (0..48u8).map(|v| v.wrapping_mul(37)).collect();
        let expected = quantizer.quantize_rgb(&bytes, 4, 4).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| quantizer.quantize_rgb(&bytes, 4, 4).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
