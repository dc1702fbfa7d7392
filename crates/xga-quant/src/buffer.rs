//! Owned RGB pixel buffer that dithering mutates in place.

use thiserror::Error;

use crate::color::Rgb;

/// Error returned when raw pixel data does not fit the stated dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Byte slice is not `width * height * 3` long
    #[error("pixel data is {len} bytes, expected {expected} for {width}x{height} RGB")]
    ByteLength {
        len: usize,
        expected: usize,
        width: usize,
        height: usize,
    },
    /// Pixel vector is not `width * height` long
    #[error("pixel count {len} does not match dimensions {width}x{height}")]
    PixelCount {
        len: usize,
        width: usize,
        height: usize,
    },
    /// `width * height` does not fit in `usize`
    #[error("image dimensions {width}x{height} overflow")]
    Overflow { width: usize, height: usize },
}

/// A row-major grid of RGB pixels.
///
/// The buffer is the working state of one quantization run: pixels are
/// read, error-adjusted and finally replaced by palette colors as the
/// ditherer scans it. After dithering every pixel holds a palette color.
///
/// # Example
///
/// ```
/// use xga_quant::{PixelBuffer, Rgb};
///
/// let buffer = PixelBuffer::from_rgb_bytes(&[255, 0, 0, 0, 0, 255], 2, 1).unwrap();
/// assert_eq!(buffer.get(1, 0), Rgb::new(0, 0, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wrap an existing pixel vector.
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Result<Self, BufferError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(BufferError::PixelCount {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a buffer from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self, BufferError> {
        let expected = pixel_count(width, height)?
            .checked_mul(3)
            .ok_or(BufferError::Overflow { width, height })?;
        if bytes.len() != expected {
            return Err(BufferError::ByteLength {
                len: bytes.len(),
                expected,
                width,
                height,
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// A buffer filled with a single color.
    pub fn filled(color: Rgb, width: usize, height: usize) -> Result<Self, BufferError> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            pixels: vec![color; count],
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.pixels[y * self.width + x] = color;
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Packed RGB bytes in row-major order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize, BufferError> {
    width
        .checked_mul(height)
        .ok_or(BufferError::Overflow { width, height })
}
