//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// Distributes 100% of each pixel's quantization error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Rows are always scanned left to right.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette) -> Vec<u8> {
        dither_with_kernel(buffer, palette, &FLOYD_STEINBERG)
    }
}
