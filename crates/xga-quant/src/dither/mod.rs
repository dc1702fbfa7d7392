//! Error diffusion dithering.
//!
//! The ditherer walks a [`PixelBuffer`] in raster order (top row first,
//! left to right), replaces each pixel with its nearest palette color and
//! pushes the quantization error onto neighbors that have not been visited
//! yet. The output is one palette index per pixel.
//!
//! # Scan Order
//!
//! Every pixel's match depends on error written by earlier pixels, so the
//! scan is strictly sequential. Reordering the visit (serpentine rows,
//! tiling, threads) produces a different, equally deterministic image and
//! a different encoded stream.
//!
//! # Example
//!
//! ```
//! use xga_quant::{Dither, FloydSteinberg, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::xga();
//! let mut buffer = PixelBuffer::filled(Rgb::new(90, 90, 90), 4, 4).unwrap();
//! let indices = FloydSteinberg.dither(&mut buffer, &palette);
//! assert_eq!(indices.len(), 16);
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::buffer::PixelBuffer;
use crate::color::Lab;
use crate::palette::Palette;

/// Trait for error diffusion dithering algorithms.
pub trait Dither {
    /// Dither `buffer` in place and return its palette indices.
    ///
    /// On return every pixel of `buffer` holds the palette color of its
    /// index. The returned vector has `width * height` entries in
    /// row-major order, each in `0..16`.
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette) -> Vec<u8>;
}

/// Core error diffusion loop parameterized by kernel.
///
/// Per pixel: read the error-adjusted value, match it in Lab space, record
/// the index, replace the pixel with the palette color, then add
/// `error * weight` to each in-bounds kernel neighbor with saturation.
/// Targets outside the buffer are dropped; rows and columns never wrap.
pub(crate) fn dither_with_kernel(
    buffer: &mut PixelBuffer,
    palette: &Palette,
    kernel: &Kernel,
) -> Vec<u8> {
    let width = buffer.width();
    let height = buffer.height();
    let mut output = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let old = buffer.get(x, y);
            let (nearest_idx, _dist) = palette.find_nearest(Lab::from(old));
            output.push(nearest_idx as u8);

            let new = palette.color(nearest_idx);
            let error = old.error_to(new);
            buffer.set(x, y, new);

            if error == [0, 0, 0] {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                if nx < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                let adjusted = buffer
                    .get(nx, ny)
                    .add_weighted_error(error, kernel.fraction(weight));
                buffer.set(nx, ny, adjusted);
            }
        }
    }

    output
}
