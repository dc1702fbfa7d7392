//! QuantizedImage struct with RGB and encoded output methods.

use std::io::{self, Write};

use crate::encode::{self, DecodeError, Runs};
use crate::palette::Palette;

/// The canonical output of the quantizer.
///
/// Stores palette indices in row-major order, along with image dimensions
/// and the palette they index into.
///
/// # Example
///
/// ```
/// use xga_quant::{Palette, QuantizedImage};
///
/// let image = QuantizedImage::new(vec![15, 0, 0, 15], 2, 2, Palette::xga());
/// assert_eq!(image.encode(), "2x2;p2ap\n");
/// assert_eq!(&image.to_rgb()[..3], &[255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl QuantizedImage {
    /// Create a new `QuantizedImage` from palette indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Rebuild an image from an encoded stream.
    pub fn from_xga(input: &str, palette: Palette) -> Result<Self, DecodeError> {
        let stream = encode::decode(input)?;
        Ok(Self::new(
            stream.indices,
            stream.width,
            stream.height,
            palette,
        ))
    }

    /// Palette indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Runs of the flattened index sequence.
    pub fn runs(&self) -> Runs<'_> {
        Runs::new(&self.indices)
    }

    /// Expand to packed `[R, G, B, ...]` bytes using the palette colors.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }

    /// Encode to the run-length text format.
    pub fn encode(&self) -> String {
        encode::encode_to_string(&self.indices, self.width, self.height)
    }

    /// Stream the run-length text format to `writer`.
    ///
    /// Returns the number of runs written.
    pub fn write_xga<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        encode::write_xga(writer, &self.indices, self.width, self.height)
    }
}
