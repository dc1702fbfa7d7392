//! Indexed PNG preview of a quantized image.
//!
//! Writes the 16 palette colors as a PLTE chunk and the pixels as packed
//! 4-bit indices, so the preview is an exact picture of the encoded stream.

use std::io::Cursor;

use xga_quant::QuantizedImage;

use crate::error::ConvertError;

/// Bits per pixel for a 16-entry palette.
const INDEX_BITS: u8 = 4;

/// Encode a quantized image as a 4-bit indexed PNG.
pub fn encode_preview_png(image: &QuantizedImage) -> Result<Vec<u8>, ConvertError> {
    let unsupported = ConvertError::UnsupportedDimensions {
        width: image.width(),
        height: image.height(),
    };
    if image.width() == 0 || image.height() == 0 {
        return Err(unsupported);
    }
    let (Ok(width), Ok(height)) = (u32::try_from(image.width()), u32::try_from(image.height()))
    else {
        return Err(unsupported);
    };

    let plte: Vec<u8> = image
        .palette()
        .colors()
        .iter()
        .flat_map(|c| c.to_bytes())
        .collect();
    let packed = pack_nbits(image.indices(), width, INDEX_BITS);

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Four);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack 8-bit indices into `bits`-wide samples, MSB first, rows padded to
/// whole bytes.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
