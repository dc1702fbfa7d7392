//! Parsing of encoded streams back into index sequences.

use super::error::DecodeError;
use super::index_for;

/// A parsed stream: dimensions and the expanded raster-order indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStream {
    pub width: usize,
    pub height: usize,
    pub indices: Vec<u8>,
}

/// Parse an encoded stream.
///
/// Accepts exactly what the encoder produces: a `<width>x<height>;` header,
/// runs, and a single trailing newline. Explicit counts of 0 or 1 are
/// rejected, as is any stream whose runs do not cover `width * height`
/// pixels.
///
/// # Example
///
/// ```
/// use xga_quant::encode::decode;
///
/// let stream = decode("2x2;p2ap\n").unwrap();
/// assert_eq!(stream.indices, vec![15, 0, 0, 15]);
/// ```
pub fn decode(input: &str) -> Result<DecodedStream, DecodeError> {
    let header_end = input.find(';').ok_or(DecodeError::MissingHeader)?;
    let (width, height) = parse_header(&input[..header_end])?;
    let expected = width
        .checked_mul(height)
        .ok_or_else(|| DecodeError::InvalidHeader(input[..header_end].to_string()))?;

    let body_start = header_end + 1;
    let body = &input[body_start..];
    let newline = body.find('\n').ok_or(DecodeError::MissingNewline)?;
    if newline + 1 != body.len() {
        return Err(DecodeError::TrailingData {
            offset: body_start + newline + 1,
        });
    }

    let mut indices = Vec::with_capacity(expected);
    let mut pending: Option<(usize, usize)> = None; // (count, offset)

    for (pos, ch) in body[..newline].char_indices() {
        let offset = body_start + pos;
        if let Some(digit) = ch.to_digit(10) {
            let (count, start) = pending.unwrap_or((0, offset));
            let count = count
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit as usize))
                .ok_or(DecodeError::CountOverflow { offset: start })?;
            pending = Some((count, start));
            continue;
        }

        let index = index_for(ch).ok_or(DecodeError::InvalidSymbol { symbol: ch, offset })?;
        let count = match pending.take() {
            Some((count, start)) if count < 2 => {
                return Err(DecodeError::InvalidCount {
                    count,
                    offset: start,
                })
            }
            Some((count, _)) => count,
            None => 1,
        };

        // Bail out before expanding a run past the declared size.
        let actual = indices.len().saturating_add(count);
        if actual > expected {
            return Err(DecodeError::LengthMismatch { expected, actual });
        }
        indices.resize(actual, index);
    }

    if let Some((_, offset)) = pending {
        return Err(DecodeError::DanglingCount { offset });
    }
    if indices.len() != expected {
        return Err(DecodeError::LengthMismatch {
            expected,
            actual: indices.len(),
        });
    }

    Ok(DecodedStream {
        width,
        height,
        indices,
    })
}

fn parse_header(header: &str) -> Result<(usize, usize), DecodeError> {
    let (w, h) = header
        .split_once('x')
        .ok_or_else(|| DecodeError::InvalidHeader(header.to_string()))?;
    Ok((w.parse()?, h.parse()?))
}
