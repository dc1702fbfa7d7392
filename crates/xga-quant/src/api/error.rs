//! Unified error type for the xga-quant public API.

use thiserror::Error;

use crate::buffer::BufferError;
use crate::encode::DecodeError;

/// Unified error type for the xga-quant public API.
///
/// Quantization itself cannot fail; errors come from building the input
/// buffer or from parsing an encoded stream.
///
/// # Example
///
/// ```
/// use xga_quant::{Quantizer, XgaError};
///
/// fn encode(bytes: &[u8], width: usize, height: usize) -> Result<String, XgaError> {
///     Ok(Quantizer::default().quantize_rgb(bytes, width, height)?.encode())
/// }
///
/// assert_eq!(encode(&[255, 255, 255], 1, 1).unwrap(), "1x1;p\n");
/// assert!(encode(&[0, 0], 1, 1).is_err());
/// ```
#[derive(Debug, Error)]
pub enum XgaError {
    /// Pixel data does not match the stated dimensions
    #[error("pixel buffer error: {0}")]
    Buffer(#[from] BufferError),
    /// Malformed encoded stream
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
