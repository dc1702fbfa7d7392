//! Error type for parsing encoded streams.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned by [`decode`](super::decode) for a malformed stream.
///
/// Offsets are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No `;` terminating the dimensions header
    #[error("missing dimensions header")]
    MissingHeader,

    /// Header is not `<width>x<height>`
    #[error("invalid dimensions header {0:?}")]
    InvalidHeader(String),

    /// Width or height is not a valid integer
    #[error("invalid dimension: {0}")]
    InvalidDimension(#[from] ParseIntError),

    /// Character that is neither a digit nor a symbol
    #[error("invalid symbol {symbol:?} at offset {offset}")]
    InvalidSymbol { symbol: char, offset: usize },

    /// Explicit count below 2; single pixels use the bare symbol
    #[error("invalid run count {count} at offset {offset}")]
    InvalidCount { count: usize, offset: usize },

    /// Count does not fit in `usize`
    #[error("run count overflow at offset {offset}")]
    CountOverflow { offset: usize },

    /// Count at the end of the stream with no symbol after it
    #[error("run count at offset {offset} has no symbol")]
    DanglingCount { offset: usize },

    /// Stream does not end with a newline
    #[error("stream is not terminated by a newline")]
    MissingNewline,

    /// Data after the terminating newline
    #[error("unexpected data after newline at offset {offset}")]
    TrailingData { offset: usize },

    /// Run counts do not add up to `width * height`
    #[error("runs cover {actual} pixels, header declares {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}
