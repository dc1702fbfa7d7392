use std::path::PathBuf;

use thiserror::Error;
use xga_quant::BufferError;

/// Failure of one file conversion.
///
/// Load and sink failures are separate variants so callers can tell an
/// unreadable input from an unwritable output.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to load image {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to open output file {}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("Pixel buffer error: {0}")]
    Buffer(#[from] BufferError),
}
