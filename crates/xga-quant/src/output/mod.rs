//! Output types for the quantization pipeline.
//!
//! [`QuantizedImage`] stores one palette index per pixel with its dimensions
//! and palette. It can be expanded back to RGB or serialized to the
//! run-length text format (see [`crate::encode`]).

mod quantized_image;

pub use quantized_image::QuantizedImage;
