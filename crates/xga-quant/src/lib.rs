#![allow(clippy::module_inception)]

//! xga-quant: perceptual 16-color quantization with run-length text output
//!
//! This library reduces true-color images to the fixed 16-color XGA palette
//! using perceptual color matching and Floyd-Steinberg error diffusion, and
//! serializes the resulting index stream as compact run-length text.
//!
//! # Quick Start
//!
//! The [`Quantizer`] is the primary entry point:
//!
//! ```
//! use xga_quant::Quantizer;
//!
//! // 2x1 image: pure black, pure lime
//! let rgb = [0, 0, 0, 0, 255, 0];
//! let image = Quantizer::default().quantize_rgb(&rgb, 2, 1).unwrap();
//!
//! assert_eq!(image.indices(), &[0, 10]);
//! assert_eq!(image.encode(), "2x1;ak\n");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGB8 pixels             (from the image decoder)
//!     |
//!     v
//! PixelBuffer             (owned, mutated in place)
//!     |
//! ╔═══════════════════════════════════════════╗
//! ║  Dither loop, raster order                ║
//! ║                                           ║
//! ║  pixel + diffused error   (Rgb)           ║
//! ║      |                                    ║
//! ║      +---> Lab  (perceptual matching)     ║
//! ║      |       |                            ║
//! ║      |  find_nearest(): squared distance, ║
//! ║      |    lowest index wins ties          ║
//! ║      |       |                            ║
//! ║      |  palette index (output)            ║
//! ║      v                                    ║
//! ║  error = pixel - palette[idx]   (Rgb)     ║
//! ║      |                                    ║
//! ║      v                                    ║
//! ║  7/16, 3/16, 5/16, 1/16 to neighbors,     ║
//! ║  truncated and clamped to 0..=255         ║
//! ╚═══════════════════════════════════════════╝
//!     |
//!     v
//! QuantizedImage          (indices + dimensions + palette)
//!     |
//!     v
//! "<w>x<h>;" runs "\n"    (run-length text, see [`encode`])
//! ```
//!
//! # Color Science
//!
//! Matching uses CIE L\*a\*b\* with a D65 white point. The 8-bit channels
//! are normalized and fed straight into the sRGB→XYZ matrix without a
//! gamma decode, and error diffusion works on the 8-bit values directly.
//! Both choices are part of the output format's identity: an encoder that
//! decodes gamma first produces different streams for the same image.
//!
//! # Determinism
//!
//! Quantization is a pure function of the pixels and the palette. There is
//! no randomness, no caching, and the scan is strictly sequential, so
//! identical input always produces a byte-identical stream.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod encode;
pub mod output;
pub mod palette;


pub use api::{Quantizer, XgaError};
pub use buffer::{BufferError, PixelBuffer};
pub use color::{clamp_channel, Lab, Rgb};
pub use dither::{Dither, FloydSteinberg, Kernel};
pub use encode::{DecodeError, Run};
pub use output::QuantizedImage;
pub use palette::{Palette, PALETTE_SIZE, XGA_COLORS};
