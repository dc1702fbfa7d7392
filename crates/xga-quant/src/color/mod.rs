//! Color types and conversion utilities
//!
//! Two color representations are used by the quantizer:
//!
//! - [`Rgb`]: 8-bit RGB, the form pixels are loaded, dithered and written in.
//! - [`Lab`]: CIE L\*a\*b\*, the perceptual space palette matching runs in.
//!
//! # Example
//!
//! ```
//! use xga_quant::{Lab, Rgb};
//!
//! let orange = Rgb::new(255, 128, 0);
//! let lab = Lab::from(orange);
//! assert!(lab.l > 50.0);
//! ```

mod lab;
mod rgb;

pub use lab::Lab;
pub use rgb::{clamp_channel, Rgb};
