//! xga16 - convert images to the 16-color run-length XGA text format.
//!
//! This library exposes the application modules for integration testing;
//! the quantizer itself lives in the `xga-quant` crate.

pub mod convert;
pub mod error;
pub mod loader;
pub mod preview;

pub use convert::{ConvertJob, ConvertSummary};
pub use error::ConvertError;
