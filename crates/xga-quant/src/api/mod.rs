//! Public API for the xga-quant crate.
//!
//! This module provides the high-level API: [`Quantizer`] and the
//! [`XgaError`] unified error type.

mod builder;
mod error;

pub use builder::Quantizer;
pub use error::XgaError;
