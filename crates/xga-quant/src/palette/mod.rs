//! The fixed 16-color palette and nearest-color matching.

mod palette;

pub use palette::{Palette, PALETTE_SIZE, XGA_COLORS};
