//! Palette struct with precomputed Lab coordinates and nearest-color matching.

use crate::color::{Lab, Rgb};

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 16;

/// The standard 16-color XGA palette, in index order.
///
/// Index 0 is black and index 15 is white; the encoded symbols `'a'..='p'`
/// follow this order.
pub const XGA_COLORS: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0, 0, 0),       // a: black
    Rgb::new(128, 0, 0),     // b: maroon
    Rgb::new(0, 128, 0),     // c: green
    Rgb::new(128, 128, 0),   // d: olive
    Rgb::new(0, 0, 128),     // e: navy
    Rgb::new(128, 0, 128),   // f: purple
    Rgb::new(0, 128, 128),   // g: teal
    Rgb::new(192, 192, 192), // h: silver
    Rgb::new(128, 128, 128), // i: grey
    Rgb::new(255, 0, 0),     // j: red
    Rgb::new(0, 255, 0),     // k: lime
    Rgb::new(255, 255, 0),   // l: yellow
    Rgb::new(0, 0, 255),     // m: blue
    Rgb::new(255, 0, 255),   // n: fuchsia
    Rgb::new(0, 255, 255),   // o: aqua
    Rgb::new(255, 255, 255), // p: white
];

/// An immutable 16-entry color palette.
///
/// Each entry's [`Lab`] coordinate is computed once at construction with
/// the same conversion used for pixels, so an input pixel equal to a
/// palette color always matches that entry at distance zero.
///
/// A `Palette` holds no interior mutability and can be shared by reference
/// between independent quantizer runs on different threads.
///
/// # Example
///
/// ```
/// use xga_quant::{Lab, Palette, Rgb};
///
/// let palette = Palette::xga();
/// let (idx, dist) = palette.find_nearest(Lab::from(Rgb::new(255, 0, 0)));
/// assert_eq!(idx, 9);
/// assert_eq!(dist, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    rgb: [Rgb; PALETTE_SIZE],
    lab: [Lab; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from 16 colors, in index order.
    ///
    /// Duplicate colors are allowed; matching resolves ties to the lowest
    /// index, so a later duplicate is never selected.
    pub fn new(colors: [Rgb; PALETTE_SIZE]) -> Self {
        let lab = colors.map(Lab::from);
        tracing::debug!(entries = PALETTE_SIZE, "Built palette");
        Self { rgb: colors, lab }
    }

    /// The standard XGA palette ([`XGA_COLORS`]).
    pub fn xga() -> Self {
        Self::new(XGA_COLORS)
    }

    /// Returns the number of colors in the palette (always 16).
    #[inline]
    pub fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// Always `false`; a palette has a fixed, non-zero size.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the RGB color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.rgb[idx]
    }

    /// Get the precomputed Lab coordinate at the given index.
    #[inline]
    pub fn lab(&self, idx: usize) -> Lab {
        self.lab[idx]
    }

    /// All palette colors, in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.rgb
    }

    /// Find the nearest palette entry to the given Lab color.
    ///
    /// Returns `(index, distance)` where `distance` is the squared
    /// Euclidean distance in Lab space. When several entries share the
    /// minimum distance the lowest index wins.
    #[inline]
    pub fn find_nearest(&self, color: Lab) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = f64::MAX;

        for (i, &entry) in self.lab.iter().enumerate() {
            let dist = color.distance_squared(entry);
            // Strict comparison keeps the first of equal candidates.
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Convert an RGB color and find its nearest palette entry.
    #[inline]
    pub fn match_rgb(&self, color: Rgb) -> usize {
        self.find_nearest(Lab::from(color)).0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::xga()
    }
}
