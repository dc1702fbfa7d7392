//! CIE L\*a\*b\* perceptual color space
//!
//! Palette matching runs in L\*a\*b\* because Euclidean distance there tracks
//! perceived color difference far better than distance in RGB.
//!
//! The conversion treats normalized 8-bit channels as linear intensities
//! (no sRGB gamma decode) before the XYZ transform. Every quantized stream
//! depends on this exact formula, so it is kept as is.

use super::rgb::Rgb;

/// D65 reference white, X component.
const WHITE_X: f64 = 0.95047;
/// D65 reference white, Y component.
const WHITE_Y: f64 = 1.0;
/// D65 reference white, Z component.
const WHITE_Z: f64 = 1.08883;

/// Below this the companding curve switches to its linear segment.
const EPSILON: f64 = 0.008856;

/// A color in CIE L\*a\*b\* space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 100.0 = white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are always derived from an [`Rgb`]; they are never stored in the
/// encoded output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance in Lab space.
    ///
    /// Only the ordering of distances matters for matching, so the square
    /// root is never taken.
    ///
    /// # Example
    ///
    /// ```
    /// use xga_quant::Lab;
    ///
    /// let white = Lab::new(100.0, 0.0, 0.0);
    /// let black = Lab::new(0.0, 0.0, 0.0);
    /// assert_eq!(white.distance_squared(black), 10_000.0);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

/// CIE companding function `f(t)`.
#[inline]
fn compand(v: f64) -> f64 {
    if v > EPSILON {
        v.powf(1.0 / 3.0)
    } else {
        7.787 * v + 16.0 / 116.0
    }
}

impl From<Rgb> for Lab {
    /// Convert an 8-bit RGB color to L\*a\*b\*.
    ///
    /// Pure and deterministic: the same RGB triple always yields a
    /// bit-identical result, for palette entries and pixels alike.
    fn from(color: Rgb) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
        let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
        let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

        let fx = compand(x / WHITE_X);
        let fy = compand(y / WHITE_Y);
        let fz = compand(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}
