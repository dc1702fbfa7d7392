//! 8-bit RGB color type

/// An 8-bit per channel RGB color.
///
/// Used for input pixels, palette entries and the dithering work buffer.
/// There is no alpha channel and no color profile attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    ///
    /// # Example
    /// ```
    /// use xga_quant::Rgb;
    /// let white = Rgb::from_bytes([255, 255, 255]);
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Per-channel signed difference `self - other`.
    ///
    /// This is the quantization error when `self` is the pixel value and
    /// `other` the palette color it was replaced with.
    #[inline]
    pub fn error_to(self, other: Rgb) -> [i16; 3] {
        [
            self.r as i16 - other.r as i16,
            self.g as i16 - other.g as i16,
            self.b as i16 - other.b as i16,
        ]
    }

    /// Add a weighted error to every channel, saturating at 0 and 255.
    ///
    /// The product `error * weight` is formed in `f32` and added to the
    /// channel before [`clamp_channel`] converts back to a byte.
    #[inline]
    pub fn add_weighted_error(self, error: [i16; 3], weight: f32) -> Self {
        Self {
            r: clamp_channel(self.r as f32 + error[0] as f32 * weight),
            g: clamp_channel(self.g as f32 + error[1] as f32 * weight),
            b: clamp_channel(self.b as f32 + error[2] as f32 * weight),
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

/// Convert an error-adjusted channel value back to a byte.
///
/// Truncates toward zero, then saturates to `0..=255`. Truncation is the
/// pinned rounding rule for diffused error; changing it changes every
/// dithered image.
///
/// # Example
/// ```
/// use xga_quant::clamp_channel;
/// assert_eq!(clamp_channel(92.9), 92);
/// assert_eq!(clamp_channel(-3.5), 0);
/// assert_eq!(clamp_channel(300.0), 255);
/// ```
#[inline]
pub fn clamp_channel(value: f32) -> u8 {
    value.trunc().clamp(0.0, 255.0) as u8
}
