//! Error diffusion kernel definitions.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` relative to the current pixel plus an
/// integer weight. A neighbor receives `error * weight / divisor`. Offsets
/// must only reach pixels the raster scan has not visited yet: `dy > 0`, or
/// `dy == 0` with `dx > 0`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries, applied in order.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Weight of one entry as a fraction of the full error.
    #[inline]
    pub fn fraction(&self, weight: u8) -> f32 {
        weight as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagates_all_error() {
        let total: u32 = FLOYD_STEINBERG.entries.iter().map(|e| e.2 as u32).sum();
        assert_eq!(total, FLOYD_STEINBERG.divisor as u32);
    }

    #[test]
    fn test_floyd_steinberg_only_reaches_unvisited_pixels() {
        for &(dx, dy, _) in FLOYD_STEINBERG.entries {
            assert!(dy > 0 || (dy == 0 && dx > 0), "({dx}, {dy}) is behind the scan");
        }
    }

    #[test]
    fn test_fractions_are_exact() {
        assert_eq!(FLOYD_STEINBERG.fraction(7), 0.4375);
        assert_eq!(FLOYD_STEINBERG.fraction(3), 0.1875);
        assert_eq!(FLOYD_STEINBERG.fraction(5), 0.3125);
        assert_eq!(FLOYD_STEINBERG.fraction(1), 0.0625);
    }
}
