//! Run-length text encoding of palette index streams.
//!
//! # Format
//!
//! ```text
//! output      := dimensions ";" run* "\n"
//! dimensions  := integer "x" integer
//! run         := symbol | integer symbol
//! symbol      := 'a'..='p'   (palette index 0..=15)
//! ```
//!
//! A run of length 1 is written as the bare symbol; longer runs are written
//! as the decimal count followed by the symbol. Runs are formed over the
//! flattened raster-order sequence, so a run may continue from the end of
//! one row into the start of the next. The sum of all run counts equals
//! `width * height`; only a zero-size image has no runs.
//!
//! ```
//! use xga_quant::encode::encode_to_string;
//!
//! assert_eq!(encode_to_string(&[15, 0, 0, 15], 2, 2), "2x2;p2ap\n");
//! ```

mod decode;
mod error;
mod rle;

pub use decode::{decode, DecodedStream};
pub use error::DecodeError;
pub use rle::{encode_to_string, write_xga, Run, Runs};

/// Symbol for palette index 0.
const FIRST_SYMBOL: u8 = b'a';

/// Map a palette index (0..16) to its symbol character.
///
/// Panics in debug builds if `index >= 16`.
#[inline]
pub fn symbol_for(index: u8) -> char {
    debug_assert!(index < 16, "palette index {index} out of range");
    (FIRST_SYMBOL + index) as char
}

/// Map a symbol character back to its palette index.
///
/// Returns `None` for anything outside `'a'..='p'`.
#[inline]
pub fn index_for(symbol: char) -> Option<u8> {
    match symbol {
        'a'..='p' => Some(symbol as u8 - FIRST_SYMBOL),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_mapping_endpoints() {
        assert_eq!(symbol_for(0), 'a');
        assert_eq!(symbol_for(15), 'p');
        assert_eq!(index_for('a'), Some(0));
        assert_eq!(index_for('p'), Some(15));
    }

    #[test]
    fn test_symbol_mapping_is_injective() {
        let symbols: std::collections::HashSet<char> = (0..16).map(symbol_for).collect();
        assert_eq!(symbols.len(), 16);
        for i in 0..16u8 {
            assert_eq!(index_for(symbol_for(i)), Some(i));
        }
    }

    #[test]
    fn test_index_for_rejects_other_characters() {
        for c in ['q', 'z', 'A', 'P', '0', ';', '\n'] {
            assert_eq!(index_for(c), None, "{c:?}");
        }
    }
}
