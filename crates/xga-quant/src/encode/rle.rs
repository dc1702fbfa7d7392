//! Run formation and stream writing.

use std::fmt;
use std::io::{self, Write};

use super::symbol_for;

/// A maximal run of one palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Palette index (0..16)
    pub index: u8,
    /// Number of consecutive pixels, at least 1
    pub count: usize,
}

impl Run {
    /// The symbol character of this run's index.
    #[inline]
    pub fn symbol(&self) -> char {
        symbol_for(self.index)
    }
}

impl fmt::Display for Run {
    /// Bare symbol for a single pixel, `<count><symbol>` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "{}{}", self.count, self.symbol())
        } else {
            write!(f, "{}", self.symbol())
        }
    }
}

/// Lazy iterator over the runs of an index sequence.
///
/// Collapses maximal stretches of equal indices without allocating.
///
/// # Example
///
/// ```
/// use xga_quant::encode::{Run, Runs};
///
/// let runs: Vec<Run> = Runs::new(&[3, 3, 3, 0]).collect();
/// assert_eq!(runs, vec![Run { index: 3, count: 3 }, Run { index: 0, count: 1 }]);
/// ```
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    rest: &'a [u8],
}

impl<'a> Runs<'a> {
    pub fn new(indices: &'a [u8]) -> Self {
        Self { rest: indices }
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let (&index, _) = self.rest.split_first()?;
        let count = self.rest.iter().take_while(|&&i| i == index).count();
        self.rest = &self.rest[count..];
        Some(Run { index, count })
    }
}

/// Stream an encoded image to `writer`.
///
/// Writes the `<width>x<height>;` header, every run of `indices` in order,
/// and the trailing newline. The caller owns buffering; wrap files in a
/// `BufWriter`.
///
/// Returns the number of runs written.
pub fn write_xga<W: Write>(
    writer: &mut W,
    indices: &[u8],
    width: usize,
    height: usize,
) -> io::Result<usize> {
    debug_assert_eq!(indices.len(), width * height);

    write!(writer, "{}x{};", width, height)?;
    let mut runs = 0;
    for run in Runs::new(indices) {
        write!(writer, "{}", run)?;
        runs += 1;
    }
    writer.write_all(b"\n")?;
    Ok(runs)
}

/// Encode an image into an owned string.
pub fn encode_to_string(indices: &[u8], width: usize, height: usize) -> String {
    let mut out = format!("{}x{};", width, height);
    for run in Runs::new(indices) {
        out.push_str(&run.to_string());
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_run_display() {
        assert_eq!(Run { index: 0, count: 1 }.to_string(), "a");
        assert_eq!(Run { index: 15, count: 2 }.to_string(), "2p");
        assert_eq!(Run { index: 7, count: 1234 }.to_string(), "1234h");
    }

    #[test]
    fn test_runs_collapse_maximal_sequences() {
        let runs: Vec<Run> = Runs::new(&[1, 1, 2, 2, 2, 1, 0]).collect();
        assert_eq!(
            runs,
            vec![
                Run { index: 1, count: 2 },
                Run { index: 2, count: 3 },
                Run { index: 1, count: 1 },
                Run { index: 0, count: 1 },
            ]
        );
    }

    #[test]
    fn test_runs_empty() {
        assert_eq!(Runs::new(&[]).count(), 0);
    }

    #[test]
    fn test_encode_two_pixels() {
        assert_eq!(encode_to_string(&[0, 1], 2, 1), "2x1;ab\n");
    }

    #[test]
    fn test_encode_single_pixel_has_no_count() {
        assert_eq!(encode_to_string(&[4], 1, 1), "1x1;e\n");
    }

    #[test]
    fn test_run_spans_row_boundary() {
        // Row 0 ends with two 'c', row 1 starts with two 'c'
        let indices = [0, 2, 2, 2, 2, 5];
        assert_eq!(encode_to_string(&indices, 3, 2), "3x2;a4cf\n");
    }

    #[test]
    fn test_encode_zero_size() {
        assert_eq!(encode_to_string(&[], 0, 0), "0x0;\n");
        assert_eq!(encode_to_string(&[], 7, 0), "7x0;\n");
    }

    #[test]
    fn test_write_xga_matches_string() {
        let indices = [15, 15, 15, 9, 9, 0, 1, 1, 1, 1, 1, 1];
        let mut sink = Vec::new();
        let runs = write_xga(&mut sink, &indices, 4, 3).unwrap();
        assert_eq!(runs, 4);
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            encode_to_string(&indices, 4, 3)
        );
        assert_eq!(encode_to_string(&indices, 4, 3), "4x3;3p2ja6b\n");
    }

    #[test]
    fn test_write_xga_propagates_sink_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_xga(&mut Broken, &[0], 1, 1).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }
}
