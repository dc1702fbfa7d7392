//! Test fixtures: small PNG images written into a temporary directory.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Colors used across tests (exact palette entries)
pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const TEAL: [u8; 3] = [0, 128, 128];
}

/// Write an 8-bit RGB PNG.
pub fn write_rgb_png(path: &Path, width: u32, height: u32, pixels: &[[u8; 3]]) {
    assert_eq!(pixels.len(), (width * height) as usize);
    let file = File::create(path).expect("Failed to create fixture");
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("Failed to write PNG header");
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    writer
        .write_image_data(&data)
        .expect("Failed to write PNG data");
    writer.finish().expect("Failed to finish PNG");
}

/// A temporary directory with input/output path helpers.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an RGB PNG named `name` and return its path.
    pub fn png(&self, name: &str, width: u32, height: u32, pixels: &[[u8; 3]]) -> PathBuf {
        let path = self.path(name);
        write_rgb_png(&path, width, height, pixels);
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("Failed to read output")
    }
}
