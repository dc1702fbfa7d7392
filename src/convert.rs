//! File-to-file conversion: load, quantize, stream the encoded result.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use xga_quant::Quantizer;

use crate::error::ConvertError;
use crate::loader::load_rgb;
use crate::preview::encode_preview_png;

/// What to convert and where to put it.
#[derive(Debug, Clone)]
pub struct ConvertJob {
    /// Source image (any format the decoder supports)
    pub input: PathBuf,
    /// Destination for the encoded text stream
    pub output: PathBuf,
    /// Optional indexed PNG preview of the quantized image
    pub preview: Option<PathBuf>,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub width: usize,
    pub height: usize,
    pub runs: usize,
}

impl ConvertJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            preview: None,
        }
    }

    pub fn with_preview(mut self, preview: impl Into<PathBuf>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    /// Run the conversion.
    ///
    /// The output file is only created once the input has been decoded and
    /// quantized, so a load failure never creates or truncates it.
    pub fn run(&self, quantizer: &Quantizer) -> Result<ConvertSummary, ConvertError> {
        let buffer = load_rgb(&self.input)?;
        let image = quantizer.quantize(buffer);

        let file = File::create(&self.output).map_err(|source| ConvertError::Sink {
            path: self.output.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let runs = image
            .write_xga(&mut writer)
            .and_then(|runs| writer.flush().map(|_| runs))
            .map_err(|source| ConvertError::Write {
                path: self.output.clone(),
                source,
            })?;
        tracing::info!(
            output = %self.output.display(),
            width = image.width(),
            height = image.height(),
            runs,
            "Wrote encoded image"
        );

        if let Some(preview) = &self.preview {
            write_preview(preview, &encode_preview_png(&image)?)?;
            tracing::info!(preview = %preview.display(), "Wrote preview");
        }

        Ok(ConvertSummary {
            width: image.width(),
            height: image.height(),
            runs,
        })
    }
}

fn write_preview(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    std::fs::write(path, bytes).map_err(|source| ConvertError::Sink {
        path: path.to_path_buf(),
        source,
    })
}
