use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xga16::ConvertJob;
use xga_quant::{Palette, Quantizer};

#[derive(Parser)]
#[command(name = "xga16")]
#[command(version, about = "Convert an image to the 16-color run-length XGA text format")]
struct Cli {
    /// Input image (PNG, JPEG, GIF, BMP, ...)
    input: PathBuf,

    /// Output file for the encoded text stream
    output: PathBuf,

    /// Also write an indexed PNG preview of the quantized image
    #[arg(long, value_name = "PNG")]
    preview: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn default_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "xga16=error,xga_quant=error",
            (false, 0) => "xga16=warn,xga_quant=warn",
            (false, 1) => "xga16=info,xga_quant=info",
            (false, _) => "xga16=debug,xga_quant=debug",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let quantizer = Quantizer::new(Palette::xga());
    let mut job = ConvertJob::new(&cli.input, &cli.output);
    if let Some(preview) = &cli.preview {
        job = job.with_preview(preview);
    }

    let summary = job.run(&quantizer)?;

    println!(
        "✓ Converted {} to {} ({}x{}, 16-color XGA)",
        cli.input.display(),
        cli.output.display(),
        summary.width,
        summary.height
    );
    Ok(())
}
