//! tinct - hue/lightness/saturation grading for raster images
//!
//! Reads an encoded image, resizes it to a working width, rotates hue,
//! scales lightness, and shifts saturation, then writes the resized
//! original and the graded result side by side.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tinct_ops::ColorAdjustment;
use tinct_pipeline::{Pipeline, PipelineConfig};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Hue/lightness/saturation grading for raster images")]
#[command(long_about = "
Applies a color grade in HSV space: hue rotates, lightness scales,
saturation shifts. Writes two files next to the requested output stem:
the resized original and the graded result, in the input's own format.

Examples:
  tinct photo.jpg                          # resize to width 100, no grade
  tinct photo.jpg -H 0.5                   # rotate hue half a revolution
  tinct photo.png -l 1.4 -s 0.1 -w 640     # brighten, nudge saturation
  tinct photo.png -o out/graded            # write out/graded_*.png
")]
struct Cli {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Output stem; defaults to the input path without its extension.
    /// Results land at <stem>_original.<ext> and <stem>_transformed.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Hue shift as a fraction of a full revolution (wraps modulo 1.0)
    #[arg(short = 'H', long = "hue", default_value_t = 0.0)]
    hue_shift: f32,

    /// Lightness scale (multiplicative, clamped to [0, 1] after scaling)
    #[arg(short = 'l', long = "lightness", default_value_t = 1.0)]
    lightness_scale: f32,

    /// Saturation shift (wraps modulo 1.0, like hue)
    #[arg(short = 's', long = "saturation", default_value_t = 0.0)]
    saturation_shift: f32,

    /// Working width in pixels; height follows the source aspect ratio
    #[arg(short, long, default_value_t = 100)]
    width: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            if cli.verbose {
                tracing_subscriber::EnvFilter::new("debug")
            } else {
                tracing_subscriber::EnvFilter::new("warn")
            }
        });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    debug!(len = bytes.len(), "read input file");

    let adjustment = ColorAdjustment::new(cli.hue_shift, cli.lightness_scale, cli.saturation_shift);
    let pipeline = Pipeline::new(PipelineConfig {
        target_width: cli.width,
        adjustment,
        ..Default::default()
    });

    let out = pipeline
        .transform(&bytes)
        .with_context(|| format!("failed to transform {}", cli.input.display()))?;

    let stem = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(""));
    let ext = out.format.extension();

    let original_path = sibling(&stem, "original", ext);
    let transformed_path = sibling(&stem, "transformed", ext);

    std::fs::write(&original_path, &out.original)
        .with_context(|| format!("failed to write {}", original_path.display()))?;
    std::fs::write(&transformed_path, &out.transformed)
        .with_context(|| format!("failed to write {}", transformed_path.display()))?;

    info!(
        original = %original_path.display(),
        transformed = %transformed_path.display(),
        "wrote outputs"
    );
    if cli.verbose {
        println!("{}", original_path.display());
        println!("{}", transformed_path.display());
    }

    Ok(())
}

/// Builds `<stem>_<suffix>.<ext>` next to the stem.
fn sibling(stem: &std::path::Path, suffix: &str, ext: &str) -> PathBuf {
    let name = stem
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".into());
    stem.with_file_name(format!("{}_{}.{}", name, suffix, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_paths() {
        let p = sibling(std::path::Path::new("dir/photo"), "original", "png");
        assert_eq!(p, PathBuf::from("dir/photo_original.png"));
    }
}
