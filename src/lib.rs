//! # pixel2ansi
//!
//! Detects the logical pixel size of upscaled pixel art and prints the image
//! to a terminal as truecolor ANSI blocks, one cell per logical pixel.
//!
//! ## Architecture
//!
//! The detection algorithm itself lives in the `block-scan` workspace crate.
//! This crate wraps it with everything a command-line tool needs:
//! - `config`: run configuration and validation
//! - `error`: error taxonomy with recovery hints
//! - `image_source`: decoding image files
//! - `color_spec`: resolving `--transparent` corner names and hex colors
//! - `render`: ANSI output, with optional cropping
//! - `inspect`: block/grid size report
//!
//! ## Example
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use pixel2ansi::{analyze, config::AnalysisConfig};
//!
//! // 3×3 logical pixels, each drawn as a 5×5 square
//! let img = RgbaImage::from_fn(15, 15, |x, y| {
//!     if (x / 5 + y / 5) % 2 == 0 { Rgba([0, 0, 0, 255]) } else { Rgba([255, 0, 0, 255]) }
//! });
//!
//! let block = analyze(&img, &AnalysisConfig::default())?;
//! assert_eq!((block.width, block.height), (5, 5));
//! # Ok::<(), pixel2ansi::Pixel2AnsiError>(())
//! ```

use std::io::Write;
use std::path::Path;

use block_scan::{PixelGrid, find_block_size};
use tracing::info;

pub mod color_spec;
pub mod config;
pub mod error;
pub mod image_source;
pub mod inspect;
pub mod render;

/// Re-export error types for convenience
pub use error::{HasRecoverySuggestion, Pixel2AnsiError, Pixel2AnsiResult};

/// Re-export the detection types callers see in results
pub use block_scan::{BlockSize, BoundingBox, Color};

use config::AnalysisConfig;
use inspect::InspectReport;

/// Validate `config` and detect the block size of `image`.
pub fn analyze<G: PixelGrid>(image: &G, config: &AnalysisConfig) -> Pixel2AnsiResult<BlockSize> {
    config.validate()?;
    let block = find_block_size(image, config.workers, config.tolerance)?;
    info!(%block, tolerance = config.tolerance, "detected block size");
    Ok(block)
}

/// Load the image at `path` and report its block and grid size.
///
/// Errors are tagged with the `inspect` operation, and with the file name
/// when the underlying error does not already carry it.
pub fn inspect_file(
    path: impl AsRef<Path>,
    config: &AnalysisConfig,
) -> Pixel2AnsiResult<InspectReport> {
    let path = path.as_ref();
    let report = inspect_image_file(path, config);
    report.map_err(|e| tag_file_error(e, "inspect", path))
}

/// Load the image at `path` and render it to `out` as ANSI blocks.
///
/// Errors are tagged like those of [`inspect_file`], with the `print`
/// operation.
pub fn print_file<W: Write>(
    path: impl AsRef<Path>,
    config: &AnalysisConfig,
    out: &mut W,
) -> Pixel2AnsiResult<()> {
    let path = path.as_ref();
    let printed = print_image_file(path, config, out);
    printed.map_err(|e| tag_file_error(e, "print", path))
}

fn inspect_image_file(path: &Path, config: &AnalysisConfig) -> Pixel2AnsiResult<InspectReport> {
    let image = image_source::load_image(path)?;
    let block = analyze(&image, config)?;
    Ok(InspectReport::new(image.width(), image.height(), block))
}

fn print_image_file<W: Write>(
    path: &Path,
    config: &AnalysisConfig,
    out: &mut W,
) -> Pixel2AnsiResult<()> {
    let image = image_source::load_image(path)?;
    let block = analyze(&image, config)?;
    let options = config.to_render_options(&image)?;
    let written = render::render(&image, block, &options, out);
    written.map_err(|e| Pixel2AnsiError::io("write_output", e))
}

fn tag_file_error(error: Pixel2AnsiError, operation: &str, path: &Path) -> Pixel2AnsiError {
    let error = error.with_operation(operation);
    let names_file = matches!(
        error,
        Pixel2AnsiError::Io { path: Some(_), .. } | Pixel2AnsiError::Decode { .. }
    );
    if names_file {
        error
    } else {
        error.with_context(format!("in {}", path.display()))
    }
}
