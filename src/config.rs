//! # Configuration Module
//!
//! Configuration for a single analysis run, shared by the `inspect` and
//! `print` commands and by library callers.
//!
//! ## Configuration Parameters
//!
//! | Parameter | Type | Default | Description |
//! |-----------|------|---------|-------------|
//! | `workers` | `usize` | 4 | Concurrent band scans per axis, must be > 0 |
//! | `tolerance` | `u32` | 0 | Max RGB distance at which colors count as equal |
//! | `transparent` | `Option<String>` | `None` | Corner name or hex color to treat as background |
//! | `crop` | `bool` | false | Trim transparent margins before rendering |
//!
//! ## Examples
//!
//! ```rust
//! use pixel2ansi::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::default();
//! assert!(config.validate().is_ok());
//!
//! let config = AnalysisConfig::new(8, 150, Some("tl".to_string()), true);
//! assert!(config.validate().is_ok());
//!
//! let config = AnalysisConfig::new(0, 0, None, false);
//! assert!(config.validate().is_err());
//! ```

use block_scan::PixelGrid;

use crate::color_spec::TransparencySpec;
use crate::error::{Pixel2AnsiError, Pixel2AnsiResult};
use crate::render::RenderOptions;

/// Default number of band-scan workers per axis.
pub const DEFAULT_WORKERS: usize = 4;

/// Parameters for block detection and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Number of bands each axis is split into, and threads in the scan pool.
    ///
    /// Does not change the detected block size, only how the work is spread.
    pub workers: usize,

    /// Color tolerance as a Euclidean RGB distance.
    ///
    /// `0` requires exact matches. JPEG sources typically need a value
    /// somewhere around 100–150 to see through compression noise.
    pub tolerance: u32,

    /// Optional transparency spec: `tl`, `tr`, `bl`, `br` or an `RRGGBB` hex color.
    pub transparent: Option<String>,

    /// Whether to trim transparent margins. Has no effect without `transparent`.
    pub crop: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            tolerance: 0,
            transparent: None,
            crop: false,
        }
    }
}

impl AnalysisConfig {
    pub fn new(workers: usize, tolerance: u32, transparent: Option<String>, crop: bool) -> Self {
        Self {
            workers,
            tolerance,
            transparent,
            crop,
        }
    }

    /// Validates the configuration parameters.
    ///
    /// # Validation Rules
    ///
    /// - `workers` must be greater than 0
    /// - `transparent`, when set, must parse as a [`TransparencySpec`]
    pub fn validate(&self) -> Pixel2AnsiResult<()> {
        if self.workers == 0 {
            return Err(
                Pixel2AnsiError::config("workers", "0", "must be greater than 0")
                    .with_recovery_suggestion("Pass --workers 1 or higher"),
            );
        }
        self.transparency_spec()?;
        Ok(())
    }

    /// Parsed transparency spec, if one was given.
    pub fn transparency_spec(&self) -> Pixel2AnsiResult<Option<TransparencySpec>> {
        self.transparent
            .as_deref()
            .map(|spec| spec.parse::<TransparencySpec>())
            .transpose()
    }

    /// Convert to [`RenderOptions`], resolving corner specs against `image`.
    pub fn to_render_options<G: PixelGrid>(&self, image: &G) -> Pixel2AnsiResult<RenderOptions> {
        let transparent = match self.transparency_spec()? {
            Some(spec) => Some(spec.resolve(image)?),
            None => None,
        };
        Ok(RenderOptions {
            transparent,
            crop: self.crop,
            tolerance: self.tolerance,
        })
    }
}
