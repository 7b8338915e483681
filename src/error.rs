//! # Error Handling
//!
//! Typed errors for everything around the block detector: configuration,
//! transparency specs, file access and image decoding.
//!
//! ## Architecture
//!
//! - **Error Types**: one [`Pixel2AnsiError`] variant per failure domain, each
//!   carrying the data needed to explain it
//! - **Error Context**: optional operation, free-form context and a recovery
//!   suggestion the CLI prints as a hint
//! - **Error Chaining**: I/O, decode and scan failures keep their source
//!
//! Nothing here is retryable. Every error ends the run; the context only
//! exists to make the message actionable.
//!
//! ## Usage
//!
//! ```rust
//! use pixel2ansi::error::{HasRecoverySuggestion, Pixel2AnsiError};
//!
//! let error = Pixel2AnsiError::config("workers", "0", "must be greater than 0")
//!     .with_recovery_suggestion("Pass --workers 1 or higher");
//!
//! assert_eq!(error.category(), "config");
//! assert_eq!(error.recovery_suggestion(), Some("Pass --workers 1 or higher"));
//! ```

use std::{error::Error as StdError, fmt, io, path::Path};

use block_scan::ScanError;

/// Metadata about where and why an error occurred
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed when the error occurred
    pub operation: Option<String>,
    /// Additional context about the error
    pub context: Option<String>,
    /// Suggested recovery action
    pub recovery_suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Base error type for pixel2ansi
#[derive(Debug)]
pub enum Pixel2AnsiError {
    /// Configuration validation errors
    Config {
        field: String,
        value: String,
        reason: String,
        context: ErrorContext,
    },
    /// Transparency spec that is neither a corner name nor a hex color
    ColorSpec {
        spec: String,
        reason: String,
        context: ErrorContext,
    },
    /// I/O errors
    Io {
        operation: String,
        path: Option<String>,
        source: io::Error,
        context: ErrorContext,
    },
    /// Image file that could not be decoded
    Decode {
        path: String,
        source: image::ImageError,
        context: ErrorContext,
    },
    /// Block detection rejected its input
    Scan {
        source: ScanError,
        context: ErrorContext,
    },
}

impl Pixel2AnsiError {
    /// Create a configuration error
    pub fn config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a color spec error
    pub fn color_spec(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ColorSpec {
            spec: spec.into(),
            reason: reason.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: None,
            source,
            context: ErrorContext::new(),
        }
    }

    /// Create a decode error for the image at `path`
    pub fn decode(path: &Path, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.display().to_string(),
            source,
            context: ErrorContext::new(),
        }
    }

    /// Attach a file path to an I/O error; other variants are returned unchanged
    pub fn with_path(mut self, file: &Path) -> Self {
        if let Self::Io { path, .. } = &mut self {
            *path = Some(file.display().to_string());
        }
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context_mut().context = Some(context.into());
        self
    }

    /// Add operation context
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.context_mut().operation = Some(operation.into());
        self
    }

    /// Add recovery suggestion
    pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context_mut().recovery_suggestion = Some(suggestion.into());
        self
    }

    /// Get the error context
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Config { context, .. } => context,
            Self::ColorSpec { context, .. } => context,
            Self::Io { context, .. } => context,
            Self::Decode { context, .. } => context,
            Self::Scan { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::Config { context, .. } => context,
            Self::ColorSpec { context, .. } => context,
            Self::Io { context, .. } => context,
            Self::Decode { context, .. } => context,
            Self::Scan { context, .. } => context,
        }
    }

    /// Short machine-friendly name of the failure domain
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::ColorSpec { .. } => "color_spec",
            Self::Io { .. } => "io",
            Self::Decode { .. } => "decode",
            Self::Scan { .. } => "scan",
        }
    }
}

impl fmt::Display for Pixel2AnsiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pixel2AnsiError::Config {
                field,
                value,
                reason,
                ..
            } => {
                write!(
                    f,
                    "Configuration error in '{}': {} (value: {})",
                    field, reason, value
                )?;
            }
            Pixel2AnsiError::ColorSpec { spec, reason, .. } => {
                write!(f, "Invalid color specification '{}': {}", spec, reason)?;
            }
            Pixel2AnsiError::Io {
                operation,
                path,
                source,
                ..
            } => {
                if let Some(path) = path {
                    write!(
                        f,
                        "I/O error during {} on '{}': {}",
                        operation, path, source
                    )?;
                } else {
                    write!(f, "I/O error during {}: {}", operation, source)?;
                }
            }
            Pixel2AnsiError::Decode { path, source, .. } => {
                write!(f, "Failed to decode image '{}': {}", path, source)?;
            }
            Pixel2AnsiError::Scan { source, .. } => {
                write!(f, "Block detection failed: {}", source)?;
            }
        }
        if let Some(context) = &self.context().context {
            write!(f, " ({})", context)?;
        }
        Ok(())
    }
}

impl StdError for Pixel2AnsiError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Scan { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias using our custom error type
pub type Pixel2AnsiResult<T> = Result<T, Pixel2AnsiError>;

/// Errors that can tell the user what to try next
pub trait HasRecoverySuggestion {
    fn recovery_suggestion(&self) -> Option<&str>;
}

impl HasRecoverySuggestion for Pixel2AnsiError {
    fn recovery_suggestion(&self) -> Option<&str> {
        if let Some(suggestion) = &self.context().recovery_suggestion {
            return Some(suggestion.as_str());
        }
        match self {
            Self::ColorSpec { .. } => {
                Some("Use tl, tr, bl, br or a 6-digit hex color such as ff00ff")
            }
            Self::Decode { .. } => Some("Prefer lossless formats such as PNG or BMP"),
            Self::Scan {
                source: ScanError::NoWorkers,
                ..
            } => Some("Pass --workers 1 or higher"),
            _ => None,
        }
    }
}

impl From<ScanError> for Pixel2AnsiError {
    fn from(error: ScanError) -> Self {
        Self::Scan {
            source: error,
            context: ErrorContext::new(),
        }
    }
}
