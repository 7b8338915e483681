//! # Transparency Specification
//!
//! Resolves the user's `--transparent` argument into a concrete color.
//!
//! ## Accepted Forms
//!
//! | Spec | Meaning |
//! |------|---------|
//! | `tl` / `top-left` | Color of the top-left pixel |
//! | `tr` / `top-right` | Color of the top-right pixel |
//! | `bl` / `bottom-left` | Color of the bottom-left pixel |
//! | `br` / `bottom-right` | Color of the bottom-right pixel |
//! | `ff00ff` / `#FF00FF` | Explicit RGB hex literal |
//!
//! Corner names are case-insensitive. Anything else is rejected.

use std::str::FromStr;

use block_scan::{Color, PixelGrid};

use crate::error::{Pixel2AnsiError, Pixel2AnsiResult};

/// One of the four image corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Pixel coordinates of this corner in a `width × height` image.
    pub fn coordinates(self, width: u32, height: u32) -> (u32, u32) {
        let right = width.saturating_sub(1);
        let bottom = height.saturating_sub(1);
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (right, 0),
            Corner::BottomLeft => (0, bottom),
            Corner::BottomRight => (right, bottom),
        }
    }
}

/// A parsed `--transparent` argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransparencySpec {
    /// Sample the color from an image corner.
    Corner(Corner),
    /// Use a fixed color.
    Rgb(Color),
}

impl TransparencySpec {
    /// Turn the spec into a color, sampling `image` for corner specs.
    pub fn resolve<G: PixelGrid>(&self, image: &G) -> Pixel2AnsiResult<Color> {
        match *self {
            TransparencySpec::Rgb(color) => Ok(color),
            TransparencySpec::Corner(corner) => {
                let (width, height) = image.dimensions();
                if width == 0 || height == 0 {
                    return Err(Pixel2AnsiError::config(
                        "transparent",
                        format!("{corner:?}"),
                        "image has no corner pixels to sample",
                    ));
                }
                let (x, y) = corner.coordinates(width, height);
                Ok(image.color_at(x, y))
            }
        }
    }
}

impl FromStr for TransparencySpec {
    type Err = Pixel2AnsiError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let corner = match spec.trim().to_ascii_lowercase().as_str() {
            "tl" | "top-left" => Some(Corner::TopLeft),
            "tr" | "top-right" => Some(Corner::TopRight),
            "bl" | "bottom-left" => Some(Corner::BottomLeft),
            "br" | "bottom-right" => Some(Corner::BottomRight),
            _ => None,
        };
        match corner {
            Some(corner) => Ok(TransparencySpec::Corner(corner)),
            None => parse_hex_color(spec).map(TransparencySpec::Rgb),
        }
    }
}

/// Parse `RRGGBB` with an optional leading `#`.
pub fn parse_hex_color(spec: &str) -> Pixel2AnsiResult<Color> {
    let hex = spec.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return Err(Pixel2AnsiError::color_spec(
            spec,
            "expected 6 hex digits (RRGGBB)",
        ));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Pixel2AnsiError::color_spec(
            spec,
            "contains non-hex characters",
        ));
    }

    // All six bytes are ASCII hex digits, so slicing on byte offsets is safe.
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| Pixel2AnsiError::color_spec(spec, e.to_string()))
    };
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
}
