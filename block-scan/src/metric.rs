// SPDX-License-Identifier: MIT
//! # Color Metric
//!
//! Decides whether two pixel colors count as "the same" under a tolerance.
//!
//! Colors are compared by Euclidean distance in 8-bit RGB space. Alpha is
//! carried by the source images but never takes part in the comparison.
//! A tolerance of `0` demands an exact channel-wise match.
//!
//! The comparison is done on squared distances in integer arithmetic:
//! over the 0–255 channel domain `sqrt(d) <= t` holds exactly when
//! `d <= t * t`, so no floating point is involved.

use image::{Rgb, Rgba};

/// An 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance between two colors.
    ///
    /// Never exceeds `3 * 255²`, so it fits comfortably in a `u32`.
    pub fn distance_squared(&self, other: &Color) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Shorthand for [`colors_equal`] with `self` on the left.
    pub fn matches(&self, other: &Color, tolerance: u32) -> bool {
        colors_equal(*self, *other, tolerance)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb<u8>> for Color {
    fn from(px: Rgb<u8>) -> Self {
        Self::from(px.0)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, _] = px.0;
        Self { r, g, b }
    }
}

/// Returns true when the RGB distance between `a` and `b` is at most `tolerance`.
///
/// Symmetric in `a` and `b`, which the run scanner relies on so that a row
/// read left-to-right splits into the same runs as one read right-to-left.
pub fn colors_equal(a: Color, b: Color, tolerance: u32) -> bool {
    let limit = u64::from(tolerance) * u64::from(tolerance);
    u64::from(a.distance_squared(&b)) <= limit
}
