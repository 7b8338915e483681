// SPDX-License-Identifier: MIT
//! Read-only pixel access shared by every scan in this crate.

use image::{RgbImage, RgbaImage};

use crate::metric::Color;

/// An immutable 2D grid of colors addressed by `(x, y)`.
///
/// `Sync` is required because band scans borrow the same grid from several
/// worker threads at once.
pub trait PixelGrid: Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Color at `(x, y)`. Callers keep `x < width()` and `y < height()`.
    fn color_at(&self, x: u32, y: u32) -> Color;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl PixelGrid for RgbaImage {
    fn width(&self) -> u32 {
        RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbaImage::height(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        Color::from(*self.get_pixel(x, y))
    }
}

impl PixelGrid for RgbImage {
    fn width(&self) -> u32 {
        RgbImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbImage::height(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        Color::from(*self.get_pixel(x, y))
    }
}
