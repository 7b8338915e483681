// SPDX-License-Identifier: MIT
//! # Crop Bounds
//!
//! Finds the envelope of every pixel that does not match a designated
//! transparent color. The scan is sequential and shares the color metric
//! with the block detector, so the same tolerance decides what counts as
//! transparent.

use crate::grid::PixelGrid;
use crate::metric::{colors_equal, Color};

/// Axis-aligned box in pixel coordinates. `max_x` and `max_y` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    /// Box covering a whole `width × height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: width,
            max_y: height,
        }
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
}

/// Running envelope. Starts inverted so the first hit sets every edge.
struct Envelope {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
    hit: bool,
}

impl Envelope {
    fn new() -> Self {
        Self {
            min_x: u32::MAX,
            min_y: u32::MAX,
            max_x: 0,
            max_y: 0,
            hit: false,
        }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.hit = true;
    }

    fn finish(self) -> Option<BoundingBox> {
        self.hit.then(|| BoundingBox {
            min_x: self.min_x,
            min_y: self.min_y,
            max_x: self.max_x + 1,
            max_y: self.max_y + 1,
        })
    }
}

/// Bounding box of all pixels that differ from `transparent` by more than
/// `tolerance`.
///
/// Returns `None` when every pixel matches, i.e. there is nothing to crop
/// to. Callers decide what an empty crop means for them.
pub fn crop_bounds<G: PixelGrid>(
    image: &G,
    transparent: Color,
    tolerance: u32,
) -> Option<BoundingBox> {
    let (width, height) = image.dimensions();
    let mut envelope = Envelope::new();
    for y in 0..height {
        for x in 0..width {
            if !colors_equal(image.color_at(x, y), transparent, tolerance) {
                envelope.include(x, y);
            }
        }
    }
    envelope.finish()
}
