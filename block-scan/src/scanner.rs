// SPDX-License-Identifier: MIT
//! # Run Scanner
//!
//! Finds the shortest maximal run of equal colors inside one band of rows or
//! columns.
//!
//! A row is walked left to right; the running length grows while each pixel
//! equals its left neighbour under the color metric. At every color boundary
//! the run that just ended becomes a candidate minimum and the counter resets
//! to 1. The run still open when the row ends is a candidate as well.
//! Columns are handled the same way, walking top to bottom.
//!
//! The result starts at the full axis extent, so a band without any boundary
//! (or an empty band) reports the extent itself.

use std::ops::Range;

use crate::grid::PixelGrid;
use crate::metric::{colors_equal, Color};

/// Shortest horizontal run over the rows in `rows`.
///
/// The result never exceeds the image width and is at least 1 for a
/// non-empty image.
pub fn scan_row_band<G: PixelGrid>(image: &G, rows: Range<u32>, tolerance: u32) -> u32 {
    let width = image.width();
    let mut shortest = width;
    for y in rows {
        shortest = shortest.min(shortest_run(width, |x| image.color_at(x, y), tolerance));
    }
    shortest
}

/// Shortest vertical run over the columns in `cols`.
pub fn scan_col_band<G: PixelGrid>(image: &G, cols: Range<u32>, tolerance: u32) -> u32 {
    let height = image.height();
    let mut shortest = height;
    for x in cols {
        shortest = shortest.min(shortest_run(height, |y| image.color_at(x, y), tolerance));
    }
    shortest
}

/// Shortest run along a single line of `len` pixels read through `at`.
fn shortest_run(len: u32, at: impl Fn(u32) -> Color, tolerance: u32) -> u32 {
    if len < 2 {
        return len;
    }

    let mut shortest = len;
    let mut run = 1;
    let mut prev = at(0);
    for i in 1..len {
        let cur = at(i);
        if colors_equal(cur, prev, tolerance) {
            run += 1;
        } else {
            shortest = shortest.min(run);
            run = 1;
        }
        prev = cur;
    }
    shortest.min(run)
}
