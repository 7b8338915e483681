// SPDX-License-Identifier: MIT
//! # Band Partitioning
//!
//! Splits one image axis into contiguous half-open index ranges, one per
//! worker. Every band except the last holds `extent / workers` indices; the
//! last band runs to `extent` and absorbs the remainder.
//!
//! When `workers > extent` the per-band share rounds down to zero, so all
//! bands but the last are empty and the last covers the whole axis. Empty
//! bands are legal and scan to the axis extent.

use std::ops::Range;

/// A half-open range `[start, end)` of row or column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub start: u32,
    pub end: u32,
}

impl Band {
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<u32> {
        self.start..self.end
    }
}

/// Partition `[0, extent)` into `workers` bands.
///
/// Returns an empty vector for `workers == 0`; callers reject that case
/// before partitioning.
pub fn partition(extent: u32, workers: usize) -> Vec<Band> {
    if workers == 0 {
        return Vec::new();
    }

    let per_worker = extent as usize / workers;
    (0..workers)
        .map(|i| {
            let start = i * per_worker;
            let end = if i == workers - 1 {
                extent as usize
            } else {
                start + per_worker
            };
            // Both bounds are <= extent, so the narrowing casts are lossless.
            Band {
                start: start as u32,
                end: end as u32,
            }
        })
        .collect()
}
