// SPDX-License-Identifier: MIT
//! # block-scan: Smallest Repeating Block Detection
//!
//! Upscaled pixel art stores every logical pixel as a uniform rectangle of
//! source pixels. This crate finds the size of that rectangle by measuring
//! the shortest run of equal colors along every row and every column.
//!
//! ## Key Components
//!
//! - [`metric`]: tolerance-aware Euclidean RGB color equality
//! - [`grid`]: the read-only [`PixelGrid`] view the scans run on
//! - [`bands`]: partitioning of an axis into per-worker bands
//! - [`scanner`]: shortest-run scan over a band of rows or columns
//! - [`reducer`]: parallel fan-out over all bands and min-reduction into a [`BlockSize`]
//! - [`crop`]: bounding box of everything that is not a transparent color
//!
//! ## Usage Example
//!
//! ```rust
//! use block_scan::{find_block_size, BlockSize};
//! use image::{Rgba, RgbaImage};
//!
//! // 4×2 checker cells on a 16×8 image
//! let img = RgbaImage::from_fn(16, 8, |x, y| {
//!     if (x / 4 + y / 2) % 2 == 0 { Rgba([0, 0, 0, 255]) } else { Rgba([255, 255, 255, 255]) }
//! });
//!
//! let block = find_block_size(&img, 4, 0)?;
//! assert_eq!(block, BlockSize { width: 4, height: 2 });
//! # Ok::<(), block_scan::ScanError>(())
//! ```
//!
//! ## Cost
//!
//! Every pixel is read once per axis; no pass is more than linear in the
//! pixel count.

pub mod bands;
pub mod crop;
pub mod grid;
pub mod metric;
pub mod reducer;
pub mod scanner;

pub use crop::{crop_bounds, BoundingBox};
pub use grid::PixelGrid;
pub use metric::{colors_equal, Color};
pub use reducer::{find_block_size, BlockSize, ScanError};
