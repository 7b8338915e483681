// SPDX-License-Identifier: MIT
//! # Parallel Block-Size Reduction
//!
//! Fans the run scan out over a dedicated worker pool and folds the partial
//! results into a single [`BlockSize`].
//!
//! ## Dispatch
//!
//! Both axes are split into `workers` bands (see [`crate::bands`]), giving
//! `2 × workers` independent tasks. Every task borrows the same immutable
//! image, scans its band and sends one partial minimum down a shared
//! channel. The pool's scope is the only barrier: once it returns, every
//! task has finished and the channel holds all partial results.
//!
//! The pool itself never has more threads than the machine can run at once
//! (see [`pool_threads`]). Extra bands queue up on the existing threads, so a
//! large worker count costs task overhead instead of OS threads.
//!
//! ## Reduction
//!
//! `width = min(row partials)`, `height = min(column partials)`, both seeded
//! with the full image extent. `min` is commutative and associative, so the
//! result does not depend on the order in which tasks complete, nor on the
//! number of workers.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::mpsc;
use std::thread;

use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::{debug, trace};

use crate::bands::partition;
use crate::grid::PixelGrid;
use crate::scanner::{scan_col_band, scan_row_band};

/// Size of the smallest repeating block, in source pixels.
///
/// For a non-empty image `1 <= width <= image width` and
/// `1 <= height <= image height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockSize {
    pub width: u32,
    pub height: u32,
}

impl BlockSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of whole blocks that fit along each axis of a `width × height` image.
    pub fn grid_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        (width / self.width, height / self.height)
    }
}

impl fmt::Display for BlockSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug)]
pub enum ScanError {
    /// Worker count of zero leaves nothing to dispatch.
    NoWorkers,
    /// Image with a zero-length axis.
    EmptyImage { width: u32, height: u32 },
    /// The dedicated worker pool could not be started.
    ThreadPool(ThreadPoolBuildError),
}

impl From<ThreadPoolBuildError> for ScanError {
    fn from(e: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(e)
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::NoWorkers => write!(f, "Worker count must be greater than 0"),
            ScanError::EmptyImage { width, height } => {
                write!(f, "Image has no pixels to scan ({}x{})", width, height)
            }
            ScanError::ThreadPool(e) => write!(f, "Failed to start worker pool: {}", e),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::ThreadPool(e) => Some(e),
            _ => None,
        }
    }
}

/// Partial result of one band scan, tagged with the axis it belongs to.
enum Partial {
    /// Shortest horizontal run in a row band; bounds the block width.
    Row(u32),
    /// Shortest vertical run in a column band; bounds the block height.
    Column(u32),
}

/// Threads in the scan pool for `workers` requested workers.
///
/// Capped at [`thread::available_parallelism`], falling back to a single
/// thread when the platform cannot report it.
pub fn pool_threads(workers: usize) -> usize {
    let available = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    workers.clamp(1, available)
}

/// Detect the smallest repeating block of `image` split into `workers` bands
/// per axis.
///
/// Runs one scan task per row band and one per column band on a pool of
/// [`pool_threads`] threads, and blocks until every task has reported.
///
/// # Errors
///
/// - [`ScanError::NoWorkers`] when `workers == 0`
/// - [`ScanError::EmptyImage`] when either image axis is zero
/// - [`ScanError::ThreadPool`] when the worker threads cannot be spawned
pub fn find_block_size<G: PixelGrid>(
    image: &G,
    workers: usize,
    tolerance: u32,
) -> Result<BlockSize, ScanError> {
    let (width, height) = image.dimensions();
    if workers == 0 {
        return Err(ScanError::NoWorkers);
    }
    if width == 0 || height == 0 {
        return Err(ScanError::EmptyImage { width, height });
    }

    let row_bands = partition(height, workers);
    let col_bands = partition(width, workers);
    let threads = pool_threads(workers);
    debug!(
        width,
        height,
        workers,
        threads,
        tolerance,
        tasks = row_bands.len() + col_bands.len(),
        "dispatching band scans"
    );

    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("block-scan-{i}"))
        .build()?;

    let (tx, rx) = mpsc::channel();
    pool.scope(|s| {
        for band in row_bands.iter().copied() {
            let tx = tx.clone();
            s.spawn(move |_| {
                let run = scan_row_band(image, band.range(), tolerance);
                trace!(start = band.start, end = band.end, run, "row band done");
                // The receiver outlives the scope, so a send cannot fail.
                let _ = tx.send(Partial::Row(run));
            });
        }
        for band in col_bands.iter().copied() {
            let tx = tx.clone();
            s.spawn(move |_| {
                let run = scan_col_band(image, band.range(), tolerance);
                trace!(start = band.start, end = band.end, run, "column band done");
                let _ = tx.send(Partial::Column(run));
            });
        }
    });
    drop(tx);

    let mut block = BlockSize { width, height };
    for partial in rx {
        match partial {
            Partial::Row(run) => block.width = block.width.min(run),
            Partial::Column(run) => block.height = block.height.min(run),
        }
    }

    debug!(%block, "block size reduced");
    Ok(block)
}
