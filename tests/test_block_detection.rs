//! Block detection properties over synthetic pixel art.
//!
//! Exercises the full `analyze` path: configuration validation, parallel band
//! scans and the min-reduction.

mod common;

use block_scan::{BlockSize, find_block_size};
use common::*;
use image::{Rgba, RgbaImage};
use pixel2ansi::analyze;
use pixel2ansi::config::AnalysisConfig;

fn block_at(image: &RgbaImage, workers: usize, tolerance: u32) -> BlockSize {
    let config = AnalysisConfig::new(workers, tolerance, None, false);
    analyze(image, &config).unwrap()
}

#[test]
fn test_solid_image_is_a_single_block() {
    for (w, h) in [(1, 1), (1, 9), (13, 1), (32, 17)] {
        let img = solid(w, h, MAGENTA);
        assert_eq!(block_at(&img, 4, 0), BlockSize::new(w, h));
    }
}

#[test]
fn test_checkerboard_has_unit_blocks() {
    let img = checkerboard(16, 11);
    assert_eq!(block_at(&img, 4, 0), BlockSize::new(1, 1));
}

#[test]
fn test_uniform_grid_recovers_tile_size() {
    for (tw, th) in [(2, 2), (3, 7), (8, 8), (5, 1)] {
        let img = tiled(tw, th, 6, 6);
        assert_eq!(
            block_at(&img, 4, 0),
            BlockSize::new(tw, th),
            "tile {tw}x{th}"
        );
    }
}

#[test]
fn test_result_is_independent_of_worker_count() {
    let img = tiled(4, 3, 9, 5);
    let expected = block_at(&img, 1, 0);
    for workers in 1..=img.height() as usize + 3 {
        assert_eq!(block_at(&img, workers, 0), expected, "workers = {workers}");
    }
}

#[test]
fn test_worker_count_far_beyond_image_extent() {
    let img = tiled(2, 3, 4, 3);
    assert_eq!(block_at(&img, 4096, 0), BlockSize::new(2, 3));
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let img = tiled(3, 2, 10, 10);
    let first = block_at(&img, 6, 0);
    for _ in 0..20 {
        assert_eq!(block_at(&img, 6, 0), first);
    }
}

#[test]
fn test_single_narrow_run_sets_the_block() {
    // 4×4 tiles, except one 1-px-wide stripe in the middle of the image
    let mut img = tiled(4, 4, 6, 6);
    for y in 0..img.height() {
        img.put_pixel(10, y, WHITE);
    }
    let block = block_at(&img, 3, 0);
    assert_eq!(block.width, 1);
    assert_eq!(block.height, 4);
}

#[test]
fn test_tolerance_is_monotonic() {
    // Tiles of 2×2 with per-pixel noise of a few units in every channel
    let base = tiled(2, 2, 8, 8);
    let noisy = RgbaImage::from_fn(base.width(), base.height(), |x, y| {
        let Rgba([r, g, b, a]) = *base.get_pixel(x, y);
        let n = ((x * 7 + y * 13) % 5) as u8;
        Rgba([r.saturating_sub(n), g.saturating_add(n), b.saturating_sub(n), a])
    });

    let mut previous = BlockSize::new(0, 0);
    for tolerance in [0, 1, 3, 5, 8, 12, 50, 120, 300, 500] {
        let block = block_at(&noisy, 4, tolerance);
        assert!(block.width >= previous.width, "width shrank at {tolerance}");
        assert!(block.height >= previous.height, "height shrank at {tolerance}");
        previous = block;
    }

    // Enough tolerance to see through the noise but not across tiles
    assert_eq!(block_at(&noisy, 4, 12), BlockSize::new(2, 2));
    // Everything is "equal" once the tolerance covers the whole RGB cube
    assert_eq!(block_at(&noisy, 4, 500), BlockSize::new(16, 16));
}

#[test]
fn test_alpha_does_not_split_blocks() {
    let img = RgbaImage::from_fn(6, 6, |x, y| {
        let alpha = ((x + y) * 40) as u8;
        if x < 3 {
            Rgba([10, 10, 10, alpha])
        } else {
            Rgba([90, 90, 90, alpha])
        }
    });
    assert_eq!(block_at(&img, 2, 0), BlockSize::new(3, 6));
}

#[test]
fn test_zero_workers_is_a_config_error() {
    let img = solid(4, 4, BLACK);
    let err = analyze(&img, &AnalysisConfig::new(0, 0, None, false)).unwrap_err();
    assert_eq!(err.category(), "config");
}

#[test]
fn test_empty_image_is_rejected() {
    let img = RgbaImage::new(0, 0);
    let err = analyze(&img, &AnalysisConfig::default()).unwrap_err();
    assert_eq!(err.category(), "scan");
}

#[test]
fn test_block_never_exceeds_image() {
    for (w, h) in [(1, 1), (2, 3), (7, 5), (31, 2)] {
        for workers in [1, 2, 8] {
            let img = checkerboard(w, h);
            let block = find_block_size(&img, workers, 0).unwrap();
            assert!((1..=w).contains(&block.width));
            assert!((1..=h).contains(&block.height));
        }
    }
}
