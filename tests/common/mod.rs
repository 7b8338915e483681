//! Common test utilities for the pixel2ansi tests
//!
//! Builders for synthetic pixel-art images with known block sizes.

#![allow(dead_code)]

use image::{Rgba, RgbaImage};

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Small palette with distinct neighbours at every tolerance below 100.
pub const PALETTE: [Rgba<u8>; 4] = [
    Rgba([230, 40, 40, 255]),
    Rgba([40, 200, 60, 255]),
    Rgba([30, 60, 220, 255]),
    Rgba([240, 220, 30, 255]),
];

/// Solid `width × height` image
pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Two colors alternating every pixel
pub fn checkerboard(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 { BLACK } else { WHITE }
    })
}

/// `cols × rows` logical pixels, each drawn as a `tile_w × tile_h` rectangle.
///
/// Colors are chosen so horizontally and vertically adjacent tiles always differ.
pub fn tiled(tile_w: u32, tile_h: u32, cols: u32, rows: u32) -> RgbaImage {
    RgbaImage::from_fn(tile_w * cols, tile_h * rows, |x, y| {
        let (tx, ty) = (x / tile_w, y / tile_h);
        PALETTE[((tx % 2) + 2 * (ty % 2)) as usize]
    })
}

/// `inner` pasted at `(left, top)` onto a `border`-colored canvas.
pub fn bordered(
    inner: &RgbaImage,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
    border: Rgba<u8>,
) -> RgbaImage {
    let mut canvas = solid(
        left + inner.width() + right,
        top + inner.height() + bottom,
        border,
    );
    for (x, y, px) in inner.enumerate_pixels() {
        canvas.put_pixel(left + x, top + y, *px);
    }
    canvas
}
