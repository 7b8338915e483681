//! # ANSI Block Rendering
//!
//! Prints an image as truecolor terminal cells, one cell per detected block.
//!
//! Each cell is two full-block glyphs (`██`) so that a square block looks
//! roughly square in a terminal whose character cells are about twice as tall
//! as they are wide. The foreground color is set with the 24-bit SGR sequence
//! `ESC[38;2;R;G;Bm`. Blocks matching the transparent color become two
//! spaces, and every output row ends with `ESC[0m` and a newline.
//!
//! The block color is sampled from the block's top-left pixel.

use std::io::{self, Write};

use block_scan::{BlockSize, BoundingBox, Color, PixelGrid, crop_bounds};
use tracing::{debug, warn};

/// Glyph pair written for an opaque block.
pub const BLOCK_GLYPH: &str = "██";
/// Written in place of a block that matches the transparent color.
pub const BLANK_CELL: &str = "  ";
/// Resets terminal colors at the end of each row.
pub const RESET: &str = "\x1b[0m";

/// Everything the renderer needs beyond the image and block size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Blocks of this color are left blank.
    pub transparent: Option<Color>,
    /// Trim transparent margins. Ignored without a transparent color.
    pub crop: bool,
    /// Tolerance used for the transparency test and the crop scan.
    pub tolerance: u32,
}

/// Region of `image` that will be rendered under `options`.
///
/// Crops to the non-transparent envelope when cropping is enabled. An image
/// that is transparent everywhere has nothing to crop to, so the full image
/// is used instead.
pub fn visible_bounds<G: PixelGrid>(image: &G, options: &RenderOptions) -> BoundingBox {
    let (width, height) = image.dimensions();
    let full = BoundingBox::full(width, height);

    let transparent = match (options.crop, options.transparent) {
        (true, Some(color)) => color,
        _ => return full,
    };

    match crop_bounds(image, transparent, options.tolerance) {
        Some(bounds) => {
            debug!(?bounds, "cropped to non-transparent region");
            bounds
        }
        None => {
            warn!("image is fully transparent, nothing to crop");
            full
        }
    }
}

/// Write `image` to `out` as ANSI blocks of `block` pixels each.
pub fn render<G: PixelGrid, W: Write>(
    image: &G,
    block: BlockSize,
    options: &RenderOptions,
    out: &mut W,
) -> io::Result<()> {
    let bounds = visible_bounds(image, options);
    let step_x = block.width.max(1) as usize;
    let step_y = block.height.max(1) as usize;

    for y_off in (0..bounds.height()).step_by(step_y) {
        for x_off in (0..bounds.width()).step_by(step_x) {
            let color = image.color_at(bounds.min_x + x_off, bounds.min_y + y_off);
            let transparent = options
                .transparent
                .is_some_and(|t| color.matches(&t, options.tolerance));
            if transparent {
                out.write_all(BLANK_CELL.as_bytes())?;
            } else {
                write!(
                    out,
                    "\x1b[38;2;{};{};{}m{}",
                    color.r, color.g, color.b, BLOCK_GLYPH
                )?;
            }
        }
        writeln!(out, "{}", RESET)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const BG: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const FG: Rgba<u8> = Rgba([255, 16, 1, 255]);

    fn cell(c: Rgba<u8>) -> String {
        format!("\x1b[38;2;{};{};{}m██", c[0], c[1], c[2])
    }

    fn render_to_string(image: &RgbaImage, block: BlockSize, options: &RenderOptions) -> String {
        let mut buf = Vec::new();
        render(image, block, options, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_one_cell_per_block() {
        // 2×2 blocks, 2×1 grid
        let img = RgbaImage::from_fn(4, 2, |x, _| if x < 2 { BG } else { FG });
        let text = render_to_string(&img, BlockSize::new(2, 2), &RenderOptions::default());
        assert_eq!(text, format!("{}{}{}\n", cell(BG), cell(FG), RESET));
    }

    #[test]
    fn test_transparent_blocks_are_blank() {
        let img = RgbaImage::from_fn(2, 1, |x, _| if x == 0 { BG } else { FG });
        let options = RenderOptions {
            transparent: Some(Color::from(BG)),
            ..Default::default()
        };
        let text = render_to_string(&img, BlockSize::new(1, 1), &options);
        assert_eq!(text, format!("  {}{}\n", cell(FG), RESET));
    }

    #[test]
    fn test_crop_trims_margins() {
        let mut img = RgbaImage::from_pixel(5, 4, BG);
        img.put_pixel(2, 1, FG);
        img.put_pixel(3, 2, FG);
        let options = RenderOptions {
            transparent: Some(Color::from(BG)),
            crop: true,
            tolerance: 0,
        };
        assert_eq!(
            visible_bounds(&img, &options),
            BoundingBox {
                min_x: 2,
                min_y: 1,
                max_x: 4,
                max_y: 3,
            }
        );
        let text = render_to_string(&img, BlockSize::new(1, 1), &options);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], format!("{}  {}", cell(FG), RESET));
        assert_eq!(rows[1], format!("  {}{}", cell(FG), RESET));
    }

    #[test]
    fn test_crop_without_transparent_color_is_ignored() {
        let img = RgbaImage::from_pixel(3, 3, BG);
        let options = RenderOptions {
            crop: true,
            ..Default::default()
        };
        assert_eq!(visible_bounds(&img, &options), BoundingBox::full(3, 3));
    }

    #[test]
    fn test_fully_transparent_crop_falls_back_to_full_image() {
        let img = RgbaImage::from_pixel(4, 2, BG);
        let options = RenderOptions {
            transparent: Some(Color::from(BG)),
            crop: true,
            tolerance: 0,
        };
        assert_eq!(visible_bounds(&img, &options), BoundingBox::full(4, 2));
        let text = render_to_string(&img, BlockSize::new(4, 2), &options);
        assert_eq!(text, format!("  {}\n", RESET));
    }

    #[test]
    fn test_partial_trailing_block_is_rendered() {
        // 5 px wide with 2 px blocks: offsets 0, 2, 4
        let img = RgbaImage::from_pixel(5, 1, FG);
        let text = render_to_string(&img, BlockSize::new(2, 1), &RenderOptions::default());
        assert_eq!(text.matches("██").count(), 3);
    }
}
