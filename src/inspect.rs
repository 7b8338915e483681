//! Block and grid dimensions reported by `pixel2ansi inspect`.

use std::fmt;

use block_scan::BlockSize;

/// Result of inspecting one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InspectReport {
    pub image_width: u32,
    pub image_height: u32,
    pub block: BlockSize,
    /// Whole blocks per row.
    pub grid_width: u32,
    /// Whole blocks per column.
    pub grid_height: u32,
}

impl InspectReport {
    pub fn new(image_width: u32, image_height: u32, block: BlockSize) -> Self {
        let (grid_width, grid_height) = block.grid_dimensions(image_width, image_height);
        Self {
            image_width,
            image_height,
            block,
            grid_width,
            grid_height,
        }
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Block size: {}x{} pixels",
            self.block.width, self.block.height
        )?;
        write!(
            f,
            "Grid size: {}x{} pixels",
            self.grid_width, self.grid_height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_output() {
        let report = InspectReport::new(64, 48, BlockSize::new(8, 4));
        assert_eq!((report.grid_width, report.grid_height), (8, 12));
        assert_eq!(
            report.to_string(),
            "Block size: 8x4 pixels\nGrid size: 8x12 pixels"
        );
    }
}
