//! PNG export
//!
//! Rasterizes the grid into an RGBA bitmap, one axis-aligned block of
//! `cell_px` x `cell_px` pixels per cell, no anti-aliasing. Unset cells
//! become fully transparent blocks; painted cells become fully opaque
//! blocks of their color. White is a painted color like any other, never
//! a background stand-in.

use crate::canvas::PixelGrid;
use image::{ImageFormat, Rgba, RgbaImage};
use std::fmt;
use std::path::Path;

/// Largest allowed output side in pixels
///
/// Caps the bitmap allocation when a large grid meets a large scale.
pub const MAX_OUTPUT_SIDE: u32 = 16_384;

/// Default per-cell scale for exported sprites
pub const DEFAULT_EXPORT_SCALE: u32 = 20;

/// Error type for export operations
#[derive(Debug)]
pub enum ExportError {
    /// Scale factor of zero produces no pixels
    InvalidScale(u32),
    /// Output bitmap would exceed MAX_OUTPUT_SIDE per side
    TooLarge { size: usize, scale: u32 },
    /// PNG encoding or file write failure
    Image(image::ImageError),
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Image(e)
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::InvalidScale(scale) => {
                write!(f, "invalid export scale {}", scale)
            }
            ExportError::TooLarge { size, scale } => {
                write!(
                    f,
                    "export too large: {} cells at {}px per cell exceeds {}px per side",
                    size, scale, MAX_OUTPUT_SIDE
                )
            }
            ExportError::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

/// Rasterize a grid to an RGBA bitmap at `cell_px` pixels per cell
///
/// Output dimensions are `(size * cell_px)` per side. Blocks tile the
/// output exactly.
pub fn rasterize(grid: &PixelGrid, cell_px: u32) -> Result<RgbaImage, ExportError> {
    if cell_px == 0 {
        return Err(ExportError::InvalidScale(cell_px));
    }

    let size = grid.size();
    let side = (size as u64) * (cell_px as u64);
    if side > MAX_OUTPUT_SIDE as u64 {
        return Err(ExportError::TooLarge {
            size,
            scale: cell_px,
        });
    }
    let side = side as u32;

    // New RgbaImage is zeroed: (0,0,0,0), the transparent background
    let mut image = RgbaImage::new(side, side);

    for (row, col, cell) in grid.iter() {
        let color = match cell {
            Some(c) => c,
            None => continue,
        };
        let pixel = Rgba(color.to_rgba());
        let x0 = col as u32 * cell_px;
        let y0 = row as u32 * cell_px;
        for dy in 0..cell_px {
            for dx in 0..cell_px {
                image.put_pixel(x0 + dx, y0 + dy, pixel);
            }
        }
    }

    Ok(image)
}

/// Rasterize and write a PNG to the given path
pub fn export_png<P: AsRef<Path>>(
    grid: &PixelGrid,
    cell_px: u32,
    path: P,
) -> Result<(), ExportError> {
    let image = rasterize(grid, cell_px)?;
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_dimensions() {
        let grid = PixelGrid::new(16);
        let image = rasterize(&grid, 20).unwrap();
        assert_eq!(image.dimensions(), (320, 320));
    }

    #[test]
    fn test_white_is_opaque_unset_is_transparent() {
        let mut grid = PixelGrid::new(8);
        grid.set(0, 0, Rgb::WHITE).unwrap();
        // (0, 1) stays unset

        let image = rasterize(&grid, 4).unwrap();
        // Block (row 0, col 0): every pixel opaque white
        for dy in 0..4 {
            for dx in 0..4 {
                assert_eq!(image.get_pixel(dx, dy).0, [255, 255, 255, 255]);
            }
        }
        // Block (row 0, col 1): every pixel fully transparent
        for dy in 0..4 {
            for dx in 4..8 {
                assert_eq!(image.get_pixel(dx, dy).0, [0, 0, 0, 0]);
            }
        }
    }

    #[test]
    fn test_blocks_tile_exactly() {
        let mut grid = PixelGrid::new(2);
        grid.set(0, 0, Rgb::new(255, 0, 0)).unwrap();
        grid.set(1, 1, Rgb::new(0, 0, 255)).unwrap();

        let image = rasterize(&grid, 3).unwrap();
        assert_eq!(image.dimensions(), (6, 6));
        // Block interiors and edges, no bleed across the 3px boundary
        assert_eq!(image.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(3, 2).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(2, 3).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(3, 3).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(5, 5).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_scale_one_maps_cell_to_pixel() {
        let mut grid = PixelGrid::new(8);
        grid.set(2, 3, Rgb::new(255, 0, 0)).unwrap();

        let image = rasterize(&grid, 1).unwrap();
        assert_eq!(image.dimensions(), (8, 8));
        for y in 0..8 {
            for x in 0..8 {
                let expected = if (y, x) == (2, 3) {
                    [255, 0, 0, 255]
                } else {
                    [0, 0, 0, 0]
                };
                assert_eq!(image.get_pixel(x, y).0, expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_zero_scale_rejected() {
        let grid = PixelGrid::new(8);
        assert!(matches!(
            rasterize(&grid, 0).unwrap_err(),
            ExportError::InvalidScale(0)
        ));
    }

    #[test]
    fn test_oversized_output_rejected() {
        let grid = PixelGrid::new(32);
        let err = rasterize(&grid, 1024).unwrap_err();
        assert!(matches!(err, ExportError::TooLarge { .. }));
    }

    #[test]
    fn test_paint_save_load_export_pipeline() {
        let mut grid = PixelGrid::new(8);
        grid.set(2, 3, Rgb::new(255, 0, 0)).unwrap();

        let text = crate::project::encode(&grid).unwrap();
        let loaded = crate::project::decode(&text).unwrap();
        let image = rasterize(&loaded, 1).unwrap();

        assert_eq!(image.dimensions(), (8, 8));
        for y in 0..8 {
            for x in 0..8 {
                let expected = if (y, x) == (2, 3) {
                    [255, 0, 0, 255]
                } else {
                    [0, 0, 0, 0]
                };
                assert_eq!(image.get_pixel(x, y).0, expected);
            }
        }
    }

    #[test]
    fn test_export_png_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sprite.png");

        let mut grid = PixelGrid::new(4);
        grid.set(1, 2, Rgb::new(10, 200, 30)).unwrap();
        export_png(&grid, 5, &path).unwrap();

        // Decode it back and spot-check
        let bytes = std::fs::read(&path).unwrap();
        let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (20, 20));
        assert_eq!(image.get_pixel(12, 7).0, [10, 200, 30, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }
}
