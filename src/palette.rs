//! Fixed color palettes per grid size
//!
//! Each supported grid size ships a palette of the same length as its side:
//! 8 colors for 8x8, 16 for 16x16, 32 for 32x32. The lists are the classic
//! ones, duplicates included. Lookup for any other size is an error; the UI
//! decides how to degrade (it falls back to the 8-color list and says so in
//! the status line).

use crate::color::Rgb;
use std::fmt;

/// Error type for palette lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    UnsupportedGridSize(usize),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::UnsupportedGridSize(size) => {
                write!(f, "no palette configured for grid size {}", size)
            }
        }
    }
}

impl std::error::Error for PaletteError {}

/// Grid sizes offered by the UI, each with a configured palette
pub const SUPPORTED_SIZES: &[usize] = &[8, 16, 32];

pub const PALETTE_8: [Rgb; 8] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0xFF, 0xFF, 0x00),
    Rgb::new(0xFF, 0x00, 0xFF),
    Rgb::new(0x00, 0xFF, 0xFF),
];

pub const PALETTE_16: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0xFF, 0xFF, 0x00),
    Rgb::new(0xFF, 0x00, 0xFF),
    Rgb::new(0x00, 0xFF, 0xFF),
    Rgb::new(0x80, 0x00, 0x00),
    Rgb::new(0x80, 0x80, 0x00),
    Rgb::new(0x80, 0x00, 0x80),
    Rgb::new(0x00, 0x80, 0x80),
    Rgb::new(0xC0, 0xC0, 0xC0),
    Rgb::new(0x80, 0x80, 0x80),
    Rgb::new(0xFF, 0x80, 0x80),
    Rgb::new(0x80, 0xFF, 0x80),
];

pub const PALETTE_32: [Rgb; 32] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0xFF, 0xFF, 0x00),
    Rgb::new(0xFF, 0x00, 0xFF),
    Rgb::new(0x00, 0xFF, 0xFF),
    Rgb::new(0x80, 0x00, 0x00),
    Rgb::new(0x80, 0x80, 0x00),
    Rgb::new(0x80, 0x00, 0x80),
    Rgb::new(0x00, 0x80, 0x80),
    Rgb::new(0xC0, 0xC0, 0xC0),
    Rgb::new(0x80, 0x80, 0x80),
    Rgb::new(0xFF, 0x80, 0x80),
    Rgb::new(0x80, 0xFF, 0x80),
    Rgb::new(0x00, 0x80, 0x00),
    Rgb::new(0x00, 0x00, 0x80),
    Rgb::new(0x80, 0x80, 0xFF),
    Rgb::new(0x80, 0x00, 0x80),
    Rgb::new(0x80, 0x80, 0xFF),
    Rgb::new(0x80, 0x00, 0x80),
    Rgb::new(0x80, 0x00, 0x00),
    Rgb::new(0x00, 0xFF, 0x80),
    Rgb::new(0xFF, 0x80, 0x00),
    Rgb::new(0x80, 0xFF, 0x00),
    Rgb::new(0xFF, 0x00, 0x80),
    Rgb::new(0x80, 0xFF, 0x80),
    Rgb::new(0xFF, 0xFF, 0x80),
    Rgb::new(0x80, 0xFF, 0xFF),
    Rgb::new(0xFF, 0x80, 0xFF),
    Rgb::new(0xFF, 0x80, 0x80),
];

/// Look up the palette configured for a grid size
pub fn palette_for(size: usize) -> Result<&'static [Rgb], PaletteError> {
    match size {
        8 => Ok(&PALETTE_8),
        16 => Ok(&PALETTE_16),
        32 => Ok(&PALETTE_32),
        _ => Err(PaletteError::UnsupportedGridSize(size)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_sizes() {
        for &size in SUPPORTED_SIZES {
            let palette = palette_for(size).unwrap();
            assert_eq!(palette.len(), size);
        }
    }

    #[test]
    fn test_palettes_share_base_colors() {
        // The larger palettes extend the smaller ones in order
        assert_eq!(&PALETTE_16[..8], &PALETTE_8[..]);
        assert_eq!(&PALETTE_32[..16], &PALETTE_16[..]);
    }

    #[test]
    fn test_unsupported_size() {
        assert_eq!(
            palette_for(24).unwrap_err(),
            PaletteError::UnsupportedGridSize(24)
        );
        assert!(palette_for(0).is_err());
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(PALETTE_8[0], Rgb::BLACK);
        assert_eq!(PALETTE_8[1], Rgb::WHITE);
        assert_eq!(PALETTE_16[12], Rgb::new(0xC0, 0xC0, 0xC0));
    }
}
