//! UI theme - shared colors and styling constants
//!
//! The calm gray look: light panels, soft borders, dark text.

use macroquad::prelude::Color;

/// Window background
pub const BG_COLOR: Color = Color::new(0.91, 0.91, 0.91, 1.0);

/// Toolbar / panel background
pub const PANEL_COLOR: Color = Color::new(0.86, 0.86, 0.86, 1.0);

/// Canvas backdrop (behind and between cells)
pub const CANVAS_BG: Color = Color::new(0.94, 0.94, 0.94, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.31, 0.31, 0.31, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.55, 0.55, 0.55, 1.0);

/// Status-line error text
pub const TEXT_ERROR: Color = Color::new(0.70, 0.20, 0.20, 1.0);

/// Cell outline in the interactive grid
pub const GRID_LINE: Color = Color::new(0.62, 0.62, 0.62, 1.0);

/// Button fill
pub const BUTTON_COLOR: Color = Color::new(0.80, 0.80, 0.82, 1.0);

/// Button fill on hover
pub const BUTTON_HOVER: Color = Color::new(0.73, 0.75, 0.80, 1.0);

/// Button fill when active/selected
pub const BUTTON_ACTIVE: Color = Color::new(0.60, 0.68, 0.78, 1.0);

/// Border around buttons and swatches
pub const BORDER_COLOR: Color = Color::new(0.45, 0.45, 0.45, 1.0);

/// Highlight around the selected palette swatch
pub const SWATCH_SELECTED: Color = Color::new(0.95, 0.75, 0.10, 1.0);

/// Toolbar height in pixels
pub const TOOLBAR_H: f32 = 36.0;

/// Status bar height in pixels
pub const STATUS_H: f32 = 24.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 16.0;

/// Small/detail text size
pub const FONT_SIZE_SMALL: f32 = 13.0;
