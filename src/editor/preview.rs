//! Live scaled preview
//!
//! A pure projection of the grid at a few pixels per cell, redrawn every
//! frame. Like the interactive view, unset cells render white here; only
//! the exported PNG carries transparency.

use crate::canvas::PixelGrid;
use crate::color::Rgb;
use crate::ui::{theme, Rect};
use macroquad::prelude::*;

/// Preferred preview scale in pixels per cell
const PREVIEW_SCALE: f32 = 10.0;

pub fn draw_preview(rect: Rect, grid: &PixelGrid) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::PANEL_COLOR);

    let label_h = 22.0;
    draw_text(
        "Preview",
        (rect.x + 8.0).round(),
        (rect.y + 16.0).round(),
        theme::FONT_SIZE_CONTENT,
        theme::TEXT_DIM,
    );

    let inner = rect.remaining_after_top(label_h).pad(8.0);
    let size = grid.size();
    let fit = (inner.w.min(inner.h) / size as f32).floor();
    let scale = fit.min(PREVIEW_SCALE).max(1.0);

    let side = scale * size as f32;
    let x0 = (inner.x + (inner.w - side) * 0.5).round();
    let y0 = (inner.y + (inner.h - side) * 0.5).round();

    draw_rectangle_lines(x0 - 1.0, y0 - 1.0, side + 2.0, side + 2.0, 1.0, theme::BORDER_COLOR);

    for (row, col, cell) in grid.iter() {
        let fill = match cell {
            Some(color) => color.to_mq_color(),
            None => Rgb::WHITE.to_mq_color(),
        };
        draw_rectangle(
            x0 + col as f32 * scale,
            y0 + row as f32 * scale,
            scale,
            scale,
            fill,
        );
    }
}
