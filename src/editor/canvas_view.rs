//! Interactive paintable grid
//!
//! Renders every cell from the model each frame and applies paint/erase
//! from the mouse. Unset cells draw as white here; the model keeps the
//! unset/white distinction and the export path honors it.

use crate::canvas::PixelGrid;
use crate::color::Rgb;
use crate::ui::{theme, MouseState, Rect};
use macroquad::prelude::*;

/// Draw the editable canvas and apply any painting, returns true if the
/// grid was modified this frame
///
/// Left button paints the selected color, right button erases back to
/// unset. Holding a button drags across cells.
pub fn draw_canvas(rect: Rect, mouse: &MouseState, grid: &mut PixelGrid, selected: Rgb) -> bool {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::CANVAS_BG);

    let size = grid.size();
    let square = rect.centered_square(12.0);
    // Integer cell size keeps the grid lines crisp; the square shrinks to
    // the largest exact multiple.
    let cell_px = (square.w / size as f32).floor().max(1.0);
    let board = Rect::new(square.x, square.y, cell_px * size as f32, cell_px * size as f32);

    for (row, col, cell) in grid.iter() {
        let x = board.x + col as f32 * cell_px;
        let y = board.y + row as f32 * cell_px;
        let fill = match cell {
            Some(color) => color.to_mq_color(),
            None => Rgb::WHITE.to_mq_color(), // unset renders white on screen
        };
        draw_rectangle(x, y, cell_px, cell_px, fill);
        draw_rectangle_lines(x, y, cell_px, cell_px, 1.0, theme::GRID_LINE);
    }

    let painting = mouse.painting(&board);
    let erasing = mouse.right_down && mouse.inside(&board);
    if !painting && !erasing {
        return false;
    }

    let col = ((mouse.x - board.x) / cell_px) as usize;
    let row = ((mouse.y - board.y) / cell_px) as usize;

    // Only report a modification when the cell value actually changes, so
    // holding the button over one cell doesn't re-dirty the document.
    let before = match grid.get(row, col) {
        Ok(cell) => cell,
        Err(_) => return false,
    };
    let after = if painting { Some(selected) } else { None };
    if before == after {
        return false;
    }

    let result = if painting {
        grid.set(row, col, selected)
    } else {
        grid.unset(row, col)
    };
    result.is_ok()
}
