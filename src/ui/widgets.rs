//! Basic UI widgets

use super::{theme, MouseState, Rect};
use macroquad::prelude::*;

/// Draw a text button, returns true if clicked
pub fn text_button(mouse: &MouseState, rect: Rect, label: &str) -> bool {
    text_button_active(mouse, rect, label, false)
}

/// Draw a text button with active state highlighting
pub fn text_button_active(mouse: &MouseState, rect: Rect, label: &str, is_active: bool) -> bool {
    let hovered = mouse.inside(&rect);

    let fill = if is_active {
        theme::BUTTON_ACTIVE
    } else if hovered {
        theme::BUTTON_HOVER
    } else {
        theme::BUTTON_COLOR
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, theme::BORDER_COLOR);

    let font_size = theme::FONT_SIZE_CONTENT;
    let dims = measure_text(label, None, font_size as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let text_x = (rect.x + (rect.w - dims.width) * 0.5).round();
    let text_y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(label, text_x, text_y, font_size, theme::TEXT_COLOR);

    mouse.clicked(&rect)
}

/// Draw a color swatch, returns true if clicked
///
/// The selected swatch gets a bright outline so it reads at small sizes.
pub fn swatch(mouse: &MouseState, rect: Rect, color: Color, is_selected: bool) -> bool {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);

    if is_selected {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 3.0, theme::SWATCH_SELECTED);
    } else {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, theme::BORDER_COLOR);
    }

    mouse.clicked(&rect)
}

/// Draw a horizontal value slider (0-255), returns the new value while the
/// mouse is dragging it
///
/// Capture is owned by the caller (which slider is active lives in panel
/// state), so dragging keeps tracking even when the cursor leaves the rect.
pub fn byte_slider(mouse: &MouseState, rect: Rect, value: u8, is_active: bool) -> Option<u8> {
    // Track
    let track_h = 4.0;
    let track_y = rect.y + (rect.h - track_h) * 0.5;
    draw_rectangle(rect.x, track_y, rect.w, track_h, theme::BUTTON_COLOR);
    draw_rectangle_lines(rect.x, track_y, rect.w, track_h, 1.0, theme::BORDER_COLOR);

    // Knob
    let t = value as f32 / 255.0;
    let knob_x = rect.x + t * rect.w;
    let knob_color = if is_active {
        theme::BUTTON_ACTIVE
    } else {
        theme::BORDER_COLOR
    };
    draw_circle(knob_x, rect.y + rect.h * 0.5, 5.0, knob_color);

    if is_active && mouse.left_down {
        let t = ((mouse.x - rect.x) / rect.w).clamp(0.0, 1.0);
        Some((t * 255.0).round() as u8)
    } else {
        None
    }
}
