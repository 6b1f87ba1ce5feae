//! Palette panel: fixed swatches plus a custom color mixer
//!
//! The swatch list comes from the palette configured for the current grid
//! size. For sizes without a configured palette the panel falls back to the
//! 8-color list (the app reports that in the status line when it happens).
//!
//! The custom mixer is three RGB sliders; slider capture lives in AppState
//! so a drag keeps tracking when the cursor leaves the track.

use crate::app::AppState;
use crate::palette::{palette_for, PALETTE_8};
use crate::ui::{swatch, byte_slider, theme, MouseState, Rect};
use macroquad::prelude::*;

const SWATCHES_PER_ROW: usize = 10;
const SWATCH_SIZE: f32 = 24.0;
const SWATCH_PAD: f32 = 5.0;

pub fn draw_palette_panel(rect: Rect, mouse: &MouseState, app: &mut AppState) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::PANEL_COLOR);

    draw_text(
        "Palette",
        (rect.x + 8.0).round(),
        (rect.y + 16.0).round(),
        theme::FONT_SIZE_CONTENT,
        theme::TEXT_DIM,
    );

    let palette = palette_for(app.grid.size()).unwrap_or(&PALETTE_8);

    let inner = rect.remaining_after_top(22.0).pad(8.0);
    for (i, &color) in palette.iter().enumerate() {
        let row = i / SWATCHES_PER_ROW;
        let col = i % SWATCHES_PER_ROW;
        let r = Rect::new(
            inner.x + col as f32 * (SWATCH_SIZE + SWATCH_PAD),
            inner.y + row as f32 * (SWATCH_SIZE + SWATCH_PAD),
            SWATCH_SIZE,
            SWATCH_SIZE,
        );
        let is_selected = app.selected_color == color;
        if swatch(mouse, r, color.to_mq_color(), is_selected) {
            app.selected_color = color;
        }
    }

    let swatch_rows = palette.len().div_ceil(SWATCHES_PER_ROW);
    let custom_y = inner.y + swatch_rows as f32 * (SWATCH_SIZE + SWATCH_PAD) + 14.0;

    draw_text(
        "Custom",
        inner.x.round(),
        (custom_y + 4.0).round(),
        theme::FONT_SIZE_SMALL,
        theme::TEXT_DIM,
    );

    // Custom color swatch: click to select it for painting
    let custom_rect = Rect::new(inner.x, custom_y + 10.0, SWATCH_SIZE * 1.6, SWATCH_SIZE * 1.6);
    let is_selected = app.selected_color == app.custom_color;
    if swatch(mouse, custom_rect, app.custom_color.to_mq_color(), is_selected) {
        app.selected_color = app.custom_color;
    }

    // RGB sliders
    let sliders_x = custom_rect.right() + 14.0;
    let slider_w = (inner.right() - sliders_x - 40.0).max(60.0);
    let channels = [app.custom_color.r, app.custom_color.g, app.custom_color.b];
    let labels = ["R", "G", "B"];

    if !mouse.left_down {
        app.active_slider = None;
    }

    let mut updated = channels;
    for (i, (&value, label)) in channels.iter().zip(labels).enumerate() {
        let row_y = custom_y + 6.0 + i as f32 * 18.0;
        draw_text(
            label,
            sliders_x.round(),
            (row_y + 10.0).round(),
            theme::FONT_SIZE_SMALL,
            theme::TEXT_COLOR,
        );

        let track = Rect::new(sliders_x + 14.0, row_y, slider_w, 14.0);
        if mouse.left_pressed && mouse.inside(&track) {
            app.active_slider = Some(i);
        }
        let is_active = app.active_slider == Some(i);
        if let Some(new_value) = byte_slider(mouse, track, value, is_active) {
            updated[i] = new_value;
        }

        draw_text(
            &format!("{}", value),
            (track.right() + 6.0).round(),
            (row_y + 10.0).round(),
            theme::FONT_SIZE_SMALL,
            theme::TEXT_DIM,
        );
    }

    if updated != channels {
        let was_selected = app.selected_color == app.custom_color;
        app.custom_color = crate::color::Rgb::new(updated[0], updated[1], updated[2]);
        // Mixing while the custom swatch is selected keeps painting live
        if was_selected {
            app.selected_color = app.custom_color;
        }
    }
}
