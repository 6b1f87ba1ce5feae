//! Pixelpad: a calm little pixel sprite editor
//!
//! An NxN grid of paintable cells with a live scaled preview, fixed
//! palettes per grid size, `.pix` (JSON) project files, and transparent-
//! background PNG export. Single document, single thread: every command
//! runs to completion before the next frame.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod canvas;
mod color;
mod editor;
mod export;
mod palette;
mod project;
mod ui;

use app::AppState;
use editor::{draw_canvas, draw_palette_panel, draw_preview, draw_toolbar, ToolbarAction};
use macroquad::prelude::*;
use ui::{theme, MouseState, Rect};

/// Width of the right-hand column (preview + palette)
const SIDE_PANEL_W: f32 = 340.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Pixelpad v{}", VERSION),
        window_width: 960,
        window_height: 640,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging first (native only)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let mut app = AppState::new();

    loop {
        let mouse = MouseState::capture();
        clear_background(theme::BG_COLOR);

        let screen = Rect::screen(screen_width(), screen_height());
        let toolbar_rect = screen.slice_top(theme::TOOLBAR_H);
        let status_rect = screen.slice_bottom(theme::STATUS_H);
        let content = screen
            .remaining_after_top(theme::TOOLBAR_H)
            .remaining_after_bottom(theme::STATUS_H);
        let (canvas_rect, side_rect) = content.split_right_px(SIDE_PANEL_W);
        let preview_rect = side_rect.slice_top(side_rect.h * 0.45);
        let palette_rect = side_rect.remaining_after_top(side_rect.h * 0.45);

        let mut action = draw_toolbar(toolbar_rect, &mouse, &app);
        if action.is_none() {
            action = shortcut_action();
        }

        if draw_canvas(canvas_rect, &mouse, &mut app.grid, app.selected_color) {
            app.dirty = true;
        }
        draw_preview(preview_rect, &app.grid);
        draw_palette_panel(palette_rect, &mouse, &mut app);
        draw_status(status_rect, &app);

        if let Some(action) = action {
            app.handle(action);
        }

        next_frame().await;
    }
}

/// Keyboard shortcuts for the file commands
fn shortcut_action() -> Option<ToolbarAction> {
    let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
    if !ctrl {
        return None;
    }

    if is_key_pressed(KeyCode::N) {
        Some(ToolbarAction::NewProject)
    } else if is_key_pressed(KeyCode::O) {
        Some(ToolbarAction::OpenProject)
    } else if is_key_pressed(KeyCode::S) && shift {
        Some(ToolbarAction::SaveProjectAs)
    } else if is_key_pressed(KeyCode::S) {
        Some(ToolbarAction::SaveProject)
    } else if is_key_pressed(KeyCode::E) {
        Some(ToolbarAction::ExportPng)
    } else {
        None
    }
}

/// Bottom status line
fn draw_status(rect: Rect, app: &AppState) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::PANEL_COLOR);
    draw_line(rect.x, rect.y, rect.right(), rect.y, 1.0, theme::BORDER_COLOR);

    let color = if app.status_is_error {
        theme::TEXT_ERROR
    } else {
        theme::TEXT_COLOR
    };
    draw_text(
        &app.status,
        (rect.x + 8.0).round(),
        (rect.y + rect.h - 7.0).round(),
        theme::FONT_SIZE_SMALL,
        color,
    );
}
