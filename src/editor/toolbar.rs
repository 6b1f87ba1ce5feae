//! Toolbar: file commands and grid size switching
//!
//! The toolbar only reports what was clicked; the command handling (and any
//! file dialogs) happens in AppState so that every mutation goes through
//! one place.

use crate::app::AppState;
use crate::palette::SUPPORTED_SIZES;
use crate::ui::{text_button, text_button_active, theme, MouseState, Rect};
use macroquad::prelude::*;

/// Commands the toolbar can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    NewProject,
    OpenProject,
    SaveProject,
    SaveProjectAs,
    ExportPng,
    ClearCanvas,
    SetGridSize(usize),
}

/// Simple left-to-right button layout within the toolbar strip
struct ToolbarCursor {
    rect: Rect,
    cursor_x: f32,
    spacing: f32,
}

impl ToolbarCursor {
    fn new(rect: Rect) -> Self {
        Self {
            rect,
            cursor_x: rect.x + 6.0,
            spacing: 6.0,
        }
    }

    fn button_rect(&mut self, width: f32) -> Rect {
        let r = Rect::new(
            self.cursor_x.round(),
            (self.rect.y + 4.0).round(),
            width,
            self.rect.h - 8.0,
        );
        self.cursor_x += width + self.spacing;
        r
    }

    fn separator(&mut self) {
        self.cursor_x += self.spacing;
        draw_line(
            self.cursor_x,
            self.rect.y + 6.0,
            self.cursor_x,
            self.rect.bottom() - 6.0,
            1.0,
            theme::BORDER_COLOR,
        );
        self.cursor_x += self.spacing * 2.0;
    }

    fn label(&mut self, text: &str, color: Color) {
        let dims = measure_text(text, None, theme::FONT_SIZE_CONTENT as u16, 1.0);
        let text_y = (self.rect.y + (self.rect.h + dims.height) * 0.5).round();
        draw_text(text, self.cursor_x.round(), text_y, theme::FONT_SIZE_CONTENT, color);
        self.cursor_x += dims.width + self.spacing;
    }
}

/// Draw the toolbar, returning the clicked command if any
pub fn draw_toolbar(rect: Rect, mouse: &MouseState, app: &AppState) -> Option<ToolbarAction> {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::PANEL_COLOR);
    draw_line(rect.x, rect.bottom(), rect.right(), rect.bottom(), 1.0, theme::BORDER_COLOR);

    let mut bar = ToolbarCursor::new(rect);
    let mut action = None;

    if text_button(mouse, bar.button_rect(52.0), "New") {
        action = Some(ToolbarAction::NewProject);
    }
    if text_button(mouse, bar.button_rect(58.0), "Open") {
        action = Some(ToolbarAction::OpenProject);
    }
    if text_button(mouse, bar.button_rect(56.0), "Save") {
        action = Some(ToolbarAction::SaveProject);
    }
    if text_button(mouse, bar.button_rect(80.0), "Save As") {
        action = Some(ToolbarAction::SaveProjectAs);
    }
    if text_button(mouse, bar.button_rect(90.0), "Export PNG") {
        action = Some(ToolbarAction::ExportPng);
    }

    bar.separator();

    if text_button(mouse, bar.button_rect(58.0), "Clear") {
        action = Some(ToolbarAction::ClearCanvas);
    }

    bar.separator();
    bar.label("Grid:", theme::TEXT_DIM);

    for &size in SUPPORTED_SIZES {
        let label = format!("{}", size);
        let is_current = app.grid.size() == size;
        if text_button_active(mouse, bar.button_rect(40.0), &label, is_current) && !is_current {
            action = Some(ToolbarAction::SetGridSize(size));
        }
    }

    bar.separator();
    let doc = match &app.project_path {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            if app.dirty {
                format!("{} *", name)
            } else {
                name
            }
        }
        None if app.dirty => "untitled *".to_string(),
        None => "untitled".to_string(),
    };
    bar.label(&doc, theme::TEXT_COLOR);

    action
}
