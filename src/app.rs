//! Application state and commands
//!
//! One AppState per process, constructed in main and owned by the frame
//! loop. The grid inside it is the single source of truth; panels render
//! from it and route every mutation through the command methods here, so
//! a failed load or export can never leave the document half-changed.

use crate::canvas::PixelGrid;
use crate::color::Rgb;
use crate::editor::ToolbarAction;
use crate::export::{self, DEFAULT_EXPORT_SCALE};
use crate::palette::palette_for;
use crate::project;
use std::path::PathBuf;

/// Main application state
pub struct AppState {
    /// The document being edited
    pub grid: PixelGrid,
    /// Color applied by the paint tool
    pub selected_color: Rgb,
    /// The mixer color under the palette swatches
    pub custom_color: Rgb,
    /// Which custom-color slider is captured by a drag (0=R, 1=G, 2=B)
    pub active_slider: Option<usize>,
    /// Where the current project was last saved/loaded
    pub project_path: Option<PathBuf>,
    /// Unsaved changes since the last save/load
    pub dirty: bool,
    /// Status line text
    pub status: String,
    /// Status line is an error (drawn in the error color)
    pub status_is_error: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            grid: PixelGrid::new(16),
            selected_color: Rgb::BLACK,
            custom_color: Rgb::new(128, 128, 128),
            active_slider: None,
            project_path: None,
            dirty: false,
            status: "Ready - 16x16 grid".to_string(),
            status_is_error: false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_is_error = true;
    }

    /// Dispatch a toolbar command
    pub fn handle(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::NewProject => self.new_project(),
            ToolbarAction::OpenProject => self.open_project(),
            ToolbarAction::SaveProject => self.save_project(),
            ToolbarAction::SaveProjectAs => self.save_project_as(),
            ToolbarAction::ExportPng => self.export_png(),
            ToolbarAction::ClearCanvas => self.clear_canvas(),
            ToolbarAction::SetGridSize(size) => self.set_grid_size(size),
        }
    }

    /// Start over with a blank grid at the current size
    pub fn new_project(&mut self) {
        let had_content = !self.grid.is_blank();
        self.grid.clear();
        self.project_path = None;
        self.dirty = false;
        if had_content {
            self.set_status("New project (previous drawing discarded)");
        } else {
            self.set_status("New project");
        }
    }

    /// Open a `.pix` project chosen in a file dialog
    ///
    /// On any failure the current grid stays exactly as it was.
    pub fn open_project(&mut self) {
        let Some(path) = ask_open_path() else {
            return;
        };
        match project::load(&path) {
            Ok(grid) => {
                let size = grid.size();
                self.grid = grid;
                self.project_path = Some(path);
                self.dirty = false;
                if palette_for(size).is_ok() {
                    self.set_status(format!("Loaded {0}x{0} project", size));
                } else {
                    self.set_status(format!(
                        "Loaded {0}x{0} project (no palette for this size, showing the 8-color one)",
                        size
                    ));
                }
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                self.set_error(format!("Load failed: {}", e));
            }
        }
    }

    /// Save to the current path, or ask for one
    pub fn save_project(&mut self) {
        match &self.project_path {
            Some(path) => {
                let path = path.clone();
                self.save_to(path);
            }
            None => self.save_project_as(),
        }
    }

    /// Save to a path chosen in a file dialog
    pub fn save_project_as(&mut self) {
        let Some(path) = ask_save_path() else {
            return;
        };
        self.save_to(path);
    }

    fn save_to(&mut self, path: PathBuf) {
        match project::save(&self.grid, &path) {
            Ok(()) => {
                self.set_status(format!("Saved {}", path.display()));
                self.project_path = Some(path);
                self.dirty = false;
            }
            Err(e) => {
                eprintln!("Failed to save {}: {}", path.display(), e);
                self.set_error(format!("Save failed: {}", e));
            }
        }
    }

    /// Export a scaled transparent-background PNG
    pub fn export_png(&mut self) {
        let Some(path) = ask_export_path() else {
            return;
        };
        match export::export_png(&self.grid, DEFAULT_EXPORT_SCALE, &path) {
            Ok(()) => {
                let side = self.grid.size() as u32 * DEFAULT_EXPORT_SCALE;
                self.set_status(format!("Exported {}x{} PNG to {}", side, side, path.display()));
            }
            Err(e) => {
                eprintln!("Failed to export {}: {}", path.display(), e);
                self.set_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Reset every cell, keeping size and file association
    pub fn clear_canvas(&mut self) {
        self.grid.clear();
        self.dirty = true;
        self.set_status("Canvas cleared");
    }

    /// Switch grid size; resets all cells to unset
    pub fn set_grid_size(&mut self, size: usize) {
        self.grid.resize(size);
        self.dirty = true;
        self.set_status(format!("Switched to {0}x{0} grid", size));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn ask_open_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PIX project", &["pix"])
        .pick_file()
}

#[cfg(not(target_arch = "wasm32"))]
fn ask_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PIX project", &["pix"])
        .set_file_name("sprite.pix")
        .save_file()
}

#[cfg(not(target_arch = "wasm32"))]
fn ask_export_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PNG image", &["png"])
        .set_file_name("sprite.png")
        .save_file()
}

// The browser build has no filesystem dialogs; file commands are no-ops.
#[cfg(target_arch = "wasm32")]
fn ask_open_path() -> Option<PathBuf> {
    None
}

#[cfg(target_arch = "wasm32")]
fn ask_save_path() -> Option<PathBuf> {
    None
}

#[cfg(target_arch = "wasm32")]
fn ask_export_path() -> Option<PathBuf> {
    None
}
