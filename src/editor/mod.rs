//! Editor panels
//!
//! Each panel is a draw function called once per frame: it renders from the
//! current model state and reports interactions back through its return
//! value. Nothing here retains a copy of the grid.

mod canvas_view;
mod palette_panel;
mod preview;
mod toolbar;

pub use canvas_view::draw_canvas;
pub use palette_panel::draw_palette_panel;
pub use preview::draw_preview;
pub use toolbar::{draw_toolbar, ToolbarAction};
