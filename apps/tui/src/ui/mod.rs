// UI module for channelscope
// Handles all UI rendering functions

pub mod render;
pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Rows taken by the header, nav tabs, and footer; the rest of the frame
/// is the scrolling content viewport.
pub const CHROME_ROWS: u16 = 3;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    render::render_dashboard(app, f);
}
