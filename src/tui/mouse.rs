//! # Mouse Module
//!
//! Left clicks are the main way to play: they press the Start and Restart
//! buttons and click targets in the play area. Everything else is ignored.

use crate::app::{App, AppMode};
use crate::tui::layout::{contains, ScreenLayout};
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Handle mouse events for the application
pub fn handle_mouse_event(app: &mut App, kind: MouseEventKind, col: u16, row: u16, terminal_size: Rect) {
    if let MouseEventKind::Down(MouseButton::Left) = kind {
        handle_mouse_click(app, col, row, terminal_size);
    }
}

/// Handle mouse click events
fn handle_mouse_click(app: &mut App, col: u16, row: u16, terminal_size: Rect) {
    // Nothing clickable is drawn while the terminal is too small
    if !ScreenLayout::fits(terminal_size, app.scatterer.area(), app.mode()) {
        tracing::debug!(?terminal_size, "click ignored, terminal too small");
        return;
    }

    // Any click dismisses a notice and does nothing else
    if app.has_notice() {
        app.dismiss_notice();
        return;
    }

    let layout = ScreenLayout::compute(terminal_size, app.scatterer.area(), app.mode());

    match app.mode() {
        AppMode::CountEntry => {
            if contains(layout.start_button, col, row) {
                app.start_game();
            }
        }
        AppMode::Playing | AppMode::Ended => {
            if contains(layout.restart_button, col, row) {
                app.restart();
            } else if let Some((x, y)) = layout.to_play_cell(col, row) {
                handle_play_area_click(app, x, y);
            }
        }
    }
}

fn handle_play_area_click(app: &mut App, x: u16, y: u16) {
    if let Some(result) = app.click_cell(x, y) {
        tracing::debug!(x, y, ?result, "target clicked");
    }
}
