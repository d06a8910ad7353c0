//! # Input Handling Module
//!
//! Translates key presses into actions on the [`App`]. Mouse events are
//! forwarded to the [`mouse`] module.

use crate::app::{App, AppMode};
use crate::tui::mouse;
use crossterm::event::{KeyCode, MouseEventKind};
use ratatui::layout::Rect;

/// Handles keyboard input based on the current application mode
///
/// A notice swallows every key except the ones that dismiss it.
pub fn handle_key_press(app: &mut App, key_code: KeyCode) {
    if app.has_notice() {
        handle_notice_input(key_code, app);
        return;
    }

    match app.mode() {
        AppMode::CountEntry => handle_count_entry_input(key_code, app),
        AppMode::Playing => handle_ingame_input(key_code, app),
        AppMode::Ended => handle_game_over_input(key_code, app),
    }
}

/// Handles mouse events by delegating to the mouse module
pub fn handle_mouse_event(app: &mut App, kind: MouseEventKind, col: u16, row: u16, terminal_size: Rect) {
    mouse::handle_mouse_event(app, kind, col, row, terminal_size);
}

fn handle_notice_input(key_code: KeyCode, app: &mut App) {
    if matches!(key_code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_notice();
    }
}

/// Characters a number field accepts; anything else is dropped
fn is_number_field_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
}

fn handle_count_entry_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Enter => app.start_game(),
        KeyCode::Backspace => app.pop_input_char(),
        KeyCode::Char(c) if is_number_field_char(c) => app.push_input_char(c),
        _ => {}
    }
}

fn handle_ingame_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('r') => app.restart(),
        _ => {}
    }
}

fn handle_game_over_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Enter | KeyCode::Char('r') => app.restart(),
        _ => {}
    }
}
