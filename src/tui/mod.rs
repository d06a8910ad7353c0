//! # Terminal User Interface Module
//!
//! The terminal front end, built on Ratatui with the crossterm backend.
//!
//! ## Key Components
//! - **Terminal Management**: raw mode, alternate screen and mouse capture
//! - **Event Loop**: drains the ticker, draws, then waits briefly for input
//! - **Input Processing**: keyboard in [`input`], mouse clicks in [`mouse`]
//! - **Widget Rendering**: [`widgets`], positioned by [`layout`]

use crate::app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{io, time::Duration};

pub mod input;
pub mod layout;
pub mod mouse;
pub mod widgets;

/// How long one loop iteration waits for input; also the redraw rate of the clock
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the event loop until the player quits and
/// restores the terminal afterwards, also when the loop failed.
///
/// # Errors
/// Returns an error if terminal setup, drawing, event handling or cleanup fails
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, app);
    app.shutdown();
    restore_terminal(&mut terminal)?;
    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        if app.should_quit {
            return Ok(());
        }

        app.update();

        terminal.draw(|f| widgets::render(app, f))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                        app.should_quit = true;
                        continue;
                    }
                    input::handle_key_press(app, key.code);
                }
                Event::Mouse(mouse) => {
                    let terminal_size = terminal.size()?;
                    let terminal_rect = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    input::handle_mouse_event(app, mouse.kind, mouse.column, mouse.row, terminal_rect);
                }
                _ => {}
            }
        }
    }
}

/// Initializes the terminal for raw mode operation
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to normal operation mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal.show_cursor()?;
    disable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    Ok(())
}
