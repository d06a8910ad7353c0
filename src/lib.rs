//! # Clear The Points
//!
//! The player picks how many numbers to play with, the numbers are scattered
//! over a fixed play area, and they must be clicked in ascending order while a
//! stopwatch runs. One wrong click ends the game.
//!
//! The library holds everything that does not touch the terminal:
//! - [`game`]: the state machine (sequence, progress, game over, stopwatch)
//! - [`timer`]: the stopwatch and the owned periodic tick source
//! - [`scatter`]: target placement and hit testing
//! - [`app`]: UI-level state shared by the input handlers and widgets
//! - [`tui`]: the ratatui/crossterm front end

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod scatter;
pub mod timer;
pub mod tui;

pub use config::{GameConfig, MAX_COUNT, MIN_COUNT};
pub use error::{AppError, ConfigError, CountError};
pub use game::{ClickResult, IgnoreReason, Outcome, PointsGame, Stage};
