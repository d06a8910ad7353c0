//! # Error Types
//!
//! Count validation is the only error the game itself can produce. The rest
//! covers configuration and the terminal front end.

use crate::config::{MAX_COUNT, MIN_COUNT};
use thiserror::Error;

/// Why a typed count was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    #[error("no count was entered")]
    Empty,
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("{0} is outside the allowed range {}-{}", MIN_COUNT, MAX_COUNT)]
    OutOfRange(i64),
}

/// Invalid command line configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick interval must be between 1ms and 1000ms")]
    TickInterval,
    #[error("play area {width}x{height} cannot hold a {min_width}x{min_height} target")]
    PlayAreaTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}

/// Top-level error of the `play` binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not install the log subscriber: {0}")]
    Log(#[from] tracing::subscriber::SetGlobalDefaultError),
}
