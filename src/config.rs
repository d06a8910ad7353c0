//! # Game Configuration
//!
//! Tunables for one session of the game. The `play` binary builds this from
//! its command line arguments; tests build it directly.

use crate::error::ConfigError;
use crate::scatter::{LayoutMode, PlayArea, TARGET_HEIGHT, TARGET_WIDTH};
use std::time::Duration;

/// Smallest count a player may ask for
pub const MIN_COUNT: u32 = 1;
/// Largest count a player may ask for
pub const MAX_COUNT: u32 = 100;

/// Default stopwatch resolution (one hundredth of a second)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);
/// Coarsest stopwatch resolution accepted
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// How often the stopwatch advances while a game is running
    pub tick_interval: Duration,
    /// Size of the area the targets are scattered over
    pub play_area: PlayArea,
    /// Whether targets keep their place or are re-scattered every frame
    pub layout_mode: LayoutMode,
    /// Seed for target placement; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Count typed in advance; the game starts with it right away
    pub initial_count: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            play_area: PlayArea::default(),
            layout_mode: LayoutMode::Fixed,
            seed: None,
            initial_count: None,
        }
    }
}

impl GameConfig {
    /// Checks the values that the command line cannot constrain by type
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval < Duration::from_millis(1) || self.tick_interval > MAX_TICK_INTERVAL {
            return Err(ConfigError::TickInterval);
        }
        if !self.play_area.fits_target() {
            return Err(ConfigError::PlayAreaTooSmall {
                width: self.play_area.width,
                height: self.play_area.height,
                min_width: TARGET_WIDTH,
                min_height: TARGET_HEIGHT,
            });
        }
        Ok(())
    }
}
