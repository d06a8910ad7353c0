//! # Application State
//!
//! `App` wraps the game with everything the terminal front end needs: the
//! text typed into the count field, the blocking notice, the target
//! placement and the ticker that drives the stopwatch.
//!
//! All state is owned by the UI thread. The ticker thread only sends ticks,
//! which [`App::update`] folds into the stopwatch once per loop iteration.

use crate::config::{GameConfig, MAX_COUNT, MIN_COUNT};
use crate::game::{ClickResult, Outcome, PointsGame, Stage};
use crate::scatter::Scatterer;
use crate::timer::{format_seconds, Ticker};
use std::time::Duration;

/// Which screen is showing; follows the game stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    CountEntry,
    Playing,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    InvalidCount,
    Congratulations,
}

/// A message that blocks all other input until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn invalid_count() -> Self {
        Self {
            kind: NoticeKind::InvalidCount,
            message: format!("Please enter a valid count ({MIN_COUNT}-{MAX_COUNT})."),
        }
    }

    pub fn congratulations(elapsed: Duration) -> Self {
        Self {
            kind: NoticeKind::Congratulations,
            message: format!(
                "Congratulations! You finished in {} seconds.",
                format_seconds(elapsed)
            ),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::InvalidCount => "Invalid count",
            NoticeKind::Congratulations => "Cleared!",
        }
    }
}

/// Summary of a finished round, kept for the exit report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub count: usize,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

pub struct App {
    pub should_quit: bool,
    pub game: PointsGame,
    /// Text typed into the count field
    pub count_input: String,
    pub notice: Option<Notice>,
    pub scatterer: Scatterer,
    /// Most recent finished round
    pub last_round: Option<RoundSummary>,
    ticker: Option<Ticker>,
    tick_interval: Duration,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            game: PointsGame::new(config.tick_interval),
            count_input: String::new(),
            notice: None,
            scatterer: Scatterer::new(config.play_area, config.layout_mode, config.seed),
            last_round: None,
            ticker: None,
            tick_interval: config.tick_interval,
        };

        if let Some(count) = &config.initial_count {
            app.count_input = count.clone();
            app.start_game();
        }

        app
    }

    pub fn mode(&self) -> AppMode {
        match self.game.stage() {
            Stage::Idle => AppMode::CountEntry,
            Stage::Playing => AppMode::Playing,
            Stage::Ended(_) => AppMode::Ended,
        }
    }

    /// Called once per loop iteration before drawing
    pub fn update(&mut self) {
        self.sync_clock();
        if self.game.is_playing() {
            self.scatterer.refresh();
        }
    }

    /// Moves every delivered tick into the stopwatch
    fn sync_clock(&mut self) {
        if let Some(ticker) = &self.ticker {
            let ticks = ticker.drain();
            self.game.advance(ticks);
        }
    }

    pub fn push_input_char(&mut self, c: char) {
        // Long enough for any count worth typing
        if self.count_input.chars().count() < 8 {
            self.count_input.push(c);
        }
    }

    pub fn pop_input_char(&mut self) {
        self.count_input.pop();
    }

    /// Starts a round with the typed count, or raises the invalid-count notice
    pub fn start_game(&mut self) {
        match self.game.start_from_input(&self.count_input) {
            Ok(count) => {
                self.scatterer.place(count as usize);
                self.stop_ticker();
                self.ticker = Some(Ticker::start(self.tick_interval));
            }
            Err(err) => {
                tracing::warn!(input = %self.count_input, error = %err, "count rejected");
                self.notice = Some(Notice::invalid_count());
            }
        }
    }

    /// Clicks the target showing `number`
    pub fn click_number(&mut self, number: u32) -> ClickResult {
        // Ticks that arrived before the click still count
        self.sync_clock();

        let result = self.game.click(number);
        match result {
            ClickResult::Cleared { elapsed } => {
                self.finish_round(Outcome::Cleared);
                self.notice = Some(Notice::congratulations(elapsed));
            }
            ClickResult::WrongNumber { expected, clicked } => {
                self.finish_round(Outcome::WrongNumber { expected, clicked });
            }
            ClickResult::Advanced { .. } | ClickResult::Ignored(_) => {}
        }
        result
    }

    /// Clicks the uncleared target drawn on top at the play-area cell `(col, row)`
    pub fn click_cell(&mut self, col: u16, row: u16) -> Option<ClickResult> {
        let cleared = self.game.progress().len();
        let index = self.scatterer.target_at(cleared, col, row)?;
        Some(self.click_number(index as u32 + 1))
    }

    fn finish_round(&mut self, outcome: Outcome) {
        self.stop_ticker();
        self.last_round = Some(RoundSummary {
            count: self.game.count(),
            outcome,
            elapsed: self.game.elapsed(),
        });
    }

    /// Back to the count prompt
    pub fn restart(&mut self) {
        self.stop_ticker();
        self.game.restart();
        self.count_input.clear();
        self.scatterer.clear();
        self.notice = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_running)
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    /// Elapsed time as shown in the status line
    pub fn elapsed_display(&self) -> String {
        self.game.stopwatch().display()
    }

    /// Stops the ticker before the process exits
    pub fn shutdown(&mut self) {
        self.stop_ticker();
    }
}
