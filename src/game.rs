//! # Game Module - Sequence State Machine
//!
//! `PointsGame` is the single source of truth for one round:
//!
//! ```text
//!   Idle ──start(n)──▶ Playing ──last correct click──▶ Ended(Cleared)
//!    ▲                    │
//!    │                    └──────wrong click─────────▶ Ended(WrongNumber)
//!    └──────────────────restart()──────────────────────────┘
//! ```
//!
//! The sequence is always `1..=count`; only the on-screen position of each
//! number is random, and that lives in [`crate::scatter`]. The stopwatch only
//! advances while the stage is `Playing`, so its value is frozen the moment
//! the round ends.

use crate::config::{MAX_COUNT, MIN_COUNT};
use crate::error::CountError;
use crate::timer::Stopwatch;
use std::time::Duration;

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every number was clicked in order
    Cleared,
    /// A number was clicked out of order
    WrongNumber { expected: u32, clicked: u32 },
}

/// Where the round currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Playing,
    Ended(Outcome),
}

/// Why a click did not change anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No round is running
    NotPlaying,
    /// The number was already cleared; its button is disabled
    AlreadyCleared,
}

/// Result of clicking a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// Correct number, more to go
    Advanced { next: u32 },
    /// Correct number and it was the last one
    Cleared { elapsed: Duration },
    /// Out of order; the round is over
    WrongNumber { expected: u32, clicked: u32 },
    /// Nothing happened
    Ignored(IgnoreReason),
}

/// Parses a typed count the way a lenient number field does
///
/// Leading whitespace and an optional sign are accepted and parsing stops at
/// the first non-digit, so `"12abc"` is 12. Text that does not start with a
/// number is rejected.
pub fn parse_count(text: &str) -> Result<u32, CountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CountError::Empty);
    }

    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(CountError::NotANumber(trimmed.to_string()));
    }

    // Anything too long for an i64 is out of range either way
    let magnitude: i64 = digits[..end].parse().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };

    if value < MIN_COUNT as i64 || value > MAX_COUNT as i64 {
        return Err(CountError::OutOfRange(value));
    }
    Ok(value as u32)
}

/// One round of the game
#[derive(Debug, Clone)]
pub struct PointsGame {
    stage: Stage,
    /// Numbers to click, always `1..=count` while a round exists
    sequence: Vec<u32>,
    /// Prefix of `sequence` clicked so far
    progress: Vec<u32>,
    stopwatch: Stopwatch,
}

impl PointsGame {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            stage: Stage::Idle,
            sequence: Vec::new(),
            progress: Vec::new(),
            stopwatch: Stopwatch::new(tick_interval),
        }
    }

    /// Starts a round with `count` numbers
    ///
    /// An out-of-range count leaves the game untouched.
    pub fn start(&mut self, count: u32) -> Result<(), CountError> {
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(CountError::OutOfRange(count as i64));
        }

        self.sequence = (1..=count).collect();
        self.progress.clear();
        self.stopwatch.reset();
        self.stage = Stage::Playing;
        tracing::info!(count, "round started");
        Ok(())
    }

    /// Parses `text` and starts a round with it
    pub fn start_from_input(&mut self, text: &str) -> Result<u32, CountError> {
        let count = parse_count(text)?;
        self.start(count)?;
        Ok(count)
    }

    /// Handles a click on the target showing `number`
    pub fn click(&mut self, number: u32) -> ClickResult {
        if self.stage != Stage::Playing {
            return ClickResult::Ignored(IgnoreReason::NotPlaying);
        }
        if self.is_cleared_number(number) {
            return ClickResult::Ignored(IgnoreReason::AlreadyCleared);
        }

        let expected = self.sequence[self.progress.len()];
        if number != expected {
            self.stage = Stage::Ended(Outcome::WrongNumber {
                expected,
                clicked: number,
            });
            tracing::info!(
                expected,
                clicked = number,
                elapsed = %self.stopwatch.display(),
                "wrong number, round over"
            );
            return ClickResult::WrongNumber {
                expected,
                clicked: number,
            };
        }

        self.progress.push(number);
        if self.progress.len() == self.sequence.len() {
            self.stage = Stage::Ended(Outcome::Cleared);
            tracing::info!(
                count = self.sequence.len(),
                elapsed = %self.stopwatch.display(),
                "all numbers cleared"
            );
            return ClickResult::Cleared {
                elapsed: self.stopwatch.elapsed(),
            };
        }

        tracing::trace!(number, "correct number");
        ClickResult::Advanced {
            next: self.sequence[self.progress.len()],
        }
    }

    /// Advances the stopwatch by one tick if a round is running
    pub fn tick(&mut self) {
        self.advance(1);
    }

    /// Advances the stopwatch by `ticks` if a round is running
    pub fn advance(&mut self, ticks: u64) {
        if self.stage == Stage::Playing {
            self.stopwatch.advance(ticks);
        }
    }

    /// Back to the count prompt with everything cleared
    pub fn restart(&mut self) {
        self.sequence.clear();
        self.progress.clear();
        self.stopwatch.reset();
        self.stage = Stage::Idle;
        tracing::info!("restarted");
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn sequence(&self) -> &[u32] {
        &self.sequence
    }

    pub fn progress(&self) -> &[u32] {
        &self.progress
    }

    pub fn count(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_playing(&self) -> bool {
        self.stage == Stage::Playing
    }

    /// True once a number was clicked out of order
    pub fn is_game_over(&self) -> bool {
        matches!(self.stage, Stage::Ended(Outcome::WrongNumber { .. }))
    }

    /// True once the whole sequence was clicked
    pub fn is_cleared(&self) -> bool {
        self.stage == Stage::Ended(Outcome::Cleared)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.stage {
            Stage::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The number that has to be clicked next, if a round is running
    pub fn next_expected(&self) -> Option<u32> {
        if self.stage != Stage::Playing {
            return None;
        }
        self.sequence.get(self.progress.len()).copied()
    }

    /// Progress is a prefix of the sequence, so cleared numbers are exactly
    /// those up to the progress length.
    pub fn is_cleared_number(&self, number: u32) -> bool {
        number >= 1 && (number as usize) <= self.progress.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> PointsGame {
        PointsGame::new(Duration::from_millis(10))
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1"), Ok(1));
        assert_eq!(parse_count("100"), Ok(100));
        assert_eq!(parse_count("  42 "), Ok(42));
        assert_eq!(parse_count("+7"), Ok(7));
        assert_eq!(parse_count("12abc"), Ok(12));
        assert_eq!(parse_count("5.9"), Ok(5));
    }

    #[test]
    fn test_parse_count_rejects() {
        assert_eq!(parse_count(""), Err(CountError::Empty));
        assert_eq!(parse_count("   "), Err(CountError::Empty));
        assert_eq!(
            parse_count("abc"),
            Err(CountError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_count("-"), Err(CountError::NotANumber("-".to_string())));
        assert_eq!(parse_count("0"), Err(CountError::OutOfRange(0)));
        assert_eq!(parse_count("-3"), Err(CountError::OutOfRange(-3)));
        assert_eq!(parse_count("101"), Err(CountError::OutOfRange(101)));
        assert_eq!(
            parse_count("99999999999999999999999"),
            Err(CountError::OutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_start_builds_sequence() {
        let mut game = new_game();
        assert_eq!(game.stage(), Stage::Idle);

        game.start(5).unwrap();
        assert_eq!(game.stage(), Stage::Playing);
        assert_eq!(game.sequence(), &[1, 2, 3, 4, 5]);
        assert!(game.progress().is_empty());
        assert_eq!(game.next_expected(), Some(1));
    }

    #[test]
    fn test_start_rejects_out_of_range() {
        let mut game = new_game();
        assert_eq!(game.start(0), Err(CountError::OutOfRange(0)));
        assert_eq!(game.start(101), Err(CountError::OutOfRange(101)));
        assert_eq!(game.stage(), Stage::Idle);
        assert!(game.sequence().is_empty());
    }

    #[test]
    fn test_invalid_input_leaves_running_round_alone() {
        let mut game = new_game();
        game.start(3).unwrap();
        game.click(1);
        game.advance(12);

        assert!(game.start_from_input("nope").is_err());
        assert_eq!(game.stage(), Stage::Playing);
        assert_eq!(game.progress(), &[1]);
        assert_eq!(game.stopwatch().ticks(), 12);
    }

    #[test]
    fn test_clicks_in_order_clear_the_round() {
        let mut game = new_game();
        game.start(3).unwrap();

        assert_eq!(game.click(1), ClickResult::Advanced { next: 2 });
        game.advance(50);
        assert_eq!(game.click(2), ClickResult::Advanced { next: 3 });
        game.advance(25);
        assert_eq!(
            game.click(3),
            ClickResult::Cleared {
                elapsed: Duration::from_millis(750)
            }
        );
        assert!(game.is_cleared());
        assert!(!game.is_game_over());
        assert_eq!(game.progress(), game.sequence());
        assert_eq!(game.next_expected(), None);
    }

    #[test]
    fn test_wrong_click_ends_round() {
        let mut game = new_game();
        game.start(4).unwrap();
        game.click(1);
        game.advance(10);

        assert_eq!(
            game.click(3),
            ClickResult::WrongNumber {
                expected: 2,
                clicked: 3
            }
        );
        assert!(game.is_game_over());
        assert!(!game.is_cleared());
        assert_eq!(
            game.outcome(),
            Some(Outcome::WrongNumber {
                expected: 2,
                clicked: 3
            })
        );
        assert_eq!(game.progress(), &[1]);
    }

    #[test]
    fn test_number_outside_sequence_is_wrong() {
        let mut game = new_game();
        game.start(2).unwrap();
        assert_eq!(
            game.click(9),
            ClickResult::WrongNumber {
                expected: 1,
                clicked: 9
            }
        );
    }

    #[test]
    fn test_cleared_number_click_is_ignored() {
        let mut game = new_game();
        game.start(3).unwrap();
        game.click(1);
        assert_eq!(
            game.click(1),
            ClickResult::Ignored(IgnoreReason::AlreadyCleared)
        );
        assert_eq!(game.stage(), Stage::Playing);
        assert_eq!(game.progress(), &[1]);
    }

    #[test]
    fn test_clicks_after_end_are_ignored() {
        let mut game = new_game();
        game.start(2).unwrap();
        game.click(2);
        assert_eq!(game.click(1), ClickResult::Ignored(IgnoreReason::NotPlaying));

        let mut idle = new_game();
        assert_eq!(idle.click(1), ClickResult::Ignored(IgnoreReason::NotPlaying));
    }

    #[test]
    fn test_timer_frozen_after_end() {
        let mut game = new_game();
        game.start(2).unwrap();
        game.advance(40);
        game.click(2);
        let frozen = game.elapsed();

        game.advance(1000);
        game.tick();
        assert_eq!(game.elapsed(), frozen);

        let mut cleared = new_game();
        cleared.start(1).unwrap();
        cleared.advance(8);
        cleared.click(1);
        cleared.advance(500);
        assert_eq!(cleared.elapsed(), Duration::from_millis(80));
    }

    #[test]
    fn test_timer_idle_does_not_run() {
        let mut game = new_game();
        game.advance(100);
        assert_eq!(game.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = new_game();
        game.start(3).unwrap();
        game.advance(77);
        game.click(2);
        assert!(game.is_game_over());

        game.restart();
        assert_eq!(game.stage(), Stage::Idle);
        assert!(game.sequence().is_empty());
        assert!(game.progress().is_empty());
        assert!(!game.is_game_over());
        assert_eq!(game.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_start_again_resets_round() {
        let mut game = new_game();
        game.start(3).unwrap();
        game.click(1);
        game.advance(30);

        game.start(2).unwrap();
        assert_eq!(game.sequence(), &[1, 2]);
        assert!(game.progress().is_empty());
        assert_eq!(game.elapsed(), Duration::ZERO);
    }
}
