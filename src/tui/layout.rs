//! # Layout Module
//!
//! Computes where every piece of the screen goes. Drawing and mouse hit
//! testing both go through [`ScreenLayout::compute`], so a click always lands
//! on what was drawn under it.
//!
//! ## Screen
//! ```text
//!   title line
//! ┌─────────────────────────────────────┐
//! │ count field + Start  (count entry)  │
//! │ play area + status + Restart (game) │
//! └─────────────────────────────────────┘
//!   help line
//! ```
//!
//! With the default 60x15 play area the game screen needs exactly 80x24.

use crate::app::AppMode;
use crate::scatter::{PlayArea, Position, TARGET_HEIGHT, TARGET_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const INPUT_WIDTH: u16 = 34;
const BUTTON_WIDTH: u16 = 18;
const NOTICE_WIDTH: u16 = 52;
const NOTICE_HEIGHT: u16 = 7;
const TITLE_HEIGHT: u16 = 1;
const HELP_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 2;
const BUTTON_HEIGHT: u16 = 3;

/// Rectangles for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub title: Rect,
    /// Count field (count entry only)
    pub input: Rect,
    /// Start button (count entry only)
    pub start_button: Rect,
    /// Play area including its border (in game only)
    pub play_area: Rect,
    /// Cells targets live in, i.e. `play_area` without the border
    pub play_inner: Rect,
    /// Elapsed time and game over text (in game only)
    pub status: Rect,
    /// Restart button (in game only)
    pub restart_button: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, play: PlayArea, mode: AppMode) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(HELP_HEIGHT),
            ])
            .split(area);

        let mut layout = Self {
            title: chunks[0],
            help: chunks[2],
            ..Self::default()
        };
        let body = chunks[1];

        match mode {
            AppMode::CountEntry => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Length(BUTTON_HEIGHT),
                        Constraint::Length(BUTTON_HEIGHT),
                        Constraint::Min(0),
                    ])
                    .split(body);
                layout.input = center_horizontally(rows[1], INPUT_WIDTH);
                layout.start_button = center_horizontally(rows[2], BUTTON_WIDTH);
            }
            AppMode::Playing | AppMode::Ended => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(play.height.saturating_add(2)),
                        Constraint::Length(STATUS_HEIGHT),
                        Constraint::Length(BUTTON_HEIGHT),
                        Constraint::Min(0),
                    ])
                    .split(body);
                layout.play_area = center_horizontally(rows[0], play.width.saturating_add(2));
                layout.play_inner = inner(layout.play_area);
                layout.status = rows[1];
                layout.restart_button = center_horizontally(rows[2], BUTTON_WIDTH);
            }
        }

        layout
    }

    /// Smallest terminal `(width, height)` that shows `mode` without clipping
    pub fn required_size(play: PlayArea, mode: AppMode) -> (u16, u16) {
        let chrome = TITLE_HEIGHT + HELP_HEIGHT;
        match mode {
            AppMode::CountEntry => (INPUT_WIDTH, chrome + 1 + 2 * BUTTON_HEIGHT),
            AppMode::Playing | AppMode::Ended => (
                play.width.saturating_add(2).max(BUTTON_WIDTH),
                play.height
                    .saturating_add(2 + STATUS_HEIGHT + BUTTON_HEIGHT)
                    .saturating_add(chrome),
            ),
        }
    }

    /// False when the terminal would clip part of the screen for `mode`
    pub fn fits(area: Rect, play: PlayArea, mode: AppMode) -> bool {
        let (width, height) = Self::required_size(play, mode);
        area.width >= width && area.height >= height
    }

    /// Screen rectangle of a target, clipped to the play area
    pub fn target_rect(&self, pos: Position) -> Rect {
        let rect = Rect::new(
            self.play_inner.x.saturating_add(pos.x),
            self.play_inner.y.saturating_add(pos.y),
            TARGET_WIDTH,
            TARGET_HEIGHT,
        );
        rect.intersection(self.play_inner)
    }

    /// Converts a screen cell to play-area coordinates
    pub fn to_play_cell(&self, col: u16, row: u16) -> Option<(u16, u16)> {
        if contains(self.play_inner, col, row) {
            Some((col - self.play_inner.x, row - self.play_inner.y))
        } else {
            None
        }
    }
}

/// Popup rectangle for a notice, centred on the screen
pub fn notice_rect(area: Rect) -> Rect {
    let width = NOTICE_WIDTH.min(area.width);
    let height = NOTICE_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

fn inner(rect: Rect) -> Rect {
    if rect.width < 2 || rect.height < 2 {
        return Rect::new(rect.x, rect.y, 0, 0);
    }
    Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, rect.height - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    const STANDARD: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_game_layout_fits_play_area() {
        let layout = ScreenLayout::compute(SCREEN, PlayArea::new(60, 20), AppMode::Playing);
        assert_eq!(layout.play_inner.width, 60);
        assert_eq!(layout.play_inner.height, 20);
        assert_eq!(layout.play_area.x, 19);
        assert_eq!(layout.play_inner.y, layout.title.height + 1);
        assert!(layout.restart_button.y > layout.status.y);
    }

    #[test]
    fn test_default_game_fits_standard_terminal() {
        let play = PlayArea::default();
        assert_eq!(ScreenLayout::required_size(play, AppMode::Playing), (62, 24));
        assert!(ScreenLayout::fits(STANDARD, play, AppMode::Playing));
        assert!(ScreenLayout::fits(STANDARD, play, AppMode::CountEntry));

        let layout = ScreenLayout::compute(STANDARD, play, AppMode::Playing);
        assert_eq!(layout.play_inner, Rect::new(10, 2, 60, 15));
        assert_eq!(layout.status, Rect::new(0, 18, 80, STATUS_HEIGHT));
        assert_eq!(layout.restart_button.height, BUTTON_HEIGHT);
        assert_eq!(layout.restart_button.y, 20);
        assert_eq!(layout.help.y, 23);

        // Every spot a target can take is fully on screen
        let corner = layout.target_rect(Position::new(play.max_x(), play.max_y()));
        assert_eq!(corner.width, TARGET_WIDTH);
        assert_eq!(corner.height, TARGET_HEIGHT);
    }

    #[test]
    fn test_one_row_short_does_not_fit() {
        let play = PlayArea::default();
        assert!(!ScreenLayout::fits(Rect::new(0, 0, 80, 23), play, AppMode::Playing));
        assert!(!ScreenLayout::fits(Rect::new(0, 0, 61, 24), play, AppMode::Ended));
        assert!(ScreenLayout::fits(Rect::new(0, 0, 40, 12), play, AppMode::CountEntry));
        assert!(!ScreenLayout::fits(Rect::new(0, 0, 80, 20), PlayArea::new(60, 20), AppMode::Playing));
    }

    #[test]
    fn test_entry_layout_has_no_play_area() {
        let layout = ScreenLayout::compute(SCREEN, PlayArea::default(), AppMode::CountEntry);
        assert_eq!(layout.play_inner, Rect::default());
        assert_eq!(layout.input.width, INPUT_WIDTH);
        assert!(layout.start_button.y > layout.input.y);
    }

    #[test]
    fn test_play_cell_conversion() {
        let layout = ScreenLayout::compute(SCREEN, PlayArea::default(), AppMode::Playing);
        let inner = layout.play_inner;
        assert_eq!(layout.to_play_cell(inner.x, inner.y), Some((0, 0)));
        assert_eq!(layout.to_play_cell(inner.x + 59, inner.y + 14), Some((59, 14)));
        assert_eq!(layout.to_play_cell(inner.x + 60, inner.y), None);
        assert_eq!(layout.to_play_cell(layout.play_area.x, layout.play_area.y), None);
    }

    #[test]
    fn test_target_rect_clipped_on_small_screen() {
        let small = Rect::new(0, 0, 30, 15);
        let layout = ScreenLayout::compute(small, PlayArea::new(60, 20), AppMode::Playing);
        let rect = layout.target_rect(Position::new(54, 17));
        assert_eq!(rect.intersection(layout.play_inner), rect);
    }

    #[test]
    fn test_notice_rect_centered() {
        let rect = notice_rect(SCREEN);
        assert_eq!(rect, Rect::new(24, 16, NOTICE_WIDTH, NOTICE_HEIGHT));
        let tiny = notice_rect(Rect::new(0, 0, 10, 4));
        assert_eq!(tiny, Rect::new(0, 0, 10, 4));
    }
}
