//! Whole rounds played with the mouse on a standard 80x24 terminal.

use crossterm::event::{MouseButton, MouseEventKind};
use points::app::{App, AppMode, NoticeKind};
use points::config::GameConfig;
use points::tui::layout::ScreenLayout;
use points::tui::mouse::handle_mouse_event;
use points::{Outcome, Stage};
use ratatui::layout::Rect;

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn click(app: &mut App, col: u16, row: u16) {
    handle_mouse_event(app, MouseEventKind::Down(MouseButton::Left), col, row, SCREEN);
}

fn layout(app: &App) -> ScreenLayout {
    ScreenLayout::compute(SCREEN, app.scatterer.area(), app.mode())
}

fn start_by_mouse(seed: u64, count: &str) -> App {
    let mut app = App::new(&GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    });
    for c in count.chars() {
        app.push_input_char(c);
    }
    let start = layout(&app).start_button;
    click(&mut app, start.x + 1, start.y + 1);
    app
}

/// A screen cell drawn for `number` that a click would land on
fn clickable_cell(app: &App, number: u32) -> Option<(u16, u16)> {
    let layout = layout(app);
    let index = number as usize - 1;
    let cleared = app.game.progress().len();
    let rect = layout.target_rect(app.scatterer.positions()[index]);
    (rect.y..rect.y + rect.height)
        .flat_map(|row| (rect.x..rect.x + rect.width).map(move |col| (col, row)))
        .find(|&(col, row)| {
            layout
                .to_play_cell(col, row)
                .and_then(|(x, y)| app.scatterer.target_at(cleared, x, y))
                == Some(index)
        })
}

#[test]
fn every_number_clickable_until_cleared() {
    for seed in 0..8 {
        for count in [98u32, 100] {
            let mut app = start_by_mouse(seed, &count.to_string());
            assert_eq!(app.mode(), AppMode::Playing);
            assert_eq!(app.game.count(), count as usize);

            for number in 1..=count {
                let Some((col, row)) = clickable_cell(&app, number) else {
                    panic!("seed {seed}: {number} of {count} has no clickable cell");
                };
                click(&mut app, col, row);
                assert_eq!(app.game.progress().len(), number as usize, "seed {seed}");
            }

            assert_eq!(app.game.stage(), Stage::Ended(Outcome::Cleared));
            assert_eq!(
                app.notice.as_ref().map(|n| n.kind),
                Some(NoticeKind::Congratulations)
            );
            assert!(!app.ticker_running());
        }
    }
}

#[test]
fn clicking_ahead_ends_round() {
    let mut app = start_by_mouse(3, "100");
    let (col, row) = clickable_cell(&app, 1).unwrap();
    click(&mut app, col, row);

    // Any cell that only the third target covers, if one exists
    let layout = layout(&app);
    let rect = layout.target_rect(app.scatterer.positions()[2]);
    let wrong = (rect.y..rect.y + rect.height)
        .flat_map(|row| (rect.x..rect.x + rect.width).map(move |col| (col, row)))
        .find(|&(col, row)| {
            layout
                .to_play_cell(col, row)
                .and_then(|(x, y)| app.scatterer.target_at(1, x, y))
                .is_some_and(|index| index >= 2)
        });
    let Some((col, row)) = wrong else {
        return;
    };
    click(&mut app, col, row);
    assert!(app.game.is_game_over());
    assert!(matches!(
        app.game.outcome(),
        Some(Outcome::WrongNumber { expected: 2, .. })
    ));
}

#[test]
fn restart_button_reachable_after_round() {
    let mut app = start_by_mouse(11, "1");
    let (col, row) = clickable_cell(&app, 1).unwrap();
    click(&mut app, col, row);
    assert!(app.game.is_cleared());

    let restart = layout(&app).restart_button;
    assert_eq!(restart.height, 3);
    // First click closes the congratulation notice
    click(&mut app, restart.x + 1, restart.y + 1);
    click(&mut app, restart.x + 1, restart.y + 1);
    assert_eq!(app.mode(), AppMode::CountEntry);
}
