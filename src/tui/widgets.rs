//! # UI Widgets Module
//!
//! Draws each screen: the count prompt, the play area with its targets, the
//! status line and buttons, and the notice popup on top.

use crate::app::{App, AppMode, NoticeKind};
use crate::game::Outcome;
use crate::scatter::draw_order;
use crate::tui::layout::{notice_rect, ScreenLayout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.size();
    let layout = ScreenLayout::compute(area, app.scatterer.area(), app.mode());

    if !ScreenLayout::fits(area, app.scatterer.area(), app.mode()) {
        draw_too_small(frame, app, area);
        return;
    }

    draw_title(frame, layout.title);

    match app.mode() {
        AppMode::CountEntry => draw_count_entry(frame, app, &layout),
        AppMode::Playing | AppMode::Ended => {
            draw_play_area(frame, app, &layout);
            draw_status(frame, app, layout.status);
            draw_button(frame, "Restart", layout.restart_button);
        }
    }

    draw_help(frame, app, layout.help);

    if app.notice.is_some() {
        draw_notice(frame, app, area);
    }
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Clear The Points")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, area);
}

/// Shown instead of the screen while the terminal would clip it
fn draw_too_small(f: &mut Frame, app: &App, area: Rect) {
    let (width, height) = ScreenLayout::required_size(app.scatterer.area(), app.mode());
    let text = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("need {width}x{height}, have {}x{}", area.width, area.height)),
        Line::from(format!("Time: {} s", app.elapsed_display())),
    ];
    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, area);
}

fn draw_count_entry(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let (text, style) = if app.count_input.is_empty() {
        (
            "Enter a count (1-100)".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.count_input.clone(), Style::default().fg(Color::Yellow))
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Number of points"),
    );
    f.render_widget(input, layout.input);

    draw_button(f, "Start game", layout.start_button);
}

fn draw_play_area(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    f.render_widget(border, layout.play_area);

    let game_over = app.game.is_game_over();
    let positions = app.scatterer.positions();

    for index in draw_order(positions.len(), app.game.progress().len()) {
        let rect = layout.target_rect(positions[index]);
        if rect.is_empty() {
            continue;
        }

        let number = index as u32 + 1;
        let cleared = app.game.is_cleared_number(number);
        let style = if cleared {
            Style::default().fg(Color::DarkGray)
        } else if game_over {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let target = Paragraph::new(number.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );

        f.render_widget(Clear, rect);
        f.render_widget(target, rect);
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(format!("Time: {} s", app.elapsed_display()))];

    match app.game.outcome() {
        Some(Outcome::WrongNumber { expected, clicked }) => {
            lines.push(Line::from(Span::styled(
                format!("Game Over! You picked {clicked}, the next number was {expected}."),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        Some(Outcome::Cleared) => {
            lines.push(Line::from(Span::styled(
                "All clear!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
        None => {
            if let Some(next) = app.game.next_expected() {
                lines.push(Line::from(Span::styled(
                    format!("Next: {next}"),
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
    }

    let status = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn draw_button(f: &mut Frame, label: &str, area: Rect) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.notice.is_some() {
        "Enter/Esc or click: dismiss"
    } else {
        match app.mode() {
            AppMode::CountEntry => "Type a count, Enter: start, Esc: quit",
            AppMode::Playing => "Click the numbers in order, r: restart, q/Esc: quit",
            AppMode::Ended => "Enter/r: restart, q/Esc: quit",
        }
    };
    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn draw_notice(f: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::InvalidCount => Color::Red,
        NoticeKind::Congratulations => Color::Green,
    };

    let rect = notice_rect(area);
    let popup = Paragraph::new(vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().add_modifier(Modifier::BOLD))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(notice.title()),
    );

    f.render_widget(Clear, rect);
    f.render_widget(popup, rect);
}
