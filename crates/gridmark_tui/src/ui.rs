//! Frame drawing for the game screen.

use crate::app::TuiView;
use crate::hit::BoardLayout;
use gridmark_core::{Cell, Clock, Player, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

/// Draws the whole screen and returns where each board cell landed, so the
/// event loop can attribute mouse clicks.
pub fn render<C: Clock>(f: &mut Frame, session: &Session<TuiView, C>) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_scoreboard(f, chunks[0], session.view());
    let layout = render_board(f, chunks[1], session.view());
    render_status(f, chunks[2], session);
    layout
}

fn render_scoreboard(f: &mut Frame, area: Rect, view: &TuiView) {
    let mut spans = Vec::new();
    for player in Player::iter() {
        if !spans.is_empty() {
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled(
            player.to_string(),
            player_style(player),
        ));
        spans.push(Span::raw(format!(": {}", view.score(player))));
    }
    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title("Score").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, area: Rect, view: &TuiView) -> BoardLayout {
    let mut layout = BoardLayout::default();
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [(0u8, rows[0]), (1, rows[2]), (2, rows[4])] {
        render_row(f, area, view, row, &mut layout);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
    layout
}

fn render_row(f: &mut Frame, area: Rect, view: &TuiView, row: u8, layout: &mut BoardLayout) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (col, cell_area) in [(0u8, cols[0]), (1, cols[2]), (2, cols[4])] {
        let cell = Cell::new(row, col).expect("row and col are 0-2");
        layout.place(cell, cell_area);
        render_square(f, cell_area, view.mark(cell));
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, mark: Option<Player>) {
    let (text, style) = match mark {
        None => ("·", Style::default().fg(Color::DarkGray)),
        Some(player) => (
            match player {
                Player::X => "X",
                Player::O => "O",
            },
            player_style(player),
        ),
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_status<C: Clock>(f: &mut Frame, area: Rect, session: &Session<TuiView, C>) {
    let line = match session.view().message() {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None => {
            let player = session.current_player();
            Line::from(vec![
                Span::styled(player.to_string(), player_style(player)),
                Span::raw(" to move. Click a cell, press q to quit."),
            ])
        }
    };
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
