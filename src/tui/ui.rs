//! Stateless UI rendering for a match.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Cell, Coord, Mark, SIZE};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Players
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);

    let help = Paragraph::new(
        "arrows/1-9 move · enter/space play · r reset · x/o rename · q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let mut spans = Vec::new();
    for (i, player) in game.players().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   vs   "));
        }
        let marker = if player.has_turn() && !game.outcome().is_over() {
            "▶ "
        } else {
            "  "
        };
        spans.push(Span::styled(
            format!("{}{} ({})", marker, player.name(), player.mark()),
            mark_style(player.mark()),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = centered(area, 38, 11);

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

    for row in 0..SIZE {
        draw_row(frame, rows[row * 2], app, row);
        if row + 1 < SIZE {
            draw_rule(frame, rows[row * 2 + 1], "─");
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..SIZE {
        if let Some(coord) = Coord::new(row, col) {
            draw_cell(frame, cols[col * 2], app, coord);
        }
        if col + 1 < SIZE {
            draw_rule(frame, cols[col * 2 + 1], "│");
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let game = app.game();

    let (symbol, mut style) = match game.board().get(coord) {
        Cell::Empty => (
            format!(" {} ", coord.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(mark) => (
            format!(" {} ", mark),
            mark_style(mark).add_modifier(Modifier::BOLD),
        ),
    };

    if game.winning_line().is_some_and(|line| line.contains(coord)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if coord == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let (title, text, color) = match app.entry() {
        Some(entry) => (
            format!("Player {}'s name (enter to confirm, esc to cancel)", entry.mark),
            format!("{}_", entry.buffer),
            Color::White,
        ),
        None => (
            app.feed().notice().to_string(),
            app.status_message(),
            Color::Yellow,
        ),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(status, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(Color::Blue),
        Mark::O => Style::default().fg(Color::Red),
    }
}

/// Draws a rule of `symbol` filling `area`, row by row.
fn draw_rule(frame: &mut Frame, area: Rect, symbol: &str) {
    let row = symbol.repeat(usize::from(area.width));
    let text: Vec<Line> = (0..area.height).map(|_| Line::from(row.clone())).collect();
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// The `width` by `height` area in the middle of `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    cell
}
