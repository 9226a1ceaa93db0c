//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, Move, Player, SIZE};

const CELL_WIDTH: u16 = 7;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 5;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let session = app.session();
    let title = format!(
        "Tic Tac Toe - {} (X) vs {} (O)",
        session.player_name(Player::X),
        session.player_name(Player::O)
    );
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows + Enter or 1-9: move | U: Undo | R: Reset | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let winning_line = app.session().winning_line();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..SIZE {
        let spans: Vec<Span> = (0..SIZE)
            .flat_map(|col| {
                let mv = Move::new(row, col);
                let highlighted = winning_line.is_some_and(|line| line.contains(&mv));
                let cell = draw_cell(app, mv, highlighted);
                let sep = (col + 1 < SIZE).then(|| Span::styled("│", separator_style()));
                std::iter::once(cell).chain(sep)
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[row * 2]);

        if row + 1 < SIZE {
            let sep = Paragraph::new("───────┼───────┼───────").style(separator_style());
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(app: &App, mv: Move, highlighted: bool) -> Span<'static> {
    let cell = app
        .session()
        .board()
        .cell(mv.row, mv.col)
        .unwrap_or(Cell::Empty);

    let (symbol, base_style) = match cell {
        Cell::Empty => ("       ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (
            "   X   ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "   O   ",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::Red).fg(Color::White)
    } else if mv == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn separator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
