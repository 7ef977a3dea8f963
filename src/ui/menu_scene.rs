//! Main menu: game selection, difficulty, timer length and both scoreboards.

use crate::app::{GameKind, MenuRow, MenuState};
use crate::history::{History, ScoreEntry, SquatEntry};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    menu: &MenuState,
    math_history: &History<ScoreEntry>,
    squat_history: &History<SquatEntry>,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Quickfire ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // options
            Constraint::Min(4),    // scoreboards
            Constraint::Length(1), // help
        ])
        .split(inner);

    render_options(frame, chunks[0], menu);

    let boards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_scoreboard(
        frame,
        boards[0],
        " Math scores ",
        math_history.iter().map(ScoreEntry::summary).collect(),
    );
    render_scoreboard(
        frame,
        boards[1],
        " Squat scores ",
        squat_history.iter().map(SquatEntry::summary).collect(),
    );

    let help = Paragraph::new("[↑/↓] Select  [←/→] Change  [Enter] Start  [q] Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn render_options(frame: &mut Frame, area: Rect, menu: &MenuState) {
    let rows = [
        (MenuRow::Game, "Game", menu.game.name().to_string()),
        (MenuRow::Difficulty, "Level", menu.difficulty.to_string()),
        (MenuRow::Timer, "Timer", format!("{}s", menu.timer_secs())),
    ];

    let mut lines = vec![Line::from("")];
    for (row, label, value) in rows {
        let selected = row == menu.row;
        let prefix = if selected { "> " } else { "  " };
        let value_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, value_style),
            Span::styled(format!("{:<7}", label), Style::default().fg(Color::Gray)),
            Span::styled(format!("◀ {} ▶", value), value_style),
        ]));
    }

    let accent = match menu.game {
        GameKind::Math => Color::Cyan,
        GameKind::Squat => Color::Red,
    };
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(accent)),
        area,
    );
}

fn render_scoreboard(frame: &mut Frame, area: Rect, title: &str, entries: Vec<String>) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if entries.is_empty() {
        let empty = Paragraph::new("No rounds yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .into_iter()
        .map(|entry| ListItem::new(entry).style(Style::default().fg(Color::White)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}
