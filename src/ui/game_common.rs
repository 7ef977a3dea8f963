//! Frame, status bar and info panel shared by the math and squat screens.
//!
//! ```text
//! ┌─ Title ─────────────────────────┬─ Info ──────┐
//! │   [play area]                   │  [panel]    │
//! │ [status line]                   │             │
//! │ [controls line]                 │             │
//! └─────────────────────────────────┴─────────────┘
//! ```

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;
const PLAY_AREA_MIN_WIDTH: u16 = 20;
const STATUS_HEIGHT: u16 = 2;

/// Title and accent colour of a game screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenChrome {
    pub title: &'static str,
    pub accent: Color,
    pub min_play_height: u16,
}

pub struct GameLayout {
    pub content: Rect,
    /// Two lines: status, then controls.
    pub status_bar: Rect,
    pub info_panel: Rect,
}

/// Clear `area`, draw the outer border and split the inside into play area,
/// status bar and info panel.
pub fn create_game_layout(frame: &mut Frame, area: Rect, chrome: ScreenChrome) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(chrome.title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(chrome.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, info_panel] = split(
        Direction::Horizontal,
        inner,
        [Constraint::Min(PLAY_AREA_MIN_WIDTH), Constraint::Length(INFO_PANEL_WIDTH)],
    );
    let [content, status_bar] = split(
        Direction::Vertical,
        left,
        [Constraint::Min(chrome.min_play_height), Constraint::Length(STATUS_HEIGHT)],
    );

    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split(direction: Direction, area: Rect, constraints: [Constraint; 2]) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    [chunks[0], chunks[1]]
}

/// One-line status message plus a line of `(key, action)` hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(status)
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 || controls.is_empty() {
        return;
    }
    frame.render_widget(
        Paragraph::new(controls_line(controls)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

fn controls_line(controls: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(controls.len() * 3);
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Draw the info panel border and return the area inside it.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn info_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<7}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}

/// Countdown colour: white, then yellow for the last ten seconds, red for the last five.
pub fn time_color(time_left: u32) -> Color {
    match time_left {
        0..=5 => Color::Red,
        6..=10 => Color::Yellow,
        _ => Color::White,
    }
}
