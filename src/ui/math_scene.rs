//! UI rendering for the falling-math game.

use super::game_common::{
    create_game_layout, info_line, render_info_panel_frame, render_status_bar, time_color,
    ScreenChrome,
};
use crate::math::{MathSession, Question};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the math game scene.
pub fn render_math(frame: &mut Frame, area: Rect, session: &MathSession) {
    let layout = create_game_layout(
        frame,
        area,
        ScreenChrome {
            title: " Falling Math ",
            accent: Color::Cyan,
            min_play_height: 8,
        },
    );

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(layout.content);

    render_play_area(frame, v_chunks[0], session);
    render_answer_field(frame, v_chunks[1], session);

    let status = format!("Score: {}   Time: {}", session.score(), session.time_left());
    render_status_bar(
        frame,
        layout.status_bar,
        &status,
        time_color(session.time_left()),
        &[("[0-9 -]", "Answer"), ("[Enter]", "Skip"), ("[Esc]", "End")],
    );

    render_info_panel(frame, layout.info_panel, session);
}

/// Draw each live question at its column, lowered by how much of its
/// lifetime has passed.
fn render_play_area(frame: &mut Frame, area: Rect, session: &MathSession) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let now = session.now_ms();
    let questions = session.questions();
    for question in questions.active() {
        let is_current = questions.is_current(question.id);
        let label = question_label(question, is_current);
        let rect = question_rect(area, question, now, label.chars().count() as u16);

        let style = if is_current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
    }
}

fn question_label(question: &Question, is_current: bool) -> String {
    if is_current {
        format!("▶ {} ◀", question.prompt)
    } else {
        format!("  {}  ", question.prompt)
    }
}

/// One-line rect for a question, clamped inside the play area.
fn question_rect(area: Rect, question: &Question, now_ms: u64, label_width: u16) -> Rect {
    let width = label_width.min(area.width);
    let center = (area.width as f64 * question.column_pct / 100.0).round() as u16;
    let x = center
        .saturating_sub(width / 2)
        .min(area.width.saturating_sub(width));
    let max_row = area.height.saturating_sub(1);
    let y = (question.progress(now_ms) * max_row as f64).round() as u16;

    Rect {
        x: area.x + x,
        y: area.y + y.min(max_row),
        width,
        height: 1,
    }
}

fn render_answer_field(frame: &mut Frame, area: Rect, session: &MathSession) {
    let border_color = if session.is_flashing() {
        Color::Green
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Answer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let text = Line::from(vec![
        Span::styled(session.field().text().to_string(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &MathSession) {
    let inner = render_info_panel_frame(frame, area);

    let current = session
        .questions()
        .current()
        .map(|q| q.prompt.clone())
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        info_line("Level", session.difficulty().to_string(), Color::Cyan),
        info_line("Round", format!("{}s", session.timer_length_secs()), Color::White),
        info_line(
            "Time",
            session.time_left().to_string(),
            time_color(session.time_left()),
        ),
        info_line("Score", session.score().to_string(), Color::Green),
        info_line("Live", session.questions().len().to_string(), Color::White),
        Line::from(""),
        Line::from(Span::styled("Target", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            current,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
