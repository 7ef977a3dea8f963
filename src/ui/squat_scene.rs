//! UI rendering for the squat metronome.

use super::game_common::{
    create_game_layout, info_line, render_info_panel_frame, render_status_bar, time_color,
    ScreenChrome,
};
use crate::session_phase::SessionPhase;
use crate::squat::{BeatPhase, SquatCue, SquatSession};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_squat(frame: &mut Frame, area: Rect, session: &SquatSession) {
    let layout = create_game_layout(
        frame,
        area,
        ScreenChrome {
            title: " Squat Metronome ",
            accent: Color::Red,
            min_play_height: 6,
        },
    );

    render_cue(frame, layout.content, session);

    if session.phase() == SessionPhase::Ended {
        let status = format!("{} squats!", session.reps());
        render_status_bar(
            frame,
            layout.status_bar,
            &status,
            Color::Green,
            &[("[Any key]", "Menu")],
        );
    } else {
        let status = format!("Time: {}   Rhythm: {} BPM", session.time_left(), session.bpm());
        render_status_bar(
            frame,
            layout.status_bar,
            &status,
            time_color(session.time_left()),
            &[("[Esc]", "End")],
        );
    }

    render_info_panel(frame, layout.info_panel, session);
}

fn cue_color(cue: SquatCue) -> Color {
    match cue {
        SquatCue::Ready | SquatCue::Done => Color::Red,
        SquatCue::Beat(BeatPhase::Down) => Color::Red,
        SquatCue::Beat(BeatPhase::Up) => Color::White,
    }
}

/// Big centered cue text.
fn render_cue(frame: &mut Frame, area: Rect, session: &SquatSession) {
    if area.height == 0 {
        return;
    }
    let cue = session.cue();
    let y = area.y + area.height / 2;
    let line = Line::from(Span::styled(
        cue.label(),
        Style::default()
            .fg(cue_color(cue))
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        Rect {
            y,
            height: 1,
            ..area
        },
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &SquatSession) {
    let inner = render_info_panel_frame(frame, area);
    let lines = vec![
        info_line("Level", session.difficulty().to_string(), Color::Cyan),
        info_line("Tempo", format!("{} BPM", session.bpm()), Color::White),
        info_line("Round", format!("{}s", session.timer_length_secs()), Color::White),
        info_line(
            "Time",
            session.time_left().to_string(),
            time_color(session.time_left()),
        ),
        info_line("Beats", session.beat_count().to_string(), Color::White),
        info_line("Reps", session.reps().to_string(), Color::Green),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
