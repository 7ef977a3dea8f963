//! Squat metronome data structures.

use crate::constants::{SQUAT_BPM_EASY, SQUAT_BPM_HARD, SQUAT_BPM_MEDIUM};
use crate::difficulty::Difficulty;

/// Beats per minute for a difficulty tier.
pub fn bpm_for(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => SQUAT_BPM_EASY,
        Difficulty::Medium => SQUAT_BPM_MEDIUM,
        Difficulty::Hard => SQUAT_BPM_HARD,
    }
}

/// Milliseconds between beats, `60000 / bpm` truncated.
pub fn beat_interval_ms(bpm: u32) -> u64 {
    60_000 / u64::from(bpm.max(1))
}

/// Completed reps for a raw beat count: one down beat plus one up beat.
pub fn reps_for_beats(beats: u32) -> u32 {
    beats / 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquatTimer {
    Countdown,
    Beat,
    /// End-of-round display delay elapsed.
    ReturnToMenu,
}

/// Which half of the rep the last beat called for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeatPhase {
    Down,
    Up,
}

impl BeatPhase {
    pub fn toggled(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }
}

/// What the cue line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquatCue {
    /// Round started, first beat not reached yet.
    Ready,
    Beat(BeatPhase),
    Done,
}

impl SquatCue {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Beat(BeatPhase::Down) => "⬇ DOWN",
            Self::Beat(BeatPhase::Up) => "⬆ UP",
            Self::Done => "Done!",
        }
    }
}
