//! Squat metronome.
//!
//! Beats alternate between "down" and "up" at a tempo set by difficulty
//! while a countdown runs. Two beats make one rep.

pub mod logic;
pub mod types;

pub use logic::SquatSession;
pub use types::{beat_interval_ms, bpm_for, reps_for_beats, BeatPhase, SquatCue, SquatTimer};
