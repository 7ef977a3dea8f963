//! Quickfire - terminal arithmetic drill and squat metronome.
//!
//! This module exposes the game logic for testing and external use.

pub mod app;
pub mod build_info;
pub mod clock;
pub mod config;
pub mod constants;
pub mod difficulty;
pub mod history;
pub mod input;
pub mod logging;
pub mod math;
pub mod scheduler;
pub mod session_phase;
pub mod squat;
pub mod ui;

pub use difficulty::Difficulty;
pub use math::MathSession;
pub use session_phase::SessionPhase;
pub use squat::SquatSession;
