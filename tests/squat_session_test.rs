//! Integration test: squat metronome rounds
//!
//! Full rounds at each tempo, early exit and the end-of-round display.

use quickfire::clock::FixedClock;
use quickfire::squat::{BeatPhase, SquatCue, SquatSession};
use quickfire::{Difficulty, SessionPhase};

const FRAME_MS: u64 = 50;

fn run_until_ended(session: &mut SquatSession, clock: &FixedClock) -> u64 {
    let mut elapsed = 0;
    while session.is_running() {
        session.tick(FRAME_MS, clock);
        elapsed += FRAME_MS;
        assert!(elapsed <= 700_000, "round never ended");
    }
    elapsed
}

#[test]
fn test_full_minute_reps_per_difficulty() {
    let clock = FixedClock::at(6, 30);
    for (difficulty, bpm, reps) in [
        (Difficulty::Easy, 20, 10),
        (Difficulty::Medium, 35, 17),
        (Difficulty::Hard, 50, 25),
    ] {
        let mut session = SquatSession::new();
        session.start(difficulty, 60);
        let elapsed = run_until_ended(&mut session, &clock);

        assert_eq!(elapsed, 60_000);
        assert_eq!(session.phase(), SessionPhase::Ended);
        assert_eq!(session.cue(), SquatCue::Done);
        let entry = session.history().latest().expect("round recorded");
        assert_eq!(entry.bpm, bpm);
        assert_eq!(entry.reps, reps, "{difficulty}");
    }
}

#[test]
fn test_cue_alternates_starting_with_down() {
    let clock = FixedClock::at(6, 30);
    let mut session = SquatSession::new();
    session.start(Difficulty::Hard, 10);
    assert_eq!(session.cue(), SquatCue::Ready);

    let mut seen = Vec::new();
    for _ in 0..4 {
        session.tick(1_200, &clock);
        seen.push(session.cue());
    }
    assert_eq!(
        seen,
        vec![
            SquatCue::Beat(BeatPhase::Down),
            SquatCue::Beat(BeatPhase::Up),
            SquatCue::Beat(BeatPhase::Down),
            SquatCue::Beat(BeatPhase::Up),
        ]
    );
    assert_eq!(session.reps(), 2);
}

#[test]
fn test_early_exit_records_completed_reps_then_returns_to_idle() {
    let clock = FixedClock::at(21, 0);
    let mut session = SquatSession::new();
    session.start(Difficulty::Easy, 60);

    // Five beats at 3000ms each.
    session.tick(15_500, &clock);
    let entry = session.end(&clock).expect("round was running");
    assert_eq!(entry.reps, 2);
    assert_eq!(entry.summary(), "21:00 – easy (60s, 20 BPM): 2 squats");

    session.tick(1_999, &clock);
    assert_eq!(session.phase(), SessionPhase::Ended);
    session.tick(1, &clock);
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.pending_timers(), 0);
}

#[test]
fn test_restart_during_end_display_cancels_return() {
    let clock = FixedClock::at(21, 0);
    let mut session = SquatSession::new();
    session.start(Difficulty::Medium, 5);
    run_until_ended(&mut session, &clock);

    session.start(Difficulty::Easy, 30);
    session.tick(2_500, &clock);

    assert!(session.is_running());
    assert_eq!(session.time_left(), 28);
    assert_eq!(session.history().len(), 1);
}
