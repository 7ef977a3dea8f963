//! Squat metronome controller: beat cadence, countdown and rep history.

use super::types::{beat_interval_ms, bpm_for, reps_for_beats, BeatPhase, SquatCue, SquatTimer};
use crate::clock::Clock;
use crate::constants::{COUNTDOWN_INTERVAL_MS, DEFAULT_SQUAT_TIMER_SECS, SQUAT_RETURN_DELAY_MS};
use crate::difficulty::Difficulty;
use crate::history::{History, SquatEntry};
use crate::scheduler::Scheduler;
use crate::session_phase::SessionPhase;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SquatSession {
    phase: SessionPhase,
    difficulty: Difficulty,
    bpm: u32,
    timer_length_secs: u32,
    time_left: u32,
    beat_count: u32,
    next_beat: BeatPhase,
    cue: SquatCue,
    scheduler: Scheduler<SquatTimer>,
    history: History<SquatEntry>,
}

impl Default for SquatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SquatSession {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            difficulty: Difficulty::Easy,
            bpm: bpm_for(Difficulty::Easy),
            timer_length_secs: DEFAULT_SQUAT_TIMER_SECS,
            time_left: DEFAULT_SQUAT_TIMER_SECS,
            beat_count: 0,
            next_beat: BeatPhase::Down,
            cue: SquatCue::Ready,
            scheduler: Scheduler::new(),
            history: History::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    pub fn timer_length_secs(&self) -> u32 {
        self.timer_length_secs
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Raw beats this round (down and up each count once).
    pub fn beat_count(&self) -> u32 {
        self.beat_count
    }

    pub fn reps(&self) -> u32 {
        reps_for_beats(self.beat_count)
    }

    pub fn cue(&self) -> SquatCue {
        self.cue
    }

    pub fn history(&self) -> &History<SquatEntry> {
        &self.history
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Start a round. Anything from a previous round, including a pending
    /// return-to-menu, is cancelled.
    pub fn start(&mut self, difficulty: Difficulty, timer_length_secs: u32) {
        self.scheduler.cancel_all();

        self.difficulty = difficulty;
        self.bpm = bpm_for(difficulty);
        self.timer_length_secs = timer_length_secs.max(1);
        self.time_left = self.timer_length_secs;
        self.beat_count = 0;
        self.next_beat = BeatPhase::Down;
        self.cue = SquatCue::Ready;
        self.phase = SessionPhase::Running;

        // Beat is armed first so a beat landing on the final second counts.
        self.scheduler.schedule_every(beat_interval_ms(self.bpm), SquatTimer::Beat);
        self.scheduler.schedule_every(COUNTDOWN_INTERVAL_MS, SquatTimer::Countdown);

        info!(
            difficulty = %difficulty,
            bpm = self.bpm,
            timer_secs = self.timer_length_secs,
            "squat round started"
        );
    }

    /// Stop both cadences, record completed reps and show the result until
    /// the display delay returns the session to idle.
    pub fn end(&mut self, clock: &dyn Clock) -> Option<SquatEntry> {
        if !self.is_running() {
            return None;
        }

        self.scheduler.cancel_all();
        self.phase = SessionPhase::Ended;
        self.cue = SquatCue::Done;

        let entry = SquatEntry {
            difficulty: self.difficulty,
            reps: self.reps(),
            timer_length_secs: self.timer_length_secs,
            bpm: self.bpm,
            recorded_at: clock.now(),
        };
        self.history.record(entry.clone());
        self.scheduler.schedule_once(SQUAT_RETURN_DELAY_MS, SquatTimer::ReturnToMenu);

        info!(
            difficulty = %entry.difficulty,
            reps = entry.reps,
            beats = self.beat_count,
            "squat round ended"
        );
        Some(entry)
    }

    /// Skip the rest of the end-of-round display.
    pub fn dismiss(&mut self) {
        if self.phase == SessionPhase::Ended {
            self.scheduler.cancel_all();
            self.phase = SessionPhase::Idle;
        }
    }

    /// Advance the session clock by `dt_ms`. Returns whether anything fired.
    pub fn tick(&mut self, dt_ms: u64, clock: &dyn Clock) -> bool {
        let until = self.scheduler.now_ms() + dt_ms;
        let mut fired = false;
        while let Some(event) = self.scheduler.pop_due(until) {
            self.handle_timer(event, clock);
            fired = true;
        }
        self.scheduler.advance_to(until);
        fired
    }

    fn handle_timer(&mut self, event: SquatTimer, clock: &dyn Clock) {
        match (event, self.phase) {
            (SquatTimer::Beat, SessionPhase::Running) => {
                self.beat_count += 1;
                self.cue = SquatCue::Beat(self.next_beat);
                self.next_beat = self.next_beat.toggled();
                debug!(beat = self.beat_count, cue = self.cue.label(), "beat");
            }
            (SquatTimer::Countdown, SessionPhase::Running) => {
                self.time_left = self.time_left.saturating_sub(1);
                if self.time_left == 0 {
                    self.end(clock);
                }
            }
            (SquatTimer::ReturnToMenu, SessionPhase::Ended) => {
                self.phase = SessionPhase::Idle;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::at(7, 15)
    }

    #[test]
    fn test_start_resets() {
        let mut s = SquatSession::new();
        s.start(Difficulty::Medium, 45);
        assert!(s.is_running());
        assert_eq!(s.bpm(), 35);
        assert_eq!(s.time_left(), 45);
        assert_eq!(s.beat_count(), 0);
        assert_eq!(s.cue(), SquatCue::Ready);
        assert_eq!(s.pending_timers(), 2);
    }

    #[test]
    fn test_first_beat_is_down_then_alternates() {
        let mut s = SquatSession::new();
        s.start(Difficulty::Easy, 60);
        s.tick(3_000, &clock());
        assert_eq!(s.cue(), SquatCue::Beat(BeatPhase::Down));
        s.tick(3_000, &clock());
        assert_eq!(s.cue(), SquatCue::Beat(BeatPhase::Up));
        assert_eq!(s.beat_count(), 2);
        assert_eq!(s.reps(), 1);
    }

    #[test]
    fn test_full_minute_easy_yields_ten_reps() {
        let mut s = SquatSession::new();
        s.start(Difficulty::Easy, 60);
        for _ in 0..1_200 {
            s.tick(50, &clock());
        }
        assert_eq!(s.phase(), SessionPhase::Ended);
        assert_eq!(s.beat_count(), 20);
        let entry = s.history().latest().unwrap();
        assert_eq!(entry.reps, 10);
        assert_eq!(entry.bpm, 20);
        assert_eq!(entry.timer_length_secs, 60);
        assert_eq!(s.cue(), SquatCue::Done);
    }

    #[test]
    fn test_returns_to_idle_after_display_delay() {
        let mut s = SquatSession::new();
        s.start(Difficulty::Hard, 2);
        s.tick(2_000, &clock());
        assert_eq!(s.phase(), SessionPhase::Ended);
        s.tick(SQUAT_RETURN_DELAY_MS - 1, &clock());
        assert_eq!(s.phase(), SessionPhase::Ended);
        s.tick(1, &clock());
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert_eq!(s.pending_timers(), 0);
    }

    #[test]
    fn test_early_end_records_partial_reps() {
        let mut s = SquatSession::new();
        s.start(Difficulty::Hard, 60);
        s.tick(1_200 * 5, &clock());
        let entry = s.end(&clock()).unwrap();
        assert_eq!(entry.reps, 2);
        assert!(s.end(&clock()).is_none());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_no_beats_after_end() {
        let mut s = SquatSession::new();
        s.start(Difficulty::Hard, 60);
        s.tick(1_200, &clock());
        s.end(&clock());
        s.tick(10_000, &clock());
        assert_eq!(s.beat_count(), 1);
    }

    #[test]
    fn test_restart_during_display_cancels_return() {
        let mut s = SquatSession::new();
        s.start(Difficulty::Easy, 1);
        s.tick(1_000, &clock());
        assert_eq!(s.phase(), SessionPhase::Ended);
        s.start(Difficulty::Easy, 30);
        s.tick(SQUAT_RETURN_DELAY_MS, &clock());
        assert!(s.is_running());
    }

    #[test]
    fn test_dismiss() {
        let mut s = SquatSession::new();
        s.start(Difficulty::Easy, 30);
        s.dismiss();
        assert!(s.is_running());
        s.end(&clock());
        s.dismiss();
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert_eq!(s.pending_timers(), 0);
    }
}
