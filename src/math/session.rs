//! Math round controller: score, countdown, spawn cadence and input.
//!
//! All mutation happens inside discrete callbacks (timer firings pulled from
//! the session's own scheduler, or input events). Ending a round cancels
//! every pending timer and starts a new scheduler generation, so nothing
//! armed during one round can touch the next.

use super::evaluator::{matches_answer, AnswerField};
use super::lifecycle::QuestionLifecycle;
use super::types::MathTimer;
use crate::clock::Clock;
use crate::constants::{
    CORRECT_FLASH_MS, COUNTDOWN_INTERVAL_MS, DEFAULT_MATH_TIMER_SECS, SPAWN_INTERVAL_MS,
};
use crate::difficulty::Difficulty;
use crate::history::{History, ScoreEntry};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::session_phase::SessionPhase;
use rand::Rng;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct MathSession {
    phase: SessionPhase,
    difficulty: Difficulty,
    timer_length_secs: u32,
    time_left: u32,
    score: u32,
    questions: QuestionLifecycle,
    field: AnswerField,
    flash: Option<TimerHandle>,
    scheduler: Scheduler<MathTimer>,
    history: History<ScoreEntry>,
}

impl Default for MathSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MathSession {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            difficulty: Difficulty::Easy,
            timer_length_secs: DEFAULT_MATH_TIMER_SECS,
            time_left: DEFAULT_MATH_TIMER_SECS,
            score: 0,
            questions: QuestionLifecycle::new(),
            field: AnswerField::new(),
            flash: None,
            scheduler: Scheduler::new(),
            history: History::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn timer_length_secs(&self) -> u32 {
        self.timer_length_secs
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions(&self) -> &QuestionLifecycle {
        &self.questions
    }

    pub fn field(&self) -> &AnswerField {
        &self.field
    }

    /// True for a short moment after a correct answer.
    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }

    pub fn history(&self) -> &History<ScoreEntry> {
        &self.history
    }

    /// Session-local clock in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Pending timers: two cadences plus one expiry per live question while
    /// running (and the flash timer, briefly). Zero once the round ended.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Start a fresh round. A round still running is discarded without a
    /// history entry.
    pub fn start<R: Rng>(&mut self, difficulty: Difficulty, timer_length_secs: u32, rng: &mut R) {
        self.questions.clear(&mut self.scheduler);
        self.scheduler.cancel_all();

        self.difficulty = difficulty;
        self.timer_length_secs = timer_length_secs.max(1);
        self.time_left = self.timer_length_secs;
        self.score = 0;
        self.field.clear();
        self.flash = None;
        self.phase = SessionPhase::Running;

        self.scheduler.schedule_every(COUNTDOWN_INTERVAL_MS, MathTimer::Countdown);
        self.scheduler.schedule_every(SPAWN_INTERVAL_MS, MathTimer::Spawn);
        self.questions.spawn(self.difficulty, &mut self.scheduler, rng);

        info!(
            difficulty = %self.difficulty,
            timer_secs = self.timer_length_secs,
            generation = self.scheduler.generation(),
            "math round started"
        );
    }

    /// Finalize the round: cancel both cadences and every pending expiry,
    /// record the score and return to idle. Returns the recorded entry, or
    /// `None` if no round was running.
    pub fn end(&mut self, clock: &dyn Clock) -> Option<ScoreEntry> {
        if !self.is_running() {
            return None;
        }

        self.questions.clear(&mut self.scheduler);
        self.scheduler.cancel_all();
        self.flash = None;
        self.field.clear();
        self.phase = SessionPhase::Ended;

        let entry = ScoreEntry {
            difficulty: self.difficulty,
            score: self.score,
            timer_length_secs: self.timer_length_secs,
            recorded_at: clock.now(),
        };
        self.history.record(entry.clone());
        info!(
            difficulty = %entry.difficulty,
            score = entry.score,
            timer_secs = entry.timer_length_secs,
            "math round ended"
        );

        // The scoreboard on the menu is the end-of-round display.
        self.phase = SessionPhase::Idle;
        Some(entry)
    }

    /// Advance the session clock by `dt_ms`, firing every timer that comes
    /// due in order. Returns whether anything fired.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R, clock: &dyn Clock) -> bool {
        let until = self.scheduler.now_ms() + dt_ms;
        let mut fired = false;
        while let Some(event) = self.scheduler.pop_due(until) {
            self.handle_timer(event, rng, clock);
            fired = true;
        }
        self.scheduler.advance_to(until);
        fired
    }

    fn handle_timer<R: Rng>(&mut self, event: MathTimer, rng: &mut R, clock: &dyn Clock) {
        if !self.is_running() {
            return;
        }
        match event {
            MathTimer::Countdown => {
                self.time_left = self.time_left.saturating_sub(1);
                if self.time_left == 0 {
                    self.end(clock);
                }
            }
            MathTimer::Spawn => {
                self.questions.spawn(self.difficulty, &mut self.scheduler, rng);
            }
            MathTimer::Expire(id) => {
                if self.questions.expire(id, &mut self.scheduler).is_some() {
                    self.replenish(rng);
                }
            }
            MathTimer::FlashOff => {
                self.flash = None;
            }
        }
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Type one character into the answer field. Returns true on a match.
    pub fn type_char<R: Rng>(&mut self, c: char, rng: &mut R) -> bool {
        if !self.is_running() || !self.field.push(c) {
            return false;
        }
        self.check_live_match(rng)
    }

    /// Delete the last character. Returns true on a match.
    pub fn backspace<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.is_running() || !self.field.backspace() {
            return false;
        }
        self.check_live_match(rng)
    }

    /// Live match: runs on every change of the answer field. Malformed or
    /// partial input is simply not a match.
    fn check_live_match<R: Rng>(&mut self, rng: &mut R) -> bool {
        let Some(current) = self.questions.current() else {
            return false;
        };
        if !matches_answer(self.field.text(), current.answer()) {
            return false;
        }
        let id = current.id;

        self.score += 1;
        self.field.clear();
        self.start_flash();
        self.questions.retire_solved(id, &mut self.scheduler);
        self.replenish(rng);
        self.questions.pick_next();
        debug!(id = id.0, score = self.score, "answer matched");
        true
    }

    /// Explicit submit: pass on the current question whatever was typed.
    /// The field is cleared; the score is untouched.
    pub fn submit<R: Rng>(&mut self, rng: &mut R) {
        if !self.is_running() {
            return;
        }
        self.field.clear();
        let Some(id) = self.questions.current_id() else {
            return;
        };
        self.questions.retire_skipped(id, &mut self.scheduler);
        self.replenish(rng);
        self.questions.pick_next();
    }

    /// Spawn immediately when the set runs dry with time still on the clock.
    fn replenish<R: Rng>(&mut self, rng: &mut R) {
        if self.is_running() && self.questions.is_empty() && self.time_left > 0 {
            debug!("active set empty, spawning replacement");
            self.questions.spawn(self.difficulty, &mut self.scheduler, rng);
        }
    }

    fn start_flash(&mut self) {
        if let Some(previous) = self.flash.take() {
            self.scheduler.cancel(previous);
        }
        let handle = self.scheduler.schedule_once(CORRECT_FLASH_MS, MathTimer::FlashOff);
        self.flash = Some(handle);
    }
}
