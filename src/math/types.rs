//! Falling-question data structures.

use super::question::Problem;
use crate::scheduler::TimerHandle;

/// Identifier of a spawned question. Never reused, even across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(pub u64);

/// Events the math session schedules on its own [`Scheduler`](crate::scheduler::Scheduler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathTimer {
    /// One-second countdown cadence.
    Countdown,
    /// Two-second spawn cadence.
    Spawn,
    /// Lifetime of a single question ran out.
    Expire(QuestionId),
    /// End of the correct-answer flash on the input line.
    FlashOff,
}

/// A live question entity.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub problem: Problem,
    pub prompt: String,
    /// Scheduler time at spawn.
    pub created_at_ms: u64,
    /// Drawn from `[MIN_QUESTION_LIFETIME_MS, MAX_QUESTION_LIFETIME_MS)`.
    pub lifetime_ms: u64,
    /// Horizontal position as a percentage of the play-area width.
    pub column_pct: f64,
    /// Pending expiry timer, cancelled when the question is solved or skipped.
    pub expiry: TimerHandle,
}

impl Question {
    pub fn answer(&self) -> i32 {
        self.problem.answer
    }

    /// 0.0 at spawn, 1.0 at expiry. Drives the falling animation.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.lifetime_ms == 0 {
            return 1.0;
        }
        let age = now_ms.saturating_sub(self.created_at_ms);
        (age as f64 / self.lifetime_ms as f64).min(1.0)
    }
}

/// Why a question left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retirement {
    Timeout,
    Solved,
    Skipped,
}
