//! Active-set management for falling questions.
//!
//! Questions live in spawn order. The "current" question, the one the
//! answer field is matched against, is always the head of the set; every
//! place that needs to move it goes through [`QuestionLifecycle::pick_next`].

use super::question::generate_problem;
use super::types::{MathTimer, Question, QuestionId, Retirement};
use crate::constants::{
    MAX_COLUMN_PCT, MAX_QUESTION_LIFETIME_MS, MIN_COLUMN_PCT, MIN_QUESTION_LIFETIME_MS,
};
use crate::difficulty::Difficulty;
use crate::scheduler::Scheduler;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct QuestionLifecycle {
    active: Vec<Question>,
    current: Option<QuestionId>,
    next_id: u64,
}

impl QuestionLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live questions, oldest first.
    pub fn active(&self) -> &[Question] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.active.iter().find(|q| q.id == id)
    }

    pub fn current_id(&self) -> Option<QuestionId> {
        self.current
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.and_then(|id| self.get(id))
    }

    pub fn is_current(&self, id: QuestionId) -> bool {
        self.current == Some(id)
    }

    /// Generate a question, arm its expiry and append it to the active set.
    /// The first question into an empty set becomes current.
    pub fn spawn<R: Rng>(
        &mut self,
        difficulty: Difficulty,
        scheduler: &mut Scheduler<MathTimer>,
        rng: &mut R,
    ) -> QuestionId {
        let problem = generate_problem(difficulty, rng);
        let lifetime_ms = rng.gen_range(MIN_QUESTION_LIFETIME_MS..MAX_QUESTION_LIFETIME_MS);
        let column_pct = rng.gen_range(MIN_COLUMN_PCT..=MAX_COLUMN_PCT);

        let id = QuestionId(self.next_id);
        self.next_id += 1;

        let expiry = scheduler.schedule_once(lifetime_ms, MathTimer::Expire(id));
        let question = Question {
            id,
            prompt: problem.prompt(),
            problem,
            created_at_ms: scheduler.now_ms(),
            lifetime_ms,
            column_pct,
            expiry,
        };
        debug!(id = id.0, prompt = %question.prompt, lifetime_ms, "question spawned");
        self.active.push(question);

        if self.active.len() == 1 {
            self.pick_next();
        }
        id
    }

    /// The question's lifetime ran out.
    pub fn expire(
        &mut self,
        id: QuestionId,
        scheduler: &mut Scheduler<MathTimer>,
    ) -> Option<Question> {
        self.retire(id, Retirement::Timeout, scheduler)
    }

    /// The question was answered correctly.
    pub fn retire_solved(
        &mut self,
        id: QuestionId,
        scheduler: &mut Scheduler<MathTimer>,
    ) -> Option<Question> {
        self.retire(id, Retirement::Solved, scheduler)
    }

    /// The question was passed over with an explicit submit.
    pub fn retire_skipped(
        &mut self,
        id: QuestionId,
        scheduler: &mut Scheduler<MathTimer>,
    ) -> Option<Question> {
        self.retire(id, Retirement::Skipped, scheduler)
    }

    /// Remove `id` from the active set and cancel its expiry. Unknown ids
    /// (already retired, or from an earlier round) are ignored.
    fn retire(
        &mut self,
        id: QuestionId,
        reason: Retirement,
        scheduler: &mut Scheduler<MathTimer>,
    ) -> Option<Question> {
        let index = self.active.iter().position(|q| q.id == id)?;
        let question = self.active.remove(index);
        scheduler.cancel(question.expiry);
        debug!(id = id.0, ?reason, remaining = self.active.len(), "question retired");

        if self.current == Some(id) {
            self.pick_next();
        }
        Some(question)
    }

    /// Point "current" at the head of the active set, or at nothing.
    pub fn pick_next(&mut self) {
        self.current = self.active.first().map(|q| q.id);
    }

    /// Drop every live question and cancel their expiries.
    pub fn clear(&mut self, scheduler: &mut Scheduler<MathTimer>) {
        for question in self.active.drain(..) {
            scheduler.cancel(question.expiry);
        }
        self.current = None;
    }
}
