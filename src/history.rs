//! Bounded, newest-first record of completed sessions.

use crate::constants::{HISTORY_CAPACITY, HISTORY_TIME_FORMAT};
use crate::difficulty::Difficulty;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl<T> History<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert at the front, dropping the oldest entry past capacity.
    pub fn record(&mut self, entry: T) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

/// One finished math round.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub difficulty: Difficulty,
    pub score: u32,
    pub timer_length_secs: u32,
    pub recorded_at: DateTime<Local>,
}

impl ScoreEntry {
    pub fn time_label(&self) -> String {
        self.recorded_at.format(HISTORY_TIME_FORMAT).to_string()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} – {} ({}s): {} pts",
            self.time_label(),
            self.difficulty,
            self.timer_length_secs,
            self.score
        )
    }
}

/// One finished squat round.
#[derive(Debug, Clone, PartialEq)]
pub struct SquatEntry {
    pub difficulty: Difficulty,
    pub reps: u32,
    pub timer_length_secs: u32,
    pub bpm: u32,
    pub recorded_at: DateTime<Local>,
}

impl SquatEntry {
    pub fn time_label(&self) -> String {
        self.recorded_at.format(HISTORY_TIME_FORMAT).to_string()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} – {} ({}s, {} BPM): {} squats",
            self.time_label(),
            self.difficulty,
            self.timer_length_secs,
            self.bpm,
            self.reps
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};

    #[test]
    fn test_newest_first() {
        let mut h = History::with_capacity(5);
        h.record(1);
        h.record(2);
        h.record(3);
        assert_eq!(h.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(h.latest(), Some(&3));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut h = History::default();
        for i in 0..8 {
            h.record(i);
        }
        assert_eq!(h.len(), HISTORY_CAPACITY);
        assert_eq!(h.iter().copied().collect::<Vec<_>>(), vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_score_entry_summary() {
        let entry = ScoreEntry {
            difficulty: Difficulty::Medium,
            score: 12,
            timer_length_secs: 30,
            recorded_at: FixedClock::at(9, 5).now(),
        };
        assert_eq!(entry.time_label(), "09:05");
        assert_eq!(entry.summary(), "09:05 – medium (30s): 12 pts");
    }

    #[test]
    fn test_squat_entry_summary() {
        let entry = SquatEntry {
            difficulty: Difficulty::Easy,
            reps: 10,
            timer_length_secs: 60,
            bpm: 20,
            recorded_at: FixedClock::at(18, 42).now(),
        };
        assert_eq!(entry.summary(), "18:42 – easy (60s, 20 BPM): 10 squats");
    }
}
