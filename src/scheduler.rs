//! Caller-driven timer scheduler.
//!
//! The scheduler keeps a virtual millisecond clock that only moves when the
//! caller advances it; there are no threads. Each session owns one scheduler
//! and drains due timers one at a time:
//!
//! ```ignore
//! let until = scheduler.now_ms() + dt_ms;
//! while let Some(event) = scheduler.pop_due(until) {
//!     handle(event); // may schedule or cancel other timers
//! }
//! scheduler.advance_to(until);
//! ```
//!
//! Pulling one timer per call means a handler that cancels other timers
//! (ending a session, say) stops them from firing in the same advance.

/// Owned reference to a scheduled timer. Cancelling a handle whose timer has
/// already fired, was already cancelled, or belongs to an older generation
/// is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    id: u64,
    generation: u64,
}

impl TimerHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Timer<E> {
    handle: TimerHandle,
    due_ms: u64,
    period_ms: Option<u64>,
    event: E,
}

#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now_ms: u64,
    generation: u64,
    next_id: u64,
    timers: Vec<Timer<E>>,
}

impl<E: Clone> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            generation: 0,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Fire `event` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, event: E) -> TimerHandle {
        self.insert(delay_ms, None, event)
    }

    /// Fire `event` every `period_ms`, first at now + `period_ms`.
    /// A zero period is treated as 1 ms so a cadence can never spin.
    pub fn schedule_every(&mut self, period_ms: u64, event: E) -> TimerHandle {
        let period_ms = period_ms.max(1);
        self.insert(period_ms, Some(period_ms), event)
    }

    fn insert(&mut self, delay_ms: u64, period_ms: Option<u64>, event: E) -> TimerHandle {
        let handle = TimerHandle {
            id: self.next_id,
            generation: self.generation,
        };
        self.next_id += 1;
        self.timers.push(Timer {
            handle,
            due_ms: self.now_ms + delay_ms,
            period_ms,
            event,
        });
        handle
    }

    /// Cancel a timer. Returns whether anything was actually cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    /// Drop every pending timer and start a new generation. Handles issued
    /// before this call can never match a timer again.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
        self.generation += 1;
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to
    /// its due time. Ties fire in scheduling order. Repeating timers are
    /// re-armed one period later.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<E> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.handle.id))
            .map(|(i, _)| i)?;

        let due_ms = self.timers[index].due_ms;
        self.now_ms = self.now_ms.max(due_ms);

        match self.timers[index].period_ms {
            Some(period) => {
                let timer = &mut self.timers[index];
                timer.due_ms += period;
                Some(timer.event.clone())
            }
            None => Some(self.timers.remove(index).event),
        }
    }

    /// Move the clock forward to `until_ms` (never backwards).
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Ev {
        A,
        B,
        Tick,
    }

    fn drain(s: &mut Scheduler<Ev>, dt: u64) -> Vec<Ev> {
        let until = s.now_ms() + dt;
        let mut fired = Vec::new();
        while let Some(e) = s.pop_due(until) {
            fired.push(e);
        }
        s.advance_to(until);
        fired
    }

    #[test]
    fn test_once_fires_exactly_once() {
        let mut s = Scheduler::new();
        s.schedule_once(100, Ev::A);
        assert!(drain(&mut s, 99).is_empty());
        assert_eq!(drain(&mut s, 1), vec![Ev::A]);
        assert!(drain(&mut s, 1_000).is_empty());
        assert_eq!(s.pending_count(), 0);
    }

    #[test]
    fn test_every_rearms() {
        let mut s = Scheduler::new();
        s.schedule_every(1_000, Ev::Tick);
        assert_eq!(drain(&mut s, 3_500), vec![Ev::Tick, Ev::Tick, Ev::Tick]);
        assert_eq!(drain(&mut s, 500), vec![Ev::Tick]);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut s = Scheduler::new();
        s.schedule_once(50, Ev::B);
        s.schedule_once(50, Ev::A);
        assert_eq!(drain(&mut s, 50), vec![Ev::B, Ev::A]);
    }

    #[test]
    fn test_clock_moves_to_due_time_while_draining() {
        let mut s = Scheduler::new();
        s.schedule_once(30, Ev::A);
        s.schedule_once(70, Ev::B);
        assert_eq!(s.pop_due(100), Some(Ev::A));
        assert_eq!(s.now_ms(), 30);
        assert_eq!(s.pop_due(100), Some(Ev::B));
        assert_eq!(s.now_ms(), 70);
        assert_eq!(s.pop_due(100), None);
        s.advance_to(100);
        assert_eq!(s.now_ms(), 100);
    }

    #[test]
    fn test_cancel_fired_timer_is_noop() {
        let mut s = Scheduler::new();
        let h = s.schedule_once(10, Ev::A);
        drain(&mut s, 10);
        assert!(!s.cancel(h));
        assert!(!s.cancel(h));
    }

    #[test]
    fn test_cancel_pending_timer() {
        let mut s = Scheduler::new();
        let h = s.schedule_once(10, Ev::A);
        assert!(s.is_pending(h));
        assert!(s.cancel(h));
        assert!(!s.is_pending(h));
        assert!(drain(&mut s, 100).is_empty());
    }

    #[test]
    fn test_cancel_all_invalidates_old_handles() {
        let mut s = Scheduler::new();
        let old = s.schedule_once(500, Ev::A);
        s.cancel_all();
        let fresh = s.schedule_once(500, Ev::B);
        assert_ne!(old.generation(), fresh.generation());
        assert!(!s.cancel(old));
        assert!(s.is_pending(fresh));
        assert_eq!(drain(&mut s, 500), vec![Ev::B]);
    }

    #[test]
    fn test_handler_cancellation_stops_later_timers_in_same_advance() {
        let mut s = Scheduler::new();
        s.schedule_once(10, Ev::A);
        s.schedule_once(20, Ev::B);
        let until = 100;
        let mut fired = Vec::new();
        while let Some(e) = s.pop_due(until) {
            if e == Ev::A {
                s.cancel_all();
            }
            fired.push(e);
        }
        assert_eq!(fired, vec![Ev::A]);
    }

    #[test]
    fn test_zero_period_does_not_spin() {
        let mut s = Scheduler::new();
        s.schedule_every(0, Ev::Tick);
        assert_eq!(drain(&mut s, 3).len(), 3);
    }
}
