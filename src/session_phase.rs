//! Lifecycle shared by both game controllers: `Idle → Running → Ended → Idle`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    /// Round finalized; the result is still on screen.
    Ended,
}

impl SessionPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}
