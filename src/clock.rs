//! Wall-clock source for history timestamps.

use chrono::{DateTime, Local, TimeZone};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Today's date at `hour:minute` local time. Falls back to now if the
    /// wall time does not exist (DST gap).
    pub fn at(hour: u32, minute: u32) -> Self {
        let date = Local::now().date_naive();
        let instant = date
            .and_hms_opt(hour, minute, 0)
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
            .unwrap_or_else(Local::now);
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
