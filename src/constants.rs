// Main loop timing
pub const POLL_INTERVAL_MS: u64 = 50;
/// Largest elapsed slice fed into a session per frame (guards against resume-from-suspend jumps).
pub const MAX_FRAME_DT_MS: u64 = 1_000;

// Session cadences
pub const COUNTDOWN_INTERVAL_MS: u64 = 1_000;
pub const SPAWN_INTERVAL_MS: u64 = 2_000;

// Question entities
pub const MIN_QUESTION_LIFETIME_MS: u64 = 3_000;
pub const MAX_QUESTION_LIFETIME_MS: u64 = 7_000; // exclusive
pub const MIN_COLUMN_PCT: f64 = 30.0;
pub const MAX_COLUMN_PCT: f64 = 70.0;
pub const CORRECT_FLASH_MS: u64 = 120;

// Squat cadence
pub const SQUAT_BPM_EASY: u32 = 20;
pub const SQUAT_BPM_MEDIUM: u32 = 35;
pub const SQUAT_BPM_HARD: u32 = 50;
pub const SQUAT_RETURN_DELAY_MS: u64 = 2_000;

// History
pub const HISTORY_CAPACITY: usize = 5;
pub const HISTORY_TIME_FORMAT: &str = "%H:%M";

// Timer lengths (seconds)
pub const DEFAULT_MATH_TIMER_SECS: u32 = 30;
pub const DEFAULT_SQUAT_TIMER_SECS: u32 = 60;
pub const MIN_TIMER_SECS: u32 = 5;
pub const MAX_TIMER_SECS: u32 = 600;
pub const TIMER_STEP_SECS: u32 = 5;

// Logging
pub const LOG_PATH_ENV: &str = "QUICKFIRE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";
