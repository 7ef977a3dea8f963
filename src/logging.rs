//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so logs only go anywhere when
//! `QUICKFIRE_LOG` names a file. `RUST_LOG` narrows or widens the filter.

use crate::constants::{DEFAULT_LOG_FILTER, LOG_PATH_ENV};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, Once};
use tracing::info;
use tracing_subscriber::EnvFilter;

static INIT_TRACING: Once = Once::new();

/// Install the global subscriber if `QUICKFIRE_LOG` is set. Returns the log
/// path when logging is active. Safe to call more than once.
pub fn init_from_env() -> io::Result<Option<PathBuf>> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from) else {
        return Ok(None);
    };
    if path.as_os_str().is_empty() {
        return Ok(None);
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();

        info!(path = %path.display(), "tracing initialized");
    });

    Ok(Some(path))
}
