//! Launch settings: command-line flags layered over an optional JSON file.

use crate::constants::{DEFAULT_MATH_TIMER_SECS, DEFAULT_SQUAT_TIMER_SECS, MAX_TIMER_SECS};
use crate::difficulty::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const USAGE: &str = "\
Quickfire - falling arithmetic and squat metronome

Usage: quickfire [options]

Options:
  --difficulty <easy|medium|hard>  Starting difficulty (default: easy)
  --timer <secs>                   Math round length (default: 30)
  --squat-timer <secs>             Squat round length (default: 60)
  --config <file.json>             Read settings from a JSON file
  --version                        Show version information
  --help                           Show this help message

Set QUICKFIRE_LOG=<path> to write logs to a file (filter with RUST_LOG).";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid difficulty '{0}' (expected easy, medium or hard)")]
    InvalidDifficulty(String),

    #[error("invalid {field} '{value}': expected whole seconds between 1 and {max}")]
    InvalidTimer {
        field: String,
        value: String,
        max: u32,
    },

    #[error("could not read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings consumed by the menu and handed to `start()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub math_timer_secs: u32,
    pub squat_timer_secs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            math_timer_secs: DEFAULT_MATH_TIMER_SECS,
            squat_timer_secs: DEFAULT_SQUAT_TIMER_SECS,
        }
    }
}

/// On-disk settings. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub difficulty: Option<Difficulty>,
    pub math_timer_secs: Option<u32>,
    pub squat_timer_secs: Option<u32>,
}

impl Settings {
    fn apply(&mut self, overrides: &SettingsFile) {
        if let Some(difficulty) = overrides.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(secs) = overrides.math_timer_secs {
            self.math_timer_secs = secs;
        }
        if let Some(secs) = overrides.squat_timer_secs {
            self.squat_timer_secs = secs;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_timer("math_timer_secs", self.math_timer_secs)?;
        check_timer("squat_timer_secs", self.squat_timer_secs)?;
        Ok(())
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Settings),
    Version,
    Help,
}

/// Parse arguments (without the program name). Flags override values from
/// `--config`, which override the defaults.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = SettingsFile::default();
    let mut config_path: Option<PathBuf> = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--difficulty" | "-d" => {
                let value = take_value(&mut args, &arg)?;
                let difficulty = value
                    .parse::<Difficulty>()
                    .map_err(|_| ConfigError::InvalidDifficulty(value))?;
                cli.difficulty = Some(difficulty);
            }
            "--timer" | "-t" => {
                let value = take_value(&mut args, &arg)?;
                cli.math_timer_secs = Some(parse_timer(&arg, &value)?);
            }
            "--squat-timer" => {
                let value = take_value(&mut args, &arg)?;
                cli.squat_timer_secs = Some(parse_timer(&arg, &value)?);
            }
            "--config" | "-c" => {
                config_path = Some(PathBuf::from(take_value(&mut args, &arg)?));
            }
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }

    let mut settings = Settings::default();
    if let Some(path) = config_path {
        settings.apply(&load_settings_file(&path)?);
    }
    settings.apply(&cli);
    settings.validate()?;
    Ok(Command::Run(settings))
}

/// Read a JSON settings file.
pub fn load_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SettingsFile =
        serde_json::from_str(&contents).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), ?file, "loaded settings file");
    Ok(file)
}

fn take_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_timer(flag: &str, value: &str) -> Result<u32, ConfigError> {
    let secs = value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidTimer {
            field: flag.to_string(),
            value: value.to_string(),
            max: MAX_TIMER_SECS,
        })?;
    check_timer(flag, secs)?;
    Ok(secs)
}

fn check_timer(field: &str, secs: u32) -> Result<(), ConfigError> {
    if secs == 0 || secs > MAX_TIMER_SECS {
        return Err(ConfigError::InvalidTimer {
            field: field.to_string(),
            value: secs.to_string(),
            max: MAX_TIMER_SECS,
        });
    }
    Ok(())
}
