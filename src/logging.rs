// src/logging.rs

//! Diagnostic logging for `dayplan` (`tracing` + `tracing-subscriber`).
//!
//! The narration of a run owns stdout, so every log line goes to stderr.
//! Logs stay quiet (`warn`) unless asked for, since at `info` they repeat
//! what the narration already says.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV_VAR: &str = "DAYPLAN_LOG";

/// Level used when neither the flag nor the environment sets one.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_level = std::env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(cli_level, env_level.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(())
}

/// Pick the effective level: the flag wins, then a parseable `DAYPLAN_LOG`
/// value, then [`DEFAULT_LEVEL`].
pub fn resolve_level(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Level {
    match cli_level {
        Some(lvl) => Level::from(lvl),
        None => env_value.and_then(parse_level_str).unwrap_or(DEFAULT_LEVEL),
    }
}

impl From<LogLevel> for Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

// Unknown values fall through to the default instead of failing startup.
fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
