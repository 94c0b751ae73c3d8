// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::dag::{Task, TaskSet};
use crate::errors::{DayplanError, Result};
use crate::types::{Minute, MINUTES_PER_DAY};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = DayplanError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;

        // Task-level checks (ids, durations, references, cycles) live with
        // the task set so that every ingestion path runs them.
        let tasks = TaskSet::new(raw.task.iter().map(Task::from_config).collect())?;

        Ok(ConfigFile::new_unchecked(raw.config, tasks))
    }
}

/// Checks that do not depend on the task graph.
pub fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_global_config(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &RawConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(DayplanError::ConfigError(
            "config must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.max_iterations == 0 {
        return Err(DayplanError::ConfigError(
            "[config].max_iterations must be >= 1 (got 0)".to_string(),
        ));
    }

    validate_start_time(cfg.config.start_time.minutes())?;

    let w = &cfg.config.time_affinity;
    for (name, value) in [("k1", w.k1), ("k2", w.k2), ("k3", w.k3), ("k4", w.k4)] {
        if !value.is_finite() {
            return Err(DayplanError::ConfigError(format!(
                "[config.time_affinity].{name} must be a finite number (got {value})"
            )));
        }
    }

    Ok(())
}

/// The run has to start within the day, like every task start time.
pub fn validate_start_time(start: Minute) -> Result<()> {
    if start >= MINUTES_PER_DAY {
        return Err(DayplanError::ConfigError(format!(
            "start time must be before 24h00 (got minute {start})"
        )));
    }
    Ok(())
}
