// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::dag::TaskId;
use crate::types::Minute;

#[derive(Error, Debug)]
pub enum DayplanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task {task} depends on unknown task {dependency}")]
    UnknownDependency { task: TaskId, dependency: TaskId },

    #[error("Invalid task {task}: {reason}")]
    InvalidTask { task: TaskId, reason: String },

    #[error("Duplicate task id: {0}")]
    DuplicateTask(TaskId),

    #[error("Cycle detected in DAG: {0}")]
    DagCycle(String),

    /// Extraction from an empty priority queue. The engine checks the queue
    /// before popping, so seeing this from a run is a bug.
    #[error("pop from an empty priority queue")]
    EmptyContainer,

    #[error("run exceeded {iterations} iterations with {pending} task(s) still unscheduled")]
    IterationBudgetExceeded { iterations: u64, pending: usize },

    #[error("simulated clock overflowed advancing {by} minute(s) from minute {at}")]
    ClockOverflow { at: Minute, by: Minute },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DayplanError>;
