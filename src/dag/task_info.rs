// src/dag/task_info.rs

//! Task entity and its lifecycle state.

use std::collections::BTreeSet;

use crate::config::model::TaskConfig;
use crate::types::{Importance, Minute};

/// Stable task identifier.
pub type TaskId = u32;

/// Lifecycle of a task within one run.
///
/// Transitions only move forward: `NotStarted -> Ready -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Waiting on dependencies or on its fixed start time.
    NotStarted,
    /// Admitted into the priority queue.
    Ready,
    /// Executed; its dependents have been released.
    Completed,
}

/// A unit of work on the timeline.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    /// Execution time in minutes.
    pub duration: Minute,
    /// Declared predecessors. The tracker keeps its own shrinking copy; this
    /// set never changes after construction.
    pub dependencies: BTreeSet<TaskId>,
    pub is_fixed: bool,
    pub start_time: Option<Minute>,
    pub importance: Importance,
    /// Last computed score. Only a cache, refreshed before every ordering
    /// decision.
    pub priority: f64,
    pub status: TaskStatus,
}

impl Task {
    /// A flexible, medium-importance task with no start time.
    pub fn new(
        id: TaskId,
        description: impl Into<String>,
        duration: Minute,
        dependencies: impl IntoIterator<Item = TaskId>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            duration,
            dependencies: dependencies.into_iter().collect(),
            is_fixed: false,
            start_time: None,
            importance: Importance::default(),
            priority: 0.0,
            status: TaskStatus::NotStarted,
        }
    }

    /// Pin the task to an exact start time.
    pub fn fixed_at(mut self, start_time: Minute) -> Self {
        self.is_fixed = true;
        self.start_time = Some(start_time);
        self
    }

    /// Give the task a preferred (soft) start time.
    pub fn preferred_at(mut self, start_time: Minute) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    pub fn from_config(cfg: &TaskConfig) -> Self {
        Self {
            id: cfg.id,
            description: cfg.description.clone(),
            duration: cfg.duration,
            dependencies: cfg.after.iter().copied().collect(),
            is_fixed: cfg.fixed,
            start_time: cfg.start_time.map(|c| c.minutes()),
            importance: cfg.importance,
            priority: 0.0,
            status: TaskStatus::NotStarted,
        }
    }

    /// Fixed tasks may only be admitted once the clock reaches their start.
    pub fn admissible_at(&self, now: Minute) -> bool {
        match (self.is_fixed, self.start_time) {
            (true, Some(start)) => now >= start,
            _ => true,
        }
    }
}
