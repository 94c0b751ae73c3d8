// src/engine/mod.rs

//! Scheduling engine.
//!
//! This module ties together:
//! - the dependency tracker (which tasks are waiting on what)
//! - the priority queue (which admitted task goes next)
//! - a discrete-event clock that only moves to the next interesting minute
//!
//! The synchronous core lives in [`core`]; [`sink`] defines where events go;
//! the tokio shell that narrates runs and compares input orderings lives in
//! [`runtime`].

use crate::dag::TaskId;
use crate::types::Minute;

/// Default cap on engine iterations for one run.
pub const DEFAULT_MAX_ITERATIONS: u64 = 100_000;

/// Options for a single run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Clock value the run starts at.
    pub start_time: Minute,
    /// Give up with an error after this many iterations instead of spinning
    /// on tasks that can never become ready.
    pub max_iterations: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            start_time: 9 * 60,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Something is queued or can be admitted right now.
    Active,
    /// Tasks remain but none can be admitted; the clock has to move.
    Draining,
    /// Every task completed.
    Done,
}

/// One executed task.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub task_id: TaskId,
    pub start: Minute,
    pub end: Minute,
    /// Score the task had when it was picked.
    pub score: f64,
}

/// Aggregate figures for a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub start: Minute,
    pub end: Minute,
    pub total_elapsed: Minute,
    pub total_score: f64,
    pub completed: usize,
    pub iterations: u64,
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    pub completions: Vec<Completion>,
    pub summary: RunSummary,
}

impl ScheduleOutcome {
    /// Task ids in completion order.
    pub fn order(&self) -> Vec<TaskId> {
        self.completions.iter().map(|c| c.task_id).collect()
    }

    /// Position of `id` in the completion order.
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.completions.iter().position(|c| c.task_id == id)
    }
}

/// Events emitted to an [`EventSink`] while a run progresses.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleEvent {
    Started {
        task_id: TaskId,
        description: String,
        at: Minute,
        duration: Minute,
        score: f64,
        fixed: bool,
    },
    Completed {
        task_id: TaskId,
        description: String,
        started_at: Minute,
        at: Minute,
        score: f64,
    },
    Finished(RunSummary),
}

pub mod core;
pub mod runtime;
pub mod sink;

pub use core::{Engine, EngineStep};
pub use runtime::{compare_orderings, run_with_narration, spawn_narrator, OrderingReport};
pub use sink::{ChannelSink, EventSink, NullSink, RecordingSink};
