// src/engine/runtime.rs

//! Async shell around the synchronous [`Engine`].
//!
//! The engine itself never awaits anything. This module runs it on tokio's
//! blocking pool, streams its events to a narrator task over a channel, and
//! runs several independently owned copies side by side to compare input
//! orderings.

use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

use crate::dag::{TaskId, TaskSet};
use crate::errors::{Error, Result};
use crate::priority::ScorePolicy;
use crate::report::Narrator;
use crate::types::Minute;

use super::core::Engine;
use super::sink::ChannelSink;
use super::{RunOptions, ScheduleEvent, ScheduleOutcome};

/// Consume engine events and print the narration to stdout.
///
/// The task ends once every sender has been dropped.
pub fn spawn_narrator(
    mut rx: mpsc::UnboundedReceiver<ScheduleEvent>,
    mut narrator: Narrator,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            for line in narrator.render(&event) {
                println!("{line}");
            }
        }
        debug!("narrator: event channel closed");
    })
}

/// Run one schedule, narrating it as it goes.
pub async fn run_with_narration(
    task_set: TaskSet,
    policy: ScorePolicy,
    options: RunOptions,
    narrator: Narrator,
) -> Result<ScheduleOutcome> {
    let (tx, rx) = mpsc::unbounded_channel::<ScheduleEvent>();
    let narration = spawn_narrator(rx, narrator);

    let outcome = tokio::task::spawn_blocking(move || {
        let mut sink = ChannelSink::new(tx);
        Engine::new(task_set, policy, options).run(&mut sink)
    })
    .await
    .map_err(Error::from)??;

    // The sender went away with the blocking closure, so this finishes as
    // soon as the backlog is printed.
    narration.await.map_err(Error::from)?;

    Ok(outcome)
}

/// Result of one run in an ordering comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingRun {
    /// Index of the input ordering this run used.
    pub index: usize,
    pub order: Vec<TaskId>,
    pub total_elapsed: Minute,
    pub total_score: f64,
}

/// Outcome of [`compare_orderings`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingReport {
    /// One entry per input ordering, sorted by index.
    pub runs: Vec<OrderingRun>,
}

impl OrderingReport {
    /// Whether every ordering produced the same completion order and the
    /// same elapsed time.
    pub fn is_consistent(&self) -> bool {
        match self.runs.split_first() {
            None => true,
            Some((first, rest)) => rest
                .iter()
                .all(|r| r.order == first.order && r.total_elapsed == first.total_elapsed),
        }
    }

    /// Indices of orderings that disagree with the first one.
    pub fn mismatches(&self) -> Vec<usize> {
        let Some((first, rest)) = self.runs.split_first() else {
            return Vec::new();
        };
        rest.iter()
            .filter(|r| r.order != first.order || r.total_elapsed != first.total_elapsed)
            .map(|r| r.index)
            .collect()
    }
}

/// Schedule each task set concurrently and report the results.
///
/// Every run owns its task set and its own engine, so no state is shared
/// between them.
pub async fn compare_orderings(
    task_sets: Vec<TaskSet>,
    policy: ScorePolicy,
    options: RunOptions,
) -> Result<OrderingReport> {
    let mut join_set = JoinSet::new();

    for (index, task_set) in task_sets.into_iter().enumerate() {
        join_set.spawn_blocking(move || {
            let mut sink = crate::engine::sink::NullSink;
            Engine::new(task_set, policy, options)
                .run(&mut sink)
                .map(|outcome| (index, outcome))
        });
    }

    let mut runs = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        let (index, outcome) = joined.map_err(Error::from)??;
        runs.push(OrderingRun {
            index,
            order: outcome.order(),
            total_elapsed: outcome.summary.total_elapsed,
            total_score: outcome.summary.total_score,
        });
    }
    runs.sort_by_key(|r| r.index);

    let report = OrderingReport { runs };
    if report.is_consistent() {
        info!(orderings = report.runs.len(), "all input orderings agree");
    } else {
        warn!(mismatches = ?report.mismatches(), "input orderings produced different schedules");
    }

    Ok(report)
}
