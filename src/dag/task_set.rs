// src/dag/task_set.rs

//! Validated task collections.

use std::collections::BTreeSet;

use crate::dag::graph::DagGraph;
use crate::dag::task_info::{Task, TaskId, TaskStatus};
use crate::errors::{DayplanError, Result};
use crate::types::{format_clock, MINUTES_PER_DAY};

/// A task list that passed ingestion checks.
///
/// Construction rejects duplicate ids, unknown or self dependencies,
/// zero durations, fixed tasks without a start time, start times outside the
/// day, and dependency cycles. Input order is preserved for listing, but
/// nothing downstream depends on it.
#[derive(Debug, Clone)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new(tasks: Vec<Task>) -> Result<Self> {
        let mut ids = BTreeSet::new();
        for task in &tasks {
            if !ids.insert(task.id) {
                return Err(DayplanError::DuplicateTask(task.id));
            }
        }

        for task in &tasks {
            validate_attributes(task)?;

            for &dep in &task.dependencies {
                if dep == task.id {
                    return Err(DayplanError::InvalidTask {
                        task: task.id,
                        reason: "task cannot depend on itself".to_string(),
                    });
                }
                if !ids.contains(&dep) {
                    return Err(DayplanError::UnknownDependency {
                        task: task.id,
                        dependency: dep,
                    });
                }
            }
        }

        DagGraph::from_tasks(&tasks).ensure_acyclic()?;

        // Whatever state the caller left behind, a run starts from scratch.
        let tasks = tasks
            .into_iter()
            .map(|mut t| {
                t.status = TaskStatus::NotStarted;
                t.priority = 0.0;
                t
            })
            .collect();

        Ok(Self { tasks })
    }

    /// Tasks in input order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn graph(&self) -> DagGraph {
        DagGraph::from_tasks(&self.tasks)
    }

    /// The same tasks in a different input order.
    ///
    /// Validity does not depend on order, so no checks are repeated.
    pub fn reordered(&self, order: impl FnOnce(&mut Vec<Task>)) -> Self {
        let mut tasks = self.tasks.clone();
        order(&mut tasks);
        Self { tasks }
    }

    /// A handful of deterministic input orderings used to check that the
    /// schedule does not depend on how the list was written.
    ///
    /// The first entry is always the input order itself; the rest are the
    /// reversed list, the list sorted by id, and rotations.
    pub fn orderings(&self, count: usize) -> Vec<TaskSet> {
        let mut out = Vec::with_capacity(count);
        let n = self.tasks.len().max(1);

        for i in 0..count {
            let set = match i {
                0 => self.clone(),
                1 => self.reordered(|t| t.reverse()),
                2 => self.reordered(|t| t.sort_by_key(|task| task.id)),
                k => self.reordered(|t| t.rotate_left((k - 2) % n)),
            };
            out.push(set);
        }

        out
    }
}

impl TryFrom<Vec<Task>> for TaskSet {
    type Error = DayplanError;

    fn try_from(tasks: Vec<Task>) -> Result<Self> {
        TaskSet::new(tasks)
    }
}

fn validate_attributes(task: &Task) -> Result<()> {
    if task.duration == 0 {
        return Err(DayplanError::InvalidTask {
            task: task.id,
            reason: "duration must be a positive number of minutes".to_string(),
        });
    }

    if task.is_fixed && task.start_time.is_none() {
        return Err(DayplanError::InvalidTask {
            task: task.id,
            reason: "fixed task needs a start_time".to_string(),
        });
    }

    if let Some(start) = task.start_time {
        if start >= MINUTES_PER_DAY {
            return Err(DayplanError::InvalidTask {
                task: task.id,
                reason: format!(
                    "start_time {} is outside the day (must be before 24h00)",
                    format_clock(start)
                ),
            });
        }
    }

    Ok(())
}
