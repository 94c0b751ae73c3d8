// src/dag/tracker.rs

//! Readiness tracking: which predecessors each task is still waiting on.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace, warn};

use crate::dag::graph::DagGraph;
use crate::dag::task_info::{Task, TaskId, TaskStatus};
use crate::types::Minute;

/// Owns the unresolved dependency set of every task.
///
/// Nothing else mutates these sets. They start as a copy of each task's
/// declared dependencies and only shrink, one predecessor at a time, through
/// [`DependencyTracker::resolve`].
#[derive(Debug, Clone)]
pub struct DependencyTracker {
    graph: DagGraph,
    unresolved: BTreeMap<TaskId, BTreeSet<TaskId>>,
}

impl DependencyTracker {
    pub fn new(graph: DagGraph) -> Self {
        let unresolved = graph
            .tasks()
            .map(|id| (id, graph.dependencies_of(id).iter().copied().collect()))
            .collect();

        Self { graph, unresolved }
    }

    pub fn graph(&self) -> &DagGraph {
        &self.graph
    }

    /// Whether every predecessor of `id` has completed.
    ///
    /// Unknown ids are never satisfied.
    pub fn is_satisfied(&self, id: TaskId) -> bool {
        self.unresolved
            .get(&id)
            .map(|deps| deps.is_empty())
            .unwrap_or(false)
    }

    /// Whether `task` may be admitted to the priority queue at `now`.
    pub fn is_ready(&self, task: &Task, now: Minute) -> bool {
        task.status == TaskStatus::NotStarted
            && self.is_satisfied(task.id)
            && task.admissible_at(now)
    }

    /// Number of predecessors `id` is still waiting on.
    pub fn unresolved_count(&self, id: TaskId) -> usize {
        self.unresolved.get(&id).map(|deps| deps.len()).unwrap_or(0)
    }

    /// Read-only view of the predecessors `id` is still waiting on.
    pub fn unresolved_of(&self, id: TaskId) -> Option<&BTreeSet<TaskId>> {
        self.unresolved.get(&id)
    }

    /// Record that `completed` finished and release it from its dependents.
    ///
    /// Returns the dependents whose last open dependency was `completed`.
    /// Resolving the same id twice is a no-op that returns nothing.
    pub fn resolve(&mut self, completed: TaskId) -> Vec<TaskId> {
        if !self.unresolved.contains_key(&completed) {
            warn!(task = completed, "resolve for unknown task; ignoring");
            return Vec::new();
        }

        let mut released = Vec::new();

        for &dependent in self.graph.dependents_of(completed) {
            let Some(deps) = self.unresolved.get_mut(&dependent) else {
                continue;
            };

            if deps.remove(&completed) {
                trace!(
                    task = dependent,
                    resolved = completed,
                    remaining = deps.len(),
                    "dependency resolved"
                );
                if deps.is_empty() {
                    released.push(dependent);
                }
            }
        }

        if !released.is_empty() {
            debug!(task = completed, ?released, "completion released dependents");
        }

        released
    }
}
