// src/engine/core.rs

//! Discrete-event scheduling core.
//!
//! The [`Engine`] owns one run: its own copy of the tasks, the dependency
//! tracker and the priority queue. It is synchronous and deterministic; the
//! only thing it talks to is an [`EventSink`].
//!
//! Each [`Engine::step`] does one iteration:
//!
//! 1. rescore every unfinished task at the current time and re-heapify the
//!    queue with the new scores
//! 2. admit fixed tasks whose start time is exactly now; if there were none,
//!    admit every other task whose dependencies are clear (fixed tasks only
//!    once their start time has passed)
//! 3. run the best queued task to completion and release its dependents, or
//! 4. if nothing is queued, jump to the next fixed start time (or one minute
//!    ahead when there is none)

use std::collections::BTreeMap;

use tracing::{debug, info, trace};

use crate::dag::{DependencyTracker, Task, TaskId, TaskSet, TaskStatus};
use crate::errors::{DayplanError, Result};
use crate::priority::{PriorityQueue, ReadyEntry, ScorePolicy, SelectionOrder};
use crate::types::{format_clock, Minute};

use super::sink::EventSink;
use super::{Completion, RunOptions, RunPhase, RunSummary, ScheduleEvent, ScheduleOutcome};

/// Structured result of a single engine step.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineStep {
    /// A task was picked and ran to completion.
    Executed(Completion),
    /// Nothing could be admitted; the clock moved forward.
    ClockAdvanced { from: Minute, to: Minute },
    /// Every task is complete.
    Finished(RunSummary),
}

#[derive(Debug)]
pub struct Engine {
    /// Keyed by id so that every scan is in a fixed order.
    tasks: BTreeMap<TaskId, Task>,
    tracker: DependencyTracker,
    queue: PriorityQueue<ReadyEntry, SelectionOrder>,
    policy: ScorePolicy,
    options: RunOptions,
    now: Minute,
    iterations: u64,
    total_score: f64,
    completions: Vec<Completion>,
    finished: bool,
}

impl Engine {
    /// Take ownership of a validated task set and prepare a run.
    pub fn new(task_set: TaskSet, policy: ScorePolicy, options: RunOptions) -> Self {
        let tracker = DependencyTracker::new(task_set.graph());
        let tasks = task_set
            .tasks()
            .iter()
            .cloned()
            .map(|t| (t.id, t))
            .collect();

        let mut engine = Self {
            tasks,
            tracker,
            queue: PriorityQueue::new(SelectionOrder),
            policy,
            options,
            now: options.start_time,
            iterations: 0,
            total_score: 0.0,
            completions: Vec::new(),
            finished: false,
        };
        engine.refresh_scores();
        engine
    }

    /// Current simulated time.
    pub fn now(&self) -> Minute {
        self.now
    }

    pub fn policy(&self) -> ScorePolicy {
        self.policy
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Tasks in ascending id order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn tracker(&self) -> &DependencyTracker {
        &self.tracker
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    /// Number of tasks not yet admitted.
    pub fn unscheduled(&self) -> usize {
        self.tasks
            .values()
            .filter(|t| t.status == TaskStatus::NotStarted)
            .count()
    }

    pub fn phase(&self) -> RunPhase {
        if self.queue.is_empty() && self.unscheduled() == 0 {
            return RunPhase::Done;
        }

        let can_admit = self
            .tasks
            .values()
            .any(|t| self.tracker.is_ready(t, self.now));

        if !self.queue.is_empty() || can_admit {
            RunPhase::Active
        } else {
            RunPhase::Draining
        }
    }

    /// Drive the run to completion.
    pub fn run<S: EventSink + ?Sized>(mut self, sink: &mut S) -> Result<ScheduleOutcome> {
        info!(
            tasks = self.tasks.len(),
            policy = %self.policy.kind(),
            start = %format_clock(self.now),
            "engine: starting run"
        );

        loop {
            if let EngineStep::Finished(summary) = self.step(sink)? {
                return Ok(ScheduleOutcome {
                    completions: self.completions,
                    summary,
                });
            }
        }
    }

    /// Perform one iteration of the run.
    ///
    /// Once every task is complete this returns [`EngineStep::Finished`]
    /// (emitting [`ScheduleEvent::Finished`] the first time only).
    pub fn step<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<EngineStep> {
        if self.phase() == RunPhase::Done {
            let summary = self.summary();
            if !self.finished {
                self.finished = true;
                info!(
                    elapsed = summary.total_elapsed,
                    total_score = summary.total_score,
                    iterations = summary.iterations,
                    "engine: all tasks completed"
                );
                sink.on_event(ScheduleEvent::Finished(summary.clone()));
            }
            return Ok(EngineStep::Finished(summary));
        }

        if self.iterations >= self.options.max_iterations {
            return Err(DayplanError::IterationBudgetExceeded {
                iterations: self.iterations,
                pending: self.unscheduled() + self.queue.len(),
            });
        }
        self.iterations += 1;

        self.refresh_scores();
        self.admit_ready();

        if self.queue.is_empty() {
            self.advance_clock()
        } else {
            self.execute_next(sink).map(EngineStep::Executed)
        }
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            start: self.options.start_time,
            end: self.now,
            total_elapsed: self.now - self.options.start_time,
            total_score: self.total_score,
            completed: self.completions.len(),
            iterations: self.iterations,
        }
    }

    /// Recompute the cached score of every unfinished task at the current
    /// time and restore heap order for whatever is already queued.
    fn refresh_scores(&mut self) {
        let now = self.now;

        for task in self.tasks.values_mut() {
            if task.status == TaskStatus::Completed {
                continue;
            }
            let open_deps = self.tracker.unresolved_count(task.id);
            task.priority = self.policy.score(task, open_deps, now);
        }

        if !self.queue.is_empty() {
            let tasks = &self.tasks;
            let entries: Vec<ReadyEntry> = self
                .queue
                .take_all()
                .into_iter()
                .filter_map(|entry| tasks.get(&entry.id).map(ReadyEntry::from_task))
                .collect();
            self.queue.rebuild(entries);
        }
    }

    /// Move ready tasks into the priority queue.
    ///
    /// Fixed tasks due exactly now go first and, when there are any, are the
    /// only admissions this iteration.
    fn admit_ready(&mut self) {
        let now = self.now;

        let due_fixed: Vec<TaskId> = self
            .tasks
            .values()
            .filter(|t| {
                t.status == TaskStatus::NotStarted
                    && t.is_fixed
                    && t.start_time == Some(now)
                    && self.tracker.is_satisfied(t.id)
            })
            .map(|t| t.id)
            .collect();

        let admitted = if due_fixed.is_empty() {
            self.tasks
                .values()
                .filter(|t| self.tracker.is_ready(t, now))
                .map(|t| t.id)
                .collect()
        } else {
            due_fixed
        };

        for id in admitted {
            if let Some(task) = self.tasks.get_mut(&id) {
                task.status = TaskStatus::Ready;
                debug!(
                    task = id,
                    score = task.priority,
                    fixed = task.is_fixed,
                    at = %format_clock(now),
                    "admitted to priority queue"
                );
                self.queue.push(ReadyEntry::from_task(task));
            }
        }
    }

    fn execute_next<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<Completion> {
        let entry = self.queue.pop()?;
        let start = self.now;

        let task = self
            .tasks
            .get_mut(&entry.id)
            .ok_or_else(|| anyhow::anyhow!("queued task {} missing from task table", entry.id))?;

        sink.on_event(ScheduleEvent::Started {
            task_id: task.id,
            description: task.description.clone(),
            at: start,
            duration: task.duration,
            score: entry.score,
            fixed: task.is_fixed,
        });

        self.now = start
            .checked_add(task.duration)
            .ok_or(DayplanError::ClockOverflow {
                at: start,
                by: task.duration,
            })?;
        task.status = TaskStatus::Completed;

        info!(
            task = task.id,
            start = %format_clock(start),
            end = %format_clock(self.now),
            score = entry.score,
            "task executed"
        );

        sink.on_event(ScheduleEvent::Completed {
            task_id: task.id,
            description: task.description.clone(),
            started_at: start,
            at: self.now,
            score: entry.score,
        });

        self.tracker.resolve(entry.id);
        self.total_score += entry.score;

        let completion = Completion {
            task_id: entry.id,
            start,
            end: self.now,
            score: entry.score,
        };
        self.completions.push(completion.clone());

        // Scores may depend on the new time and on released dependencies.
        self.refresh_scores();

        Ok(completion)
    }

    fn advance_clock(&mut self) -> Result<EngineStep> {
        let from = self.now;

        let next_fixed = self
            .tasks
            .values()
            .filter(|t| t.status == TaskStatus::NotStarted && t.is_fixed)
            .filter_map(|t| t.start_time)
            .filter(|&start| start > from)
            .min();

        self.now = match next_fixed {
            Some(start) => {
                debug!(
                    from = %format_clock(from),
                    to = %format_clock(start),
                    "nothing ready; jumping to next fixed start"
                );
                start
            }
            None => {
                trace!(at = %format_clock(from), "nothing ready; advancing one minute");
                from
                    .checked_add(1)
                    .ok_or(DayplanError::ClockOverflow { at: from, by: 1 })?
            }
        };

        Ok(EngineStep::ClockAdvanced { from, to: self.now })
    }
}
