// src/priority/policy.rs

//! Scoring policies for ready tasks.

use serde::Deserialize;

use crate::dag::Task;
use crate::types::{Importance, Minute, PolicyKind};

/// Score every fixed task gets under [`ScorePolicy::Utility`], and the upper
/// bound for flexible ones.
pub const MAX_UTILITY: f64 = 100.0;

/// Tunable constants of the time-affinity formula
/// `k1/duration + k2/max(|start - now|, 1) - k3*open_deps + k4`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimeAffinityWeights {
    /// Weight of the short-task bonus.
    pub k1: f64,
    /// Weight of closeness to the preferred start time.
    pub k2: f64,
    /// Penalty per open dependency.
    pub k3: f64,
    /// Constant offset.
    pub k4: f64,
}

impl Default for TimeAffinityWeights {
    fn default() -> Self {
        Self {
            k1: 1.0,
            k2: 10.0,
            k3: 1.0,
            k4: 5.0,
        }
    }
}

/// How the engine turns a task into a number. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScorePolicy {
    /// Fixed tasks score [`MAX_UTILITY`]. Flexible tasks start from it, lose
    /// 10 per open dependency and up to 40 for being short, gain an
    /// importance bonus, and are clamped to `[0, 100]`.
    Utility,
    /// Favour short tasks, tasks near their preferred start and tasks with
    /// few open dependencies.
    TimeAffinity(TimeAffinityWeights),
}

impl Default for ScorePolicy {
    fn default() -> Self {
        ScorePolicy::Utility
    }
}

impl ScorePolicy {
    pub fn from_kind(kind: PolicyKind, weights: TimeAffinityWeights) -> Self {
        match kind {
            PolicyKind::Utility => ScorePolicy::Utility,
            PolicyKind::TimeAffinity => ScorePolicy::TimeAffinity(weights),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            ScorePolicy::Utility => PolicyKind::Utility,
            ScorePolicy::TimeAffinity(_) => PolicyKind::TimeAffinity,
        }
    }

    /// Score `task` at time `now`, given how many dependencies it is still
    /// waiting on.
    pub fn score(&self, task: &Task, open_deps: usize, now: Minute) -> f64 {
        match self {
            ScorePolicy::Utility => utility_score(task, open_deps),
            ScorePolicy::TimeAffinity(w) => time_affinity_score(task, open_deps, now, w),
        }
    }
}

pub fn importance_bonus(importance: Importance) -> i64 {
    match importance {
        Importance::High => 30,
        Importance::Medium => 15,
        Importance::Low => 0,
    }
}

/// Short tasks are penalised more: 40 points, minus 10 per full half hour.
pub fn duration_penalty(duration: Minute) -> i64 {
    (40 - i64::from(duration / 30) * 10).max(0)
}

fn utility_score(task: &Task, open_deps: usize) -> f64 {
    if task.is_fixed {
        return MAX_UTILITY;
    }

    let dependency_penalty = open_deps as i64 * 10;
    let raw = MAX_UTILITY as i64 - dependency_penalty - duration_penalty(task.duration)
        + importance_bonus(task.importance);

    raw.clamp(0, MAX_UTILITY as i64) as f64
}

fn time_affinity_score(
    task: &Task,
    open_deps: usize,
    now: Minute,
    w: &TimeAffinityWeights,
) -> f64 {
    let duration_term = w.k1 / f64::from(task.duration.max(1));

    // No preferred start means an infinite distance, so the term vanishes.
    let time_term = match task.start_time {
        Some(start) => {
            let distance = start.abs_diff(now).max(1);
            w.k2 / f64::from(distance)
        }
        None => 0.0,
    };

    duration_term + time_term - w.k3 * open_deps as f64 + w.k4
}
