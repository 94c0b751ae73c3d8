// src/priority/ordering.rs

use std::cmp::Ordering;

use crate::dag::{Task, TaskId};
use crate::priority::queue::Compare;
use crate::types::Minute;

/// What the priority queue holds for an admitted task: its identity plus the
/// keys needed to rank it. Dependency sets never enter the queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadyEntry {
    pub id: TaskId,
    pub score: f64,
    pub start_time: Option<Minute>,
}

impl ReadyEntry {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            score: task.priority,
            start_time: task.start_time,
        }
    }
}

/// Selection order shared by every scoring policy:
///
/// 1. higher score first
/// 2. earlier start time first; tasks without one go after tasks with one
/// 3. lower id first
///
/// The last rule makes the order total, so the schedule never depends on
/// the order tasks were listed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionOrder;

impl SelectionOrder {
    pub fn rank(a: &ReadyEntry, b: &ReadyEntry) -> Ordering {
        a.score
            .total_cmp(&b.score)
            .then_with(|| match (a.start_time, b.start_time) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| b.id.cmp(&a.id))
    }
}

impl Compare<ReadyEntry> for SelectionOrder {
    fn compare(&self, a: &ReadyEntry, b: &ReadyEntry) -> Ordering {
        SelectionOrder::rank(a, b)
    }
}
