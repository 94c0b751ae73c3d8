// src/dag/mod.rs

//! Task model and dependency tracking.
//!
//! - [`task_info`] defines the task entity and its lifecycle status.
//! - [`task_set`] validates task lists at ingestion.
//! - [`graph`] holds both directions of every dependency edge.
//! - [`tracker`] owns the shrinking "still waiting on" sets that decide
//!   readiness.

pub mod graph;
pub mod task_info;
pub mod task_set;
pub mod tracker;

pub use graph::DagGraph;
pub use task_info::{Task, TaskId, TaskStatus};
pub use task_set::TaskSet;
pub use tracker::DependencyTracker;
