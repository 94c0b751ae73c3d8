// src/priority/mod.rs

//! Task selection.
//!
//! - [`queue`] is a generic binary heap driven by a comparator value.
//! - [`policy`] turns a task and the current time into a score.
//! - [`ordering`] ranks admitted tasks by score with deterministic
//!   tie-breaks.

pub mod ordering;
pub mod policy;
pub mod queue;

pub use ordering::{ReadyEntry, SelectionOrder};
pub use policy::{ScorePolicy, TimeAffinityWeights, MAX_UTILITY};
pub use queue::{Compare, PriorityQueue};
