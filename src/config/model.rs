// src/config/model.rs

use serde::Deserialize;

use crate::dag::{TaskId, TaskSet};
use crate::engine::{RunOptions, DEFAULT_MAX_ITERATIONS};
use crate::priority::{ScorePolicy, TimeAffinityWeights};
use crate::types::{parse_clock, Importance, Minute, PolicyKind};

/// Raw configuration exactly as deserialized from TOML, before validation.
///
/// ```toml
/// [config]
/// policy = "utility"
/// start_time = "09:00"
///
/// [[task]]
/// id = 1
/// description = "Wake-up"
/// duration = 5
/// fixed = true
/// start_time = "09:00"
/// importance = "high"
///
/// [[task]]
/// id = 2
/// description = "Morning care routine"
/// duration = 10
/// after = [1]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[[task]]`, in file order.
    #[serde(default)]
    pub task: Vec<TaskConfig>,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>`, so holding one means
/// the task list is a well-formed DAG.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    tasks: TaskSet,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: TaskSet) -> Self {
        Self { config, tasks }
    }

    pub fn task_set(&self) -> &TaskSet {
        &self.tasks
    }

    pub fn into_task_set(self) -> TaskSet {
        self.tasks
    }

    pub fn policy(&self) -> ScorePolicy {
        ScorePolicy::from_kind(self.config.policy, self.config.time_affinity)
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            start_time: self.config.start_time.minutes(),
            max_iterations: self.config.max_iterations,
        }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// `"utility"` (default) or `"time-affinity"`.
    #[serde(default)]
    pub policy: PolicyKind,

    /// Clock value the run starts at. Defaults to 09:00.
    #[serde(default = "default_start_time")]
    pub start_time: ClockValue,

    /// Iteration cap for one run.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64,

    /// Weights for the time-affinity policy, `[config.time_affinity]`.
    #[serde(default)]
    pub time_affinity: TimeAffinityWeights,
}

fn default_start_time() -> ClockValue {
    ClockValue(9 * 60)
}

fn default_max_iterations() -> u64 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            start_time: default_start_time(),
            max_iterations: default_max_iterations(),
            time_affinity: TimeAffinityWeights::default(),
        }
    }
}

/// `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub id: TaskId,

    #[serde(default)]
    pub description: String,

    /// Minutes of work once started.
    pub duration: Minute,

    /// Ids of tasks that must complete first.
    #[serde(default)]
    pub after: Vec<TaskId>,

    /// Whether `start_time` is a hard start rather than a preference.
    #[serde(default)]
    pub fixed: bool,

    #[serde(default)]
    pub start_time: Option<ClockValue>,

    #[serde(default)]
    pub importance: Importance,
}

/// A clock value written either as `"HH:MM"` or as a number of minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawClock")]
pub struct ClockValue(Minute);

impl ClockValue {
    pub fn new(minutes: Minute) -> Self {
        Self(minutes)
    }

    pub fn minutes(self) -> Minute {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawClock {
    Minutes(Minute),
    Text(String),
}

impl TryFrom<RawClock> for ClockValue {
    type Error = String;

    fn try_from(raw: RawClock) -> Result<Self, Self::Error> {
        match raw {
            RawClock::Minutes(m) => Ok(ClockValue(m)),
            RawClock::Text(s) => parse_clock(&s).map(ClockValue),
        }
    }
}
