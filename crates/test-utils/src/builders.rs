#![allow(dead_code)]

use dayplan::config::{ClockValue, ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
use dayplan::dag::{Task, TaskId, TaskSet};
use dayplan::types::{Importance, Minute, PolicyKind};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                task: Vec::new(),
            },
        }
    }

    pub fn with_task(mut self, task: TaskConfig) -> Self {
        self.config.task.push(task);
        self
    }

    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.config.config.policy = policy;
        self
    }

    pub fn start_time(mut self, minutes: Minute) -> Self {
        self.config.config.start_time = ClockValue::new(minutes);
        self
    }

    pub fn max_iterations(mut self, n: u64) -> Self {
        self.config.config.max_iterations = n;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(id: TaskId, duration: Minute) -> Self {
        Self {
            task: TaskConfig {
                id,
                description: format!("task {id}"),
                duration,
                after: vec![],
                fixed: false,
                start_time: None,
                importance: Importance::Medium,
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.task.description = description.to_string();
        self
    }

    pub fn after(mut self, dep: TaskId) -> Self {
        self.task.after.push(dep);
        self
    }

    pub fn fixed_at(mut self, minutes: Minute) -> Self {
        self.task.fixed = true;
        self.task.start_time = Some(ClockValue::new(minutes));
        self
    }

    pub fn preferred_at(mut self, minutes: Minute) -> Self {
        self.task.start_time = Some(ClockValue::new(minutes));
        self
    }

    pub fn importance(mut self, importance: Importance) -> Self {
        self.task.importance = importance;
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

/// Shorthand for building a task directly.
pub fn task(id: TaskId, duration: Minute, deps: &[TaskId]) -> Task {
    Task::new(id, format!("task {id}"), duration, deps.iter().copied())
}

/// Validate a task list, panicking on failure.
pub fn task_set(tasks: Vec<Task>) -> TaskSet {
    TaskSet::new(tasks).expect("Failed to build valid task set")
}
