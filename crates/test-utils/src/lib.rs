//! Shared helpers for the `dayplan` test suites.

pub mod builders;
pub mod fixtures;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use dayplan::dag::{Task, TaskSet};
use dayplan::engine::{Engine, NullSink, RunOptions, ScheduleOutcome};
use dayplan::logging::LOG_ENV_VAR;
use dayplan::priority::ScorePolicy;
use dayplan::types::Minute;

/// Start of day used by most scenarios: 09:00.
pub const NINE_AM: Minute = 9 * 60;

/// Upper bound for any single async test step.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static TRACING: Once = Once::new();

/// Route engine logs into the test harness's captured output.
///
/// The filter comes from `DAYPLAN_LOG` like the binary, then `RUST_LOG`,
/// and otherwise stays at `warn`. Captured lines only show for failing tests.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = std::env::var(LOG_ENV_VAR)
            .ok()
            .and_then(|s| EnvFilter::try_new(s).ok())
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new("warn"));

        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

/// Await `f`, failing the test if the engine shell hangs.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("no result within {TEST_TIMEOUT:?}"),
    }
}

/// Run options starting at 09:00 with the default iteration budget.
pub fn nine_am() -> RunOptions {
    RunOptions {
        start_time: NINE_AM,
        ..RunOptions::default()
    }
}

/// Schedule a validated task set from 09:00 to completion.
pub fn run_from_nine(task_set: TaskSet, policy: ScorePolicy) -> ScheduleOutcome {
    Engine::new(task_set, policy, nine_am())
        .run(&mut NullSink)
        .expect("schedule should complete")
}

/// Validate a raw task list, then schedule it from 09:00.
pub fn run_tasks_from_nine(tasks: Vec<Task>, policy: ScorePolicy) -> ScheduleOutcome {
    let task_set = TaskSet::new(tasks).expect("task list should be valid");
    run_from_nine(task_set, policy)
}
