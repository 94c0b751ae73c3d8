// tests/integration/runtime_channel.rs

use dayplan_test_utils::builders::{task, task_set};
use dayplan_test_utils::{fixtures, init_tracing, nine_am, with_timeout};

use std::error::Error;

use tokio::sync::mpsc;

use dayplan::dag::TaskSet;
use dayplan::engine::{
    compare_orderings, run_with_narration, spawn_narrator, ChannelSink, Engine, RunOptions,
    ScheduleEvent,
};
use dayplan::priority::ScorePolicy;
use dayplan::report::Narrator;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn orderings_of_the_daily_routine_agree() -> TestResult {
    init_tracing();

    let task_set = TaskSet::new(fixtures::daily_routine())?;
    let report = with_timeout(compare_orderings(
        task_set.orderings(4),
        ScorePolicy::Utility,
        nine_am(),
    ))
    .await?;

    assert_eq!(report.runs.len(), 4);
    assert!(report.is_consistent());
    assert!(report.mismatches().is_empty());

    let indices: Vec<usize> = report.runs.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);

    for run in &report.runs {
        assert_eq!(run.order, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(run.total_elapsed, 790);
        assert_eq!(run.total_score, 855.0);
    }

    Ok(())
}

#[tokio::test]
async fn channel_sink_delivers_events_in_order() -> TestResult {
    init_tracing();

    let (tx, mut rx) = mpsc::unbounded_channel::<ScheduleEvent>();
    let tasks = task_set(vec![task(1, 10, &[]), task(2, 20, &[1])]);

    let outcome = tokio::task::spawn_blocking(move || {
        let mut sink = ChannelSink::new(tx);
        Engine::new(tasks, ScorePolicy::Utility, nine_am()).run(&mut sink)
    })
    .await??;

    let mut events = Vec::new();
    while let Some(event) = with_timeout(rx.recv()).await {
        events.push(event);
    }

    assert_eq!(events.len(), 5);
    assert!(matches!(events[0], ScheduleEvent::Started { task_id: 1, at: 540, .. }));
    assert!(matches!(events[1], ScheduleEvent::Completed { task_id: 1, at: 550, .. }));
    assert!(matches!(events[2], ScheduleEvent::Started { task_id: 2, at: 550, .. }));
    assert!(matches!(events[3], ScheduleEvent::Completed { task_id: 2, at: 570, .. }));
    match &events[4] {
        ScheduleEvent::Finished(summary) => assert_eq!(summary, &outcome.summary),
        other => panic!("expected summary last, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn narrator_task_ends_when_senders_are_dropped() -> TestResult {
    let (tx, rx) = mpsc::unbounded_channel::<ScheduleEvent>();
    let handle = spawn_narrator(rx, Narrator::new(true));

    drop(tx);
    with_timeout(handle).await?;

    Ok(())
}

#[tokio::test]
async fn narrated_run_returns_the_schedule() -> TestResult {
    init_tracing();

    let task_set = TaskSet::new(fixtures::daily_routine_loose())?;
    let outcome = with_timeout(run_with_narration(
        task_set,
        ScorePolicy::Utility,
        nine_am(),
        Narrator::new(true),
    ))
    .await?;

    assert_eq!(outcome.order(), vec![1, 2, 8, 9, 5, 6, 3, 7, 4, 10]);
    assert_eq!(outcome.summary.total_elapsed, 790);

    Ok(())
}

#[tokio::test]
async fn narrated_run_surfaces_engine_errors() -> TestResult {
    let tasks = task_set(vec![task(1, 10, &[]), task(2, 10, &[1])]);
    let options = RunOptions {
        max_iterations: 1,
        ..nine_am()
    };

    let result = with_timeout(run_with_narration(
        tasks,
        ScorePolicy::Utility,
        options,
        Narrator::new(true),
    ))
    .await;

    assert!(result.is_err());
    Ok(())
}
