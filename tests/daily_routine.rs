// tests/daily_routine.rs

mod common;
use crate::common::{fixtures, init_tracing, run_from_nine};

use dayplan::dag::{TaskId, TaskSet};
use dayplan::priority::{ScorePolicy, TimeAffinityWeights};

fn assert_dependencies_respected(task_set: &TaskSet, order: &[TaskId]) {
    for task in task_set.tasks() {
        let pos = order.iter().position(|&id| id == task.id).unwrap();
        for dep in &task.dependencies {
            let dep_pos = order.iter().position(|id| id == dep).unwrap();
            assert!(
                dep_pos < pos,
                "task {} completed before its dependency {}",
                task.id,
                dep
            );
        }
    }
}

#[test]
fn four_input_orderings_produce_the_same_schedule() {
    init_tracing();

    let task_set = TaskSet::new(fixtures::daily_routine()).unwrap();
    let outcomes: Vec<_> = task_set
        .orderings(4)
        .into_iter()
        .map(|set| run_from_nine(set, ScorePolicy::Utility))
        .collect();

    let first = &outcomes[0];
    for outcome in &outcomes[1..] {
        assert_eq!(outcome.order(), first.order());
        assert_eq!(outcome.summary.total_elapsed, first.summary.total_elapsed);
    }

    assert_eq!(first.order().last(), Some(&10));
}

#[test]
fn daily_routine_follows_dependencies_and_fixed_times() {
    let task_set = TaskSet::new(fixtures::daily_routine()).unwrap();
    let outcome = run_from_nine(task_set.clone(), ScorePolicy::Utility);

    assert_eq!(outcome.order(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_dependencies_respected(&task_set, &outcome.order());

    // Fixed tasks start exactly on time.
    let start_of = |id| outcome.completions[outcome.position_of(id).unwrap()].start;
    assert_eq!(start_of(1), 9 * 60);
    assert_eq!(start_of(5), 10 * 60);
    assert_eq!(start_of(7), 13 * 60);
    assert_eq!(start_of(10), 22 * 60);

    assert_eq!(outcome.summary.total_elapsed, 790);
    assert_eq!(outcome.summary.end, 22 * 60 + 10);
    assert_eq!(outcome.summary.total_score, 855.0);
    assert_eq!(outcome.summary.completed, 10);
}

#[test]
fn scores_at_selection_are_reported_per_completion() {
    let task_set = TaskSet::new(fixtures::daily_routine()).unwrap();
    let outcome = run_from_nine(task_set, ScorePolicy::Utility);

    let scores: Vec<(TaskId, f64)> = outcome
        .completions
        .iter()
        .map(|c| (c.task_id, c.score))
        .collect();
    assert_eq!(
        scores,
        vec![
            (1, 100.0),
            (2, 90.0),
            (3, 60.0),
            (4, 75.0),
            (5, 100.0),
            (6, 70.0),
            (7, 100.0),
            (8, 85.0),
            (9, 75.0),
            (10, 100.0),
        ]
    );
}

#[test]
fn without_dependencies_order_follows_the_scores() {
    let task_set = TaskSet::new(fixtures::daily_routine_loose()).unwrap();
    let outcome = run_from_nine(task_set.clone(), ScorePolicy::Utility);

    // 1 is fixed at 09:00. Then flexible tasks by score: 2 (90), 8 (85),
    // 9 (75). By then 10:00 has passed, so 5 (fixed, 100) jumps ahead of
    // 6 (70) and 3 (60); 7 likewise once 13:00 has passed; 4 waits on 3.
    assert_eq!(outcome.order(), vec![1, 2, 8, 9, 5, 6, 3, 7, 4, 10]);
    assert_dependencies_respected(&task_set, &outcome.order());
    assert_eq!(outcome.summary.total_elapsed, 790);

    for set in task_set.orderings(4) {
        assert_eq!(run_from_nine(set, ScorePolicy::Utility).order(), outcome.order());
    }
}

#[test]
fn time_affinity_policy_schedules_the_preferred_times_routine() {
    let task_set = TaskSet::new(fixtures::preferred_times_routine()).unwrap();
    let policy = ScorePolicy::TimeAffinity(TimeAffinityWeights::default());
    let outcome = run_from_nine(task_set.clone(), policy);

    assert_eq!(outcome.order(), vec![1, 2, 3, 4, 7, 8, 9, 5, 6, 10]);
    assert_dependencies_respected(&task_set, &outcome.order());
    assert_eq!(outcome.summary.total_elapsed, 775);

    for set in task_set.orderings(5) {
        assert_eq!(run_from_nine(set, policy).order(), outcome.order());
    }
}
