use std::collections::BTreeSet;
use proptest::prelude::*;
use dayplan::dag::Task;
use dayplan::priority::{ScorePolicy, TimeAffinityWeights, MAX_UTILITY};
use dayplan::types::Importance;
use dayplan_test_utils::{run_tasks_from_nine as run, NINE_AM};

fn importance_strategy() -> impl Strategy<Value = Importance> {
    prop_oneof![
        Just(Importance::High),
        Just(Importance::Medium),
        Just(Importance::Low),
    ]
}

// Acyclic by construction: task i may only depend on tasks 1..i.
// Some tasks are pinned to a fixed start between 09:00 and 22:00.
fn task_list_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Task>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let per_task = (
            proptest::collection::vec(any::<usize>(), 0..3),
            1u32..120,
            proptest::option::weighted(0.25, 540u32..1320),
            importance_strategy(),
        );

        proptest::collection::vec(per_task, num_tasks).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (potential_deps, duration, fixed_start, importance))| {
                    let deps: BTreeSet<u32> = if i == 0 {
                        BTreeSet::new()
                    } else {
                        potential_deps.iter().map(|d| (d % i) as u32 + 1).collect()
                    };
                    let id = i as u32 + 1;
                    let task = Task::new(id, format!("task {id}"), duration, deps)
                        .with_importance(importance);
                    match fixed_start {
                        Some(start) => task.fixed_at(start),
                        None => task,
                    }
                })
                .collect()
        })
    })
}

fn policy_strategy() -> impl Strategy<Value = ScorePolicy> {
    prop_oneof![
        Just(ScorePolicy::Utility),
        Just(ScorePolicy::TimeAffinity(TimeAffinityWeights::default())),
    ]
}

proptest! {
    #[test]
    fn schedule_does_not_depend_on_input_order(
        (tasks, shuffled) in task_list_strategy(12).prop_flat_map(|tasks| {
            let shuffled = Just(tasks.clone()).prop_shuffle();
            (Just(tasks), shuffled)
        }),
        policy in policy_strategy(),
    ) {
        let original = run(tasks, policy);
        let permuted = run(shuffled, policy);

        prop_assert_eq!(original.order(), permuted.order());
        prop_assert_eq!(original.summary.total_elapsed, permuted.summary.total_elapsed);
    }

    #[test]
    fn every_task_runs_once_after_its_dependencies(
        tasks in task_list_strategy(15),
        policy in policy_strategy(),
    ) {
        let outcome = run(tasks.clone(), policy);
        let order = outcome.order();

        prop_assert_eq!(order.len(), tasks.len());
        let unique: BTreeSet<_> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), tasks.len());

        for task in &tasks {
            let pos = outcome.position_of(task.id).unwrap();
            let done = &outcome.completions[pos];
            for &dep in &task.dependencies {
                let dep_pos = outcome.position_of(dep).unwrap();
                prop_assert!(dep_pos < pos);
                prop_assert!(outcome.completions[dep_pos].end <= done.start);
            }
        }
    }

    #[test]
    fn fixed_tasks_never_start_early(
        tasks in task_list_strategy(15),
        policy in policy_strategy(),
    ) {
        let outcome = run(tasks.clone(), policy);

        for task in tasks.iter().filter(|t| t.is_fixed) {
            let pos = outcome.position_of(task.id).unwrap();
            let start = task.start_time.unwrap();
            prop_assert!(outcome.completions[pos].start >= start);
        }
    }

    #[test]
    fn timeline_has_no_overlap(
        tasks in task_list_strategy(15),
        policy in policy_strategy(),
    ) {
        let outcome = run(tasks, policy);

        for pair in outcome.completions.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        let last_end = outcome.completions.last().map(|c| c.end).unwrap_or(NINE_AM);
        prop_assert_eq!(outcome.summary.end, last_end);
        prop_assert_eq!(outcome.summary.total_elapsed, last_end - NINE_AM);
    }

    #[test]
    fn utility_scores_stay_in_range(tasks in task_list_strategy(15)) {
        let outcome = run(tasks, ScorePolicy::Utility);

        for completion in &outcome.completions {
            prop_assert!((0.0..=MAX_UTILITY).contains(&completion.score));
        }
        let sum: f64 = outcome.completions.iter().map(|c| c.score).sum();
        prop_assert!((sum - outcome.summary.total_score).abs() < 1e-9);
    }
}
