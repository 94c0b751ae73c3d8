//! Sample task lists shared by the integration tests.

use dayplan::dag::Task;
use dayplan::types::Importance::{High, Low, Medium};

const fn hm(h: u32, m: u32) -> u32 {
    h * 60 + m
}

/// Ten-task daily routine mixing fixed appointments and flexible chores,
/// listed in a scrambled order. Task 10 depends on every other task.
pub fn daily_routine() -> Vec<Task> {
    vec![
        Task::new(10, "Go to sleep", 10, [1, 2, 3, 4, 5, 6, 7, 8, 9])
            .fixed_at(hm(22, 0))
            .with_importance(High),
        Task::new(1, "Wake-up and preparation", 5, [])
            .fixed_at(hm(9, 0))
            .with_importance(High),
        Task::new(6, "Getting boba drink", 30, [3, 4, 5]).with_importance(Low),
        Task::new(3, "Lunch from a local family", 20, [1, 2]).with_importance(Low),
        Task::new(4, "Medicines I", 15, [3]).with_importance(Medium),
        Task::new(5, "Work on a personal project", 120, [1, 3, 4])
            .fixed_at(hm(10, 0))
            .with_importance(Medium),
        Task::new(7, "Two classes", 360, [1, 6, 3, 4])
            .fixed_at(hm(13, 0))
            .with_importance(High),
        Task::new(8, "Dinner from a local family", 40, [7, 3]).with_importance(Medium),
        Task::new(2, "Morning care routine", 10, [1]).with_importance(High),
        Task::new(9, "Medicines II", 20, [4, 7, 8]).with_importance(Medium),
    ]
}

/// The same ten tasks with every dependency removed except 4 -> 3.
pub fn daily_routine_loose() -> Vec<Task> {
    vec![
        Task::new(3, "Lunch from a local family", 20, []).with_importance(Low),
        Task::new(7, "Two classes", 360, [])
            .fixed_at(hm(13, 0))
            .with_importance(High),
        Task::new(9, "Medicines II", 20, []).with_importance(Medium),
        Task::new(5, "Work on a personal project", 120, [])
            .fixed_at(hm(10, 0))
            .with_importance(Medium),
        Task::new(6, "Getting boba drink", 30, []).with_importance(Low),
        Task::new(4, "Medicines I", 15, [3]).with_importance(Medium),
        Task::new(1, "Wake-up and preparation", 5, [])
            .fixed_at(hm(9, 0))
            .with_importance(High),
        Task::new(8, "Dinner from a local family", 40, []).with_importance(Medium),
        Task::new(10, "Go to sleep", 10, [])
            .fixed_at(hm(22, 0))
            .with_importance(High),
        Task::new(2, "Morning care routine", 10, []).with_importance(High),
    ]
}

/// Routine with soft preferred start times, for the time-affinity policy.
pub fn preferred_times_routine() -> Vec<Task> {
    vec![
        Task::new(1, "Get up", 5, []).preferred_at(hm(9, 0)),
        Task::new(2, "Morning care routine", 10, [1]).preferred_at(hm(9, 10)),
        Task::new(3, "Lunch from a local family", 30, [1, 2]).preferred_at(hm(10, 0)),
        Task::new(4, "Take morning medicines", 5, [3]),
        Task::new(5, "Work on a personal project", 240, [1, 3]),
        Task::new(6, "Get boba", 60, [3, 5]),
        Task::new(7, "Two classes", 360, [1]).preferred_at(hm(13, 0)),
        Task::new(8, "Dinner from a local family", 30, [7]).preferred_at(hm(19, 0)),
        Task::new(9, "Take bedtime medicines", 30, [8]),
        Task::new(10, "Go to sleep", 5, [1, 2, 3, 4, 5, 6, 7, 8, 9]).preferred_at(hm(22, 0)),
    ]
}
