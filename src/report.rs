// src/report.rs

//! Human-readable output: run narration and the dry-run listing.
//!
//! Nothing in here influences scheduling; it only renders events and task
//! sets.

use crate::dag::TaskSet;
use crate::engine::ScheduleEvent;
use crate::priority::ScorePolicy;
use crate::types::{format_clock, format_span};

/// Turns engine events into lines of text.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    /// Only render the final summary.
    quiet: bool,
}

impl Narrator {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn render(&mut self, event: &ScheduleEvent) -> Vec<String> {
        match event {
            ScheduleEvent::Started {
                description,
                at,
                duration,
                score,
                fixed,
                ..
            } if !self.quiet => {
                let kind = if *fixed { " (fixed)" } else { "" };
                vec![
                    format!("t={}", format_clock(*at)),
                    format!(
                        "    started '{description}' for {duration} mins{kind}, score = {}",
                        format_score(*score)
                    ),
                ]
            }
            ScheduleEvent::Completed { at, .. } if !self.quiet => {
                vec![format!("    t={}, task completed", format_clock(*at))]
            }
            ScheduleEvent::Finished(summary) => vec![
                String::new(),
                format!(
                    "Completed all planned tasks in {}",
                    format_span(summary.total_elapsed)
                ),
                format!(
                    "Total score accumulated: {}",
                    format_score(summary.total_score)
                ),
            ],
            _ => Vec::new(),
        }
    }
}

/// Whole numbers print without a fraction; everything else with two places.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.2}")
    }
}

/// Listing printed by `--dry-run`.
pub fn dry_run_lines(task_set: &TaskSet, policy: &ScorePolicy) -> Vec<String> {
    let mut lines = vec![
        "dayplan dry-run".to_string(),
        format!("  policy = {}", policy.kind()),
        String::new(),
        format!("tasks ({}):", task_set.len()),
    ];

    for task in task_set.tasks() {
        lines.push(format!(
            "  - [{}] '{}', duration = {} mins",
            task.id, task.description, task.duration
        ));
        if let Some(start) = task.start_time {
            let kind = if task.is_fixed { "fixed start" } else { "preferred start" };
            lines.push(format!("      {kind}: {}", format_clock(start)));
        }
        lines.push(format!("      importance: {:?}", task.importance));
        if !task.dependencies.is_empty() {
            lines.push(format!("      after: {:?}", task.dependencies));
        }
    }

    lines
}
