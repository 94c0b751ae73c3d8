// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod priority;
pub mod report;
pub mod types;

use anyhow::{bail, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, validate_start_time};
use crate::engine::{compare_orderings, run_with_narration};
use crate::report::{dry_run_lines, Narrator};

/// Number of input orderings compared by `--verify-order`.
const VERIFY_ORDERINGS: usize = 4;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and validation
/// - CLI overrides for policy, start time and iteration cap
/// - the engine, narrated on stdout
/// - (optional) the input-ordering comparison
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = args.config.clone();
    let mut cfg = load_and_validate(&config_path)?;

    if let Some(policy) = args.policy {
        cfg.config.policy = policy.into();
    }
    let policy = cfg.policy();

    let mut options = cfg.run_options();
    if let Some(start) = args.start {
        validate_start_time(start)?;
        options.start_time = start;
    }
    if let Some(max) = args.max_iterations {
        options.max_iterations = max;
    }

    let task_set = cfg.into_task_set();
    info!(
        config = %config_path.display(),
        tasks = task_set.len(),
        policy = %policy.kind(),
        "loaded task list"
    );

    if args.dry_run {
        for line in dry_run_lines(&task_set, &policy) {
            println!("{line}");
        }
        debug!("dry-run complete (nothing scheduled)");
        return Ok(());
    }

    let orderings = args
        .verify_order
        .then(|| task_set.orderings(VERIFY_ORDERINGS));

    run_with_narration(task_set, policy, options, Narrator::new(args.quiet)).await?;

    if let Some(orderings) = orderings {
        let report = compare_orderings(orderings, policy, options).await?;
        if !report.is_consistent() {
            bail!(
                "schedule depends on input order; orderings {:?} disagree with the original",
                report.mismatches()
            );
        }
        println!(
            "Verified: {} input orderings produce the same schedule",
            report.runs.len()
        );
    }

    Ok(())
}
