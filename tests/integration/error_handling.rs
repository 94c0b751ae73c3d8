// tests/integration/error_handling.rs

use std::io::Write;
use tempfile::NamedTempFile;
use dayplan::config::{load_and_validate, validate_start_time};
use dayplan::errors::DayplanError;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_dag_cycle_returns_structured_error() {
    let file = write_config(
        r#"
[[task]]
id = 1
duration = 10
after = [2]

[[task]]
id = 2
duration = 10
after = [1]
"#,
    );

    match load_and_validate(file.path()) {
        Err(DayplanError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains('1') || msg.contains('2'));
        }
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_dependency_names_both_tasks() {
    let file = write_config(
        r#"
[[task]]
id = 1
duration = 10
after = [42]
"#,
    );

    match load_and_validate(file.path()) {
        Err(DayplanError::UnknownDependency { task, dependency }) => {
            assert_eq!(task, 1);
            assert_eq!(dependency, 42);
        }
        Err(e) => panic!("Expected UnknownDependency, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_zero_duration_is_invalid() {
    let file = write_config(
        r#"
[[task]]
id = 3
duration = 0
"#,
    );

    match load_and_validate(file.path()) {
        Err(DayplanError::InvalidTask { task, reason }) => {
            assert_eq!(task, 3);
            assert!(reason.contains("duration"));
        }
        Err(e) => panic!("Expected InvalidTask, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_fixed_task_without_start_time_is_invalid() {
    let file = write_config(
        r#"
[[task]]
id = 1
duration = 5
fixed = true
"#,
    );

    match load_and_validate(file.path()) {
        Err(DayplanError::InvalidTask { task, reason }) => {
            assert_eq!(task, 1);
            assert!(reason.contains("start_time"));
        }
        Err(e) => panic!("Expected InvalidTask, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_start_time_past_midnight_is_invalid() {
    let file = write_config(
        r#"
[[task]]
id = 1
duration = 5
fixed = true
start_time = 1500
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(DayplanError::InvalidTask { task: 1, .. })
    ));
}

#[test]
fn test_self_dependency_is_invalid() {
    let file = write_config(
        r#"
[[task]]
id = 4
duration = 5
after = [4]
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(DayplanError::InvalidTask { task: 4, .. })
    ));
}

#[test]
fn test_duplicate_id_is_rejected() {
    let file = write_config(
        r#"
[[task]]
id = 1
duration = 5

[[task]]
id = 1
duration = 10
"#,
    );

    match load_and_validate(file.path()) {
        Err(DayplanError::DuplicateTask(id)) => assert_eq!(id, 1),
        Err(e) => panic!("Expected DuplicateTask, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_empty_task_list_returns_config_error() {
    let file = write_config(
        r#"
[config]
policy = "utility"
"#,
    );

    match load_and_validate(file.path()) {
        Err(DayplanError::ConfigError(msg)) => assert!(msg.contains("[[task]]")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_zero_max_iterations_returns_config_error() {
    let file = write_config(
        r#"
[config]
max_iterations = 0

[[task]]
id = 1
duration = 5
"#,
    );

    match load_and_validate(file.path()) {
        Err(DayplanError::ConfigError(msg)) => assert!(msg.contains("max_iterations")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_malformed_toml_returns_toml_error() {
    let file = write_config("[[task]\nid = ");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(DayplanError::TomlError(_))
    ));
}

#[test]
fn test_missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Dayplan.toml");

    assert!(matches!(
        load_and_validate(&path),
        Err(DayplanError::IoError(_))
    ));
}

#[test]
fn test_start_time_beyond_the_day_returns_config_error() {
    let file = write_config(
        r#"
[config]
start_time = 4294967290

[[task]]
id = 1
duration = 10
"#,
    );

    match load_and_validate(file.path()) {
        Err(DayplanError::ConfigError(msg)) => assert!(msg.contains("start time")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_start_override_is_bounded_like_the_config() {
    assert!(validate_start_time(23 * 60 + 59).is_ok());
    assert!(matches!(
        validate_start_time(24 * 60),
        Err(DayplanError::ConfigError(_))
    ));
}
