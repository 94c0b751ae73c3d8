// src/config/mod.rs

//! Configuration loading and validation for dayplan.
//!
//! - [`model`] is the TOML-backed data model.
//! - [`loader`] reads a config file from disk.
//! - [`validate`] turns a raw config into a checked [`ConfigFile`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, parse_str};
pub use model::{ClockValue, ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
pub use validate::{validate_raw_config, validate_start_time};
