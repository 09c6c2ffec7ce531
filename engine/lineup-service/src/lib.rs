//! Lineup Construction Service Library
//!
//! Wires the candidate pool, the construction engine, and the roster
//! exporter into one run: load a slate, generate a batch of validated
//! lineups, log the summary, and write the submission files.

use std::path::Path;

use anyhow::{Context, Result};

pub mod config;
pub mod logging;
pub mod service;

pub use config::ServiceConfig;
pub use logging::initialize_logging;
pub use service::{BatchReport, LineupService};

/// Load configuration from an optional file plus environment overrides.
pub fn load_configuration(path: Option<&Path>) -> Result<ServiceConfig> {
    ServiceConfig::load(path).context("Failed to load service configuration")
}
