//! Invocation of the external test runner.

pub mod pytest;

use std::path::{Path, PathBuf};

use crate::config::{ApiConfig, Config};
use crate::error::HarnessError;

/// Paths and exit status produced by one runner invocation.
#[derive(Debug, Clone)]
pub struct RunnerOutcome {
    /// The runner's own exit code: 0 when every test passed.
    pub exit_code: i32,
    /// Structured report consumed by the dashboard pipeline.
    pub json_report: PathBuf,
    /// The runner's human-readable report, kept alongside for reference.
    pub html_report: PathBuf,
}

/// Trait for framework-specific test runner adapters.
pub trait TestRunner {
    /// Execute the suite, emitting a JSON and an HTML report under
    /// `reports_dir`, both stamped with `stamp`.
    fn run(&self, reports_dir: &Path, stamp: &str) -> Result<RunnerOutcome, HarnessError>;

    /// Display name for this runner (e.g., "pytest").
    fn name(&self) -> &str;
}

/// Construct the runner configured for this project.
pub fn detect(config: &Config, api: ApiConfig, suite_override: Option<String>) -> Box<dyn TestRunner> {
    let suite = suite_override.unwrap_or_else(|| config.runner.suite.clone());
    Box::new(pytest::PytestRunner::new(
        config.runner.command.clone(),
        suite,
        api,
    ))
}
