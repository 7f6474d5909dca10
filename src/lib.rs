//! tally - API test harness and dashboard generator.
//!
//! Orchestrates an external test runner against the TMDB web API, loads the
//! structured JSON report the runner emits, and renders a self-contained
//! HTML dashboard summarizing the run.

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod report;
pub mod runner;
pub mod stats;

pub use error::HarnessError;
pub use models::{Outcome, TestRecord, TestRunReport};
pub use stats::DashboardSummary;
