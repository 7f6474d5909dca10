//! Dashboard rendering: output-path policy, file write, console status.

pub mod html;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use colored::Colorize;

use crate::error::HarnessError;
use crate::models::TestRunReport;
use crate::stats::DashboardSummary;

/// Compute statistics for `report`, render the dashboard, and write it.
///
/// Without an explicit `out` path one is synthesized as
/// `<dashboard_dir>/dashboard_<YYYYMMDD_HHMMSS>.html` from the render
/// timestamp, creating the directory if absent. Either a complete document
/// is written or nothing.
///
/// Returns the path written. A few informational lines go to stderr; they
/// are observational only.
pub fn write_dashboard(
    report: &TestRunReport,
    out: Option<&Path>,
    dashboard_dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, HarnessError> {
    let summary = DashboardSummary::compute(report);
    let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let page = html::render_dashboard(&summary, &report.tests, &timestamp);

    let path = match out {
        Some(path) => path.to_path_buf(),
        None => {
            fs::create_dir_all(dashboard_dir).map_err(|source| HarnessError::IoWrite {
                path: dashboard_dir.to_path_buf(),
                source,
            })?;
            dashboard_dir.join(format!("dashboard_{}.html", now.format("%Y%m%d_%H%M%S")))
        }
    };

    fs::write(&path, &page).map_err(|source| HarnessError::IoWrite {
        path: path.clone(),
        source,
    })?;

    eprintln!(
        "{} dashboard written to {}",
        "OK".green().bold(),
        path.display()
    );
    eprintln!(
        "   {}/{} tests passed ({:.1}%)",
        summary.passed, summary.total, summary.success_rate
    );
    eprintln!("   total test time {:.2}s", summary.aggregate_duration);

    Ok(path)
}
