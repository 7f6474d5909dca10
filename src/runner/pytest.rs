use std::fs;
use std::path::Path;
use std::process::Command;

use crate::config::ApiConfig;
use crate::error::HarnessError;

use super::{RunnerOutcome, TestRunner};

/// Pytest adapter: spawns pytest with the plugins that emit a structured
/// JSON report (`pytest-json-report`) and a self-contained HTML report
/// (`pytest-html`).
pub struct PytestRunner {
    command: String,
    suite: String,
    api: ApiConfig,
}

impl PytestRunner {
    pub fn new(command: String, suite: String, api: ApiConfig) -> Self {
        Self {
            command,
            suite,
            api,
        }
    }
}

impl TestRunner for PytestRunner {
    fn run(&self, reports_dir: &Path, stamp: &str) -> Result<RunnerOutcome, HarnessError> {
        fs::create_dir_all(reports_dir).map_err(|source| HarnessError::IoWrite {
            path: reports_dir.to_path_buf(),
            source,
        })?;

        let json_report = reports_dir.join(format!("report_{stamp}.json"));
        let html_report = reports_dir.join(format!("report_{stamp}.html"));

        let mut cmd = Command::new(&self.command);
        cmd.arg(&self.suite)
            .arg("-v")
            .arg("--json-report")
            .arg(format!("--json-report-file={}", json_report.display()))
            .arg(format!("--html={}", html_report.display()))
            .arg("--self-contained-html");

        // Credentials travel through the child environment; the suite's HTTP
        // client reads them at startup.
        if let Some(ref key) = self.api.api_key {
            cmd.env("TMDB_API_KEY", key);
        }
        cmd.env("TMDB_BASE_URL", &self.api.base_url);

        // Stdio is inherited so the runner's progress output reaches the
        // console directly.
        let status = cmd.status().map_err(|e| {
            HarnessError::RunnerInvocation(format!("failed to spawn {}: {e}", self.command))
        })?;

        let exit_code = status.code().ok_or_else(|| {
            HarnessError::RunnerInvocation(format!("{} terminated by signal", self.command))
        })?;

        // A non-zero exit with a report still means "tests ran"; no report at
        // all means the invocation itself broke.
        if !json_report.exists() {
            return Err(HarnessError::RunnerInvocation(format!(
                "{} exited with code {exit_code} without writing {}",
                self.command,
                json_report.display(),
            )));
        }

        Ok(RunnerOutcome {
            exit_code,
            json_report,
            html_report,
        })
    }

    fn name(&self) -> &str {
        "pytest"
    }
}
