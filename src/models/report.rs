use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

/// A completed test run as recorded by the external runner's JSON report.
///
/// Field names follow the runner's report format and must stay compatible
/// with it; keys this model does not know about are ignored on load.
/// Immutable once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestRunReport {
    #[serde(default)]
    pub summary: RunSummary,
    #[serde(default)]
    pub tests: Vec<TestRecord>,
}

/// Counts and wall-clock timing as reported by the runner itself.
///
/// The counts are carried through unvalidated: `total` may disagree with
/// `passed + failed + skipped` or with the number of test records, and the
/// dashboard renders whatever the runner claimed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(default)]
    pub passed: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default)]
    pub total: u64,
    /// Elapsed wall-clock seconds measured by the runner.
    #[serde(default)]
    pub duration: f64,
}

/// One executed test case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestRecord {
    /// Unique identifier within a report; used as the display name.
    #[serde(rename = "nodeid", default)]
    pub id: String,
    #[serde(default)]
    pub outcome: Outcome,
    #[serde(default)]
    pub call: CallInfo,
}

/// Timing and failure detail of the test's call phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallInfo {
    /// Seconds spent in the call phase.
    #[serde(default)]
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longrepr: Option<String>,
}

impl TestRecord {
    pub fn duration(&self) -> f64 {
        self.call.duration
    }

    /// Error text shown on the dashboard; only failed tests carry one.
    pub fn error_text(&self) -> Option<&str> {
        if self.outcome == Outcome::Failed {
            self.call.longrepr.as_deref().filter(|s| !s.is_empty())
        } else {
            None
        }
    }
}
