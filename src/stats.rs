//! Derived run statistics.

use crate::models::TestRunReport;

/// Statistics computed fresh for each render and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    /// Sum of per-test call durations, in seconds. Independent of the
    /// runner's own wall-clock measurement in `RunSummary::duration`.
    pub aggregate_duration: f64,
    /// `passed / total * 100`, or exactly `0` for an empty run.
    pub success_rate: f64,
}

impl DashboardSummary {
    pub fn compute(report: &TestRunReport) -> Self {
        let summary = &report.summary;
        let aggregate_duration = report.tests.iter().map(|t| t.duration()).sum();
        let success_rate = if summary.total > 0 {
            summary.passed as f64 / summary.total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total: summary.total,
            passed: summary.passed,
            failed: summary.failed,
            skipped: summary.skipped,
            aggregate_duration,
            success_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CallInfo, Outcome, RunSummary, TestRecord};

    fn record(id: &str, outcome: Outcome, duration: f64) -> TestRecord {
        TestRecord {
            id: id.to_string(),
            outcome,
            call: CallInfo {
                duration,
                longrepr: None,
            },
        }
    }

    #[test]
    fn computes_rate_and_aggregate() {
        let report = TestRunReport {
            summary: RunSummary {
                passed: 2,
                failed: 1,
                skipped: 0,
                total: 3,
                duration: 1.5,
            },
            tests: vec![
                record("a", Outcome::Passed, 0.4),
                record("b", Outcome::Passed, 0.6),
                record("c", Outcome::Failed, 0.5),
            ],
        };
        let stats = DashboardSummary::compute(&report);

        assert!((stats.aggregate_duration - 1.5).abs() < 1e-9);
        assert!((stats.success_rate - 200.0 / 3.0).abs() < 1e-9);
        assert!(stats.success_rate >= 0.0 && stats.success_rate <= 100.0);
    }

    #[test]
    fn empty_run_has_zero_rate() {
        let stats = DashboardSummary::compute(&TestRunReport::default());
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.aggregate_duration, 0.0);
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn aggregate_is_independent_of_runner_wall_clock() {
        let report = TestRunReport {
            summary: RunSummary {
                passed: 1,
                failed: 0,
                skipped: 0,
                total: 1,
                // Runner wall-clock includes collection overhead the
                // per-test durations do not.
                duration: 99.0,
            },
            tests: vec![record("a", Outcome::Passed, 0.25)],
        };
        let stats = DashboardSummary::compute(&report);
        assert!((stats.aggregate_duration - 0.25).abs() < 1e-9);
    }

    #[test]
    fn all_passed_is_one_hundred_percent() {
        let report = TestRunReport {
            summary: RunSummary {
                passed: 4,
                failed: 0,
                skipped: 0,
                total: 4,
                duration: 0.0,
            },
            tests: vec![],
        };
        assert_eq!(DashboardSummary::compute(&report).success_rate, 100.0);
    }
}
