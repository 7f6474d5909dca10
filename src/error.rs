use std::path::PathBuf;

/// Errors surfaced by the reporting pipeline.
///
/// Test failures are not errors here; they travel through the runner's own
/// exit code.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Input report file or discovery directory is absent.
    #[error("report not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The report file exists but is not a well-formed run record.
    #[error("malformed report {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The dashboard (or a required directory) could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external test runner failed to produce an expected report.
    #[error("test runner invocation failed: {0}")]
    RunnerInvocation(String),
}
