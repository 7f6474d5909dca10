//! Report loading and latest-report discovery.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::HarnessError;
use crate::models::TestRunReport;

/// Filename pattern the runner's JSON reports are discovered by.
const REPORT_GLOB: &str = "report*.json";

/// Load a run report from `path`.
///
/// Fails with [`HarnessError::NotFound`] if the file is absent and
/// [`HarnessError::Parse`] if its content is not a well-formed run record.
/// Defaults are applied for missing optional fields.
pub fn load_report(path: &Path) -> Result<TestRunReport, HarnessError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(HarnessError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(HarnessError::Parse {
                path: path.to_path_buf(),
                source: serde_json::Error::io(e),
            });
        }
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|source| HarnessError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Newest report in `dir` by modification time, or `None` when nothing
/// matches (including an absent or empty directory).
///
/// Equal timestamps fall back to lexicographic order on the path, so the
/// choice is deterministic within a run.
pub fn find_latest_report(dir: &Path) -> Option<PathBuf> {
    let pattern = dir.join(REPORT_GLOB).to_string_lossy().into_owned();

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in glob::glob(&pattern).ok()?.flatten() {
        let Ok(meta) = entry.metadata() else { continue };
        let Ok(modified) = meta.modified() else {
            continue;
        };
        let replace = match &newest {
            None => true,
            Some((time, path)) => modified > *time || (modified == *time && entry > *path),
        };
        if replace {
            newest = Some((modified, entry));
        }
    }

    newest.map(|(_, path)| path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, mtime: SystemTime) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "{}").unwrap();
        let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
        file.set_modified(mtime).unwrap();
        path
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_report(&dir.path().join("report.json")).unwrap_err();
        assert!(matches!(err, HarnessError::NotFound { .. }));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, HarnessError::Parse { .. }));
    }

    #[test]
    fn load_applies_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, r#"{"tests": [{"nodeid": "x"}]}"#).unwrap();
        let report = load_report(&path).unwrap();
        assert_eq!(report.summary.total, 0);
        assert_eq!(report.tests[0].outcome.as_str(), "unknown");
    }

    #[test]
    fn discovery_picks_the_newest_report() {
        let dir = TempDir::new().unwrap();
        let now = SystemTime::now();
        touch(
            dir.path(),
            "report_20240101_000000.json",
            now - Duration::from_secs(120),
        );
        let newer = touch(
            dir.path(),
            "report_20240102_000000.json",
            now - Duration::from_secs(60),
        );

        assert_eq!(find_latest_report(dir.path()), Some(newer));
    }

    #[test]
    fn discovery_breaks_mtime_ties_lexicographically() {
        let dir = TempDir::new().unwrap();
        let shared = SystemTime::now() - Duration::from_secs(60);
        touch(dir.path(), "report_a.json", shared);
        let greater = touch(dir.path(), "report_b.json", shared);

        assert_eq!(find_latest_report(dir.path()), Some(greater));
    }

    #[test]
    fn discovery_ignores_non_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("summary.json"), "{}").unwrap();
        fs::write(dir.path().join("report.txt"), "").unwrap();

        assert_eq!(find_latest_report(dir.path()), None);
    }

    #[test]
    fn discovery_over_empty_or_missing_dir_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(find_latest_report(dir.path()), None);
        assert_eq!(find_latest_report(&dir.path().join("absent")), None);
    }
}
