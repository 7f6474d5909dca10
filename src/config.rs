use std::path::Path;

use serde::Deserialize;

/// Default base URL of the API under test.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Where run artifacts land, relative to the project root.
#[derive(Debug, Deserialize)]
pub struct PathsConfig {
    /// Directory receiving the runner's JSON and HTML reports.
    #[serde(default = "default_reports")]
    pub reports: String,
    /// Directory receiving rendered dashboards.
    #[serde(default = "default_dashboard")]
    pub dashboard: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            reports: default_reports(),
            dashboard: default_dashboard(),
        }
    }
}

/// How the external test runner is invoked.
#[derive(Debug, Deserialize)]
pub struct RunnerConfig {
    /// Binary name or path of the runner.
    #[serde(default = "default_command")]
    pub command: String,
    /// Test file or directory handed to the runner.
    #[serde(default = "default_suite")]
    pub suite: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            suite: default_suite(),
        }
    }
}

fn default_reports() -> String {
    "reports".to_string()
}

fn default_dashboard() -> String {
    "dashboard".to_string()
}

fn default_command() -> String {
    "pytest".to_string()
}

fn default_suite() -> String {
    "test_cases.py".to_string()
}

impl Config {
    /// Load `harness.toml` from the project root, falling back to defaults
    /// if absent or invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join("harness.toml");
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_default()
    }
}

/// Credentials for the API under test, read from the environment once at
/// process start and handed to the runner explicitly.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("TMDB_API_KEY").ok(),
            base_url: std::env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}
