use serde::{Deserialize, Serialize};

/// Result classification of a single test execution.
///
/// The runner reports outcomes as strings. Anything other than the three
/// well-known values is preserved verbatim so it can be displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
    Other(String),
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Other("unknown".to_string())
    }
}

impl Outcome {
    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
            Outcome::Skipped => "skipped",
            Outcome::Other(s) => s,
        }
    }

    /// CSS class the dashboard styles this outcome with.
    /// Unrecognized outcomes get no special styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
            Outcome::Skipped => "skipped",
            Outcome::Other(_) => "",
        }
    }
}

impl From<String> for Outcome {
    fn from(value: String) -> Self {
        match value.as_str() {
            "passed" => Outcome::Passed,
            "failed" => Outcome::Failed,
            "skipped" => Outcome::Skipped,
            _ => Outcome::Other(value),
        }
    }
}

impl From<Outcome> for String {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}
