use serde::{Deserialize, Serialize};

/// A username/password pair handed to the oracle verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// One named, literal test case. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub input: Credential,
    pub expected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Oracle answered and matched the expectation.
    Pass,
    /// Oracle answered, but not what was expected.
    Fail,
    /// Oracle returned an error or panicked; no answer was observed.
    Error,
}

impl ScenarioStatus {
    pub fn label(self) -> &'static str {
        match self {
            ScenarioStatus::Pass => "PASS",
            ScenarioStatus::Fail | ScenarioStatus::Error => "FAIL",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    /// `None` when the oracle invocation failed before producing a boolean.
    pub actual: Option<bool>,
    pub expected: bool,
    pub status: ScenarioStatus,
    pub message: String,
    pub duration_ms: u64,
}

// Timing varies between runs; two results are the same outcome when everything else matches.
impl PartialEq for ScenarioResult {
    fn eq(&self, other: &Self) -> bool {
        self.scenario_name == other.scenario_name
            && self.passed == other.passed
            && self.actual == other.actual
            && self.expected == other.expected
            && self.status == other.status
            && self.message == other.message
    }
}

impl Eq for ScenarioResult {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Pending,
    Running,
    Completed,
}
