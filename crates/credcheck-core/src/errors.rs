use thiserror::Error;

/// Harness misconfiguration. Always fatal, surfaced before any scenario executes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarnessError {
    #[error("scenario '{name}' is already registered")]
    RegistrationConflict { name: String },

    #[error("no scenarios registered")]
    EmptySuite,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unsupported config version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("account #{index} has an empty username")]
    EmptyUsername { index: usize },

    #[error("account '{username}' is declared more than once")]
    DuplicateAccount { username: String },

    #[error(transparent)]
    Harness(#[from] HarnessError),
}

/// Raised by an oracle that could not decide. Never used for a plain rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("oracle invocation failed: {message}")]
pub struct OracleError {
    pub message: String,
}

impl OracleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
