//! Suite files: versioned YAML declaring scenarios and, optionally, the
//! accounts the reference oracle accepts.

use crate::engine::ScenarioRegistry;
use crate::errors::ConfigError;
use crate::model::{Credential, Scenario};
use crate::oracle::{StaticOracle, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;
pub const DEFAULT_CONFIG_FILE: &str = "credcheck.yaml";
pub const SAMPLE_CONFIG: &str = include_str!("../assets/credcheck.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    pub version: u32,
    pub suite: String,
    /// Absent means the built-in account table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Credential>>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl SuiteConfig {
    /// The four literal login scenarios against the default account.
    pub fn builtin() -> Self {
        let scenario = |name: &str, username: &str, password: &str, expected: bool| Scenario {
            name: name.to_string(),
            input: Credential::new(username, password),
            expected,
        };
        Self {
            version: SUPPORTED_CONFIG_VERSION,
            suite: "login".to_string(),
            accounts: Some(vec![Credential::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)]),
            scenarios: vec![
                scenario("valid_credentials", "username", "password", true),
                scenario("invalid_username", "invalid_username", "password", false),
                scenario("invalid_password", "username", "invalid_password", false),
                scenario("empty_credentials", "", "", false),
            ],
        }
    }

    /// Registers every scenario in file order. Fails on the first duplicate
    /// name or on an empty scenario list, before anything runs.
    pub fn registry(&self) -> Result<ScenarioRegistry, ConfigError> {
        let mut reg = ScenarioRegistry::new(self.suite.clone());
        for sc in &self.scenarios {
            reg.push(sc.clone())?;
        }
        if reg.is_empty() {
            return Err(crate::errors::HarnessError::EmptySuite.into());
        }
        Ok(reg)
    }

    pub fn oracle(&self) -> Result<StaticOracle, ConfigError> {
        let Some(accounts) = &self.accounts else {
            return Ok(StaticOracle::default());
        };
        let mut seen = HashSet::new();
        for (index, acct) in accounts.iter().enumerate() {
            if acct.username.is_empty() {
                return Err(ConfigError::EmptyUsername { index });
            }
            if !seen.insert(acct.username.as_str()) {
                return Err(ConfigError::DuplicateAccount {
                    username: acct.username.clone(),
                });
            }
        }
        Ok(StaticOracle::new(accounts.iter().cloned()))
    }
}

pub fn parse_config(raw: &str) -> Result<SuiteConfig, ConfigError> {
    let cfg: SuiteConfig = serde_yaml::from_str(raw)?;
    if cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: cfg.version,
            supported: SUPPORTED_CONFIG_VERSION,
        });
    }
    Ok(cfg)
}

pub fn load_config(path: &Path) -> Result<SuiteConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let cfg = parse_config(&raw)?;
    tracing::debug!(
        path = %path.display(),
        suite = %cfg.suite,
        scenarios = cfg.scenarios.len(),
        "loaded suite config"
    );
    Ok(cfg)
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, SAMPLE_CONFIG).map_err(|source| ConfigError::Write {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HarnessError;

    #[test]
    fn sample_file_matches_builtin_suite() {
        let cfg = parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(cfg, SuiteConfig::builtin());
    }

    #[test]
    fn rejects_unknown_version() {
        let err = parse_config("version: 2\nsuite: x\nscenarios: []\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedVersion {
                found: 2,
                supported: 1
            }
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse_config("version: 1\nsuite: x\ntests: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn empty_scenarios_is_empty_suite() {
        let cfg = parse_config("version: 1\nsuite: x\n").unwrap();
        let err = cfg.registry().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Harness(HarnessError::EmptySuite)
        ));
    }

    #[test]
    fn duplicate_scenario_names_conflict() {
        let raw = r#"
version: 1
suite: dup
scenarios:
  - name: twice
    input: { username: "a", password: "b" }
    expected: false
  - name: twice
    input: { username: "c", password: "d" }
    expected: false
"#;
        let err = parse_config(raw).unwrap().registry().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Harness(HarnessError::RegistrationConflict { ref name }) if name == "twice"
        ));
    }

    #[test]
    fn accounts_are_validated() {
        let mut cfg = SuiteConfig::builtin();
        cfg.accounts = Some(vec![Credential::new("", "")]);
        assert!(matches!(
            cfg.oracle().unwrap_err(),
            ConfigError::EmptyUsername { index: 0 }
        ));

        cfg.accounts = Some(vec![
            Credential::new("admin", "one"),
            Credential::new("admin", "two"),
        ]);
        assert!(matches!(
            cfg.oracle().unwrap_err(),
            ConfigError::DuplicateAccount { .. }
        ));

        cfg.accounts = None;
        assert_eq!(cfg.oracle().unwrap(), StaticOracle::default());
    }

    #[test]
    fn sample_written_to_disk_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        write_sample_config(&path).unwrap();

        assert_eq!(load_config(&path).unwrap(), SuiteConfig::builtin());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = load_config(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }), "{err}");
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn unwritable_target_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        // The parent is a regular file, so the write cannot succeed.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = write_sample_config(&blocker.join("credcheck.yaml")).unwrap_err();

        assert!(matches!(err, ConfigError::Write { .. }), "{err}");
    }
}
