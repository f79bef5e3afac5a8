//! End-to-end harness behaviour against the literal login scenarios.

use credcheck_core::config::SuiteConfig;
use credcheck_core::engine::{Harness, ScenarioRegistry};
use credcheck_core::errors::{HarnessError, OracleError};
use credcheck_core::model::{Credential, RunState, ScenarioStatus};
use credcheck_core::oracle::{CredentialOracle, StaticOracle};
use std::cell::Cell;

fn literal_registry() -> ScenarioRegistry {
    SuiteConfig::builtin().registry().expect("builtin suite registers")
}

/// Delegates to the reference table, except for one username it cannot handle.
struct FlakyBackend {
    inner: StaticOracle,
    broken_user: &'static str,
    panic_instead: bool,
    calls: Cell<usize>,
}

impl FlakyBackend {
    fn new(broken_user: &'static str, panic_instead: bool) -> Self {
        Self {
            inner: StaticOracle::default(),
            broken_user,
            panic_instead,
            calls: Cell::new(0),
        }
    }
}

impl CredentialOracle for FlakyBackend {
    fn login(&self, username: &str, password: &str) -> Result<bool, OracleError> {
        self.calls.set(self.calls.get() + 1);
        if username == self.broken_user {
            if self.panic_instead {
                panic!("lookup for {username} crashed");
            }
            return Err(OracleError::new("account store unavailable"));
        }
        self.inner.login(username, password)
    }
}

#[test]
fn literal_scenarios_pass_against_reference_oracle() {
    let harness = Harness::new(StaticOracle::default());
    let run = harness.run_all(&literal_registry()).unwrap();

    let outcome: Vec<(&str, bool, Option<bool>)> = run
        .results
        .iter()
        .map(|r| (r.scenario_name.as_str(), r.passed, r.actual))
        .collect();
    assert_eq!(
        outcome,
        vec![
            ("valid_credentials", true, Some(true)),
            ("invalid_username", true, Some(false)),
            ("invalid_password", true, Some(false)),
            ("empty_credentials", true, Some(false)),
        ]
    );
    assert!(run.all_passed());
    assert_eq!(run.state, RunState::Completed);
}

#[test]
fn oracle_error_is_isolated_to_its_scenario() {
    let harness = Harness::new(FlakyBackend::new("invalid_username", false));
    let run = harness.run_all(&literal_registry()).unwrap();

    assert_eq!(harness.oracle().calls.get(), 4);
    assert_eq!(run.results.len(), 4);

    let broken = &run.results[1];
    assert_eq!(broken.scenario_name, "invalid_username");
    assert_eq!(broken.status, ScenarioStatus::Error);
    assert_eq!(broken.actual, None);
    assert!(broken.message.contains("account store unavailable"));

    for idx in [0, 2, 3] {
        assert!(run.results[idx].passed, "{:?}", run.results[idx]);
    }
    assert!(!run.all_passed());
    assert_eq!((run.passed(), run.failed()), (3, 1));
}

#[test]
fn oracle_panic_is_isolated_to_its_scenario() {
    let harness = Harness::new(FlakyBackend::new("invalid_username", true));
    let run = harness.run_all(&literal_registry()).unwrap();

    assert_eq!(harness.oracle().calls.get(), 4);
    let statuses: Vec<ScenarioStatus> = run.results.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            ScenarioStatus::Pass,
            ScenarioStatus::Error,
            ScenarioStatus::Pass,
            ScenarioStatus::Pass,
        ]
    );
    assert!(run.results[1]
        .message
        .contains("lookup for invalid_username crashed"));
    assert!(!run.all_passed());
}

#[test]
fn duplicate_registration_fails_before_any_execution() {
    let oracle = FlakyBackend::new("nobody", false);
    let mut reg = ScenarioRegistry::new("dup");
    reg.register(
        "valid_credentials",
        Credential::new("username", "password"),
        true,
    )
    .unwrap();
    let err = reg
        .register("valid_credentials", Credential::new("", ""), false)
        .unwrap_err();

    assert_eq!(
        err,
        HarnessError::RegistrationConflict {
            name: "valid_credentials".into()
        }
    );
    assert_eq!(oracle.calls.get(), 0);
}

#[test]
fn repeated_runs_yield_identical_results() {
    let reg = literal_registry();
    let harness = Harness::new(FlakyBackend::new("username", false));

    let first = harness.run_all(&reg).unwrap();
    let second = harness.run_all(&reg).unwrap();

    assert_eq!(first, second);
    assert_eq!(harness.oracle().calls.get(), 8);
}

#[test]
fn wrong_expectation_is_an_assertion_mismatch() {
    let mut reg = ScenarioRegistry::new("mismatch");
    reg.register("empty_is_accepted", Credential::new("", ""), true)
        .unwrap();
    reg.register("valid_credentials", Credential::new("username", "password"), true)
        .unwrap();

    let run = Harness::new(StaticOracle::default()).run_all(&reg).unwrap();

    assert_eq!(run.results[0].status, ScenarioStatus::Fail);
    assert_eq!(run.results[0].actual, Some(false));
    assert_eq!(run.results[0].message, "expected true, got false");
    assert!(run.results[1].passed);
}
