use crate::engine::registry::ScenarioRegistry;
use crate::errors::HarnessError;
use crate::model::{RunState, Scenario, ScenarioResult, ScenarioStatus};
use crate::oracle::CredentialOracle;
use crate::report::RunArtifacts;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

/// Runs registered scenarios against one oracle, strictly in registration order.
pub struct Harness<O> {
    oracle: O,
}

impl<O: CredentialOracle> Harness<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Executes every scenario once and returns one result per scenario.
    ///
    /// An oracle error or panic fails only its own scenario. The harness holds
    /// no state between runs, so calling this twice on the same registry gives
    /// the same results for a deterministic oracle.
    pub fn run_all(&self, registry: &ScenarioRegistry) -> Result<RunArtifacts, HarnessError> {
        if registry.is_empty() {
            return Err(HarnessError::EmptySuite);
        }

        let mut state = RunState::Pending;
        tracing::debug!(
            suite = registry.suite(),
            ?state,
            total = registry.len(),
            "run created"
        );

        state = RunState::Running;
        tracing::debug!(suite = registry.suite(), ?state, "run started");

        let results: Vec<ScenarioResult> = registry
            .scenarios()
            .iter()
            .map(|sc| self.run_scenario(sc))
            .collect();

        state = RunState::Completed;
        let artifacts = RunArtifacts {
            suite: registry.suite().to_string(),
            state,
            results,
        };
        tracing::debug!(
            suite = registry.suite(),
            ?state,
            passed = artifacts.passed(),
            failed = artifacts.failed(),
            "run completed"
        );
        Ok(artifacts)
    }

    pub fn run_scenario(&self, sc: &Scenario) -> ScenarioResult {
        let started = Instant::now();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            self.oracle.login(&sc.input.username, &sc.input.password)
        }));
        let duration_ms = started.elapsed().as_millis().min(u128::from(u64::MAX)) as u64;

        let (status, actual, message) = match outcome {
            Ok(Ok(actual)) if actual == sc.expected => {
                (ScenarioStatus::Pass, Some(actual), String::new())
            }
            Ok(Ok(actual)) => (
                ScenarioStatus::Fail,
                Some(actual),
                format!("expected {}, got {}", sc.expected, actual),
            ),
            Ok(Err(e)) => {
                tracing::warn!(scenario = %sc.name, error = %e, "oracle returned an error");
                (ScenarioStatus::Error, None, e.to_string())
            }
            Err(payload) => {
                let msg = format!("oracle panicked: {}", panic_message(payload.as_ref()));
                tracing::warn!(scenario = %sc.name, "{}", msg);
                (ScenarioStatus::Error, None, msg)
            }
        };

        tracing::debug!(
            scenario = %sc.name,
            status = status.label(),
            ?actual,
            "scenario finished"
        );

        ScenarioResult {
            scenario_name: sc.name.clone(),
            passed: status == ScenarioStatus::Pass,
            actual,
            expected: sc.expected,
            status,
            message,
            duration_ms,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
