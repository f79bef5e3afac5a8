use crate::errors::HarnessError;
use crate::model::{Credential, Scenario};
use std::collections::HashSet;

/// Ordered set of scenarios for one suite. Names are unique; order is registration order.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRegistry {
    suite: String,
    scenarios: Vec<Scenario>,
    names: HashSet<String>,
}

impl ScenarioRegistry {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            scenarios: Vec::new(),
            names: HashSet::new(),
        }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        input: Credential,
        expected: bool,
    ) -> Result<(), HarnessError> {
        self.push(Scenario {
            name: name.into(),
            input,
            expected,
        })
    }

    /// Adds an already-built scenario, rejecting a name that is taken.
    pub fn push(&mut self, scenario: Scenario) -> Result<(), HarnessError> {
        if !self.names.insert(scenario.name.clone()) {
            return Err(HarnessError::RegistrationConflict {
                name: scenario.name,
            });
        }
        self.scenarios.push(scenario);
        Ok(())
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
