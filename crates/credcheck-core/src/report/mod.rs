pub mod console;
pub mod json;
pub mod junit;

use crate::model::{RunState, ScenarioResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunArtifacts {
    pub suite: String,
    pub state: RunState,
    pub results: Vec<ScenarioResult>,
}

impl RunArtifacts {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}
