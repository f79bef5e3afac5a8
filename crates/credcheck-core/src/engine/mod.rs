pub mod registry;
pub mod runner;

pub use registry::ScenarioRegistry;
pub use runner::Harness;
