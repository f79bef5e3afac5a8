use crate::report::RunArtifacts;
use std::path::Path;

pub fn to_json(artifacts: &RunArtifacts) -> serde_json::Value {
    serde_json::json!({
        "suite": artifacts.suite,
        "state": artifacts.state,
        "passed": artifacts.passed(),
        "failed": artifacts.failed(),
        "results": artifacts.results,
    })
}

pub fn write_json(artifacts: &RunArtifacts, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(&to_json(artifacts))?)?;
    Ok(())
}
