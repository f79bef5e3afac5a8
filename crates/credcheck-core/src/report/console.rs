use crate::model::ScenarioResult;
use crate::report::RunArtifacts;
use std::io::{self, Write};

/// `name: PASS` or `name: FAIL`. Deterministic, unit-testable.
#[must_use]
pub fn format_result_line(r: &ScenarioResult) -> String {
    format!("{}: {}", r.scenario_name, r.status.label())
}

#[must_use]
pub fn format_summary_line(passed: usize, failed: usize) -> String {
    format!("{} passed, {} failed", passed, failed)
}

/// Writes exactly one line per scenario followed by the summary line to `out`.
/// Failure detail (`name: message`) goes to `detail`.
pub fn write_report<W: Write, D: Write>(
    artifacts: &RunArtifacts,
    out: &mut W,
    detail: &mut D,
) -> io::Result<()> {
    for r in &artifacts.results {
        writeln!(out, "{}", format_result_line(r))?;
        if !r.passed && !r.message.is_empty() {
            writeln!(detail, "{}: {}", r.scenario_name, r.message)?;
        }
    }
    writeln!(
        out,
        "{}",
        format_summary_line(artifacts.passed(), artifacts.failed())
    )
}

/// Report on stdout, failure detail on stderr.
pub fn print_report(artifacts: &RunArtifacts) -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    write_report(artifacts, &mut stdout.lock(), &mut stderr.lock())
}
