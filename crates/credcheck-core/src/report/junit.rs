use crate::model::ScenarioStatus;
use crate::report::RunArtifacts;
use std::path::Path;

pub fn render_junit(artifacts: &RunArtifacts) -> String {
    let errors = artifacts
        .results
        .iter()
        .filter(|r| r.status == ScenarioStatus::Error)
        .count();
    let failures = artifacts
        .results
        .iter()
        .filter(|r| r.status == ScenarioStatus::Fail)
        .count();

    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<testsuite name="{}" tests="{}" failures="{}" errors="{}">"#,
        escape(&artifacts.suite),
        artifacts.results.len(),
        failures,
        errors
    ));
    xml.push('\n');

    for r in &artifacts.results {
        let secs = r.duration_ms as f64 / 1000.0;
        xml.push_str(&format!(
            r#"  <testcase name="{}" time="{:.3}">"#,
            escape(&r.scenario_name),
            secs
        ));
        match r.status {
            ScenarioStatus::Pass => {}
            ScenarioStatus::Fail => {
                xml.push_str(&format!(r#"<failure message="{}"/>"#, escape(&r.message)))
            }
            ScenarioStatus::Error => {
                xml.push_str(&format!(r#"<error message="{}"/>"#, escape(&r.message)))
            }
        }
        xml.push_str("</testcase>\n");
    }

    xml.push_str("</testsuite>\n");
    xml
}

pub fn write_junit(artifacts: &RunArtifacts, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, render_junit(artifacts))?;
    Ok(())
}

/// Attribute-safe text. Control characters other than tab, LF and CR are not
/// legal in XML 1.0 even as references, so they become U+FFFD.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < '\u{20}' => out.push('\u{FFFD}'),
            c => out.push(c),
        }
    }
    out
}
