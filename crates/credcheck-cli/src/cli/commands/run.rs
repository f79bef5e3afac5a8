use super::super::args::{ReportFormat, RunArgs};
use super::{config_error, load_suite};
use crate::exit_codes;
use credcheck_core::engine::Harness;
use credcheck_core::errors::ConfigError;
use credcheck_core::report::{console, json, junit, RunArtifacts};
use std::path::Path;

pub(crate) fn run(args: RunArgs) -> anyhow::Result<i32> {
    if args.format == ReportFormat::Console && args.output.is_some() {
        eprintln!("config error: --output requires --format json or --format junit");
        return Ok(exit_codes::CONFIG_ERROR);
    }

    let cfg = match load_suite(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => return Ok(config_error(&e)),
    };

    // Registration and oracle construction both happen before anything executes.
    let registry = match cfg.registry() {
        Ok(r) => r,
        Err(e) => return Ok(config_error(&e)),
    };
    let oracle = match cfg.oracle() {
        Ok(o) => o,
        Err(e) => return Ok(config_error(&e)),
    };
    tracing::info!(
        suite = registry.suite(),
        scenarios = registry.len(),
        accounts = oracle.len(),
        "running suite"
    );

    let harness = Harness::new(oracle);
    let artifacts = match harness.run_all(&registry) {
        Ok(a) => a,
        Err(e) => return Ok(config_error(&ConfigError::from(e))),
    };

    console::print_report(&artifacts)?;

    // Console has no file form; default_path is None for it.
    let out = args
        .format
        .default_path()
        .map(|default| args.output.clone().unwrap_or(default));
    if let Some(path) = out {
        if let Err(e) = write_report(args.format, &artifacts, &path) {
            eprintln!("WARNING: failed to write {}: {}", path.display(), e);
        }
    }

    Ok(exit_codes::for_run(artifacts.all_passed()))
}

fn write_report(
    format: ReportFormat,
    artifacts: &RunArtifacts,
    path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format {
        ReportFormat::Console => Ok(()),
        ReportFormat::Json => json::write_json(artifacts, path),
        ReportFormat::Junit => junit::write_junit(artifacts, path),
    }
}
