pub mod dispatch;
pub mod init;
pub mod run;
pub mod validate;

pub use dispatch::dispatch;

use credcheck_core::config::{load_config, SuiteConfig};
use credcheck_core::errors::ConfigError;
use std::path::Path;

/// Loads the suite file, or the built-in login suite when no path is given.
pub(crate) fn load_suite(path: Option<&Path>) -> Result<SuiteConfig, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => {
            tracing::debug!("no --config given, using built-in login suite");
            Ok(SuiteConfig::builtin())
        }
    }
}

pub(crate) fn config_error(e: &ConfigError) -> i32 {
    eprintln!("config error: {}", e);
    crate::exit_codes::CONFIG_ERROR
}
