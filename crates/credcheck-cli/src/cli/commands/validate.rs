use super::super::args::ValidateArgs;
use super::{config_error, load_suite};
use crate::exit_codes::SUCCESS;

/// Same checks `run` performs before execution, without calling the oracle.
pub(crate) fn run(args: ValidateArgs) -> anyhow::Result<i32> {
    let checked = load_suite(args.config.as_deref()).and_then(|cfg| {
        let registry = cfg.registry()?;
        cfg.oracle()?;
        Ok(registry)
    });
    match checked {
        Ok(registry) => {
            println!("ok: {} scenarios", registry.len());
            Ok(SUCCESS)
        }
        Err(e) => Ok(config_error(&e)),
    }
}
