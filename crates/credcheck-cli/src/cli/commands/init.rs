use super::super::args::InitArgs;
use crate::exit_codes::{CONFIG_ERROR, SUCCESS};
use credcheck_core::config::write_sample_config;

pub(crate) fn run(args: InitArgs) -> anyhow::Result<i32> {
    if args.config.exists() && !args.force {
        eprintln!(
            "config error: {} already exists (use --force to overwrite)",
            args.config.display()
        );
        return Ok(CONFIG_ERROR);
    }
    if let Some(parent) = args.config.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_sample_config(&args.config)?;
    println!("Created {}", args.config.display());
    Ok(SUCCESS)
}
