use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "credcheck",
    version,
    about = "Run named login scenarios against a credential oracle and report pass/fail"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Execute every scenario and print one line per scenario plus a summary
    Run(RunArgs),
    /// Load and register the suite without calling the oracle
    Validate(ValidateArgs),
    /// Write a sample suite file
    Init(InitArgs),
    Version,
}

#[derive(Parser, Clone, Debug)]
pub struct RunArgs {
    /// Suite file; the built-in login suite runs when omitted
    #[arg(long, env = "CREDCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// report format written in addition to the console output
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    pub format: ReportFormat,

    /// report path for json/junit (defaults: run.json, junit.xml)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone, Debug)]
pub struct ValidateArgs {
    #[arg(long, env = "CREDCHECK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Clone, Debug)]
pub struct InitArgs {
    #[arg(long, default_value = credcheck_core::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Console,
    Json,
    Junit,
}

impl ReportFormat {
    pub fn default_path(self) -> Option<PathBuf> {
        match self {
            ReportFormat::Console => None,
            ReportFormat::Json => Some(PathBuf::from("run.json")),
            ReportFormat::Junit => Some(PathBuf::from("junit.xml")),
        }
    }
}
