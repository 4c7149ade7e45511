//! github-activity - summarize a GitHub user's recent public activity.

use std::process::ExitCode;

use clap::Parser;
use github_activity::cli::Command;
use github_activity::config::{AppConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use github_activity::runner::{init_tracing, report_error, run_cli};

/// Print a grouped summary of a GitHub user's recent public activity
#[derive(Parser, Debug)]
#[command(name = "github-activity")]
#[command(version, about, long_about = None)]
struct Args {
    /// `<username>` to report on, or `help`
    #[arg(value_name = "COMMAND")]
    command: Vec<String>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        AppConfig {
            debug: args.debug,
            verbose: args.verbose,
            api_base: args.api_base.clone(),
            timeout_secs: Some(args.timeout),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = AppConfig::from(&args);
    init_tracing(&config);

    match Command::from_args(&args.command) {
        Ok(command) => run_cli(&config, command),
        Err(err) => Ok(report_error(&err)),
    }
}
