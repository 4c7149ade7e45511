//! Application Runner Module
//!
//! Drives one report run: fetch, classify, format, render. Also owns the
//! tracing setup and the mapping from outcomes to console messages and exit
//! codes used by the binary.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{self, Command};
use crate::client::{ActivitySource, GithubClient};
use crate::config::AppConfig;
use crate::error::ActivityError;
use crate::events::{classify, format_all};
use crate::report::ReportRenderer;

/// Counts from a completed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    /// Records returned by the source
    pub records: usize,
    /// Recognized groups that were rendered
    pub groups: usize,
    /// Lines written
    pub lines: usize,
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence over the config's default filter.
pub fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if let Err(err) = installed {
        debug!(error = %err, "Tracing subscriber already installed, keeping it");
    }
}

/// Fetch a user's activity once and render the report to `out`.
///
/// # Errors
///
/// Returns [`ActivityError::EmptyActivity`] when the source has no records,
/// and propagates fetch and write failures.
pub async fn run_report<S, W>(
    source: &S,
    username: &str,
    out: W,
) -> Result<ReportSummary, ActivityError>
where
    S: ActivitySource + ?Sized,
    W: Write,
{
    let records = source.fetch_activity(username).await?;
    if records.is_empty() {
        return Err(ActivityError::EmptyActivity {
            username: username.to_string(),
        });
    }

    let grouped = classify(&records);
    let formatted = format_all(&grouped);

    let mut renderer = ReportRenderer::new(out);
    renderer.render_all(&formatted)?;

    let summary = ReportSummary {
        records: records.len(),
        groups: formatted.len(),
        lines: renderer.lines_written(),
    };
    debug!(?summary, username, "Report complete");
    Ok(summary)
}

/// Run a parsed command against the GitHub API, writing to stdout.
///
/// # Errors
///
/// Returns an error only for setup failures (the async runtime). Report
/// failures are printed and turned into a non-zero exit code.
pub fn run_cli(config: &AppConfig, command: Command) -> anyhow::Result<ExitCode> {
    let username = match command {
        Command::Help => {
            cli::print_help();
            return Ok(ExitCode::SUCCESS);
        }
        Command::Report { username } => username,
    };

    let client = match GithubClient::new(config) {
        Ok(client) => client,
        Err(err) => return Ok(report_error(&err)),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let stdout = std::io::stdout();
    let result = runtime.block_on(run_report(&client, &username, stdout.lock()));

    Ok(match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    })
}

/// Print an outcome to the console and return its exit code.
pub fn report_error(err: &ActivityError) -> ExitCode {
    match err {
        ActivityError::MissingArgument => cli::print_missing_command(),
        other => eprintln!("{}", other),
    }
    ExitCode::from(err.exit_code())
}
