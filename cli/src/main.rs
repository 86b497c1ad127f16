//! CLI for the profile activity updater.
//!
//! Fetches a GitHub user's recent activity and rewrites the activity and
//! last-updated sections of a profile README.

use clap::Parser;
use profile_activity::{load_settings, RunSummary, Runner, RunnerConfig, RunnerError, Settings};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Profile Activity - Refresh the recent activity section of a GitHub profile README.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub login whose activity is collected.
    #[arg(long, env = "GITHUB_USERNAME")]
    username: Option<String>,

    /// GitHub token. Requests are unauthenticated (and rate limited harder) without one.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// README file to update [default: README.md].
    #[arg(long)]
    readme_path: Option<PathBuf>,

    /// Activity window in months of 30 days [default: 2].
    #[arg(long)]
    months: Option<u32>,

    /// Maximum number of activity entries [default: 10].
    #[arg(long)]
    limit: Option<usize>,

    /// GitHub REST API base URL [default: https://api.github.com].
    #[arg(long)]
    api_url: Option<String>,

    /// Path to a TOML settings file. Flags take precedence over its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the rendered activity without writing the README.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            if summary.has_warnings() {
                warn!("Run finished with warnings");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let file_settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    let flag_settings = Settings {
        username: args.username,
        readme_path: args.readme_path,
        months: args.months,
        limit: args.limit,
        api_url: args.api_url,
    };

    let config =
        RunnerConfig::from_settings(file_settings.merge(flag_settings), args.token, args.dry_run)?;
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Repositories with activity: {}", summary.repository_records);
    println!("  Repositories contributed to: {}", summary.contribution_records);
    println!("  Activities rendered: {}", summary.activities_rendered);
    println!("  Failed requests: {}", summary.failed_requests);
    println!("  Sections updated: {}", summary.sections_updated);
    println!("  Sections missing: {}", summary.sections_missing);
}
