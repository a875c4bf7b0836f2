use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::{info, warn};

use timesheet_sync::cli::{Cli, log_target};
use timesheet_sync::{SyncConfig, Synchronizer, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger to file (truncate on each run)
    let (target, open_error) = log_target(&cli.log_file);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(target)
        .init();
    if let Some(e) = open_error {
        warn!("Could not open log file {}, logging to stderr: {}", cli.log_file, e);
    }

    info!("Starting timesheet-sync");
    println!("{}", "Starting TSheets to Timeero Synchronization...".bold());

    let config = SyncConfig::from_env().with_password_length(cli.password_length);
    let synchronizer = Synchronizer::new(config).context("Failed to initialise synchronizer")?;

    let report = synchronizer
        .run()
        .await
        .context("FATAL SYNCHRONIZATION ERROR")?;

    let summary = report.summary();
    println!(
        "{} Processed {} job codes and {} users (details in {})",
        "✓".green(),
        summary.jobcodes.total(),
        summary.users.total(),
        cli.log_file
    );
    print!("{}", ui::render_report(&report));

    Ok(())
}
