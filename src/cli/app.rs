use clap::Parser;
use env_logger::Target;
use std::fs::OpenOptions;
use std::io;

use crate::api::constants::DEFAULT_PASSWORD_LENGTH;

/// Running with no arguments performs the full sync with configuration taken
/// from the environment (and `.env`, if present).
#[derive(Parser, Debug)]
#[command(name = "timesheet-sync")]
#[command(version, about = "Migrate active users and job codes from TSheets to Timeero")]
pub struct Cli {
    /// Length of the initial password generated for each Timeero user (minimum 6)
    #[arg(long, default_value_t = DEFAULT_PASSWORD_LENGTH)]
    pub password_length: usize,

    /// File that receives the run log (truncated on each run)
    #[arg(long, default_value = "timesheet-sync.log")]
    pub log_file: String,
}

/// Log target for the run: the truncated log file, or stderr with the open
/// error when the file cannot be created.
pub fn log_target(path: &str) -> (Target, Option<io::Error>) {
    match OpenOptions::new().create(true).write(true).truncate(true).open(path) {
        Ok(file) => (Target::Pipe(Box::new(file)), None),
        Err(e) => (Target::Stderr, Some(e)),
    }
}
