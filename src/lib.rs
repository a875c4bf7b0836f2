pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod generators;
pub mod sync;
pub mod ui;

pub use config::SyncConfig;
pub use error::SyncError;
pub use sync::{SyncReport, Synchronizer};
