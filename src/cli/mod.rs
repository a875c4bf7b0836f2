pub mod app;

pub use app::{Cli, log_target};
