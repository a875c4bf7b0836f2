//! Sync orchestration: translate source records, fan out creates, collect mappings

pub mod fanout;
pub mod orchestrator;
pub mod report;
pub mod transform;

pub use fanout::fan_out;
pub use orchestrator::Synchronizer;
pub use report::{JobCodeMapping, StatusCounts, SyncReport, SyncSummary, UserMapping};
pub use transform::{jobcode_payload, user_payload};
