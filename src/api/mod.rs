//! Clients for the two REST services involved in a sync
//!
//! TSheets is only read (users with embedded job codes); Timeero is only
//! written to (one POST per translated record).

pub mod client;
pub mod constants;
pub mod destination;
pub mod logging;
pub mod models;
pub mod source;

pub use client::build_http_client;
pub use destination::{Classification, CreationOutcome, EntityCreator, SyncStatus, classify_response};
pub use logging::{ApiLogger, OperationContext};
pub use models::{DestinationJobCodePayload, DestinationUserPayload, SourceJobCode, SourceUser, UserPermissions};
pub use source::{SourceData, SourceReader};
