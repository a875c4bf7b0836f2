use std::time::Duration;

use super::constants::headers::USER_AGENT;
use crate::error::SyncError;

/// Build the HTTP client shared by every source and destination request.
///
/// Connections are pooled across the concurrent create calls. No request
/// timeout is set: a stalled endpoint stalls its phase.
pub fn build_http_client() -> Result<reqwest::Client, SyncError> {
    reqwest::Client::builder()
        .pool_max_idle_per_host(32)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(USER_AGENT)
        .build()
        .map_err(SyncError::ClientBuild)
}
