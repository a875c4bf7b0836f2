use thiserror::Error;

/// Conditions that abort a sync run before any destination write happens.
///
/// Per-record destination failures are never represented here; they are
/// reported as [`crate::api::SyncStatus`] values instead.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("TSheets API authentication failed (HTTP 401 on page {page}). Check TSHEETS_TOKEN.")]
    Unauthorized { page: u32 },

    #[error("TSheets users page {page} returned HTTP {status}: {body}")]
    PageStatus { page: u32, status: u16, body: String },

    #[error("TSheets users page {page} is malformed: {reason}")]
    MalformedPage { page: u32, reason: String },

    #[error("Request for TSheets users page {page} failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl SyncError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SyncError::Unauthorized { .. })
    }
}
