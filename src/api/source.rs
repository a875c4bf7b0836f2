//! Paginated reader for the TSheets users endpoint

use log::{debug, error, info};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use super::constants::query;
use super::logging::ApiLogger;
use super::models::{SourceJobCode, SourcePage, SourceUser};
use crate::config::SourceConfig;
use crate::error::SyncError;

/// Everything read from TSheets for one run
#[derive(Debug, Clone, Default)]
pub struct SourceData {
    /// Active users across all pages, in page order
    pub users: Vec<SourceUser>,
    /// Job codes from the first page's supplemental data
    pub jobcodes: Vec<SourceJobCode>,
}

pub struct SourceReader {
    http_client: reqwest::Client,
    config: SourceConfig,
    logger: ApiLogger,
}

impl SourceReader {
    pub fn new(http_client: reqwest::Client, config: SourceConfig) -> Self {
        Self {
            http_client,
            config,
            logger: ApiLogger::default(),
        }
    }

    /// Read every active user and the job code table.
    ///
    /// Pages are requested one at a time until the response's `more` field is
    /// zero or false. Any 401 aborts immediately with [`SyncError::Unauthorized`].
    pub async fn fetch_all(&self) -> Result<SourceData, SyncError> {
        let mut data = SourceData::default();
        let mut page: u32 = 1;

        loop {
            let body = self.fetch_page(page).await?;

            let users: Vec<SourceUser> = parse_collection(body.results.users, page, "results.users")?;
            debug!("Page {} returned {} users", page, users.len());
            data.users.extend(users);

            if page == 1 {
                data.jobcodes = parse_collection(body.supplemental_data.jobcodes, page, "supplemental_data.jobcodes")?;
                debug!("Page 1 returned {} job codes", data.jobcodes.len());
            }

            let more = has_more_pages(body.more.as_ref())
                .map_err(|reason| SyncError::MalformedPage { page, reason })?;
            if !more {
                break;
            }
            page += 1;
        }

        info!(
            "Fetched {} active users and {} job codes from TSheets across {} page(s)",
            data.users.len(),
            data.jobcodes.len(),
            page
        );
        Ok(data)
    }

    async fn fetch_page(&self, page: u32) -> Result<SourcePage, SyncError> {
        let context = self.logger.start_operation("fetch_users_page", &self.config.users_url);
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), format!("Bearer {}", self.config.token));
        self.logger.log_request(&context, "GET", &headers);

        let response = self
            .http_client
            .get(&self.config.users_url)
            .bearer_auth(&self.config.token)
            .query(&[
                (query::PAGE, page.to_string()),
                (query::PER_PAGE, self.config.page_size.to_string()),
                (query::ACTIVE, query::ACTIVE_ONLY.to_string()),
                (query::INCLUDE, query::INCLUDE_JOBCODES.to_string()),
            ])
            .send()
            .await
            .map_err(|source| SyncError::Transport { page, source })?;

        let status = response.status();
        self.logger
            .complete_operation(&context, Some(status.as_u16()), status.as_str(), status.is_success());

        if status == StatusCode::UNAUTHORIZED {
            error!("Authentication Error: TSheets token is invalid.");
            return Err(SyncError::Unauthorized { page });
        }

        let text = response
            .text()
            .await
            .map_err(|source| SyncError::Transport { page, source })?;

        if !status.is_success() {
            return Err(SyncError::PageStatus {
                page,
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| SyncError::MalformedPage {
            page,
            reason: format!("invalid response body: {}", e),
        })
    }
}

/// Decode an id-keyed TSheets collection, keeping response order.
///
/// TSheets encodes an empty collection as `[]`, and a missing one as nothing at all.
fn parse_collection<T: DeserializeOwned>(raw: Value, page: u32, path: &str) -> Result<Vec<T>, SyncError> {
    let items: Vec<Value> = match raw {
        Value::Null => Vec::new(),
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        Value::Array(items) => items,
        other => {
            return Err(SyncError::MalformedPage {
                page,
                reason: format!("{} is not a collection: {}", path, other),
            });
        }
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| SyncError::MalformedPage {
                page,
                reason: format!("invalid entry in {}: {}", path, e),
            })
        })
        .collect()
}

/// Interpret the `more` pagination flag.
fn has_more_pages(more: Option<&Value>) -> Result<bool, String> {
    match more {
        Some(Value::Bool(more)) => Ok(*more),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(n) => Ok(n != 0.0),
            None => Err(format!("unreadable 'more' value: {}", n)),
        },
        Some(other) => Err(format!("unexpected 'more' value: {}", other)),
        None => Err("missing 'more' field".to_string()),
    }
}
