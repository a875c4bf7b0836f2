//! Create calls against the Timeero public API and outcome classification

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use super::constants::{BENIGN_REJECTION_MARKERS, UNKNOWN_422_MESSAGE, headers};
use super::logging::ApiLogger;

/// Result category of a single create call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    /// Record created
    Success,
    /// Rejected as an expected duplicate (email taken, disposable email)
    Skipped,
    /// Rejected by destination validation; needs operator attention
    Failed,
    /// Unexpected status or transport failure; needs investigation
    Error,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Success => "SUCCESS",
            SyncStatus::Skipped => "SKIPPED",
            SyncStatus::Failed => "FAILED",
            SyncStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status, identifier and message derived from one HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub status: SyncStatus,
    pub destination_id: Option<String>,
    pub message: Option<String>,
}

/// Outcome of one create call, carrying the payload that produced it
#[derive(Debug, Clone)]
pub struct CreationOutcome<P> {
    pub status: SyncStatus,
    pub destination_id: Option<String>,
    pub message: Option<String>,
    pub payload: P,
}

impl<P> CreationOutcome<P> {
    fn from_classification(classification: Classification, payload: P) -> Self {
        Self {
            status: classification.status,
            destination_id: classification.destination_id,
            message: classification.message,
            payload,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SyncStatus::Success
    }
}

/// Classify a Timeero create response.
///
/// * 200/201: success, id from `items.id`, message from `message`
/// * 422 whose message contains a benign marker: skipped
/// * any other 422: failed
/// * anything else: error, with the status and full body in the message
pub fn classify_response(status: u16, body: &Value) -> Classification {
    match status {
        200 | 201 => Classification {
            status: SyncStatus::Success,
            destination_id: body.pointer("/items/id").and_then(id_to_string),
            message: message_field(body),
        },
        422 => {
            let message = message_field(body).unwrap_or_else(|| UNKNOWN_422_MESSAGE.to_string());
            let status = if BENIGN_REJECTION_MARKERS.iter().any(|marker| message.contains(marker)) {
                SyncStatus::Skipped
            } else {
                SyncStatus::Failed
            };
            Classification {
                status,
                destination_id: None,
                message: Some(message),
            }
        }
        other => Classification {
            status: SyncStatus::Error,
            destination_id: None,
            message: Some(format!("HTTP Status {}: {}", other, body)),
        },
    }
}

fn id_to_string(id: &Value) -> Option<String> {
    match id {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn message_field(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Response bodies are JSON when the API behaves; keep raw text otherwise.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Submits translated records to Timeero
#[derive(Debug, Clone)]
pub struct EntityCreator {
    http_client: reqwest::Client,
    token: String,
    logger: ApiLogger,
}

impl EntityCreator {
    pub fn new(http_client: reqwest::Client, token: impl Into<String>) -> Self {
        Self {
            http_client,
            token: token.into(),
            logger: ApiLogger::default(),
        }
    }

    /// POST `payload` to `url` and classify the result. Never fails: transport
    /// errors become [`SyncStatus::Error`] outcomes. `operation` names the call
    /// in the structured log.
    pub async fn create<P: Serialize>(&self, operation: &str, url: &str, payload: P) -> CreationOutcome<P> {
        let context = self.logger.start_operation(operation, url);
        let mut request_headers = HashMap::new();
        request_headers.insert("Authorization".to_string(), self.token.clone());
        request_headers.insert("Content-Type".to_string(), headers::CONTENT_TYPE_JSON.to_string());
        self.logger.log_request(&context, "POST", &request_headers);

        let response = self
            .http_client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, &self.token)
            .header(reqwest::header::CONTENT_TYPE, headers::CONTENT_TYPE_JSON)
            .json(&payload)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!("Create request to {} failed: {}", url, e);
                let classification = Classification {
                    status: SyncStatus::Error,
                    destination_id: None,
                    message: Some(format!("Request failed: {}", e)),
                };
                self.logger.complete_operation(&context, None, classification.status.as_str(), false);
                return CreationOutcome::from_classification(classification, payload);
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(text) => parse_body(&text),
            Err(e) => {
                debug!("Could not read response body from {}: {}", url, e);
                Value::Null
            }
        };

        let classification = classify_response(status, &body);
        self.logger.complete_operation(
            &context,
            Some(status),
            classification.status.as_str(),
            classification.status == SyncStatus::Success,
        );

        CreationOutcome::from_classification(classification, payload)
    }
}
