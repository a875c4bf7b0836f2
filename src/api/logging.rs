//! Structured logging with correlation tracking for TSheets/Timeero API calls
//!
//! Every create call gets a correlation id so its request, response and
//! outcome lines can be tied together in the log file when hundreds of calls
//! are in flight at once.

use log::{debug, info, warn};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Structured logger for API operations
#[derive(Debug, Clone, Default)]
pub struct ApiLogger;

/// Context for a single API operation
#[derive(Debug, Clone)]
pub struct OperationContext {
    pub correlation_id: String,
    /// Operation type (`create_user`, `create_jobcode`, `fetch_users_page`)
    pub operation_type: String,
    pub url: String,
    pub start_time: Instant,
}

impl ApiLogger {
    pub fn new() -> Self {
        Self
    }

    /// Start tracking a new operation with a fresh correlation id
    pub fn start_operation(&self, operation_type: &str, url: &str) -> OperationContext {
        let context = OperationContext {
            correlation_id: Uuid::new_v4().to_string(),
            operation_type: operation_type.to_string(),
            url: url.to_string(),
            start_time: Instant::now(),
        };

        if log::log_enabled!(log::Level::Debug) {
            let log_data = json!({
                "event": "operation_started",
                "correlation_id": context.correlation_id,
                "operation_type": context.operation_type,
                "url": context.url,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });

            debug!("API Operation Started: {}", log_data);
        }

        context
    }

    /// Log outgoing request headers, with credentials redacted
    pub fn log_request(&self, context: &OperationContext, method: &str, headers: &HashMap<String, String>) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }

        let log_data = json!({
            "event": "http_request",
            "correlation_id": context.correlation_id,
            "operation_type": context.operation_type,
            "method": method,
            "url": context.url,
            "headers": sanitize_headers(headers),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        debug!("HTTP Request: {}", log_data);
    }

    /// Complete an operation and log its outcome
    pub fn complete_operation(&self, context: &OperationContext, status_code: Option<u16>, outcome: &str, success: bool) {
        let log_data = json!({
            "event": "operation_completed",
            "correlation_id": context.correlation_id,
            "operation_type": context.operation_type,
            "url": context.url,
            "status_code": status_code,
            "outcome": outcome,
            "duration_ms": context.elapsed().as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if success {
            info!("API Operation Completed: {}", log_data);
        } else {
            warn!("API Operation Not Successful: {}", log_data);
        }
    }
}

impl OperationContext {
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Redact anything that looks like a credential
fn sanitize_headers(headers: &HashMap<String, String>) -> HashMap<String, Value> {
    headers
        .iter()
        .map(|(key, value)| {
            let key_lower = key.to_lowercase();
            let shown = if key_lower.contains("authorization") || key_lower.contains("token") || key_lower.contains("key") {
                Value::from("[REDACTED]")
            } else {
                Value::from(value.as_str())
            };
            (key.clone(), shown)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_context_creation() {
        let logger = ApiLogger::new();
        let context = logger.start_operation("create_user", "https://api.timeero.app/api/public/users");

        assert_eq!(context.operation_type, "create_user");
        assert_eq!(context.url, "https://api.timeero.app/api/public/users");
        assert!(Uuid::parse_str(&context.correlation_id).is_ok());
    }

    #[test]
    fn test_correlation_ids_are_unique() {
        let logger = ApiLogger::default();
        let a = logger.start_operation("create_jobcode", "u");
        let b = logger.start_operation("create_jobcode", "u");
        assert_ne!(a.correlation_id, b.correlation_id);
    }

    #[test]
    fn test_header_sanitization() {
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), "Bearer secret-token".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("X-API-Key".to_string(), "secret-key".to_string());

        let sanitized = sanitize_headers(&headers);

        assert_eq!(sanitized.get("Authorization"), Some(&Value::from("[REDACTED]")));
        assert_eq!(sanitized.get("Content-Type"), Some(&Value::from("application/json")));
        assert_eq!(sanitized.get("X-API-Key"), Some(&Value::from("[REDACTED]")));
    }
}
