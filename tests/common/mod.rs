//! Shared fixtures for the wiremock-backed integration tests

#![allow(dead_code)]

use serde_json::{Map, Value, json};
use timesheet_sync::SyncConfig;
use wiremock::MockServer;

pub const SOURCE_TOKEN: &str = "tsheets-test-token";
pub const DEST_TOKEN: &str = "timeero-test-token";

/// Config pointing both services at the mock server
pub fn config_for(server: &MockServer) -> SyncConfig {
    let base = server.uri();
    SyncConfig::from_lookup(move |key| match key {
        "TSHEETS_TOKEN" => Some(SOURCE_TOKEN.to_string()),
        "TIMEERO_TOKEN" => Some(DEST_TOKEN.to_string()),
        "TSHEETS_USERS_URL" => Some(format!("{}/api/v1/users", base)),
        "TIMEERO_USERS_URL" => Some(format!("{}/api/public/users", base)),
        "TIMEERO_JOBCODES_URL" => Some(format!("{}/api/public/jobs", base)),
        _ => None,
    })
}

pub fn user_json(id: u64, mobile: &str) -> Value {
    json!({
        "id": id,
        "first_name": format!("First{}", id),
        "last_name": format!("Last{}", id),
        "email": format!("user{}@example.com", id),
        "mobile_number": mobile,
        "active": true,
        "permissions": { "admin": false }
    })
}

pub fn jobcode_json(id: u64, name: &str) -> Value {
    json!({ "id": id, "name": name, "active": true, "type": "regular" })
}

/// Key entries by id the way TSheets does
pub fn keyed(items: &[Value]) -> Value {
    let mut map = Map::new();
    for item in items {
        map.insert(item["id"].to_string(), item.clone());
    }
    Value::Object(map)
}

pub fn users_page(users: &[Value], jobcodes: &[Value], more: Value) -> Value {
    json!({
        "results": { "users": keyed(users) },
        "more": more,
        "supplemental_data": { "jobcodes": keyed(jobcodes) }
    })
}
