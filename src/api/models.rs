//! Wire models for both services

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Admin flag nested under a TSheets user's `permissions`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserPermissions {
    /// Only a literal `true` grants admin; null or any other value does not
    #[serde(default, deserialize_with = "strict_true")]
    pub admin: bool,
}

/// An active user as returned by the TSheets users endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceUser {
    pub id: u64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_permissions")]
    pub permissions: Option<UserPermissions>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub payroll_id: Option<String>,
}

impl SourceUser {
    pub fn is_admin(&self) -> bool {
        self.permissions.as_ref().is_some_and(|p| p.admin)
    }
}

/// A job code from the TSheets supplemental data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceJobCode {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    /// `None` when absent, null or not a boolean
    #[serde(default, deserialize_with = "optional_bool")]
    pub active: Option<bool>,
}

fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

fn optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()))
}

/// A `permissions` value that is not an object counts as no permissions.
fn lenient_permissions<'de, D>(deserializer: D) -> Result<Option<UserPermissions>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|v| serde_json::from_value(v).ok()))
}

/// Accepts `"123"`, `123` or null/absent; blank strings count as absent.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Raw shape of one TSheets users page.
///
/// Collections are kept as raw JSON so an empty collection encoded as `[]`
/// is accepted alongside the usual id-keyed object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcePage {
    #[serde(default)]
    pub results: PageResults,
    #[serde(default)]
    pub supplemental_data: SupplementalData,
    #[serde(default)]
    pub more: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageResults {
    #[serde(default)]
    pub users: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplementalData {
    #[serde(default)]
    pub jobcodes: Value,
}

/// Job payload for the Timeero jobs endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationJobCodePayload {
    pub name: String,
    pub job_code: String,
    pub active: bool,
    pub track_mileage: bool,
    pub track_location: bool,
}

/// User payload for the Timeero users endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationUserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub password: String,
    pub company_employee_id: String,
    pub role_id: u32,
    pub track_location: bool,
    pub track_mileage: bool,
}
