use log::{debug, info, warn};

use crate::api::constants::{
    ADMIN_ROLE_ID, DEFAULT_PASSWORD_LENGTH, DEFAULT_PHONE_PREFIX, DEFAULT_ROLE_ID,
    TIMEERO_JOBCODES_URL, TIMEERO_USERS_URL, TSHEETS_PAGE_SIZE, TSHEETS_USERS_URL,
};

/// Fallback tokens used when the environment provides none (local testing only)
const FALLBACK_TSHEETS_TOKEN: &str = "S.7__PLACEHOLDER_TOKEN";
const FALLBACK_TIMEERO_TOKEN: &str = "Essh2i3vy_PLACEHOLDER_TOKEN";

/// Credentials and endpoints for the source (TSheets) service
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub users_url: String,
    pub token: String,
    pub page_size: u32,
}

/// Credentials and endpoints for the destination (Timeero) service
#[derive(Debug, Clone)]
pub struct DestinationConfig {
    pub users_url: String,
    pub jobcodes_url: String,
    pub token: String,
}

/// Knobs applied while translating source records
#[derive(Debug, Clone)]
pub struct MappingSettings {
    pub phone_prefix: String,
    pub password_length: usize,
    pub admin_role_id: u32,
    pub default_role_id: u32,
}

impl Default for MappingSettings {
    fn default() -> Self {
        Self {
            phone_prefix: DEFAULT_PHONE_PREFIX.to_string(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            admin_role_id: ADMIN_ROLE_ID,
            default_role_id: DEFAULT_ROLE_ID,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub source: SourceConfig,
    pub destination: DestinationConfig,
    pub mapping: MappingSettings,
}

impl SyncConfig {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {:?}", path),
            Err(_) => debug!("No .env file found, using process environment"),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to built-in defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, fallback: &str| -> String {
            match lookup(key).filter(|value| !value.trim().is_empty()) {
                Some(value) => value,
                None => {
                    debug!("{} not set, using default", key);
                    fallback.to_string()
                }
            }
        };

        let source_token = var("TSHEETS_TOKEN", FALLBACK_TSHEETS_TOKEN);
        let destination_token = var("TIMEERO_TOKEN", FALLBACK_TIMEERO_TOKEN);

        if source_token == FALLBACK_TSHEETS_TOKEN {
            warn!("TSHEETS_TOKEN not set, using placeholder token");
        }
        if destination_token == FALLBACK_TIMEERO_TOKEN {
            warn!("TIMEERO_TOKEN not set, using placeholder token");
        }

        let config = Self {
            source: SourceConfig {
                users_url: var("TSHEETS_USERS_URL", TSHEETS_USERS_URL),
                token: source_token,
                page_size: TSHEETS_PAGE_SIZE,
            },
            destination: DestinationConfig {
                users_url: var("TIMEERO_USERS_URL", TIMEERO_USERS_URL),
                jobcodes_url: var("TIMEERO_JOBCODES_URL", TIMEERO_JOBCODES_URL),
                token: destination_token,
            },
            mapping: MappingSettings::default(),
        };

        info!(
            "Configured sync {} -> {} / {}",
            config.source.users_url, config.destination.users_url, config.destination.jobcodes_url
        );
        config
    }

    pub fn with_password_length(mut self, length: usize) -> Self {
        self.mapping.password_length = length;
        self
    }
}
