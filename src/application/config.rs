/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_ATTEMPTS, DEFAULT_PAGE_SIZE, DEFAULT_RETRY_DELAY_SECS,
    DEFAULT_SCRIPT_ID, DEFAULT_SCRIPT_KEY, DEFAULT_TIMEOUT_SECS,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, override_from_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Environment variable overriding the script id
pub const ENV_SCRIPT_ID: &str = "SH_API_SCRIPT_ID";
/// Environment variable overriding the script key
pub const ENV_SCRIPT_KEY: &str = "SH_API_SCRIPT_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "SH_API_BASE_URL";
/// Environment variable with the total number of attempts per GET, first request included
pub const ENV_MAX_ATTEMPTS: &str = "SH_API_MAX_ATTEMPTS";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Script credentials, serialized exactly as the `/authenticate` body
pub struct Credentials {
    /// Script id, `<account id>/<script name>`
    pub script_id: String,
    /// Secret key issued for the script
    pub script_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the ShotHub API client
pub struct Config {
    /// Script credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Retry policy applied to GET requests
    pub retry: RetryConfig,
    /// Number of items requested per page in listings
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the built-in defaults, then applies
    /// `SH_API_SCRIPT_ID`, `SH_API_SCRIPT_KEY` and `SH_API_BASE_URL` when set
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let mut script_id = String::from(DEFAULT_SCRIPT_ID);
        let mut script_key = String::from(DEFAULT_SCRIPT_KEY);
        let mut base_url = String::from(DEFAULT_BASE_URL);

        if !override_from_env(ENV_SCRIPT_ID, &mut script_id) {
            error!("{ENV_SCRIPT_ID} not set, using the placeholder script id");
        }
        if !override_from_env(ENV_SCRIPT_KEY, &mut script_key) {
            error!("{ENV_SCRIPT_KEY} not set, using the placeholder script key");
        }
        override_from_env(ENV_BASE_URL, &mut base_url);

        Config {
            credentials: Credentials {
                script_id,
                script_key,
            },
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("SH_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            retry: RetryConfig::with_max_attempts_and_delay(
                get_env_or_default(ENV_MAX_ATTEMPTS, DEFAULT_MAX_ATTEMPTS),
                get_env_or_default("SH_API_RETRY_DELAY_SECS", DEFAULT_RETRY_DELAY_SECS),
            ),
            page_size: get_env_or_default("SH_API_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Creates a configuration for an explicit endpoint and credentials,
    /// ignoring the environment
    pub fn with_credentials(base_url: &str, script_id: &str, script_key: &str) -> Self {
        Config {
            credentials: Credentials {
                script_id: script_id.to_string(),
                script_key: script_key.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            retry: RetryConfig::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Joins an endpoint path onto the base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
