use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Authentication credentials for the CMDBuild server
///
/// `Debug` and `Display` print the password as `***`.
pub struct Credentials {
    /// CMDBuild username
    pub username: String,
    /// CMDBuild password
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the CMDBuild web application, e.g. `http://server:8080/cmdbuild`
    pub base_url: String,
    /// Timeout in seconds for every REST request
    pub timeout: u64,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the CMDBuild client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(Serialize)]
struct MaskedCredentials<'a> {
    username: &'a str,
    password: &'static str,
}

impl<'a> From<&'a Credentials> for MaskedCredentials<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: "***",
        }
    }
}

#[derive(Serialize)]
struct MaskedConfig<'a> {
    credentials: MaskedCredentials<'a>,
    rest_api: &'a RestApiConfig,
}

impl<'a> From<&'a Config> for MaskedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            credentials: (&config.credentials).into(),
            rest_api: &config.rest_api,
        }
    }
}

fn write_json<T: Serialize>(f: &mut fmt::Formatter<'_>, value: &T, pretty: bool) -> fmt::Result {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    f.write_str(&text.map_err(|_| fmt::Error)?)
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, &MaskedCredentials::from(self), true)
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, &MaskedCredentials::from(self), false)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, &MaskedConfig::from(self), true)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, &MaskedConfig::from(self), false)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` first, then reads `CMDBUILD_URL`, `CMDBUILD_USERNAME`,
    /// `CMDBUILD_PASSWORD` and `CMDBUILD_TIMEOUT`. Missing credentials are
    /// reported and left empty, so [`Config::validate`] rejects them later.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username: Option<String> = get_env_or_none("CMDBUILD_USERNAME");
        let password: Option<String> = get_env_or_none("CMDBUILD_PASSWORD");

        if username.is_none() {
            error!("CMDBUILD_USERNAME not found in environment variables or .env file");
        }
        if password.is_none() {
            error!("CMDBUILD_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                username: username.unwrap_or_default(),
                password: password.unwrap_or_default(),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("CMDBUILD_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("CMDBUILD_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration from explicit connection parameters
    ///
    /// No validation happens here; see [`Config::validate`].
    pub fn with_credentials(url: &str, username: &str, password: &str) -> Self {
        Config {
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: url.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Overrides the request timeout (seconds)
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.rest_api.timeout = seconds;
        self
    }

    /// Checks that url, username and password are all non-empty
    ///
    /// # Returns
    /// * `Ok(())` - All connection parameters are present
    /// * `Err(AppError::Configuration)` - Naming the first missing parameter
    pub fn validate(&self) -> Result<(), AppError> {
        validate_connection(
            &self.rest_api.base_url,
            &self.credentials.username,
            &self.credentials.password,
        )
    }
}

/// Rejects empty (or whitespace-only) connection parameters
pub(crate) fn validate_connection(url: &str, username: &str, password: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::Configuration("no URL supplied".to_string()));
    }
    if username.trim().is_empty() {
        return Err(AppError::Configuration("no username supplied".to_string()));
    }
    if password.is_empty() {
        return Err(AppError::Configuration("no password supplied".to_string()));
    }
    Ok(())
}
