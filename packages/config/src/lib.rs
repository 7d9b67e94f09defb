// ABOUTME: Runtime configuration for the Ship UI client
// ABOUTME: Reads backend URL, AI model and default credential from the environment

pub mod constants;

use std::env;
use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use url::Url;

use constants::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid URL for {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(#[from] ParseIntError),
    #[error("Timeout must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the Ship UI backend, without trailing slash
    pub api_url: String,
    /// Credential supplied by the deployment, used when the user has no override
    pub default_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_url = validate_url(
            SHIPUI_API_URL,
            non_blank(SHIPUI_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        )?;

        let gemini_base_url = validate_url(
            SHIPUI_GEMINI_BASE_URL,
            non_blank(SHIPUI_GEMINI_BASE_URL).unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
        )?;

        let gemini_model =
            non_blank(SHIPUI_GEMINI_MODEL).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let timeout_secs = match non_blank(SHIPUI_HTTP_TIMEOUT_SECS) {
            Some(raw) => raw.parse::<u64>()?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let default_api_key = non_blank(GEMINI_API_KEY);
        if default_api_key.is_none() {
            debug!("GEMINI_API_KEY not set - generation requires a personal key in settings");
        }

        Ok(Self {
            api_url,
            default_api_key,
            gemini_model,
            gemini_base_url,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Accept only absolute http(s) URLs and strip any trailing slash
fn validate_url(name: &'static str, value: String) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUrl { name, value: value.clone() };
    let parsed = Url::parse(&value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(value.trim_end_matches('/').to_string())
}
