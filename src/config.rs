use tracing::debug;

use crate::errors::AppError;

pub const API_BASE_URL_ENV: &str = "TRAVEL_ASSISTANT_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Process configuration, read once at startup and handed to the components
/// that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the chat service, without a trailing slash.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_string() }
    }
}

impl Config {
    pub fn new(api_base_url: &str) -> Result<Self, AppError> {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AppError::InvalidConfig {
                key: API_BASE_URL_ENV.to_string(),
                message: "base address cannot be empty".to_string(),
            });
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(AppError::InvalidConfig {
                key: API_BASE_URL_ENV.to_string(),
                message: format!("'{trimmed}' is not an http(s) address"),
            });
        }
        Ok(Self { api_base_url: trimmed.to_string() })
    }

    /// Reads the configuration from the environment, falling back to the
    /// local default when the variable is unset.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let config = match lookup(API_BASE_URL_ENV) {
            Some(value) => Self::new(&value)?,
            None => Self::default(),
        };
        debug!("Chat service base address: {}", config.api_base_url);
        Ok(config)
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.api_base_url)
    }
}
