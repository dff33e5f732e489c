//! Configuration management for Lambda functions.

use std::env;

/// Default origin of the OpenWeatherMap API.
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap API key. Absence is reported per request, not at startup.
    pub openweather_api_key: Option<String>,
    /// Origin of the OpenWeatherMap API (no trailing slash)
    pub openweather_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::new(
            env::var("OPENWEATHER_API_KEY").ok(),
            env::var("OPENWEATHER_BASE_URL").ok(),
        )
    }

    /// Build a configuration from explicit values.
    ///
    /// Empty strings count as unset.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let openweather_api_key = api_key.filter(|key| !key.trim().is_empty());
        let openweather_base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_OPENWEATHER_BASE_URL.to_string());

        Self {
            openweather_api_key,
            openweather_base_url,
        }
    }

    /// The API key, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.openweather_api_key.as_deref()
    }
}
