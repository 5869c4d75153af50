use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `server.port`.
pub const ENV_PORT: &str = "PORT";
/// Environment variable overriding `upstream.base_url`.
pub const ENV_UPSTREAM_URL: &str = "MOVIE_SEARCH_UPSTREAM_URL";
/// Environment variable overriding `server.allowed_origins` (comma separated).
pub const ENV_ALLOWED_ORIGINS: &str = "MOVIE_SEARCH_ALLOWED_ORIGINS";
/// Environment variable overriding `client.api_base_url`.
pub const ENV_API_BASE_URL: &str = "MOVIE_SEARCH_API_BASE_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Upstream API key missing: {reason}")]
    MissingCredential { reason: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/movie-search/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("movie-search").join("config.toml")
    }

    /// Loads configuration from the default config file, then applies
    /// environment overrides (a `.env` file is honored if present).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(&Self::config_path())
    }

    /// Like [`Config::load`] but reading an explicit file.
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!(error = %err, "Ignoring unreadable .env file");
            }
        }

        let mut config = Self::load_from(path)?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Overlays environment values on top of file values.
    ///
    /// Takes a lookup function so callers (and tests) decide where values come from.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid {}", ENV_PORT),
            }
        }

        if let Some(url) = non_blank(lookup(ENV_UPSTREAM_URL)) {
            self.upstream.base_url = url;
        }

        if let Some(origins) = non_blank(lookup(ENV_ALLOWED_ORIGINS)) {
            self.server.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(url) = non_blank(lookup(ENV_API_BASE_URL)) {
            self.client.api_base_url = url;
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Upstream and client base URLs parse
    /// - Every allowed origin is a valid header value
    /// - The API key variable name is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        reqwest::Url::parse(&self.upstream.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid upstream.base_url '{}': {}", self.upstream.base_url, e),
            }
        })?;

        reqwest::Url::parse(&self.client.api_base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!(
                    "Invalid client.api_base_url '{}': {}",
                    self.client.api_base_url, e
                ),
            }
        })?;

        for origin in &self.server.allowed_origins {
            if axum::http::HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::ValidationError {
                    message: format!("Invalid allowed origin '{}'", origin),
                });
            }
        }

        if self.upstream.api_key_env.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "upstream.api_key_env must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_port_and_urls() {
        let mut config = Config::default();
        config.apply_env(lookup_from(&[
            (ENV_PORT, "4000"),
            (ENV_UPSTREAM_URL, "http://127.0.0.1:9999/"),
            (ENV_API_BASE_URL, "http://proxy.local/api"),
        ]));

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9999/");
        assert_eq!(config.client.api_base_url, "http://proxy.local/api");
    }

    #[test]
    fn invalid_port_is_ignored() {
        let mut config = Config::default();
        config.apply_env(lookup_from(&[(ENV_PORT, "not-a-port")]));
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let mut config = Config::default();
        config.apply_env(lookup_from(&[(
            ENV_ALLOWED_ORIGINS,
            "https://movies.example.com, http://localhost:5173,,",
        )]));
        assert_eq!(
            config.server.allowed_origins,
            vec![
                "https://movies.example.com".to_string(),
                "http://localhost:5173".to_string()
            ]
        );
    }

    #[test]
    fn blank_env_values_keep_defaults() {
        let mut config = Config::default();
        config.apply_env(lookup_from(&[(ENV_API_BASE_URL, "   ")]));
        assert_eq!(config.client.api_base_url, "http://localhost:3001/api");
    }

    #[test]
    fn validation_rejects_bad_upstream_url() {
        let mut config = Config::default();
        config.upstream.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
