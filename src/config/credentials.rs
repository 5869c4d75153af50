//! Credential resolution for the upstream provider.
//!
//! The API key lives only in the proxy process environment and is
//! wrapped so it cannot leak through logging.

use super::loader::ConfigError;
use super::types::UpstreamConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the upstream provider.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl UpstreamConfig {
    /// Resolve the API key using the given environment lookup.
    pub fn resolve_credential<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(&self.api_key_env) {
            Some(value) if !value.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(value.trim()))
            }
            Some(_) => CredentialStatus::Unconfigured {
                reason: format!("Environment variable {} is empty", self.api_key_env),
            },
            None => CredentialStatus::Unconfigured {
                reason: format!("Environment variable {} not set", self.api_key_env),
            },
        }
    }

    /// Resolve the API key from the process environment.
    pub fn api_key(&self) -> Result<SecureString, ConfigError> {
        match self.resolve_credential(|key| std::env::var(key).ok()) {
            CredentialStatus::Configured(key) => Ok(key),
            CredentialStatus::Unconfigured { reason } => {
                Err(ConfigError::MissingCredential { reason })
            }
        }
    }
}
