//! Configuration loading: TOML file, `.env`, and environment overrides.

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::{
    ConfigError, ENV_ALLOWED_ORIGINS, ENV_API_BASE_URL, ENV_PORT, ENV_UPSTREAM_URL,
};
pub use types::{ClientConfig, Config, ServerConfig, UpstreamConfig};
