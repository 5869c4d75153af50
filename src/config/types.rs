use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Listening side of the proxy service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (default: "0.0.0.0").
    #[serde(default = "default_bind_host")]
    pub bind_host: String,
    /// Listening port (default: 3001). Port 0 picks a free port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Browser origins allowed to call the proxy. A `*` entry allows any origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// Third-party movie database the proxy relays to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the provider API (e.g., "https://www.omdbapi.com/").
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,
    /// Environment variable holding the provider API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Settings for the search client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the proxy API, including the `/api` prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_bind_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://movie-search-vishvambar.netlify.app".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn default_upstream_base_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_api_key_env() -> String {
    "OMDB_API_KEY".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_api_base_url() -> String {
    "http://localhost:3001/api".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            api_key_env: default_api_key_env(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for socket address parsing.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// True when any origin may call the proxy.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o.trim() == "*")
    }
}
