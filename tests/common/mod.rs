//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_upstream;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use movie_search::config::{Config, SecureString};
use movie_search::provider::{SearchPage, SearchResultItem};
use movie_search::proxy::{ProxyHandle, ProxyServer};
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "test-omdb-key";

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

/// Config for a proxy on an ephemeral loopback port.
pub fn proxy_config(upstream_url: &str) -> Config {
    let mut config = Config::default();
    config.server.bind_host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.upstream.base_url = upstream_url.to_string();
    config.upstream.connect_timeout_seconds = 1;
    config
}

/// Bind and spawn a proxy for `config`.
pub async fn start_proxy(config: &Config) -> (SocketAddr, ProxyHandle) {
    let mut server =
        ProxyServer::new(config, SecureString::new(TEST_API_KEY)).expect("proxy should build");
    let addr = server.try_bind().await.expect("proxy should bind");
    let handle = server.handle();
    tokio::spawn(async move {
        server.run().await.ok();
    });
    (addr, handle)
}

/// `count` synthetic results with ids `{prefix}{n}`.
pub fn items(prefix: &str, count: usize) -> Vec<SearchResultItem> {
    (0..count)
        .map(|n| SearchResultItem {
            id: format!("{prefix}{n}"),
            title: format!("Movie {prefix}{n}"),
            year: "2001".to_string(),
            media_type: Some("movie".to_string()),
            poster: Some("N/A".to_string()),
        })
        .collect()
}

pub fn page(prefix: &str, count: usize, total_results: u64) -> SearchPage {
    SearchPage {
        items: items(prefix, count),
        total_results,
    }
}

/// Provider search body in wire format.
pub fn search_body(prefix: &str, count: usize, total_results: u64) -> String {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|n| {
            serde_json::json!({
                "Title": format!("Movie {prefix}{n}"),
                "Year": "2001",
                "imdbID": format!("{prefix}{n}"),
                "Type": "movie",
                "Poster": "N/A",
            })
        })
        .collect();
    serde_json::json!({
        "Search": items,
        "totalResults": total_results.to_string(),
        "Response": "True",
    })
    .to_string()
}
