//! Tracing subscriber setup.
//!
//! The proxy logs to stderr. The TUI owns the terminal, so it only logs
//! when `MOVIE_SEARCH_LOG` points at a file.

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const ENV_LOG_FILE: &str = "MOVIE_SEARCH_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Stderr logging for server and one-shot commands.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339())
        .init();
}

/// File logging for the TUI. No-op unless `MOVIE_SEARCH_LOG` is set.
///
/// Files are named `{path}.{timestamp}.{pid}` so concurrent sessions
/// never share one.
pub fn init_file_tracing() {
    let Ok(log_path) = std::env::var(ENV_LOG_FILE) else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
