//! Error types and response handling for the proxy server.
//!
//! Provides error classification, HTTP status code mapping, and the
//! `{"error": "..."}` JSON body every failure is reported with.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur during proxy operations.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// `query` missing or blank
    #[error("Query parameter is required")]
    MissingQuery,

    /// `page` present but not a positive integer
    #[error("Page parameter must be a positive integer (got '{0}')")]
    InvalidPage(String),

    /// No route matched
    #[error("Not found")]
    NotFound,

    /// Failed to reach the provider or read its answer
    #[error("Upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),

    /// Provider answered with something that is not JSON
    #[error("Upstream returned invalid JSON (status {status}): {source}")]
    InvalidUpstreamBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Configured provider URL is unusable
    #[error("Invalid upstream URL '{0}'")]
    InvalidUpstreamUrl(String),

    /// HTTP client construction failed
    #[error("Failed to build upstream client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Listening socket could not be opened
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// `run()` called before `try_bind()`
    #[error("Server is not bound; call try_bind() before run()")]
    NotBound,

    /// Accept loop terminated with an I/O error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl ProxyError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MissingQuery | ProxyError::InvalidPage(_) => StatusCode::BAD_REQUEST,
            ProxyError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to API clients. Server-side failures are
    /// reported generically; the detail only goes to the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            ProxyError::MissingQuery => "Query parameter is required",
            ProxyError::InvalidPage(_) => "Page parameter must be a positive integer",
            ProxyError::NotFound => "Not found",
            _ => "Internal server error",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Proxy request failed");
        } else {
            tracing::debug!(error = %self, "Rejected request");
        }

        let body = serde_json::json!({ "error": self.public_message() });
        (status, Json(body)).into_response()
    }
}
