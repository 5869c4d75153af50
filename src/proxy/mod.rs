//! HTTP proxy between clients and the movie provider.
//!
//! Exposes `/api/movies/search`, `/api/movies/{id}` and `/api/health`,
//! keeping the provider API key on the server side.

pub mod error;
pub mod health;
pub mod router;
pub mod shutdown;
pub mod upstream;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{Config, SecureString};
use crate::proxy::error::ProxyError;
use crate::proxy::router::{build_router, AppState};
use crate::proxy::shutdown::ShutdownManager;
use crate::proxy::upstream::UpstreamClient;

pub struct ProxyServer {
    pub addr: SocketAddr,
    bind_addr: String,
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    router: Router,
    shutdown: Arc<ShutdownManager>,
}

impl ProxyServer {
    pub fn new(config: &Config, api_key: SecureString) -> Result<Self, ProxyError> {
        let upstream = UpstreamClient::new(&config.upstream, api_key)?;
        let router = build_router(AppState::new(upstream), &config.server);

        Ok(Self {
            addr: SocketAddr::from(([0, 0, 0, 0], config.server.port)), // Will be determined at bind time
            bind_addr: config.server.bind_addr(),
            listener: None,
            router,
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Bind the listening socket and keep it until run().
    ///
    /// Port 0 picks a free port; the actual address is returned.
    pub async fn try_bind(&mut self) -> Result<SocketAddr, ProxyError> {
        let listener = TcpListener::bind(&self.bind_addr)
            .await
            .map_err(|source| ProxyError::Bind {
                addr: self.bind_addr.clone(),
                source,
            })?;
        let actual_addr = listener.local_addr().map_err(|source| ProxyError::Bind {
            addr: self.bind_addr.clone(),
            source,
        })?;

        self.addr = actual_addr;
        self.listener = Some(listener);
        tracing::info!("Proxy bound to {}", actual_addr);
        Ok(actual_addr)
    }

    pub fn handle(&self) -> ProxyHandle {
        ProxyHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until Ctrl+C, SIGTERM or [`ProxyHandle::shutdown`].
    pub async fn run(self) -> Result<(), ProxyError> {
        let listener = self.listener.ok_or(ProxyError::NotBound)?;
        tracing::info!("Server running on {}", self.addr);

        let shutdown = self.shutdown.clone();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.wait_for_shutdown().await })
            .await
            .map_err(ProxyError::Serve)?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ProxyHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ProxyHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
