//! HTTP server startup logic.
//!
//! Binding is separated from serving so callers (and tests) can bind port 0
//! and read back the assigned address before the server starts.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    InvalidAddr(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// A bound TCP listener ready to serve the application router.
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Bind the listener on `addr` (a `host:port` string).
    pub async fn bind(addr: &str) -> Result<Self, ServerError> {
        let addr: SocketAddr = addr
            .parse()
            .map_err(|e| ServerError::InvalidAddr(format!("'{}': {}", addr, e)))?;
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// The address the listener is actually bound to.
    ///
    /// Differs from the requested address when binding port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve `app` until the process receives SIGTERM or SIGINT.
    ///
    /// This function blocks until the server shuts down.
    pub async fn serve(self, app: Router) -> Result<(), ServerError> {
        tracing::info!("Listening on http://{}", self.local_addr);

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown::shutdown_signal())
            .await
            .map_err(|e| ServerError::Server(e.to_string()))
    }
}
