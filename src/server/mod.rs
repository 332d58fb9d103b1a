//! HTTP echo service.
//!
//! Exposes a single route, `POST /say`, which answers with the request body.
//! The service runs until the shutdown token fires, then drains in-flight
//! requests for at most [`ServerConfig::shutdown_grace`].

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::app::{DummylogError, Result};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Upper bound for draining connections once shutdown starts. Independent
    /// of whatever triggered the shutdown.
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
        }
    }
}

/// Router with the `/say` echo route.
pub fn router() -> Router {
    Router::new().route("/say", post(say).fallback(method_not_allowed))
}

async fn say(body: Body) -> Response {
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (StatusCode::OK, bytes).into_response(),
        Err(err) => {
            tracing::warn!("Failed to read request body: {}", err);
            status_text(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn method_not_allowed() -> Response {
    status_text(StatusCode::METHOD_NOT_ALLOWED)
}

fn status_text(status: StatusCode) -> Response {
    let reason = status.canonical_reason().unwrap_or_default();
    (status, format!("{}\n", reason)).into_response()
}

/// HTTP service that has not bound its socket yet.
pub struct HttpService {
    config: ServerConfig,
}

impl HttpService {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind the listener. An empty address is rejected here rather than at
    /// construction.
    pub async fn bind(self) -> Result<Listening> {
        let addr = self.config.bind_address.trim();
        if addr.is_empty() {
            return Err(DummylogError::Config("invalid server address".into()));
        }

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| DummylogError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        Ok(Listening {
            listener,
            shutdown_grace: self.config.shutdown_grace,
        })
    }

    /// Bind and serve until `shutdown` fires.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<()> {
        self.bind().await?.serve(shutdown).await
    }
}

/// Bound HTTP service, ready to accept connections.
pub struct Listening {
    listener: TcpListener,
    shutdown_grace: Duration,
}

impl Listening {
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(DummylogError::Serve)
    }

    /// Serve requests until `shutdown` fires, then drain.
    ///
    /// The accept loop runs on its own task while this one watches the token.
    /// On cancellation the server stops accepting, turns keep-alive off on
    /// every open connection and lets in-flight requests finish. Returns `Ok`
    /// after a clean drain and [`DummylogError::ShutdownTimeout`] when the
    /// grace period runs out, in which case the server is left in an unknown
    /// state and the caller must not keep the process alive.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<()> {
        let Listening {
            listener,
            shutdown_grace,
        } = self;

        if let Ok(addr) = listener.local_addr() {
            tracing::info!(%addr, "HTTP server listening");
        }

        let signal = shutdown.clone().cancelled_owned();
        let mut server = tokio::spawn(async move {
            axum::serve(listener, router())
                .with_graceful_shutdown(signal)
                .await
        });

        tokio::select! {
            result = &mut server => return finish(result),
            _ = shutdown.cancelled() => {}
        }

        tracing::info!(
            grace = ?shutdown_grace,
            "Shutting down HTTP server, keep-alives disabled"
        );

        match tokio::time::timeout(shutdown_grace, &mut server).await {
            Ok(result) => {
                finish(result)?;
                tracing::info!("HTTP server stopped");
                Ok(())
            }
            Err(_) => {
                server.abort();
                tracing::error!("HTTP server did not drain within {:?}", shutdown_grace);
                Err(DummylogError::ShutdownTimeout(shutdown_grace))
            }
        }
    }
}

fn finish(
    result: std::result::Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<()> {
    match result {
        Ok(served) => served.map_err(DummylogError::Serve),
        Err(join) => Err(DummylogError::Serve(std::io::Error::other(join))),
    }
}
