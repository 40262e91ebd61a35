//! Axum server setup
//!
//! Server skeleton with:
//! - Configurable CORS allow-list
//! - Tracing middleware and a per-request deadline
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::error::REDACTED_MESSAGE;
use super::routes;
use crate::db::Store;

/// Which origins may call the API cross-site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse `*` or a comma-separated origin list.
    ///
    /// ```
    /// use ric_server::http::CorsOrigins;
    ///
    /// assert_eq!(CorsOrigins::parse("*"), CorsOrigins::Any);
    /// assert_eq!(
    ///     CorsOrigins::parse("http://a.test, http://b.test"),
    ///     CorsOrigins::List(vec!["http://a.test".into(), "http://b.test".into()])
    /// );
    /// ```
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "*" {
            return Self::Any;
        }

        Self::List(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    fn layer(&self) -> Result<CorsLayer, ServerError> {
        let origin = match self {
            Self::Any => AllowOrigin::from(Any),
            Self::List(origins) => {
                let values = origins
                    .iter()
                    .map(|o| {
                        o.parse::<HeaderValue>()
                            .map_err(|_| ServerError::InvalidOrigin(o.clone()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                AllowOrigin::list(values)
            }
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::HEAD,
                Method::OPTIONS,
            ])
            .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]))
    }
}

/// Server configuration, fixed for the life of the process
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// CORS allow-list (default: any origin)
    pub cors: CorsOrigins,

    /// Deadline for a whole request, including waiting for a pooled connection
    pub request_timeout: Duration,

    /// Replace store error messages in 500 bodies with a generic message
    pub redact_errors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors: CorsOrigins::Any,
            request_timeout: Duration::from_secs(30),
            redact_errors: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

/// Build the full application router: `/healthz` plus everything under `/api`.
pub fn build_router(state: AppState, config: &ServerConfig) -> Result<Router, ServerError> {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(config.cors.layer()?);

    let mut app = Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_router())
        .with_state(state);

    if config.redact_errors {
        app = app.layer(map_response(redact_internal_errors));
    }

    Ok(app.layer(middleware))
}

async fn redact_internal_errors(response: Response) -> Response {
    if response.status() != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": REDACTED_MESSAGE })),
    )
        .into_response()
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let store = Arc::new(PgStore::new(pool));
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn run_server(store: Arc<dyn Store>, config: ServerConfig) -> Result<(), ServerError> {
    if let CorsOrigins::List(origins) = &config.cors {
        tracing::info!(origins = ?origins, "CORS: allow-list");
    } else {
        tracing::info!("CORS: all origins allowed");
    }
    if config.redact_errors {
        tracing::info!("Store error messages are redacted from responses");
    }

    let app = build_router(AppState::new(store), &config)?;

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.cors, CorsOrigins::Any);
        assert!(!config.redact_errors);
    }

    #[test]
    fn cors_list_skips_blank_entries() {
        assert_eq!(
            CorsOrigins::parse("http://a.test,, "),
            CorsOrigins::List(vec!["http://a.test".into()])
        );
    }

    #[test]
    fn cors_rejects_unparseable_origin() {
        let cors = CorsOrigins::List(vec!["bad\norigin".into()]);
        assert!(matches!(cors.layer(), Err(ServerError::InvalidOrigin(_))));
    }

    #[tokio::test]
    async fn redaction_leaves_other_statuses_alone() {
        let response = StatusCode::NOT_FOUND.into_response();
        let response = redact_internal_errors(response).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
