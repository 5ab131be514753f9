//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! Startup order: tracing → `.env` → [`Config`] → SQLite pool and schema →
//! outbound HTTP clients → router → listener. Any failure before the listener
//! is bound aborts startup; the service never runs half-configured.

// region: --- Imports
use axum::{
    extract::FromRef,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use lib_auth::{HttpIdentityVerifier, IdentityVerifier};
use lib_core::{create_pool, init_schema, CommentStore, Config};
use crate::handlers;
use crate::middleware::{log_requests, require_auth, stamp_req, RequestStamp};
use crate::services::{BlogClient, CommentService, PostResolver};
use std::sync::Arc;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub comments: Arc<CommentService>,
    pub identity: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Wire the pipeline components together.
    pub fn new(
        store: Arc<dyn CommentStore>,
        posts: Arc<dyn PostResolver>,
        identity: Arc<dyn IdentityVerifier>,
    ) -> Self {
        Self {
            comments: Arc::new(CommentService::new(store, posts)),
            identity,
        }
    }
}

impl FromRef<AppState> for Arc<CommentService> {
    fn from_ref(state: &AppState) -> Self {
        state.comments.clone()
    }
}

impl FromRef<AppState> for Arc<dyn IdentityVerifier> {
    fn from_ref(state: &AppState) -> Self {
        state.identity.clone()
    }
}
// endregion: --- AppState

// region: --- Server Setup
/// Install the global tracing subscriber.
///
/// The level comes from `LOG_LEVEL` (`trace`, `debug`, `info`, `warn`, `error`);
/// anything else falls back to `info`.
pub fn init_tracing() -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            tracing_subscriber::EnvFilter::new(&log_level)
        }
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - The tracing subscriber cannot be installed
/// - Configuration loading or validation fails
/// - Database connection or table creation fails
/// - The HTTP client cannot be built
/// - Server binding fails
pub async fn start_server() -> anyhow::Result<()> {
    init_tracing()?;

    info!(" COMMENTS SERVICE STARTING");

    dotenvy::dotenv().ok();

    info!("Loading configuration...");
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!("Blog service: {}", config.blog_service_url);
    info!("Token verification: {}", config.token_verify_url);
    info!("Database URL: {}", config.database_url);

    info!("Connecting to database...");
    let pool = create_pool(&config.database_url).await?;
    init_schema(&pool).await?;

    let http = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
    info!("Outbound HTTP timeout: {}s", config.http_timeout_secs);

    let state = AppState::new(
        Arc::new(pool.clone()),
        Arc::new(BlogClient::new(http.clone(), config.blog_service_url.clone())),
        Arc::new(HttpIdentityVerifier::new(http, config.token_verify_url.clone())),
    );

    let app = create_router(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(" SERVER READY: http://{}", bind_address);
    log_server_info();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing database pool...");
    pool.close().await;
    info!("Shutdown complete");

    Ok(())
}

/// Create the application router.
///
/// The auth gate is a router-wide layer, so it also covers the method and
/// path fallbacks: an unauthenticated caller gets `401` before learning
/// whether a route exists.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/comments",
            get(handlers::comments::list_comments)
                .post(handlers::comments::create_comment)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_failure(|error: tower_http::classify::ServerErrorsFailureClass, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::error!(
                        error = ?error,
                        latency_ms = latency.as_millis(),
                        "[HTTP FAILURE] Error: {:?}, Latency: {}ms",
                        error,
                        latency.as_millis()
                    );
                }),
        )
        // Outermost, so the id exists before the trace span and log lines are created
        .layer(from_fn(stamp_req))
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Log server information
fn log_server_info() {
    info!(" COMMENTS (Authorization: Bearer <token> required):");
    info!("   • GET  /comments");
    info!("   • POST /comments  {{\"post_id\": 1, \"title\": \"...\", \"content\": \"...\"}}");
}
// endregion: --- Server Setup
