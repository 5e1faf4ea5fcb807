use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod models;
mod shortcode;
mod store;

use store::UrlStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    /// Every short code issued by this process. Dropped on shutdown.
    pub store: UrlStore,
}

// ── Router ─────────────────────────────────────────────────────────────────

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::shorten::index))
        .route("/health", get(|| async { axum::http::StatusCode::OK }))
        .route("/shorten", post(handlers::shorten::shorten))
        .route("/redirect/:code", get(handlers::redirect::redirect))
        .with_state(state)
        // URLs are accepted at any length.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent; env vars may already be set)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hashlink=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::AppConfig::from_env()?;
    tracing::info!("Starting URL shortener service");

    let state = Arc::new(AppState {
        store: UrlStore::new(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
