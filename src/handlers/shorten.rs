use crate::{error::Result, shortcode, AppState};
use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ── Wire types ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    shorten_url: String,
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// GET /
pub async fn index() -> &'static str {
    "Hello World!"
}

/// POST /shorten
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that every decoding failure maps to 400, whatever the `Content-Type`.
/// The URL itself is stored verbatim; it is never validated.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ShortenResponse>> {
    let request: ShortenRequest = serde_json::from_slice(&body)?;

    let code = shortcode::shorten(&state.store, &request.url);
    tracing::info!(
        "Shortened '{}' to {} ({} URL(s) stored)",
        request.url,
        code,
        state.store.len()
    );

    Ok(Json(ShortenResponse { shorten_url: code }))
}
