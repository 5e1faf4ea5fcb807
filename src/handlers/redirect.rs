use crate::{
    error::{Error, Result},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /redirect/:code
///
/// 1. Look the code up in the store; a miss is a 404.
/// 2. Return a 302 whose `Location` is the stored URL, byte for byte.
///    Relative and empty URLs are not resolved against the request path.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response> {
    let record = state.store.get(&code)?;

    // `from_bytes` keeps non-ASCII URLs; only control characters are refused.
    let location = HeaderValue::from_bytes(record.original_url.as_bytes())
        .map_err(|_| Error::InvalidRedirect(code.clone()))?;

    tracing::debug!("Redirecting '{}' to {}", code, record.original_url);
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
