use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The shorten request body did not decode to `{"url": <string>}`.
    #[error("malformed request payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("short code '{0}' not found")]
    NotFound(String),

    /// A stored URL cannot be sent back in a `Location` header.
    #[error("cannot redirect to stored URL for '{0}'")]
    InvalidRedirect(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MalformedPayload(e) => {
                tracing::debug!("Rejected shorten request: {}", e);
                (StatusCode::BAD_REQUEST, "Invalid request payload").into_response()
            }
            Error::NotFound(code) => {
                tracing::debug!("Unknown short code '{}'", code);
                (StatusCode::NOT_FOUND, "URL not found").into_response()
            }
            Error::InvalidRedirect(code) => {
                tracing::error!("Stored URL for '{}' is not a valid Location header", code);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
