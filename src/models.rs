use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL held in the [`UrlStore`](crate::store::UrlStore).
///
/// `id` doubles as the public short code; there is no separate
/// "shortened URL" field. No route returns a whole record, so its JSON
/// shape is not part of the HTTP interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub id: String,
    pub original_url: String,
    /// Creation time, refreshed whenever the id is overwritten.
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    pub fn new(id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            original_url: original_url.into(),
            created_at: Utc::now(),
        }
    }
}
