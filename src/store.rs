use crate::{
    error::{Error, Result},
    models::UrlRecord,
};
use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe in-memory store mapping short code -> [`UrlRecord`].
///
/// Backed by a DashMap so concurrent handlers can read and write distinct
/// codes without contending on a single lock. Cloning the store clones the
/// handle; all clones see the same records. Nothing is persisted, so the
/// store lives exactly as long as the process.
#[derive(Clone, Debug)]
pub struct UrlStore {
    inner: Arc<DashMap<String, UrlRecord>>,
}

impl UrlStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Insert a mapping, replacing any record already held under `code`.
    /// The replacement gets a fresh `created_at`.
    pub fn put(&self, code: &str, original_url: &str) {
        self.inner
            .insert(code.to_owned(), UrlRecord::new(code, original_url));
    }

    /// Look up a short code. Returns a clone of the record if present.
    pub fn get(&self, code: &str) -> Result<UrlRecord> {
        self.inner
            .get(code)
            .map(|r| r.clone())
            .ok_or_else(|| Error::NotFound(code.to_owned()))
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for UrlStore {
    fn default() -> Self {
        Self::new()
    }
}
