use crate::store::UrlStore;

/// Number of hex characters kept from the digest.
pub const SHORT_CODE_LEN: usize = 8;

/// Derive the short code for `original_url`.
///
/// The code is the first [`SHORT_CODE_LEN`] lowercase hex characters of the
/// MD5 digest of the URL's UTF-8 bytes. Any string is accepted, the empty
/// string included, and the same input always yields the same code.
///
/// Only 32 bits of the digest survive truncation, so distinct URLs can
/// collide. A collision overwrites the earlier mapping in the store.
pub fn derive(original_url: &str) -> String {
    let digest = md5::compute(original_url.as_bytes());
    let mut code = format!("{:x}", digest);
    code.truncate(SHORT_CODE_LEN);
    code
}

/// Derive the short code for `original_url`, record the mapping, and return
/// the code.
pub fn shorten(store: &UrlStore, original_url: &str) -> String {
    let code = derive(original_url);
    store.put(&code, original_url);
    code
}
