//! Request identity: URL canonicalization and query-insensitive match keys.
//!
//! The cache store keys entries by request identity, which ignores the query
//! string at match time. Identity is the SHA-256 of the canonical URL with
//! query and fragment stripped.

use sha2::{Digest, Sha256};
use url::Url;

/// Error type for URL canonicalization failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Canonicalize a URL string for consistent cache keys.
///
/// Normalization steps:
/// 1. Trim leading/trailing whitespace
/// 2. Default scheme to https:// if missing
/// 3. Lowercase the host
/// 4. Remove fragment (#...)
/// 5. Keep query string intact (match keys strip it separately)
pub fn canonicalize(input: &str) -> Result<Url, IdentityError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(IdentityError::Empty);
    }

    let url_str = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };

    let mut parsed = Url::parse(&url_str).map_err(|e| IdentityError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(IdentityError::UnsupportedScheme(scheme.to_string())),
    }

    if let Some(mut host) = parsed.host_str() {
        let h = host.to_lowercase();
        host = h.as_str();
        parsed
            .set_host(Some(host))
            .map_err(|e| IdentityError::InvalidUrl(e.to_string()))?;
    }

    parsed.set_fragment(None);

    Ok(parsed)
}

/// Compute the query-insensitive match key for a URL.
///
/// Two URLs that differ only in query string or fragment share a key.
pub fn match_key(url: &Url) -> String {
    let mut identity = url.clone();
    identity.set_query(None);
    identity.set_fragment(None);

    let mut hasher = Sha256::new();
    hasher.update(identity.as_str().as_bytes());
    hex::encode(hasher.finalize())
}
