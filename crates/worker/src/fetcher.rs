//! Network access seam for the worker.
//!
//! Precache and fallback fetches go through `ResourceFetcher` so tests can
//! run against a stub instead of the wire.

use async_trait::async_trait;
use spashell_client::HttpClient;
use spashell_core::cache::CachedResponse;
use spashell_core::Error;
use url::Url;

/// A resource fetched from the network.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// The URL as requested; cache identity is derived from this, not from
    /// any redirect target.
    pub url: Url,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl FetchedResource {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Convert into a storable cache entry.
    pub fn into_cached(self) -> CachedResponse {
        CachedResponse { url: self.url.to_string(), status: self.status, headers: self.headers, body: self.body }
    }
}

/// Abstract network fetch with request/response semantics.
///
/// Implementations return `Ok` for any HTTP status; `Err` means the request
/// never completed (connect failure, timeout).
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedResource, Error>;
}

/// The real fetcher, backed by the shared HTTP client.
pub struct HttpFetcher {
    client: HttpClient,
}

impl HttpFetcher {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedResource, Error> {
        let response = self.client.get(url).await?;
        Ok(FetchedResource {
            url: response.url.clone(),
            status: response.status.as_u16(),
            headers: response.header_pairs(),
            body: response.bytes.to_vec(),
        })
    }
}
