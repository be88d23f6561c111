//! Shared HTTP client with method-override dispatch.
//!
//! One `HttpClient` is built at application bootstrap and handed to every
//! consumer. Its single behavioral addition over the underlying client is
//! the POST `_method` override applied just before dispatch. Responses come
//! back verbatim at any status; callers decide what a failure means.

pub mod method_override;
pub mod request;

use bytes::Bytes;
use reqwest::{Client, StatusCode, header};
use std::time::Duration;
use url::Url;

pub use method_override::{effective_method, override_method};
pub use request::{OutgoingRequest, RequestBody};

use spashell_core::Error;

/// Configuration for the shared HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User agent string (default: "spashell/0.1")
    pub user_agent: String,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: "spashell/0.1".to_string(),
            timeout: Duration::from_millis(20_000),
            max_redirects: 5,
        }
    }
}

/// Response from a dispatched request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The original URL requested
    pub url: Url,
    /// The final URL after redirects
    pub final_url: Url,
    /// HTTP status code, success or not
    pub status: StatusCode,
    /// Response headers
    pub headers: header::HeaderMap,
    /// Response body bytes
    pub bytes: Bytes,
}

impl HttpResponse {
    /// Response headers as owned name/value pairs, skipping non-UTF-8 values.
    pub fn header_pairs(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
            .collect()
    }
}

/// Shared HTTP client with method-override rewriting.
#[derive(Clone)]
pub struct HttpClient {
    http: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Dispatch a request, applying the method override first.
    ///
    /// The body is sent unchanged; only the verb is rewritten. The response
    /// is returned verbatim at any status, and only transport-level failures
    /// (connect, timeout) surface as errors.
    pub async fn send(&self, request: OutgoingRequest) -> Result<HttpResponse, Error> {
        let method = effective_method(&request.method, &request.body);
        if method != request.method {
            tracing::debug!(requested = %request.method, dispatched = %method, url = %request.url, "method override applied");
        }

        let mut builder = self.http.request(method, request.url.clone());
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => builder.form(fields),
            RequestBody::Json(value) => builder.json(value),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| Error::HttpError(format!("network error: {}", e)))?;

        let status = response.status();
        let final_url = response.url().clone();
        let headers = response.headers().clone();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::HttpError(format!("failed to read response: {}", e)))?;

        Ok(HttpResponse { url: request.url, final_url, status, headers, bytes })
    }

    /// Plain GET, used by the offline worker's precache and network fallback.
    pub async fn get(&self, url: &Url) -> Result<HttpResponse, Error> {
        self.send(OutgoingRequest::get(url.clone())).await
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.user_agent, "spashell/0.1");
        assert_eq!(config.timeout, Duration::from_millis(20_000));
        assert_eq!(config.max_redirects, 5);
    }

    #[tokio::test]
    async fn test_client_new() {
        let client = HttpClient::new(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_header_pairs_skips_invalid_utf8() {
        let mut headers = header::HeaderMap::new();
        headers.insert("content-type", header::HeaderValue::from_static("text/html"));
        headers.insert("x-raw", header::HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap());

        let response = HttpResponse {
            url: Url::parse("https://spa.example.com/").unwrap(),
            final_url: Url::parse("https://spa.example.com/").unwrap(),
            status: StatusCode::OK,
            headers,
            bytes: Bytes::new(),
        };

        let pairs = response.header_pairs();
        assert_eq!(pairs, vec![("content-type".to_string(), "text/html".to_string())]);
    }
}
