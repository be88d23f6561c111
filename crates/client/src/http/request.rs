//! Outgoing request representation.
//!
//! Requests are built as plain values so the method-override rewrite can be
//! applied before anything touches the wire.

use reqwest::Method;
use url::Url;

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// URL-encoded form fields, in order.
    Form(Vec<(String, String)>),
    /// JSON document.
    Json(serde_json::Value),
}

/// An outgoing HTTP request, before method-override rewriting.
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: Url,
    pub body: RequestBody,
}

impl OutgoingRequest {
    /// A bodyless GET request.
    pub fn get(url: Url) -> Self {
        Self { method: Method::GET, url, body: RequestBody::Empty }
    }

    /// A POST request with the given body.
    pub fn post(url: Url, body: RequestBody) -> Self {
        Self { method: Method::POST, url, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_empty_bodied() {
        let request = OutgoingRequest::get(Url::parse("https://spa.example.com/").unwrap());
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.body, RequestBody::Empty);
    }

    #[test]
    fn test_post_carries_body() {
        let body = RequestBody::Form(vec![("name".into(), "ada".into())]);
        let request = OutgoingRequest::post(Url::parse("https://spa.example.com/profile").unwrap(), body.clone());
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, body);
    }
}
