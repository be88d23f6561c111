//! Client code for spashell.
//!
//! This crate provides the shared HTTP client with POST method-override
//! rewriting, used by the application bootstrap and the offline worker's
//! network fallback.

pub mod http;

pub use http::{ClientConfig, HttpClient, HttpResponse, OutgoingRequest, RequestBody};
