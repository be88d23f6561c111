//! Offline cache worker for spashell.
//!
//! This crate provides the browser-style background worker: a three-state
//! lifecycle (installing, activating, active), an all-or-nothing precache of
//! a fixed manifest into a versioned store, immediate claiming of open pages
//! on activation, and cache-first fetch interception with network fallback.

pub mod clients;
pub mod fetcher;
pub mod lifecycle;
pub mod manifest;
pub mod worker;

pub use clients::ClientRegistry;
pub use fetcher::{FetchedResource, HttpFetcher, ResourceFetcher};
pub use lifecycle::WorkerState;
pub use worker::{CacheWorker, ResponseSource, ServedResponse, WorkerHost};
