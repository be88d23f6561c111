//! Core types and shared functionality for spashell.
//!
//! This crate provides:
//! - Versioned offline cache store with SQLite backend
//! - Request identity (URL canonicalization and match keys)
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod identity;

pub use cache::{CacheDb, CacheStore, CachedResponse};
pub use config::AppConfig;
pub use error::Error;
