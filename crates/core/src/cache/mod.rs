//! SQLite-backed offline cache stores.
//!
//! This module provides the named, versioned cache store the offline worker
//! populates at install time, using SQLite with async access via
//! tokio-rusqlite. It supports:
//!
//! - Named stores sharing one database, versioned wholesale by name
//! - Query-insensitive request matching via identity match keys
//! - Automatic schema migrations
//! - WAL mode for concurrent access
//!
//! Superseded store versions are never deleted here; a new version simply
//! stops reading them.

pub mod connection;
pub mod migrations;
pub mod store;

pub use crate::Error;

pub use connection::CacheDb;
pub use store::{CacheStore, CachedResponse};
