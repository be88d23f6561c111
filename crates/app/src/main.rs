//! spashell entry point.
//!
//! Boots the client layer: loads configuration, builds the shared
//! application context, opens the offline cache database, and registers the
//! cache worker (install, then activate). Logging goes to stderr.

use std::sync::Arc;

use anyhow::Result;
use spashell_core::cache::CacheDb;
use spashell_core::{identity, AppConfig};
use spashell_worker::{CacheWorker, HttpFetcher, WorkerHost};
use tracing_subscriber::EnvFilter;

mod context;

use context::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    tracing::info!(origin = %config.origin, "starting spashell bootstrap");

    let context = AppContext::bootstrap(&config)?;

    let db = CacheDb::open(&config.db_path).await?;
    let origin = identity::canonicalize(&config.origin)?;
    let fetcher = Arc::new(HttpFetcher::new(context.http.clone()));

    let mut host = WorkerHost::new();
    host.register(CacheWorker::new(&db, fetcher, origin)).await?;

    tracing::info!("offline cache worker active");

    Ok(())
}
