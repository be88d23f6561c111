//! The offline cache worker and its host.
//!
//! Install precaches the fixed manifest into the versioned store as an
//! all-or-nothing batch, then skips the waiting period. Activation claims
//! every open page. Fetch interception is cache-first with no write-back:
//! the cache is only ever written during install.

use crate::clients::ClientRegistry;
use crate::fetcher::ResourceFetcher;
use crate::lifecycle::WorkerState;
use crate::manifest;
use spashell_core::cache::{CacheDb, CacheStore, CachedResponse};
use spashell_core::Error;
use std::sync::Arc;
use url::Url;

/// Where an intercepted response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    Cache,
    Network,
}

/// A response served to a controlled page.
#[derive(Debug, Clone)]
pub struct ServedResponse {
    pub source: ResponseSource,
    pub response: CachedResponse,
}

/// One worker instance: versioned store, network seam, lifecycle state.
pub struct CacheWorker {
    state: WorkerState,
    store: CacheStore,
    fetcher: Arc<dyn ResourceFetcher>,
    origin: Url,
    skip_waiting: bool,
}

impl CacheWorker {
    /// Create a worker in the `Installing` state.
    ///
    /// The companion push worker script is imported into the worker's scope
    /// here; there is no further integration logic.
    pub fn new(db: &CacheDb, fetcher: Arc<dyn ResourceFetcher>, origin: Url) -> Self {
        tracing::debug!(script = manifest::PUSH_SDK_URL, "importing companion worker script");
        Self {
            state: WorkerState::Installing,
            store: CacheStore::open(db, &manifest::store_name()),
            fetcher,
            origin,
            skip_waiting: false,
        }
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Whether the worker asked to skip the waiting period after install.
    pub fn skip_waiting(&self) -> bool {
        self.skip_waiting
    }

    /// Install: precache the full manifest, all-or-nothing.
    ///
    /// Every resource is fetched first and the batch lands in one store
    /// transaction, so a single failed fetch (error or non-2xx) or a write
    /// failure leaves the store unpopulated. On success the worker signals
    /// skip-waiting and moves to `Activating`.
    pub async fn install(&mut self) -> Result<(), Error> {
        if self.state != WorkerState::Installing {
            return Err(Error::InvalidState(format!("install from {}", self.state)));
        }

        let mut fetched = Vec::with_capacity(manifest::PRECACHE_MANIFEST.len());
        for entry in manifest::PRECACHE_MANIFEST {
            let url = manifest::resolve(&self.origin, entry)?;
            let resource = self
                .fetcher
                .fetch(&url)
                .await
                .map_err(|e| Error::PrecacheFailed(format!("{url}: {e}")))?;
            if !resource.is_success() {
                return Err(Error::PrecacheFailed(format!("{url} returned status {}", resource.status)));
            }
            fetched.push(resource.into_cached());
        }

        self.store.put_all(&fetched).await?;

        self.skip_waiting = true;
        self.state = WorkerState::Activating;
        tracing::info!(store = %self.store.name(), entries = fetched.len(), "precache complete");
        Ok(())
    }

    /// Activate and claim every open page.
    ///
    /// Claiming happens only after the state transition completes, so no
    /// page is claimed mid-activation. Returns the claimed page count.
    pub fn activate(&mut self, clients: &mut ClientRegistry) -> Result<usize, Error> {
        if self.state != WorkerState::Activating {
            return Err(Error::InvalidState(format!("activate from {}", self.state)));
        }

        self.state = WorkerState::Active;
        let claimed = clients.claim_all();
        tracing::info!(claimed, "worker active");
        Ok(claimed)
    }

    /// Intercept a fetch: cache first, network fallback, no write-back.
    ///
    /// Cache matching ignores the query string. On a miss the network
    /// response is returned verbatim, success or not; a network failure
    /// propagates unmodified.
    pub async fn handle_fetch(&self, url: &Url) -> Result<ServedResponse, Error> {
        if !self.state.can_intercept_fetch() {
            return Err(Error::InvalidState(format!("fetch from {}", self.state)));
        }

        if let Some(hit) = self.store.match_request(url, true).await? {
            tracing::debug!(url = %url, "served from cache");
            return Ok(ServedResponse { source: ResponseSource::Cache, response: hit });
        }

        let resource = self.fetcher.fetch(url).await?;
        Ok(ServedResponse { source: ResponseSource::Network, response: resource.into_cached() })
    }
}

/// Browser-side registry holding the active worker and its pages.
///
/// `register` installs and activates a replacement worker; if its install
/// fails the previously active worker keeps serving unchanged.
#[derive(Default)]
pub struct WorkerHost {
    active: Option<CacheWorker>,
    clients: ClientRegistry,
}

impl WorkerHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clients_mut(&mut self) -> &mut ClientRegistry {
        &mut self.clients
    }

    pub fn active(&self) -> Option<&CacheWorker> {
        self.active.as_ref()
    }

    /// Install and activate a new worker version.
    ///
    /// Install failures are returned to the caller (the browser's own retry
    /// policy decides what happens next) and the old worker stays active.
    pub async fn register(&mut self, mut worker: CacheWorker) -> Result<(), Error> {
        worker.install().await?;
        worker.activate(&mut self.clients)?;
        self.active = Some(worker);
        Ok(())
    }

    /// Route a page's fetch through the active worker.
    pub async fn handle_fetch(&self, url: &Url) -> Result<ServedResponse, Error> {
        match &self.active {
            Some(worker) => worker.handle_fetch(url).await,
            None => Err(Error::InvalidState("no active worker".to_string())),
        }
    }
}
