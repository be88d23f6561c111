//! Named cache store operations.
//!
//! A `CacheStore` is one named view over the shared entries table. Stores
//! are versioned wholesale: the worker opens `spa_base-<version>` and a new
//! version string supersedes the old store without touching its rows.

use super::connection::CacheDb;
use crate::identity;
use crate::Error;
use serde::{Deserialize, Serialize};
use tokio_rusqlite::params;
use tokio_rusqlite::rusqlite;
use url::Url;

/// A full cached response: status, headers, and body, plus the URL it was
/// stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub url: String,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// A named key-value store of cached responses.
///
/// Keys are request identities: the canonical URL with query string and
/// fragment ignored. One entry per identity; `put` replaces.
#[derive(Clone, Debug)]
pub struct CacheStore {
    db: CacheDb,
    name: String,
}

impl CacheStore {
    /// Open the store with the given name, creating it if absent.
    ///
    /// Opening is lazy; the store exists once the first entry is written.
    /// Other stores in the same database are left untouched.
    pub fn open(db: &CacheDb, name: &str) -> Self {
        Self { db: db.clone(), name: name.to_string() }
    }

    /// The store's versioned name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or replace the entry for the response's request identity.
    pub async fn put(&self, response: &CachedResponse) -> Result<(), Error> {
        self.put_all(std::slice::from_ref(response)).await
    }

    /// Insert or replace a batch of entries in one transaction.
    ///
    /// Either every row lands or none do; a database error mid-batch rolls
    /// the whole write back.
    pub async fn put_all(&self, responses: &[CachedResponse]) -> Result<(), Error> {
        let mut rows = Vec::with_capacity(responses.len());
        for response in responses {
            let url = identity::canonicalize(&response.url).map_err(|e| Error::InvalidUrl(e.to_string()))?;
            let key = identity::match_key(&url);
            let headers_json =
                serde_json::to_string(&response.headers).map_err(|e| Error::InvalidInput(e.to_string()))?;
            rows.push((key, url.to_string(), response.status, headers_json, response.body.clone()));
        }

        let store = self.name.clone();
        let stored_at = chrono::Utc::now().to_rfc3339();

        self.db
            .conn
            .call(move |conn| -> Result<(), Error> {
                let tx = conn.transaction()?;
                for (key, url, status, headers_json, body) in &rows {
                    tx.execute(
                        "INSERT INTO entries (store, match_key, url, status, headers_json, body, stored_at)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                         ON CONFLICT(store, match_key) DO UPDATE SET
                             url = excluded.url,
                             status = excluded.status,
                             headers_json = excluded.headers_json,
                             body = excluded.body,
                             stored_at = excluded.stored_at",
                        params![&store, key, url, status, headers_json, body, &stored_at],
                    )?;
                }
                tx.commit()?;
                Ok(())
            })
            .await
            .map_err(Error::from)
    }

    /// Look up a cached response by request identity.
    ///
    /// With `ignore_search` the query string is ignored, so
    /// `/css/app.css?v=2` matches an entry stored for `/css/app.css`.
    /// Without it the full URL (minus fragment) must match exactly.
    /// Returns None on a cache miss.
    pub async fn match_request(&self, url: &Url, ignore_search: bool) -> Result<Option<CachedResponse>, Error> {
        let key = identity::match_key(url);
        let store = self.name.clone();

        let mut exact = url.clone();
        exact.set_fragment(None);
        let exact = exact.to_string();

        self.db
            .conn
            .call(move |conn| -> Result<Option<CachedResponse>, Error> {
                let mut stmt = conn.prepare(
                    "SELECT url, status, headers_json, body FROM entries
                     WHERE store = ?1 AND match_key = ?2",
                )?;

                let result = stmt.query_row(params![store, key], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, u16>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Vec<u8>>(3)?,
                    ))
                });

                let (url, status, headers_json, body) = match result {
                    Ok(columns) => columns,
                    Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                    Err(e) => return Err(e.into()),
                };

                if !ignore_search && url != exact {
                    return Ok(None);
                }

                let headers: Vec<(String, String)> =
                    serde_json::from_str(&headers_json).map_err(|e| Error::InvalidInput(e.to_string()))?;

                Ok(Some(CachedResponse { url, status, headers, body }))
            })
            .await
            .map_err(Error::from)
    }

    /// Number of entries in this store.
    pub async fn len(&self) -> Result<u64, Error> {
        let store = self.name.clone();
        self.db
            .conn
            .call(move |conn| -> Result<u64, Error> {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM entries WHERE store = ?1", params![store], |row| {
                        row.get(0)
                    })?;
                Ok(count as u64)
            })
            .await
            .map_err(Error::from)
    }

    /// All URLs stored in this store, in insertion order.
    pub async fn urls(&self) -> Result<Vec<String>, Error> {
        let store = self.name.clone();
        self.db
            .conn
            .call(move |conn| -> Result<Vec<String>, Error> {
                let mut stmt =
                    conn.prepare("SELECT url FROM entries WHERE store = ?1 ORDER BY rowid")?;
                let rows = stmt.query_map(params![store], |row| row.get::<_, String>(0))?;
                let mut urls = Vec::new();
                for row in rows {
                    urls.push(row?);
                }
                Ok(urls)
            })
            .await
            .map_err(Error::from)
    }
}
