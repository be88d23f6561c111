//! Precache manifest, fixed at worker-source time.
//!
//! The asset list and the cache version are source constants, not runtime
//! data. Bumping `CACHE_VERSION` supersedes the whole store on the next
//! successful install; it never touches the old store's rows.

use spashell_core::{identity, Error};
use url::Url;

/// Version literal embedded in the worker source.
pub const CACHE_VERSION: &str = "0.1";

const CACHE_NAME_PREFIX: &str = "spa_base";

/// Companion push-notification worker script, imported at load time.
pub const PUSH_SDK_URL: &str = "https://cdn.onesignal.com/sdks/OneSignalSDKWorker.js";

/// The fixed asset list cached at install time, in order. Site-relative
/// paths resolve against the configured origin; the font stylesheets are
/// cross-origin and absolute.
pub const PRECACHE_MANIFEST: &[&str] = &[
    "/",
    "/css/app.css",
    "/css/auth.css",
    "/icons/logo-32x32.png",
    "/icons/zondicons.svg",
    "/js/show-password.js",
    "/login/",
    "/manifest.webmanifest",
    "/service-worker.js",
    "https://fonts.googleapis.com/css?family=Libre+Franklin:400,400i,700",
    "https://fonts.googleapis.com/css?family=Libre+Baskerville:400,400i,700",
];

/// The versioned store name, `spa_base-<version>`.
pub fn store_name() -> String {
    format!("{CACHE_NAME_PREFIX}-{CACHE_VERSION}")
}

/// Resolve a manifest entry to a full URL.
///
/// Absolute entries are canonicalized; relative ones join the origin.
pub fn resolve(origin: &Url, resource: &str) -> Result<Url, Error> {
    if resource.contains("://") {
        identity::canonicalize(resource).map_err(|e| Error::InvalidUrl(e.to_string()))
    } else {
        origin
            .join(resource)
            .map_err(|e| Error::InvalidUrl(format!("{resource}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_name_carries_version() {
        assert_eq!(store_name(), "spa_base-0.1");
    }

    #[test]
    fn test_resolve_relative_against_origin() {
        let origin = Url::parse("https://spa.example.com").unwrap();
        let url = resolve(&origin, "/css/app.css").unwrap();
        assert_eq!(url.as_str(), "https://spa.example.com/css/app.css");
    }

    #[test]
    fn test_resolve_absolute_passthrough() {
        let origin = Url::parse("https://spa.example.com").unwrap();
        let url = resolve(&origin, PRECACHE_MANIFEST[9]).unwrap();
        assert_eq!(url.host_str(), Some("fonts.googleapis.com"));
        assert_eq!(url.query(), Some("family=Libre+Franklin:400,400i,700"));
    }

    #[test]
    fn test_manifest_is_fixed() {
        assert_eq!(PRECACHE_MANIFEST.len(), 11);
        assert_eq!(PRECACHE_MANIFEST[0], "/");
        assert_eq!(PRECACHE_MANIFEST[8], "/service-worker.js");
    }
}
