//! Process-wide application context, built once at startup.
//!
//! The shared HTTP client and the UI root used to live in implicit globals;
//! here they are constructed explicitly and passed to consumers. There is no
//! teardown path; the context lives for the application session.

use spashell_client::{ClientConfig, HttpClient};
use spashell_core::{AppConfig, Error};
use spashell_ui::UiRoot;

/// The shared objects every page-side consumer receives.
pub struct AppContext {
    /// Shared HTTP client with method-override dispatch.
    pub http: HttpClient,
    /// Shared UI framework root; construction only.
    pub ui: UiRoot,
}

impl AppContext {
    /// Build the context from loaded configuration.
    ///
    /// No error handling beyond client construction; misconfiguration
    /// surfaces later as ordinary failed requests.
    pub fn bootstrap(config: &AppConfig) -> Result<Self, Error> {
        let http = HttpClient::new(ClientConfig {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            max_redirects: config.max_redirects,
        })?;

        Ok(Self { http, ui: UiRoot::new() })
    }
}
