//! Counter client, the boundary module consumed by UI code.
//!
//! Decides between plain-read and increment-and-read based on the
//! session gate, suppresses network calls at build time, and collapses
//! every failure to a count of 0 so callers never handle an error. The
//! cost of that collapse: a transient failure is indistinguishable from
//! a genuinely-zero count.

use std::sync::Arc;

use reqwest::Method;

use crate::client::context::ExecutionContext;
use crate::client::error::ClientError;
use crate::client::session::SessionGate;
use crate::config::ClientConfig;
use crate::service::ViewCountBody;

/// Environment variable overriding the service base URL outside a
/// same-origin context.
pub const ENV_BASE_URL: &str = "VIEWCOUNT_BASE_URL";

/// Local-development fallback when nothing else names the service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8787";

const ENDPOINT_PATH: &str = "/view-count";

pub struct ViewCounterClient {
    http: reqwest::Client,
    base_url: String,
    context: ExecutionContext,
    gate: Arc<dyn SessionGate>,
}

impl ViewCounterClient {
    pub fn new(
        config: &ClientConfig,
        context: ExecutionContext,
        gate: Arc<dyn SessionGate>,
    ) -> Self {
        let base_url = resolve_base_url(
            config.base_url.as_deref(),
            std::env::var(ENV_BASE_URL).ok(),
        );
        Self {
            http: reqwest::Client::new(),
            base_url,
            context,
            gate,
        }
    }

    /// Read the current count without incrementing.
    ///
    /// Returns 0 at build time and on any transport failure; errors are
    /// logged, never propagated.
    pub async fn get_view_count(&self, slug: &str) -> u64 {
        if !self.context.is_interactive() {
            return 0;
        }

        match self.fetch(Method::GET, slug).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(%slug, error = %e, "failed to get view count");
                0
            }
        }
    }

    /// Increment the count once per session and return the new value.
    ///
    /// If this session already incremented `slug`, delegates to
    /// [`Self::get_view_count`] instead of incrementing again. The
    /// session marker is written only after a successful increment, so a
    /// failed attempt can be retried on the next mount.
    pub async fn increment_view_count(&self, slug: &str) -> u64 {
        if !self.context.is_interactive() {
            return 0;
        }

        if self.gate.has_viewed(slug) {
            return self.get_view_count(slug).await;
        }

        match self.fetch(Method::POST, slug).await {
            Ok(count) => {
                self.gate.mark_viewed(slug);
                count
            }
            Err(e) => {
                tracing::warn!(%slug, error = %e, "failed to increment view count");
                0
            }
        }
    }

    async fn fetch(&self, method: Method, slug: &str) -> Result<u64, ClientError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), ENDPOINT_PATH);
        let response = self
            .http
            .request(method, &url)
            .query(&[("slug", slug)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: ViewCountBody = response.json().await?;
        Ok(body.count)
    }
}

/// Resolve the service base URL: explicit config wins, then the
/// environment, then the local-development default.
fn resolve_base_url(configured: Option<&str>, env: Option<String>) -> String {
    if let Some(base) = configured {
        if !base.is_empty() {
            return base.to_string();
        }
    }
    match env {
        Some(base) if !base.is_empty() => base,
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_base_url_wins() {
        let base = resolve_base_url(
            Some("https://example.com"),
            Some("https://env.example".to_string()),
        );
        assert_eq!(base, "https://example.com");
    }

    #[test]
    fn environment_beats_the_default() {
        let base = resolve_base_url(None, Some("https://env.example".to_string()));
        assert_eq!(base, "https://env.example");
    }

    #[test]
    fn falls_back_to_local_development_default() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some(""), Some(String::new())), DEFAULT_BASE_URL);
    }
}
