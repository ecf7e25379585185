use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::Consistency;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Counter service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bind address for the HTTP endpoint (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Counter client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Explicit service base URL. When unset, the client falls back to
    /// the `VIEWCOUNT_BASE_URL` environment variable, then to the
    /// local-development default.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Prefix for session marker keys.
    #[serde(default = "default_session_key_prefix")]
    pub session_key_prefix: String,
}

/// Counter store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the persisted namespace. When unset, a per-user data
    /// directory default is used.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Read consistency mode.
    #[serde(default)]
    pub consistency: Consistency,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8787".to_string()
}

fn default_session_key_prefix() -> String {
    "viewed_".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            session_key_prefix: default_session_key_prefix(),
        }
    }
}

impl StoreConfig {
    /// Returns the store file path, falling back to
    /// `<data_dir>/viewcount/view-counts.json`.
    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("viewcount")
                .join("view-counts.json"),
        }
    }
}
