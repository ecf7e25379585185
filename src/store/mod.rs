//! Durable key-value storage for per-article view counts.
//!
//! The store maps an article slug to a non-negative count. Counts are
//! persisted as decimal-integer strings; an absent key reads as zero.
//! All access goes through the [`CounterStore`] trait so the service
//! never depends on a concrete backing store.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a counter store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O failed at '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed stored value for '{slug}': '{value}'")]
    MalformedValue { slug: String, value: String },

    #[error("Malformed store file '{path}': {source}")]
    MalformedFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read consistency mode for the backing store.
///
/// `Strong` re-reads the durable state on every lookup. `Eventual` serves
/// lookups from a process-local cache that only set() refreshes, trading
/// staleness for latency. Neither mode makes increment atomic: the
/// read-modify-write in the service can still lose a concurrent update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consistency {
    Strong,
    Eventual,
}

impl Default for Consistency {
    fn default() -> Self {
        Consistency::Strong
    }
}

/// A durable map from article slug to view count.
///
/// Implementations use interior mutability; the service shares one store
/// across request handlers. Keys are caller-supplied slugs used verbatim,
/// with no normalization.
pub trait CounterStore: Send + Sync {
    /// Look up the count for `slug`. Absent keys return `Ok(None)`.
    fn get(&self, slug: &str) -> Result<Option<u64>, StoreError>;

    /// Write the count for `slug`, creating the record if absent.
    fn set(&self, slug: &str, count: u64) -> Result<(), StoreError>;
}

/// Decode a stored decimal-integer string.
fn parse_count(slug: &str, raw: &str) -> Result<u64, StoreError> {
    raw.parse::<u64>().map_err(|_| StoreError::MalformedValue {
        slug: slug.to_string(),
        value: raw.to_string(),
    })
}
