//! In-memory counter store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::store::{parse_count, CounterStore, StoreError};

/// Process-local store backed by a hash map.
///
/// Used by tests and by ephemeral serving where durability does not
/// matter. Values are kept as decimal strings to match the persisted
/// representation of the durable stores.
#[derive(Default)]
pub struct MemoryStore {
    counts: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for MemoryStore {
    fn get(&self, slug: &str) -> Result<Option<u64>, StoreError> {
        let counts = self.counts.read();
        match counts.get(slug) {
            Some(raw) => Ok(Some(parse_count(slug, raw)?)),
            None => Ok(None),
        }
    }

    fn set(&self, slug: &str, count: u64) -> Result<(), StoreError> {
        self.counts.write().insert(slug.to_string(), count.to_string());
        Ok(())
    }
}
