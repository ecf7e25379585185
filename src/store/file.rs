//! File-backed counter store.
//!
//! Persists the whole "view-counts" namespace as a single JSON object of
//! slug -> decimal-string entries. Writes go through to disk immediately;
//! reads obey the configured [`Consistency`] mode.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::store::{parse_count, Consistency, CounterStore, StoreError};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    consistency: Consistency,
    cache: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, creating parent directories as needed.
    ///
    /// A missing file is an empty namespace, not an error; the file is
    /// created on first write.
    pub fn open(path: impl Into<PathBuf>, consistency: Consistency) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    path: parent.display().to_string(),
                    source: e,
                })?;
            }
        }
        let cache = read_namespace(&path)?;
        Ok(Self {
            path,
            consistency,
            cache: RwLock::new(cache),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, counts: &HashMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(counts).map_err(|e| StoreError::MalformedFile {
            path: self.path.display().to_string(),
            source: e,
        })?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

impl CounterStore for FileStore {
    fn get(&self, slug: &str) -> Result<Option<u64>, StoreError> {
        if self.consistency == Consistency::Strong {
            let fresh = read_namespace(&self.path)?;
            let mut cache = self.cache.write();
            *cache = fresh;
            return match cache.get(slug) {
                Some(raw) => Ok(Some(parse_count(slug, raw)?)),
                None => Ok(None),
            };
        }

        let cache = self.cache.read();
        match cache.get(slug) {
            Some(raw) => Ok(Some(parse_count(slug, raw)?)),
            None => Ok(None),
        }
    }

    fn set(&self, slug: &str, count: u64) -> Result<(), StoreError> {
        let mut cache = self.cache.write();
        cache.insert(slug.to_string(), count.to_string());
        self.persist(&cache)
    }
}

fn read_namespace(path: &Path) -> Result<HashMap<String, String>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(e) => {
            return Err(StoreError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };
    serde_json::from_str(&content).map_err(|e| StoreError::MalformedFile {
        path: path.display().to_string(),
        source: e,
    })
}
