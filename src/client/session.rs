//! Session-scoped increment suppression.
//!
//! A marker per slug records that this session already incremented the
//! counter, making increments idempotent within one session. Markers are
//! best-effort: they are written only after a successful increment and
//! die with the session.

use std::collections::HashSet;

use parking_lot::Mutex;

/// Records which slugs have already triggered an increment this session.
pub trait SessionGate: Send + Sync {
    fn has_viewed(&self, slug: &str) -> bool;
    fn mark_viewed(&self, slug: &str);
}

/// Gate backed by session-local storage.
///
/// Keys carry a prefix so counter markers cannot collide with other
/// session state sharing the same storage.
pub struct MemorySessionGate {
    prefix: String,
    seen: Mutex<HashSet<String>>,
}

impl MemorySessionGate {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            seen: Mutex::new(HashSet::new()),
        }
    }

    fn key(&self, slug: &str) -> String {
        format!("{}{}", self.prefix, slug)
    }
}

impl SessionGate for MemorySessionGate {
    fn has_viewed(&self, slug: &str) -> bool {
        self.seen.lock().contains(&self.key(slug))
    }

    fn mark_viewed(&self, slug: &str) {
        self.seen.lock().insert(self.key(slug));
    }
}

/// Gate for environments without session storage.
///
/// Fails open: every lookup reports "not viewed" so an increment attempt
/// is still allowed, and marking is a no-op.
pub struct DisabledSessionGate;

impl SessionGate for DisabledSessionGate {
    fn has_viewed(&self, _slug: &str) -> bool {
        false
    }

    fn mark_viewed(&self, _slug: &str) {}
}
