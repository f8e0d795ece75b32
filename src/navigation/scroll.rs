//! Scroll position store.
//!
//! Remembers the last scroll offset per route key so screens can restore
//! it when navigated back to. Owned by the navigation layer and passed
//! explicitly; there is no process-wide instance.

use std::sync::Arc;

use dashmap::DashMap;

use crate::observability::metrics;

/// A thread-safe route key → scroll offset store.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ScrollPositionStore {
    inner: Arc<DashMap<String, f64>>,
}

impl ScrollPositionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the offset for a route key. Non-finite offsets are ignored.
    pub fn save(&self, key: impl Into<String>, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        self.inner.insert(key.into(), offset.max(0.0));
        metrics::record_scroll_store_size(self.inner.len());
    }

    /// Last saved offset for a route key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.inner.get(key).map(|r| *r.value())
    }

    /// Forget a single route key.
    pub fn remove(&self, key: &str) -> Option<f64> {
        let removed = self.inner.remove(key).map(|(_, v)| v);
        metrics::record_scroll_store_size(self.inner.len());
        removed
    }

    /// Drop every stored position.
    pub fn clear(&self) {
        self.inner.clear();
        metrics::record_scroll_store_size(0);
    }

    /// Drop every stored position when the user signs out.
    pub fn clear_on_logout(&self) {
        let dropped = self.inner.len();
        self.clear();
        tracing::debug!(dropped, "Cleared scroll positions on logout");
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_operations() {
        let store = ScrollPositionStore::new();
        assert!(store.get("/news").is_none());

        store.save("/news", 120.5);
        assert_eq!(store.get("/news"), Some(120.5));

        store.save("/news", 40.0);
        assert_eq!(store.get("/news"), Some(40.0));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove("/news"), Some(40.0));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_offsets() {
        let store = ScrollPositionStore::new();
        store.save("/players", f64::NAN);
        store.save("/players", f64::INFINITY);
        assert!(store.get("/players").is_none());

        store.save("/players", -15.0);
        assert_eq!(store.get("/players"), Some(0.0));
    }

    #[test]
    fn test_clones_share_state_and_logout_clears() {
        let store = ScrollPositionStore::new();
        let handle = store.clone();
        handle.save("/leagues", 10.0);
        handle.save("/match/3", 300.0);
        assert_eq!(store.len(), 2);

        store.clear_on_logout();
        assert!(handle.is_empty());
    }
}
