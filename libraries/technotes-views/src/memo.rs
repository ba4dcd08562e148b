//! Single-entry memoization keyed on snapshot identity
//!
//! A projection is recomputed only when the snapshot `Arc` changes or the
//! key (actor and parameters) compares unequal to the previous call.

use std::sync::Arc;

struct Entry<S, K, V> {
    snapshot: Arc<S>,
    key: K,
    value: V,
}

/// Last-result cache for one projector
pub(crate) struct Memo<S, K, V> {
    entry: Option<Entry<S, K, V>>,
    hits: u64,
    misses: u64,
}

impl<S, K: PartialEq + Clone, V> Memo<S, K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached value or compute and store a new one
    pub(crate) fn get_or_compute(
        &mut self,
        snapshot: &Arc<S>,
        key: &K,
        compute: impl FnOnce(&S, &K) -> V,
    ) -> &V {
        let fresh = matches!(
            &self.entry,
            Some(entry) if Arc::ptr_eq(&entry.snapshot, snapshot) && entry.key == *key
        );

        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.entry = None;
        }
        tracing::debug!(hit = fresh, hits = self.hits, misses = self.misses, "Projection cache");

        let entry = self.entry.get_or_insert_with(|| Entry {
            snapshot: Arc::clone(snapshot),
            key: key.clone(),
            value: compute(&**snapshot, key),
        });
        &entry.value
    }

    pub(crate) fn clear(&mut self) {
        self.entry = None;
    }

    pub(crate) fn hits(&self) -> u64 {
        self.hits
    }

    pub(crate) fn misses(&self) -> u64 {
        self.misses
    }
}
