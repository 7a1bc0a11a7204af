//! In-memory receipt store backed by DashMap.

use std::collections::BTreeMap;

use dashmap::DashMap;

use super::ReceiptStore;

/// Thread-safe receipt store that lives as long as the process.
///
/// DashMap shards its locks, so concurrent submissions and lookups do not
/// serialize on a single mutex.
///
/// # Example
///
/// ```
/// use receipt_processor::store::{InMemoryStore, ReceiptStore};
///
/// let store = InMemoryStore::new();
/// store.insert("abc".to_string(), 28);
/// assert_eq!(store.get("abc"), Some(28));
/// assert_eq!(store.get("missing"), None);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    points: DashMap<String, u64>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            points: DashMap::new(),
        }
    }
}

impl ReceiptStore for InMemoryStore {
    fn insert(&self, id: String, points: u64) {
        self.points.insert(id, points);
    }

    fn get(&self, id: &str) -> Option<u64> {
        self.points.get(id).map(|entry| *entry.value())
    }

    fn all(&self) -> BTreeMap<String, u64> {
        self.points
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
