//! Application state for the Receipt Processor API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::{InMemoryStore, ReceiptStore};

/// Shared application state.
///
/// Holds the receipt store the handlers record and look up points in.
#[derive(Clone, Debug)]
pub struct AppState {
    store: Arc<dyn ReceiptStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new<S: ReceiptStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates application state backed by an empty [`InMemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }

    /// Returns the receipt store.
    pub fn store(&self) -> &dyn ReceiptStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::in_memory();
        let clone = state.clone();
        state.store().insert("id".to_string(), 42);
        assert_eq!(clone.store().get("id"), Some(42));
    }
}
