//! Storage for scored receipts.
//!
//! The HTTP layer records each receipt's points under a freshly generated id
//! and looks them up later. [`ReceiptStore`] is the seam the API state holds;
//! [`InMemoryStore`] is the process-lifetime implementation.

mod memory;

pub use memory::InMemoryStore;

use std::collections::BTreeMap;
use std::fmt::Debug;

/// A map from receipt id to the points that receipt earned.
///
/// Implementations must be safe to share between request handlers. Once a
/// value is inserted under an id, `get` with that id returns it for the rest
/// of the store's lifetime.
pub trait ReceiptStore: Send + Sync + Debug {
    /// Records the points for a receipt id.
    fn insert(&self, id: String, points: u64);

    /// Returns the points recorded for `id`, if any.
    fn get(&self, id: &str) -> Option<u64>;

    /// Returns a snapshot of every id and its points, ordered by id.
    fn all(&self) -> BTreeMap<String, u64>;

    /// Returns the number of stored receipts.
    fn len(&self) -> usize;

    /// Returns true when no receipts are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
