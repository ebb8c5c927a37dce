use parking_lot::Mutex;
use std::sync::Arc;

use crate::models::{Item, ItemPayload};

/// In-memory item collection, shareable across async handlers
///
/// One mutex guards both the collection and the id counter, so every
/// mutation observes a consistent pair. The lock is synchronous and is
/// never held across an await point. All data is lost on restart.
#[derive(Clone)]
pub struct ItemStore {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemStore {
    /// Create an empty store with the id counter at 1
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                items: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Store a new item under the next sequential id
    ///
    /// Ids start at 1, increase monotonically, and are never reused, even
    /// after deletions. The new record is appended to the end of the
    /// collection and returned with its assigned id.
    pub fn insert(&self, payload: ItemPayload) -> Item {
        let mut inner = self.inner.lock();
        let item = Item {
            id: inner.next_id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            is_available: payload.is_available,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());

        tracing::debug!("Inserted item with id: {}", item.id);
        item
    }

    /// Snapshot of all items in insertion order
    pub fn list(&self) -> Vec<Item> {
        self.inner.lock().items.clone()
    }

    /// Look up an item by its id
    ///
    /// # Returns
    /// * `Some(item)` - Item found and returned
    /// * `None` - No item with that id
    pub fn get(&self, id: u64) -> Option<Item> {
        self.inner.lock().items.iter().find(|item| item.id == id).cloned()
    }

    /// Replace every field except the id of an existing item
    ///
    /// # Returns
    /// * `Some(item)` - The updated record
    /// * `None` - No item with that id
    pub fn update(&self, id: u64, payload: ItemPayload) -> Option<Item> {
        let mut inner = self.inner.lock();
        let item = inner.items.iter_mut().find(|item| item.id == id)?;
        item.name = payload.name;
        item.description = payload.description;
        item.price = payload.price;
        item.is_available = payload.is_available;
        let item = item.clone();

        tracing::debug!("Updated item with id: {}", id);
        Some(item)
    }

    /// Remove an item by its id, preserving the order of the remainder
    ///
    /// The id counter is untouched, so a removed id is never handed out
    /// again.
    ///
    /// # Returns
    /// * `Some(item)` - The removed record
    /// * `None` - No item with that id
    pub fn remove(&self, id: u64) -> Option<Item> {
        let mut inner = self.inner.lock();
        let position = inner.items.iter().position(|item| item.id == id)?;
        let item = inner.items.remove(position);

        tracing::debug!("Removed item with id: {}", id);
        Some(item)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
