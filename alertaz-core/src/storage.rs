//! Durable key-value storage abstraction.
//!
//! In the browser this is backed by `window.localStorage` (see
//! `alertaz_ui::storage::BrowserStorage`). `MemoryStore` backs tests and the
//! CLI. Implementations are cheap handles: cloning one shares the same
//! underlying items, which is how tests simulate a page reload.

use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key for the selected project's id (stringified integer).
pub const SELECTED_PROJECT_ID_KEY: &str = "selectedProjectId";
/// Storage key for the JSON-serialized list of known projects.
pub const PROJECTS_KEY: &str = "projects";
/// Storage key for the user's display timezone.
pub const TIMEZONE_KEY: &str = "alertaz-timezone";

/// Synchronous string key-value store with last-writer-wins semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-memory store shared via `Rc`, for single-threaded use.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.set_item("a", "1").unwrap();
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("1"));
        store.remove_item("a").unwrap();
        assert_eq!(store.get_item("a").unwrap(), None);
    }

    #[test]
    fn clones_share_items() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_item(TIMEZONE_KEY, "Europe/London").unwrap();
        assert_eq!(
            other.get_item(TIMEZONE_KEY).unwrap().as_deref(),
            Some("Europe/London")
        );
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::new();
        store.set_item("k", "first").unwrap();
        store.set_item("k", "second").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("second"));
    }
}
