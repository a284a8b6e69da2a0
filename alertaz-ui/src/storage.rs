//! `window.localStorage` as a [`KeyValueStore`].
//!
//! Shared by every tab of the origin with last-writer-wins semantics; there
//! is no cross-tab notification.

use alertaz_core::error::{AlertazError, Result};
use alertaz_core::storage::KeyValueStore;
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AlertazError::StorageUnavailable("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| AlertazError::StorageUnavailable("localStorage disabled".to_string()))
    }
}

fn js_error(value: JsValue) -> AlertazError {
    AlertazError::StorageUnavailable(format!("{:?}", value))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
