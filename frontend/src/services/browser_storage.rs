//! `window.localStorage` behind the [`KeyValueStore`] capability.

use shared::{KeyValueStore, StorageError, StorageOp};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Device storage for the page. Holds `None` when the browser denies access,
/// in which case every call reports [`StorageError::Unavailable`].
#[derive(Clone)]
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        // Reading `localStorage` itself throws in some privacy modes
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage is not accessible: {}", js_message(&err));
                None
            }
        });
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::operation(StorageOp::Get, key, js_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::operation(StorageOp::Set, key, js_message(&err)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| StorageError::operation(StorageOp::Remove, key, js_message(&err)))
    }
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
