//! `window.localStorage` as a [`KeyValueStore`].
//!
//! Values are stored as raw strings, not JSON, so drafts stay readable by any
//! other script on the page that knows the key.

use wasm_bindgen::{JsCast, JsValue};

use pagedraft_core::{KeyValueStore, StorageError};

/// localStorage handle. Opening never fails: if storage is disabled every
/// operation reports [`StorageError::Unavailable`] and the draft layer shrugs.
#[derive(Debug, Clone)]
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn local() -> Self {
        let storage = web_sys::window()
            .ok_or_else(|| "no window".to_owned())
            .and_then(|w| w.local_storage().map_err(|e| js_reason(&e)))
            .and_then(|s| s.ok_or_else(|| "localStorage is disabled".to_owned()));

        match storage {
            Ok(storage) => Self {
                storage: Some(storage),
            },
            Err(reason) => {
                tracing::warn!("Drafts disabled, localStorage unavailable: {}", reason);
                Self { storage: None }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_owned()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_owned(),
                reason: js_reason(&e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: js_reason(&e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Remove {
                key: key.to_owned(),
                reason: js_reason(&e),
            })
    }
}

/// Best-effort description of a thrown JS value (`QuotaExceededError`, ...).
fn js_reason(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
