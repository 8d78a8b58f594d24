//! Draft persistence.
//!
//! ## Storage layout
//!
//! One entry per page, key `"{prefix}{page_id}"` (or `"{prefix}new"` for a
//! page without an id), value the raw field text. Nothing is wrapped or
//! encoded, so drafts written by older editor pages stay readable.
//!
//! Writes are last-writer-wins; two tabs editing the same page overwrite each
//! other's drafts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// String key/value store, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same entries, so a second session built
/// from a clone sees what the first one wrote, like a page reload would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A page's draft slot.
///
/// Storage errors are logged and swallowed: a full or disabled store must not
/// stop the user from typing.
#[derive(Debug)]
pub struct DraftStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a draft is stored for this page. Unreadable counts as absent.
    pub fn exists(&self) -> bool {
        self.load().is_some()
    }

    /// Read the stored draft.
    pub fn load(&self) -> Option<String> {
        match self.store.get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to read draft: {}", e);
                None
            }
        }
    }

    /// Upsert the draft. Returns whether the write succeeded.
    pub fn persist(&self, text: &str) -> bool {
        match self.store.set(&self.key, text) {
            Ok(()) => {
                tracing::debug!(key = %self.key, chars = text.chars().count(), "draft saved");
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to save draft: {}", e);
                false
            }
        }
    }

    /// Delete the draft. Other pages' drafts are never touched.
    pub fn clear(&self) {
        match self.store.remove(&self.key) {
            Ok(()) => tracing::debug!(key = %self.key, "draft cleared"),
            Err(e) => tracing::warn!(key = %self.key, "Failed to clear draft: {}", e),
        }
    }
}
