//! Browser Persistence Shim
//!
//! Mirrors the list state into window.localStorage. From the core's point
//! of view this is just another slot store.

use daylist_core::{SlotStore, StorageError};

/// Slot store over window.localStorage.
///
/// When the API is unavailable (storage disabled, no window) the handle
/// still works, it just keeps nothing: the session becomes memory-only.
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(
                &"[STORE] local storage unavailable, changes will not survive a reload".into(),
            );
        }
        Self { storage }
    }
}

impl SlotStore for BrowserStore {
    fn read(&self, slot: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(slot).ok().flatten()
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(());
        };
        storage
            .set_item(slot, value)
            .map_err(|_| StorageError::Write(format!("localStorage.setItem({slot}) rejected")))
    }
}
