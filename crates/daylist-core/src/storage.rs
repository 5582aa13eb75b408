//! Persistence Layer
//!
//! Defines the slot-storage contract and the JSON codec on top of it.
//! Implementations can use browser local storage, an in-memory map, etc.

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::item::Item;
use crate::seed;
use crate::state::ListState;

/// Slot holding the JSON array of rows
pub const DATA_SLOT: &str = "data";
/// Slot holding the plain title string
pub const TITLE_SLOT: &str = "title";

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Serialize(String),
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Serialize(msg) => write!(f, "serialize failed: {}", msg),
            StorageError::Write(msg) => write!(f, "write failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Named key/value slots, each write fully overwriting the prior value
pub trait SlotStore {
    /// Current value of a slot, if any
    fn read(&self, slot: &str) -> Option<String>;

    /// Overwrite a slot
    fn write(&mut self, slot: &str, value: &str) -> Result<(), StorageError>;
}

/// HashMap-backed store, used in tests and as the no-browser fallback
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, slot: &str) -> Option<String> {
        self.slots.get(slot).cloned()
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

/// Build the startup state from storage.
///
/// A missing `data` slot yields the seed list; an unreadable one does too,
/// with a warning, instead of propagating the parse failure. A missing or
/// empty `title` slot yields the dated default. The result is marked
/// initialized so the write-through path opens up.
pub fn load(store: &impl SlotStore, now_ms: i64) -> ListState {
    let items = match store.read(DATA_SLOT) {
        Some(raw) => match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!("stored rows are unreadable ({err}), starting over from seed");
                seed::seed_items(now_ms)
            }
        },
        None => seed::seed_items(now_ms),
    };

    let title = store
        .read(TITLE_SLOT)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| seed::default_title(now_ms));

    ListState {
        title,
        items,
        focused: None,
        initialized: true,
    }
}

/// Mirror the state into storage.
///
/// A no-op until the state is initialized, so the empty default can never
/// clobber stored data before the load completes. Idempotent: both slots
/// are fully overwritten on every call.
pub fn save(store: &mut impl SlotStore, state: &ListState) -> Result<(), StorageError> {
    if !state.initialized {
        debug!("save before load finished, skipped");
        return Ok(());
    }
    let data = serde_json::to_string(&state.items)
        .map_err(|err| StorageError::Serialize(err.to_string()))?;
    store.write(DATA_SLOT, &data)?;
    store.write(TITLE_SLOT, &state.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Bullet;
    use crate::state::Command;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_round_trip_preserves_title_and_rows() {
        let mut store = MemoryStore::new();
        let state = ListState {
            title: "T".to_string(),
            items: vec![
                Item::new("A", 1),
                Item {
                    bullet: Bullet::Done,
                    text: "B".to_string(),
                    index: 2,
                },
            ],
            focused: None,
            initialized: true,
        };

        save(&mut store, &state).unwrap();
        let loaded = load(&store, NOW);

        assert_eq!(loaded.title, state.title);
        assert_eq!(loaded.items, state.items);
        assert!(loaded.initialized);
    }

    #[test]
    fn test_save_is_suppressed_before_initialization() {
        let mut store = MemoryStore::new();
        let state = ListState {
            initialized: false,
            ..ListState::default()
        };

        save(&mut store, &state).unwrap();

        assert_eq!(store.read(DATA_SLOT), None);
        assert_eq!(store.read(TITLE_SLOT), None);
    }

    #[test]
    fn test_empty_storage_yields_seed_and_dated_title() {
        let loaded = load(&MemoryStore::new(), NOW);
        assert_eq!(loaded.items, seed::seed_items(NOW));
        assert!(loaded.title.starts_with("TODO "));
        assert_eq!(loaded.focused, None);
    }

    #[test]
    fn test_malformed_rows_fall_back_to_seed() {
        let mut store = MemoryStore::new();
        store.write(DATA_SLOT, "{not json").unwrap();
        let loaded = load(&store, NOW);
        assert_eq!(loaded.items, seed::seed_items(NOW));
    }

    #[test]
    fn test_empty_title_slot_counts_as_missing() {
        let mut store = MemoryStore::new();
        store.write(TITLE_SLOT, "").unwrap();
        let loaded = load(&store, NOW);
        assert!(loaded.title.starts_with("TODO "));

        store.write(TITLE_SLOT, "My list").unwrap();
        assert_eq!(load(&store, NOW).title, "My list");
    }

    // The full first-run editing flow from load to reload
    #[test]
    fn test_first_run_edit_flow() {
        let mut store = MemoryStore::new();
        let state = load(&store, NOW);
        assert_eq!(state.items.len(), 6);

        // edit the first row and commit, stored text stays raw
        let mut first = state.items[0].clone();
        first.text = "Buy milk [URGENT]".to_string();
        let state = state.apply(Command::Update(first));
        assert_eq!(state.items[0].text, "Buy milk [URGENT]");

        // enter appends a fresh blank row and focuses it
        let state = state.apply(Command::AddEmpty { stamp: NOW + 50 });
        let added = state.items.last().unwrap();
        assert_eq!(added.text, " ");
        assert_eq!(added.bullet, Bullet::Open);
        assert_eq!(state.focused, Some(NOW + 50));

        // backspace on the blank row removes it again
        let state = state.apply(Command::Delete(NOW + 50));
        assert_eq!(state.items.len(), 6);

        save(&mut store, &state).unwrap();
        let reloaded = load(&store, NOW + 99);
        assert_eq!(reloaded.items, state.items);
        assert_eq!(reloaded.title, state.title);
    }
}
