//! Core state machine for the daylist editor.
//!
//! Layered like a small backend, minus the database:
//! - item: the row entity and its wire format
//! - state: the list state and its update commands
//! - storage: slot persistence contract and JSON codec
//! - seed: first-run content
//!
//! Everything in here is synchronous, DOM-free and testable on the host.
//! The UI crate owns rendering, event wiring and the browser storage handle.

pub mod item;
pub mod seed;
pub mod state;
pub mod storage;

pub use item::{Bullet, Item, ItemId};
pub use state::{move_item, Command, ListState};
pub use storage::{
    load, save, MemoryStore, SlotStore, StorageError, DATA_SLOT, TITLE_SLOT,
};
