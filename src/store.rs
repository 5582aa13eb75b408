//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through the core command interface, so the reducer logic stays in
//! `daylist-core` where it is testable without a DOM.

use leptos::prelude::*;
use reactive_stores::Store;

use daylist_core::{Command, Item, ItemId, ListState};

/// Reactive mirror of the core list state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// List title shown and edited at the top
    pub title: String,
    /// Rows in user-visible order
    pub items: Vec<Item>,
    /// Stamp of the row that should own the caret
    pub focused: Option<ItemId>,
    /// Gate flag: persistence writes stay off until the first load finished
    pub initialized: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Current state as a plain core value
pub fn snapshot(store: &AppStore) -> ListState {
    ListState {
        title: store.title().get_untracked(),
        items: store.items().get_untracked(),
        focused: store.focused().get_untracked(),
        initialized: store.initialized().get_untracked(),
    }
}

/// Run one command through the core reducer and publish the result
pub fn dispatch(store: &AppStore, command: Command) {
    let next = snapshot(store).apply(command);
    sync(store, next);
}

/// Overwrite the reactive fields from a core state value
pub fn sync(store: &AppStore, state: ListState) {
    store.title().set(state.title);
    store.items().set(state.items);
    store.focused().set(state.focused);
    store.initialized().set(state.initialized);
}
