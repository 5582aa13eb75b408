//! Daylist App
//!
//! Top-level component: owns the store, loads state on mount and writes
//! every committed change back to local storage.

use leptos::prelude::*;
use reactive_stores::Store;

use daylist_core::ListState;

use crate::components::{RowList, TitleRow};
use crate::storage::BrowserStore;
use crate::store::{sync, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());

    // Provide the store to all children
    provide_context(store);

    // Initial load, once the component is mounted
    Effect::new(move |_| {
        if store.initialized().get_untracked() {
            return;
        }
        let browser = BrowserStore::open();
        let now_ms = js_sys::Date::now() as i64;
        let state = daylist_core::load(&browser, now_ms);
        web_sys::console::log_1(&format!("[APP] Loaded {} rows", state.items.len()).into());
        sync(&store, state);
    });

    // Write-through persistence on every committed change. Focus moves are
    // deliberately untracked, they change nothing that gets stored.
    Effect::new(move |_| {
        let state = ListState {
            title: store.title().get(),
            items: store.items().get(),
            focused: store.focused().get_untracked(),
            initialized: store.initialized().get(),
        };
        let mut browser = BrowserStore::open();
        if let Err(err) = daylist_core::save(&mut browser, &state) {
            web_sys::console::warn_1(&format!("[APP] Save failed: {err}").into());
        }
    });

    view! {
        <div class="app">
            <div class="rows">
                <TitleRow />
                <RowList />
            </div>
        </div>
    }
}
