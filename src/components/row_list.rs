//! Row List Component
//!
//! Renders the rows in display order and wires drag-and-drop reordering
//! across them.

use leptos::prelude::*;

use daylist_core::{move_item, Command};
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::components::TodoRow;
use crate::store::{dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn RowList() -> impl IntoView {
    let store = use_app_store();

    // DnD signals shared by every row
    let dnd = create_dnd_signals();

    // Global mouseup commits the move; a release outside any row was
    // already filtered out by the dragdrop crate.
    bind_global_mouseup(dnd, move |dragged_id, to| {
        let items = store.items().get_untracked();
        let Some(from) = items.iter().position(|i| i.index == dragged_id) else {
            return;
        };
        web_sys::console::log_1(&format!("[DND] Drop: {} {} -> {}", dragged_id, from, to).into());
        if from != to {
            dispatch(&store, Command::ReplaceAll(move_item(&items, from, to)));
        }
    });

    let each = move || {
        store.items().get().into_iter().enumerate().collect::<Vec<_>>()
    };

    view! {
        <div class="row-list">
            <For
                each=each
                key=|(position, item)| {
                    // Key on every field the row renders so changes re-create it
                    (*position, item.index, item.text.clone(), item.bullet)
                }
                children=move |(position, item)| {
                    view! { <TodoRow item=item position=position dnd=dnd /> }
                }
            />
        </div>
    }
}
