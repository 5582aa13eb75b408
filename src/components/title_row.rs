//! Title Row Component
//!
//! The list title, edited through the same content-editable contract as the
//! rows but without delete-on-backspace or row creation: Enter and Escape
//! both commit and blur.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use daylist_core::Command;

use crate::store::{dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn TitleRow() -> impl IntoView {
    let store = use_app_store();

    let commit = move |ev: &web_sys::Event| {
        let Some(target) = ev.target() else {
            return;
        };
        if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
            let text = el.inner_text();
            if text != store.title().get_untracked() {
                dispatch(&store, Command::SetTitle(text));
            }
        }
    };

    let on_blur = move |ev: web_sys::FocusEvent| commit(&ev);

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" {
            ev.prevent_default();
        }
        if key == "Enter" || key == "Escape" {
            commit(&ev);
            if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                let _ = el.blur();
            }
        }
    };

    view! {
        <div class="row upper-gutter">
            <div class="left-gutter"></div>
            <div class="text">
                <div
                    class="content-editable title"
                    contenteditable="true"
                    spellcheck="false"
                    on:blur=on_blur
                    on:keydown=on_keydown
                >
                    {move || store.title().get()}
                </div>
            </div>
        </div>
    }
}
