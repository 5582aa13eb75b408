//! Todo Row Component
//!
//! One list row: drag gutter, bullet toggle, content-editable text region
//! with bracket-tag highlighting. Text commits on blur or Enter, never per
//! keystroke.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use daylist_core::{Command, Item};
use leptos_dragdrop::{make_on_mousedown, make_on_mouseleave, make_on_row_mouseenter, DndSignals};

use crate::store::{dispatch, use_app_store, AppStateStoreFields};
use crate::tags;

/// A single row
#[component]
pub fn TodoRow(item: Item, position: usize, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let id = item.index;
    let done = item.bullet.is_done();
    let blank = item.is_blank();
    let text = item.text.clone();

    let text_ref = NodeRef::<html::Div>::new();

    // The focus pointer drives the caret. When it lands on this row the
    // editable region takes focus with the caret after the existing text;
    // when it leaves, the region lets go. A click that put the caret here
    // on its own is left alone.
    Effect::new(move |_| {
        let is_mine = store.focused().get() == Some(id);
        let Some(el) = text_ref.get() else {
            return;
        };
        if is_mine {
            Timeout::new(0, move || {
                if !is_active(&el) {
                    focus_caret_end(&el);
                }
            })
            .forget();
        } else if is_active(&el) {
            let _ = el.blur();
        }
    });

    let on_text_focus = move |_| {
        if store.focused().get_untracked() != Some(id) {
            dispatch(&store, Command::SetFocus(Some(id)));
        }
    };

    let on_text_blur = {
        let item = item.clone();
        move |ev: web_sys::FocusEvent| {
            if let Some(current) = editable_text(&ev) {
                if current != item.text {
                    dispatch(
                        &store,
                        Command::Update(Item {
                            text: current,
                            ..item.clone()
                        }),
                    );
                }
            }
            // Only clear the pointer if it still points here; Enter may
            // already have moved it to the freshly added row.
            if store.focused().get_untracked() == Some(id) {
                dispatch(&store, Command::SetFocus(None));
            }
        }
    };

    let on_text_keydown = {
        let item = item.clone();
        move |ev: web_sys::KeyboardEvent| {
            match ev.key().as_str() {
                "Enter" => {
                    ev.prevent_default();
                    if let Some(current) = editable_text(&ev) {
                        if !current.trim().is_empty() {
                            dispatch(
                                &store,
                                Command::Update(Item {
                                    text: current,
                                    ..item.clone()
                                }),
                            );
                        }
                    }
                    let stamp = js_sys::Date::now() as i64;
                    dispatch(&store, Command::AddEmpty { stamp });
                    blur_target(&ev);
                }
                "Backspace" => {
                    let empty = editable_text(&ev)
                        .map(|t| t.trim().is_empty())
                        .unwrap_or(false);
                    if empty {
                        ev.prevent_default();
                        dispatch(&store, Command::Delete(id));
                        dispatch(&store, Command::SetFocus(None));
                    }
                }
                "Escape" => {
                    // Blur commits through the normal blur path
                    blur_target(&ev);
                }
                _ => {}
            }
        }
    };

    let on_bullet_click = {
        let item = item.clone();
        move |_| {
            // The click right after a drop is not a toggle
            if dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            let mut toggled = item.clone();
            toggled.bullet = toggled.bullet.toggled();
            dispatch(&store, Command::Update(toggled));
            dispatch(&store, Command::SetFocus(None));
        }
    };

    let row_class = move || {
        let mut class = String::from("row");
        if done {
            class.push_str(" completed");
        }
        if blank {
            class.push_str(" empty");
        }
        if store.focused().get() == Some(id) {
            class.push_str(" selected");
        }
        if dnd.dragging_id_read.get() == Some(id) {
            class.push_str(" dragging");
        }
        if dnd.drop_pos_read.get() == Some(position) && dnd.dragging_id_read.get() != Some(id) {
            class.push_str(" drop-target");
        }
        class
    };

    view! {
        <div
            class=row_class
            on:mouseenter=make_on_row_mouseenter(dnd, id, position)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <div class="left-gutter" on:mousedown=make_on_mousedown(dnd, id)>
                <div class="hole2"></div>
                <div class="hole"></div>
            </div>
            <div class="bullet" on:click=on_bullet_click>
                <span class="mark">{if done { "X" } else { "O" }}</span>
            </div>
            <div class="text">
                <div
                    class="editable-text"
                    node_ref=text_ref
                    contenteditable="true"
                    spellcheck="false"
                    inner_html=tags::to_html(&text)
                    on:focus=on_text_focus
                    on:blur=on_text_blur
                    on:keydown=on_text_keydown
                ></div>
            </div>
        </div>
    }
}

/// Visible text of the editable region the event fired on
fn editable_text(ev: &web_sys::Event) -> Option<String> {
    ev.target()?
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|el| el.inner_text())
}

fn blur_target(ev: &web_sys::Event) {
    if let Some(target) = ev.target() {
        if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
            let _ = el.blur();
        }
    }
}

fn is_active(el: &web_sys::HtmlDivElement) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map_or(false, |active| {
            let el: &web_sys::Element = el.as_ref();
            active == *el
        })
}

/// Focus `el` and park the caret after its last character
fn focus_caret_end(el: &web_sys::HtmlDivElement) {
    let _ = el.focus();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let selection = match window.get_selection() {
        Ok(Some(selection)) => selection,
        _ => return,
    };
    let range = match document.create_range() {
        Ok(range) => range,
        Err(_) => return,
    };
    if range.select_node_contents(el).is_err() {
        return;
    }
    range.collapse_with_to_start(false);
    let _ = selection.remove_all_ranges();
    let _ = selection.add_range(&range);
}
