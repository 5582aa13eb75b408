//! List State and Update Commands
//!
//! The whole application state lives in one value. Mutations go through
//! [`ListState::apply`], which is synchronous, total and returns a new
//! value; a consumer holding a previous snapshot keeps seeing it unchanged.

use log::debug;

use crate::item::{Item, ItemId};

/// Complete editor state: title, rows in user-visible order, focus pointer
/// and the persistence gate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    /// List title shown and edited at the top
    pub title: String,
    /// Rows in display order. Never sorted by stamp; drag reorder only
    /// changes positions here.
    pub items: Vec<Item>,
    /// Stamp of the row that should own the caret, if any
    pub focused: Option<ItemId>,
    /// Persistence writes stay suppressed until the initial load finished
    pub initialized: bool,
}

/// One state update
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the title unconditionally
    SetTitle(String),
    /// Replace the whole row list (initial load, reorder commit)
    ReplaceAll(Vec<Item>),
    /// Replace the row with the same stamp; ignored when there is none
    Update(Item),
    /// Remove the row with this stamp; ignored when there is none
    Delete(ItemId),
    /// Append a fresh empty row and point focus at it. The caller supplies
    /// the clock reading so the reducer stays deterministic.
    AddEmpty { stamp: ItemId },
    /// Move or clear the focus pointer
    SetFocus(Option<ItemId>),
    /// Open or close the persistence gate
    SetInitialized(bool),
}

impl ListState {
    /// Apply one command and return the resulting state.
    ///
    /// Updates and deletes that reference an unknown stamp are silent
    /// no-ops; a `debug!` line keeps the gap observable.
    pub fn apply(&self, command: Command) -> ListState {
        let mut next = self.clone();
        match command {
            Command::SetTitle(title) => {
                next.title = title;
            }
            Command::ReplaceAll(items) => {
                next.items = items;
            }
            Command::Update(item) => {
                match next.items.iter_mut().find(|i| i.index == item.index) {
                    Some(slot) => *slot = item,
                    None => debug!("update for unknown row {}, ignored", item.index),
                }
            }
            Command::Delete(id) => {
                let before = next.items.len();
                next.items.retain(|i| i.index != id);
                if next.items.len() == before {
                    debug!("delete for unknown row {id}, ignored");
                }
            }
            Command::AddEmpty { stamp } => {
                next.items.push(Item::blank(stamp));
                next.focused = Some(stamp);
            }
            Command::SetFocus(id) => {
                next.focused = id;
            }
            Command::SetInitialized(value) => {
                next.initialized = value;
            }
        }
        next
    }
}

/// Move the element at `from` to `to`, shifting everything in between.
///
/// A single-element move, not a swap: `[a b c d]` with `from=0, to=2`
/// becomes `[b c a d]`. Out-of-range positions return the sequence
/// unchanged. Stamps are untouched, only positions change.
pub fn move_item(items: &[Item], from: usize, to: usize) -> Vec<Item> {
    let mut out = items.to_vec();
    if from >= out.len() || to >= out.len() {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Bullet;

    fn sample() -> ListState {
        ListState {
            title: "T".to_string(),
            items: vec![
                Item::new("A", 1),
                Item {
                    bullet: Bullet::Done,
                    text: "B".to_string(),
                    index: 2,
                },
                Item::new("C", 3),
            ],
            focused: None,
            initialized: true,
        }
    }

    #[test]
    fn test_add_keeps_existing_stamps() {
        let state = sample();
        let next = state.apply(Command::AddEmpty { stamp: 10 });

        let stamps: Vec<_> = next.items.iter().map(|i| i.index).collect();
        assert_eq!(stamps, vec![1, 2, 3, 10]);
        assert!(stamps[..3].iter().all(|&s| s < 10));
    }

    #[test]
    fn test_add_focuses_the_new_blank_row() {
        let next = sample().apply(Command::AddEmpty { stamp: 10 });
        let added = next.items.last().unwrap();
        assert_eq!(added.text, " ");
        assert_eq!(added.bullet, Bullet::Open);
        assert_eq!(next.focused, Some(10));
    }

    #[test]
    fn test_update_replaces_matching_row() {
        let edited = Item {
            bullet: Bullet::Done,
            text: "A2".to_string(),
            index: 1,
        };
        let next = sample().apply(Command::Update(edited.clone()));
        assert_eq!(next.items[0], edited);
        assert_eq!(next.items.len(), 3);
    }

    #[test]
    fn test_update_is_idempotent() {
        let edited = Item::new("A2", 1);
        let once = sample().apply(Command::Update(edited.clone()));
        let twice = once.apply(Command::Update(edited));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_unknown_stamp_is_a_noop() {
        let state = sample();
        let next = state.apply(Command::Update(Item::new("ghost", 99)));
        assert_eq!(next, state);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let once = sample().apply(Command::Delete(2));
        assert_eq!(once.items.len(), 2);
        let twice = once.apply(Command::Delete(2));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_leaves_the_old_snapshot_intact() {
        let state = sample();
        let before = state.clone();
        let _ = state.apply(Command::Delete(1));
        let _ = state.apply(Command::SetTitle("other".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_replace_all() {
        let rows = vec![Item::new("X", 7)];
        let next = sample().apply(Command::ReplaceAll(rows.clone()));
        assert_eq!(next.items, rows);
    }

    #[test]
    fn test_move_and_back_restores_the_sequence() {
        let items = sample().items;
        let moved = move_item(&items, 0, 2);
        let stamps: Vec<_> = moved.iter().map(|i| i.index).collect();
        assert_eq!(stamps, vec![2, 3, 1]);

        let back = move_item(&moved, 2, 0);
        assert_eq!(back, items);
    }

    #[test]
    fn test_move_preserves_items_and_fields() {
        let items = sample().items;
        let mut moved = move_item(&items, 2, 0);
        moved.sort_by_key(|i| i.index);
        let mut original = items.clone();
        original.sort_by_key(|i| i.index);
        assert_eq!(moved, original);
    }

    #[test]
    fn test_move_out_of_range_is_a_noop() {
        let items = sample().items;
        assert_eq!(move_item(&items, 5, 0), items);
        assert_eq!(move_item(&items, 0, 5), items);
    }
}
