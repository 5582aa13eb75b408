//! First-Run Content
//!
//! Seed rows and the default title, used only when nothing is stored yet.

use chrono::{DateTime, Local};

use crate::item::{Bullet, Item, ItemId};

/// Rows shown the first time the app starts with an empty storage.
///
/// Stamps are small offsets from the startup clock so they stay unique and
/// keep their relative order. One instructional row, one row already done,
/// the rest blank placeholders.
pub fn seed_items(now_ms: ItemId) -> Vec<Item> {
    vec![
        Item::new("Put the most important task first [IMPORTANT]", now_ms + 1),
        Item {
            bullet: Bullet::Done,
            text: "Open this list".to_string(),
            index: now_ms + 2,
        },
        Item::blank(now_ms + 3),
        Item::blank(now_ms + 4),
        Item::blank(now_ms + 5),
        Item::blank(now_ms + 6),
    ]
}

/// Default title for a fresh list: `TODO <year>/<month>/<day>` in local time
pub fn default_title(now_ms: i64) -> String {
    let date = DateTime::from_timestamp_millis(now_ms)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&Local);
    format!("TODO {}", date.format("%Y/%m/%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_six_rows_with_unique_ascending_stamps() {
        let items = seed_items(1000);
        assert_eq!(items.len(), 6);
        for pair in items.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
        assert!(items.iter().all(|i| i.index > 1000));
    }

    #[test]
    fn test_seed_shape() {
        let items = seed_items(0);
        let done: Vec<_> = items.iter().filter(|i| i.bullet.is_done()).collect();
        assert_eq!(done.len(), 1);
        assert!(!items[0].is_blank());
        assert!(items[0].text.contains('['), "first row shows off a tag");
        assert_eq!(items.iter().filter(|i| i.is_blank()).count(), 4);
    }

    #[test]
    fn test_default_title_shape() {
        let title = default_title(1_700_000_000_000);
        let rest = title.strip_prefix("TODO ").expect("TODO prefix");
        let parts: Vec<_> = rest.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
    }
}
