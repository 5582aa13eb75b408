//! Item Entity
//!
//! One row of the list. The only dependency is serde for the wire format.

use serde::{Deserialize, Serialize};

/// Creation stamp of an item, in milliseconds.
///
/// Doubles as the unique key for updates and deletes. Stamps are taken from
/// the clock at creation time and never reassigned, so later items always
/// carry larger stamps. A same-millisecond collision is an accepted risk.
pub type ItemId = i64;

/// Completion marker, serialized as the single letter the storage format
/// uses: `"O"` open, `"X"` done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bullet {
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "X")]
    Done,
}

impl Bullet {
    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            Bullet::Open => Bullet::Done,
            Bullet::Done => Bullet::Open,
        }
    }

    pub fn is_done(self) -> bool {
        self == Bullet::Done
    }
}

/// A list row
///
/// Field order is the storage field order, do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub bullet: Bullet,
    pub text: String,
    pub index: ItemId,
}

impl Item {
    /// Create an open item with the given text
    pub fn new(text: impl Into<String>, index: ItemId) -> Self {
        Self {
            bullet: Bullet::Open,
            text: text.into(),
            index,
        }
    }

    /// Create a fresh empty row.
    ///
    /// The text is a single space so the editable surface has a caret
    /// target before the user types anything.
    pub fn blank(index: ItemId) -> Self {
        Self::new(" ", index)
    }

    /// True when the text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
