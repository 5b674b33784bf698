//! Items and item sets.

use serde::{Deserialize, Serialize};

/// A distinguishable element of the active item pool.
///
/// Identity is the `id` (unique within the set); `label` is what the
/// material renders on the chip. Items are immutable for the duration of
/// a calculation; the UI replaces the whole set when "total items"
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier, unique within the active set.
    pub id: String,
    /// Display label.
    pub label: String,
}

impl Item {
    pub fn new(id: &str, label: &str) -> Self {
        Item {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// An ordered pool of items with unique ids.
///
/// The stored order is the enumeration baseline: every arrangement and
/// grouping is generated lexicographically by position in this list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Build a set from items already known to have unique ids.
    ///
    /// Uniqueness is the caller's contract (the format layer checks it
    /// when loading untrusted spec files).
    pub fn new(items: Vec<Item>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = items.iter().map(|it| it.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate item id"
        );
        ItemSet { items }
    }

    /// A set of n items labeled A, B, C, …: the default pool the
    /// material starts from. n ≤ 26.
    pub fn alphabetic(n: usize) -> Self {
        debug_assert!(n <= 26);
        let items = (0..n)
            .map(|i| {
                let name = ((b'A' + i as u8) as char).to_string();
                Item::new(&name, &name)
            })
            .collect();
        ItemSet { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Position of an id in the set's order, if present.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|it| it.id == id)
    }
}
