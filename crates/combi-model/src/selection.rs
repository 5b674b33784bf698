//! Selection specs, modes, and enumeration results.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The (total, select) pair the UI sliders drive.
///
/// Documented domain is `select ≤ total`; `select > total` is still a
/// valid query and counts as zero ways, it is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSpec {
    /// Total item count n.
    pub total: usize,
    /// Select count r.
    pub select: usize,
}

impl SelectionSpec {
    pub fn new(total: usize, select: usize) -> Self {
        SelectionSpec { total, select }
    }

    /// Whether any selection exists at all (r ≤ n).
    pub fn is_satisfiable(&self) -> bool {
        self.select <= self.total
    }
}

/// Whether selection order matters, per the material's mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Order matters: results are arrangements, counted by P(n,r).
    Ordered,
    /// Order is irrelevant: results are groupings, counted by C(n,r).
    Unordered,
}

/// An ordered sequence of r distinct items (one permutation result).
///
/// Two arrangements are distinct if their sequences differ at any
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arrangement {
    items: Vec<Item>,
}

impl Arrangement {
    pub fn new(items: Vec<Item>) -> Self {
        Arrangement { items }
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

    /// Item ids in sequence order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|it| it.id.as_str()).collect()
    }
}

/// An unordered set of r distinct items (one combination result).
///
/// Canonical representation keeps the items in the pool's original
/// relative order, so equal groupings compare equal structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grouping {
    items: Vec<Item>,
}

impl Grouping {
    pub fn new(items: Vec<Item>) -> Self {
        Grouping { items }
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

    /// Item ids in canonical (pool) order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|it| it.id.as_str()).collect()
    }

    /// Set equality regardless of stored order.
    pub fn same_members(&self, other: &Grouping) -> bool {
        if self.items.len() != other.items.len() {
            return false;
        }
        self.items
            .iter()
            .all(|it| other.items.iter().any(|o| o.id == it.id))
    }
}
