//! combi — exhaustive counting and enumeration engine for the
//! Combination Simulator teaching material.
//!
//! This is the umbrella crate that provides the [`Explorer`] and
//! re-exports core types from sub-crates.

pub use combi_enum::{self, arrangements, groupings};
pub use combi_format::{
    self, CombiFormatError, MaterialSpec, build_item_set, export_material, export_results,
    load_material, load_material_str,
};
pub use combi_math::{self, combination_count, factorial, permutation_count};
pub use combi_model::{
    self, Arrangement, Grouping, Item, ItemSet, SelectionMode, SelectionSpec,
};

/// One item pool, queried for counts and enumerations.
///
/// Every query recomputes from the pool and the given select count;
/// nothing is cached between calls.
pub struct Explorer {
    set: ItemSet,
}

impl Explorer {
    pub fn new(set: ItemSet) -> Self {
        Explorer { set }
    }

    /// Build from a validated material spec.
    pub fn from_spec(spec: &MaterialSpec) -> Self {
        Explorer {
            set: build_item_set(spec),
        }
    }

    pub fn set(&self) -> &ItemSet {
        &self.set
    }

    /// The (n, r) pair a query with this select count describes.
    pub fn selection(&self, select: usize) -> SelectionSpec {
        SelectionSpec::new(self.set.len(), select)
    }

    /// Number of selections in the given mode.
    pub fn count(&self, mode: SelectionMode, select: usize) -> u64 {
        let n = self.set.len() as u64;
        let r = select as u64;
        match mode {
            SelectionMode::Ordered => permutation_count(n, r),
            SelectionMode::Unordered => combination_count(n, r),
        }
    }

    /// All ordered selections of the given length.
    pub fn arrangements(&self, select: usize) -> Vec<Arrangement> {
        arrangements(&self.set, select)
    }

    /// All unordered selections of the given length.
    pub fn groupings(&self, select: usize) -> Vec<Grouping> {
        groupings(&self.set, select)
    }
}
