//! Material spec JSON format for the combi engine.
//!
//! A .json material spec describes one Combination Simulator setup:
//! - the item pool (ids, labels, chip colors)
//! - the select count
//! - the selection mode (ordered / unordered)
//!
//! The presentation layer authors and edits these files; this crate
//! validates them and turns engine output back into UI payloads.

pub mod error;
pub mod schema;

pub use error::{CombiFormatError, Result};
pub use schema::{
    ItemSpec, MaterialSpec, build_item_set, export_material, export_results, load_material,
    load_material_str,
};
