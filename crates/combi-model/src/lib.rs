//! Item and selection types for the combi engine.
//!
//! `Item`/`ItemSet` describe the pool the material is exploring;
//! `SelectionSpec` is the (total, select) pair driven by the UI sliders;
//! `Arrangement`/`Grouping` are the enumeration results.

pub mod item;
pub mod selection;

pub use item::{Item, ItemSet};
pub use selection::{Arrangement, Grouping, SelectionMode, SelectionSpec};
