//! Exhaustive enumeration of arrangements and groupings.
//!
//! Both enumerators are recursive-choice generators over an [`ItemSet`]:
//! each step tries candidates in the pool's original relative order, so
//! output order is lexicographic by original index and identical across
//! calls. Results are materialized eagerly; callers bound the pool size.
//!
//! [`ItemSet`]: combi_model::ItemSet

pub mod arrange;
pub mod group;

pub use arrange::arrangements;
pub use group::groupings;
