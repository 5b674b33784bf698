//! The material spec JSON format.
//!
//! A spec file describes one Combination Simulator setup: the item pool,
//! the select count, and whether order matters. Loading validates the
//! pool (unique, non-empty ids) and the select range; the engine itself
//! stays total and never errors on degenerate queries.

use serde::{Deserialize, Serialize};

use combi_enum::{arrangements, groupings};
use combi_math::{combination_count, permutation_count};
use combi_model::{Item, ItemSet, SelectionMode, SelectionSpec};

use crate::error::{CombiFormatError, Result};

/// Serialized form of one pool item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: String,
    /// Display label; defaults to the id when omitted.
    #[serde(default)]
    pub label: Option<String>,
    /// Chip color for the renderer; carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Top-level material spec: the pool and the selection to explore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Material title shown in the catalog.
    #[serde(default)]
    pub name: String,
    pub items: Vec<ItemSpec>,
    /// Select count r.
    pub select: usize,
    pub mode: SelectionMode,
}

impl MaterialSpec {
    /// The (n, r) pair this spec describes.
    pub fn selection(&self) -> SelectionSpec {
        SelectionSpec::new(self.items.len(), self.select)
    }
}

/// Parse a material spec from a JSON string.
pub fn load_material_str(json: &str) -> Result<MaterialSpec> {
    let spec: MaterialSpec = serde_json::from_str(json)?;
    validate(&spec)?;
    Ok(spec)
}

/// Load a material spec from a JSON file.
pub fn load_material(path: &str) -> Result<MaterialSpec> {
    let json = std::fs::read_to_string(path)?;
    load_material_str(&json)
}

/// Serialize a material spec to pretty JSON.
pub fn export_material(spec: &MaterialSpec) -> Result<String> {
    Ok(serde_json::to_string_pretty(spec)?)
}

/// Check pool and selection constraints.
///
/// Item ids must be non-empty and unique (identity is the id), and the
/// select count must not exceed the pool size. The engine itself counts
/// an oversized selection as zero ways; a spec file asking for one is
/// rejected here instead.
fn validate(spec: &MaterialSpec) -> Result<()> {
    let mut seen: Vec<&str> = Vec::with_capacity(spec.items.len());
    for item in &spec.items {
        if item.id.is_empty() {
            return Err(CombiFormatError::InvalidSpec("empty item id".to_string()));
        }
        if seen.contains(&item.id.as_str()) {
            return Err(CombiFormatError::DuplicateItem(item.id.clone()));
        }
        seen.push(&item.id);
    }
    if spec.select > spec.items.len() {
        return Err(CombiFormatError::SelectOutOfRange {
            select: spec.select,
            total: spec.items.len(),
        });
    }
    Ok(())
}

/// Convert a validated spec's pool into engine items.
pub fn build_item_set(spec: &MaterialSpec) -> ItemSet {
    let items = spec
        .items
        .iter()
        .map(|it| Item::new(&it.id, it.label.as_deref().unwrap_or(&it.id)))
        .collect();
    ItemSet::new(items)
}

/// Run the spec through the engine and serialize the outcome for the UI.
///
/// The payload carries the count and every enumerated selection as id
/// lists, in engine order.
pub fn export_results(spec: &MaterialSpec) -> Result<String> {
    let set = build_item_set(spec);
    let n = set.len() as u64;
    let r = spec.select as u64;

    let (count, selections): (u64, Vec<Vec<String>>) = match spec.mode {
        SelectionMode::Ordered => (
            permutation_count(n, r),
            arrangements(&set, spec.select)
                .iter()
                .map(|a| a.ids().iter().map(|s| s.to_string()).collect())
                .collect(),
        ),
        SelectionMode::Unordered => (
            combination_count(n, r),
            groupings(&set, spec.select)
                .iter()
                .map(|g| g.ids().iter().map(|s| s.to_string()).collect())
                .collect(),
        ),
    };

    let payload = serde_json::json!({
        "name": spec.name,
        "mode": spec.mode,
        "total": set.len(),
        "select": spec.select,
        "count": count,
        "selections": selections,
    });
    Ok(payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: &str = r##"{
        "name": "fruit pairs",
        "items": [
            {"id": "apple", "label": "Apple", "color": "#e74c3c"},
            {"id": "banana", "label": "Banana"},
            {"id": "grape", "label": "Grape"}
        ],
        "select": 2,
        "mode": "unordered"
    }"##;

    #[test]
    fn test_load_and_roundtrip() {
        let spec = load_material_str(FRUIT).unwrap();
        assert_eq!(spec.items.len(), 3);
        assert_eq!(spec.select, 2);
        assert_eq!(spec.mode, SelectionMode::Unordered);
        assert_eq!(spec.items[0].color.as_deref(), Some("#e74c3c"));

        let json = export_material(&spec).unwrap();
        let back = load_material_str(&json).unwrap();
        assert_eq!(back.items[0].id, "apple");
        assert_eq!(back.selection(), spec.selection());
    }

    #[test]
    fn test_label_defaults_to_id() {
        let spec = load_material_str(
            r#"{"items": [{"id": "x"}], "select": 1, "mode": "ordered"}"#,
        )
        .unwrap();
        let set = build_item_set(&spec);
        assert_eq!(set.items()[0].label, "x");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = load_material_str(
            r#"{"items": [{"id": "a"}, {"id": "a"}], "select": 1, "mode": "ordered"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CombiFormatError::DuplicateItem(id) if id == "a"));
    }

    #[test]
    fn test_select_out_of_range_rejected() {
        let err = load_material_str(
            r#"{"items": [{"id": "a"}, {"id": "b"}], "select": 3, "mode": "unordered"}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CombiFormatError::SelectOutOfRange { select: 3, total: 2 }
        ));
    }

    #[test]
    fn test_export_results_payload() {
        let spec = load_material_str(FRUIT).unwrap();
        let payload: serde_json::Value =
            serde_json::from_str(&export_results(&spec).unwrap()).unwrap();
        assert_eq!(payload["count"], 3);
        assert_eq!(payload["selections"][0][0], "apple");
        assert_eq!(payload["selections"][0][1], "banana");
        assert_eq!(payload["selections"].as_array().unwrap().len(), 3);
    }
}
