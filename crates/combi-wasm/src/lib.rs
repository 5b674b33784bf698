//! Browser bindings for the combi engine.
//!
//! The Combination Simulator UI builds a [`WasmExplorer`] from a material
//! spec JSON string, reads counts directly, and receives enumerations as
//! JSON payloads it lays out as chip groups.

use wasm_bindgen::prelude::*;

use combi_enum::{arrangements, groupings};
use combi_format::{build_item_set, load_material_str};
use combi_model::{ItemSet, SelectionMode};

/// n!, exact for the material's slider range.
#[wasm_bindgen(js_name = factorial)]
pub fn factorial_js(n: u32) -> f64 {
    combi_math::factorial(n as u64) as f64
}

/// P(n,r): ordered selections.
#[wasm_bindgen(js_name = permutationCount)]
pub fn permutation_count_js(n: u32, r: u32) -> f64 {
    combi_math::permutation_count(n as u64, r as u64) as f64
}

/// C(n,r): unordered selections.
#[wasm_bindgen(js_name = combinationCount)]
pub fn combination_count_js(n: u32, r: u32) -> f64 {
    combi_math::combination_count(n as u64, r as u64) as f64
}

#[wasm_bindgen]
pub struct WasmExplorer {
    set: ItemSet,
}

#[wasm_bindgen]
impl WasmExplorer {
    /// Build from a material spec JSON string (validated on load).
    #[wasm_bindgen(constructor)]
    pub fn new(spec_json: &str) -> Result<WasmExplorer, JsError> {
        let spec = load_material_str(spec_json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmExplorer {
            set: build_item_set(&spec),
        })
    }

    /// Pool without a spec file: n items labeled A, B, C, …
    pub fn alphabetic(n: u32) -> WasmExplorer {
        WasmExplorer {
            set: ItemSet::alphabetic(n as usize),
        }
    }

    pub fn n_items(&self) -> u32 {
        self.set.len() as u32
    }

    /// Pool description for the chip renderer: JSON with ids and labels.
    pub fn info(&self) -> String {
        let ids: Vec<&str> = self.set.items().iter().map(|it| it.id.as_str()).collect();
        let labels: Vec<&str> = self.set.items().iter().map(|it| it.label.as_str()).collect();
        serde_json::json!({
            "n_items": self.set.len(),
            "ids": ids,
            "labels": labels,
        })
        .to_string()
    }

    pub fn permutation_count(&self, r: u32) -> f64 {
        combi_math::permutation_count(self.set.len() as u64, r as u64) as f64
    }

    pub fn combination_count(&self, r: u32) -> f64 {
        combi_math::combination_count(self.set.len() as u64, r as u64) as f64
    }

    /// Enumerate all selections of length r. `mode` is "ordered" or
    /// "unordered". Returns JSON with count, selections (id lists in
    /// engine order), and walltime_ms.
    pub fn enumerate(&self, mode: &str, r: u32) -> Result<String, JsError> {
        let mode = match mode {
            "ordered" => SelectionMode::Ordered,
            "unordered" => SelectionMode::Unordered,
            other => return Err(JsError::new(&format!("unknown mode: {other}"))),
        };
        let start = js_sys::Date::now();

        let r = r as usize;
        let (count, selections): (u64, Vec<Vec<String>>) = match mode {
            SelectionMode::Ordered => (
                combi_math::permutation_count(self.set.len() as u64, r as u64),
                arrangements(&self.set, r)
                    .iter()
                    .map(|a| a.ids().iter().map(|s| s.to_string()).collect())
                    .collect(),
            ),
            SelectionMode::Unordered => (
                combi_math::combination_count(self.set.len() as u64, r as u64),
                groupings(&self.set, r)
                    .iter()
                    .map(|g| g.ids().iter().map(|s| s.to_string()).collect())
                    .collect(),
            ),
        };

        let walltime_ms = js_sys::Date::now() - start;

        let payload = serde_json::json!({
            "mode": mode,
            "total": self.set.len(),
            "select": r,
            "count": count,
            "selections": selections,
            "walltime_ms": walltime_ms,
        });
        Ok(payload.to_string())
    }
}
