//! Fruit pairs from a material spec file: unordered selection demo.

use combi::{Explorer, export_results, load_material_str};

const SPEC: &str = r##"{
    "name": "fruit pairs",
    "items": [
        {"id": "apple", "label": "Apple", "color": "#e74c3c"},
        {"id": "banana", "label": "Banana", "color": "#f1c40f"},
        {"id": "grape", "label": "Grape", "color": "#8e44ad"},
        {"id": "melon", "label": "Melon", "color": "#2ecc71"}
    ],
    "select": 2,
    "mode": "unordered"
}"##;

fn main() {
    let spec = load_material_str(SPEC).expect("valid material spec");
    let explorer = Explorer::from_spec(&spec);

    let count = explorer.count(spec.mode, spec.select);
    println!(
        "{}: choose {} of {} fruits, order irrelevant: {count} pairs\n",
        spec.name,
        spec.select,
        explorer.set().len()
    );

    for grouping in explorer.groupings(spec.select) {
        let names: Vec<&str> = grouping.items().iter().map(|it| it.label.as_str()).collect();
        println!("  {{{}}}", names.join(", "));
    }

    println!("\nUI payload:\n{}", export_results(&spec).expect("export"));
}
