//! Integration tests for the combi engine.

use combi::{
    Explorer, ItemSet, SelectionMode, arrangements, combination_count, factorial, groupings,
    load_material_str, permutation_count,
};

fn ids(strings: &[&str]) -> Vec<String> {
    strings.iter().map(|s| s.to_string()).collect()
}

#[test]
fn counts_match_enumeration_lengths() {
    for n in 0..=6usize {
        let set = ItemSet::alphabetic(n);
        for r in 0..=n {
            assert_eq!(
                arrangements(&set, r).len() as u64,
                permutation_count(n as u64, r as u64),
                "arrangements n={n} r={r}"
            );
            assert_eq!(
                groupings(&set, r).len() as u64,
                combination_count(n as u64, r as u64),
                "groupings n={n} r={r}"
            );
        }
    }
}

#[test]
fn permutations_are_groupings_times_orderings() {
    for n in 0..=8u64 {
        for r in 0..=n {
            assert_eq!(
                permutation_count(n, r),
                combination_count(n, r) * factorial(r),
                "n={n} r={r}"
            );
        }
    }
}

#[test]
fn oversized_selection_counts_zero_everywhere() {
    assert_eq!(permutation_count(3, 5), 0);
    assert_eq!(combination_count(3, 5), 0);

    let set = ItemSet::alphabetic(3);
    assert!(arrangements(&set, 5).is_empty());
    assert!(groupings(&set, 5).is_empty());
}

#[test]
fn four_choose_two_is_exactly_the_six_pairs() {
    let set = ItemSet::alphabetic(4);

    let pairs: Vec<Vec<String>> = groupings(&set, 2)
        .iter()
        .map(|g| g.ids().iter().map(|s| s.to_string()).collect())
        .collect();
    assert_eq!(
        pairs,
        vec![
            ids(&["A", "B"]),
            ids(&["A", "C"]),
            ids(&["A", "D"]),
            ids(&["B", "C"]),
            ids(&["B", "D"]),
            ids(&["C", "D"]),
        ]
    );

    let mut ordered: Vec<String> = arrangements(&set, 2)
        .iter()
        .map(|a| a.ids().concat())
        .collect();
    assert_eq!(ordered.len(), 12);
    ordered.sort();
    ordered.dedup();
    assert_eq!(ordered.len(), 12, "ordered pairs must all be distinct");
    for pair in &ordered {
        let (a, b) = pair.split_at(1);
        assert_ne!(a, b, "no self-pairs");
    }
}

#[test]
fn enumeration_is_deterministic() {
    let set = ItemSet::alphabetic(5);
    assert_eq!(arrangements(&set, 3), arrangements(&set, 3));
    assert_eq!(groupings(&set, 3), groupings(&set, 3));
}

#[test]
fn five_choose_three_scenario() {
    let set = ItemSet::alphabetic(5);
    let explorer = Explorer::new(set);

    assert_eq!(explorer.count(SelectionMode::Ordered, 3), 60);
    assert_eq!(explorer.count(SelectionMode::Unordered, 3), 10);

    let groups = explorer.groupings(3);
    assert_eq!(groups.first().unwrap().ids(), vec!["A", "B", "C"]);
    assert_eq!(groups.last().unwrap().ids(), vec!["C", "D", "E"]);
}

#[test]
fn explorer_dispatch_agrees_with_direct_calls() {
    let set = ItemSet::alphabetic(4);
    let explorer = Explorer::new(set.clone());
    for r in 0..=4usize {
        assert_eq!(
            explorer.count(SelectionMode::Ordered, r),
            arrangements(&set, r).len() as u64
        );
        assert_eq!(
            explorer.count(SelectionMode::Unordered, r),
            groupings(&set, r).len() as u64
        );
        assert!(explorer.selection(r).is_satisfiable());
    }
}

#[test]
fn explorer_from_spec_runs_the_material() {
    let spec = load_material_str(
        r#"{
            "name": "relay order",
            "items": [
                {"id": "ren", "label": "Ren"},
                {"id": "mia", "label": "Mia"},
                {"id": "kai", "label": "Kai"},
                {"id": "sol", "label": "Sol"}
            ],
            "select": 2,
            "mode": "ordered"
        }"#,
    )
    .unwrap();

    let explorer = Explorer::from_spec(&spec);
    assert_eq!(explorer.count(spec.mode, spec.select), 12);
    let lineups = explorer.arrangements(spec.select);
    assert_eq!(lineups[0].ids(), vec!["ren", "mia"]);
}
