//! Unordered enumeration: all r-groupings of a pool.

use combi_math::combination_count;
use combi_model::{Grouping, Item, ItemSet};

/// Enumerate every unordered r-subset of the pool.
///
/// Each recursive step may only choose from items strictly after the
/// previously chosen position, so every subset appears exactly once and
/// the output holds `combination_count(n, r)` groupings in deterministic
/// lexicographic-by-original-index order, each in the pool's original
/// relative order. `r == 0` yields the single empty grouping; `r > n`
/// yields nothing.
pub fn groupings(set: &ItemSet, r: usize) -> Vec<Grouping> {
    let n = set.len();
    if r > n {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(combination_count(n as u64, r as u64) as usize);
    let mut picked: Vec<Item> = Vec::with_capacity(r);
    rec_group(set.items(), r, 0, &mut picked, &mut out);
    out
}

fn rec_group(
    items: &[Item],
    r: usize,
    start: usize,
    picked: &mut Vec<Item>,
    out: &mut Vec<Grouping>,
) {
    if picked.len() == r {
        out.push(Grouping::new(picked.clone()));
        return;
    }

    // Not enough items left to fill the grouping.
    let need = r - picked.len();
    if items.len() - start < need {
        return;
    }

    for i in start..items.len() {
        picked.push(items[i].clone());
        rec_group(items, r, i + 1, picked, out);
        picked.pop();
    }
}
