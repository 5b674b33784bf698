//! Ordered enumeration: all r-arrangements of a pool.

use combi_math::permutation_count;
use combi_model::{Arrangement, Item, ItemSet};

/// Enumerate every ordered r-selection of the pool, without repetition.
///
/// At each position the remaining items are tried first-to-last, which
/// yields exactly `permutation_count(n, r)` arrangements in deterministic
/// lexicographic-by-original-index order. `r == 0` yields the single
/// empty arrangement; `r > n` yields nothing.
pub fn arrangements(set: &ItemSet, r: usize) -> Vec<Arrangement> {
    let n = set.len();
    if r > n {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(permutation_count(n as u64, r as u64) as usize);
    let mut picked: Vec<Item> = Vec::with_capacity(r);
    let mut used = vec![false; n];
    rec_arrange(set.items(), r, &mut picked, &mut used, &mut out);
    out
}

fn rec_arrange(
    items: &[Item],
    r: usize,
    picked: &mut Vec<Item>,
    used: &mut [bool],
    out: &mut Vec<Arrangement>,
) {
    if picked.len() == r {
        out.push(Arrangement::new(picked.clone()));
        return;
    }

    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        picked.push(items[i].clone());

        rec_arrange(items, r, picked, used, out);

        picked.pop();
        used[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_strings(results: &[Arrangement]) -> Vec<String> {
        results.iter().map(|a| a.ids().concat()).collect()
    }

    #[test]
    fn test_two_of_three_in_order() {
        let set = ItemSet::alphabetic(3);
        let got = id_strings(&arrangements(&set, 2));
        assert_eq!(got, vec!["AB", "AC", "BA", "BC", "CA", "CB"]);
    }

    #[test]
    fn test_full_length_count() {
        let set = ItemSet::alphabetic(4);
        assert_eq!(arrangements(&set, 4).len(), 24);
    }

    #[test]
    fn test_empty_selection() {
        let set = ItemSet::alphabetic(3);
        let got = arrangements(&set, 0);
        assert_eq!(got.len(), 1);
        assert!(got[0].is_empty());
    }

    #[test]
    fn test_oversized_selection() {
        let set = ItemSet::alphabetic(3);
        assert!(arrangements(&set, 5).is_empty());
    }

    #[test]
    fn test_all_distinct() {
        let set = ItemSet::alphabetic(4);
        let mut got = id_strings(&arrangements(&set, 2));
        assert_eq!(got.len(), 12);
        got.sort();
        got.dedup();
        assert_eq!(got.len(), 12);
    }
}
