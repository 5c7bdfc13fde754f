//! Remember the order of a list of keys and restore it later.
//!
//! `HashMap` iteration order is arbitrary. When a report must list keys in a
//! fixed order (year levels, house names), build an order index from the
//! desired sequence once, then use [`to_ordered_pairs`] to read a mapping
//! back out in that order.

use std::collections::HashMap;
use std::hash::Hash;

/// Map each item to its zero-based position in `items`.
///
/// If an item occurs more than once, the position of its last occurrence
/// wins.
///
/// ```
/// use admin_tools::build_order_index;
///
/// let index = build_order_index(&["a", "b", "c"]);
/// assert_eq!(index["a"], 0);
/// assert_eq!(index["c"], 2);
/// ```
pub fn build_order_index<K: Clone + Eq + Hash>(items: &[K]) -> HashMap<K, usize> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| (item.clone(), position))
        .collect()
}

/// Read `map` out as `(key, value)` pairs in the order given by `order`.
///
/// Keys in `order` that are missing from `map` are skipped, and keys in
/// `map` that are not listed in `order` are left out.
///
/// ```
/// use admin_tools::to_ordered_pairs;
/// use std::collections::HashMap;
///
/// let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// assert_eq!(to_ordered_pairs(&map, &["c", "a"]), vec![("c", 3), ("a", 1)]);
/// ```
pub fn to_ordered_pairs<K, V>(map: &HashMap<K, V>, order: &[K]) -> Vec<(K, V)>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    order
        .iter()
        .filter_map(|key| map.get(key).map(|value| (key.clone(), value.clone())))
        .collect()
}
