//! Frequency tables: seed keys, count occurrences, rank by count.

use crate::error::AdminError;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A frequency table from key to number of occurrences.
pub type Counts<K> = HashMap<K, u64>;

/// Direction for [`sort_counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Highest count first.
    #[default]
    Descending,
    /// Lowest count first.
    Ascending,
}

impl FromStr for SortOrder {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "descending" => Ok(SortOrder::Descending),
            "ascending" => Ok(SortOrder::Ascending),
            other => Err(AdminError::InvalidSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Descending => f.write_str("descending"),
            SortOrder::Ascending => f.write_str("ascending"),
        }
    }
}

/// Add every distinct value of `source` that is not yet a key of `map`,
/// with `seed` as its value. Existing keys keep their values.
///
/// Returns the same map for chaining.
///
/// ```
/// use admin_tools::seed_missing_keys;
/// use std::collections::HashMap;
///
/// let mut map = HashMap::from([("ann", 3)]);
/// seed_missing_keys(&["ann", "bob", "bob"], &mut map, 0);
/// assert_eq!(map, HashMap::from([("ann", 3), ("bob", 0)]));
/// ```
pub fn seed_missing_keys<'a, K, V>(
    source: &[K],
    map: &'a mut HashMap<K, V>,
    seed: V,
) -> &'a mut HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    let distinct: HashSet<&K> = source.iter().collect();
    let mut added = 0usize;
    for key in distinct {
        if !map.contains_key(key) {
            map.insert(key.clone(), seed.clone());
            added += 1;
        }
    }
    debug!("seed_missing_keys: added {added} keys");
    map
}

/// Count each item of `items` into `counts`, inserting unseen keys at 1.
///
/// Returns the same table for chaining.
///
/// ```
/// use admin_tools::{increment_counts, Counts};
///
/// let mut counts = Counts::new();
/// increment_counts(&mut counts, ["x", "y", "x"]);
/// assert_eq!(counts["x"], 2);
/// assert_eq!(counts["y"], 1);
/// ```
pub fn increment_counts<K, I>(counts: &mut Counts<K>, items: I) -> &mut Counts<K>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Rank a table by value, breaking ties by key ascending so the output is
/// deterministic.
///
/// ```
/// use admin_tools::{sort_counts, SortOrder};
/// use std::collections::HashMap;
///
/// let counts = HashMap::from([("x", 2), ("y", 1), ("z", 2)]);
/// assert_eq!(
///     sort_counts(&counts, SortOrder::Descending),
///     vec![("x", 2), ("z", 2), ("y", 1)]
/// );
/// assert_eq!(
///     sort_counts(&counts, SortOrder::Ascending),
///     vec![("y", 1), ("x", 2), ("z", 2)]
/// );
/// ```
pub fn sort_counts<K, V>(map: &HashMap<K, V>, order: SortOrder) -> Vec<(K, V)>
where
    K: Clone + Ord,
    V: Clone + Ord,
{
    let mut pairs: Vec<(K, V)> = map
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    pairs.sort_by(|(ka, va), (kb, vb)| {
        let by_value = match order {
            SortOrder::Descending => vb.cmp(va),
            SortOrder::Ascending => va.cmp(vb),
        };
        by_value.then_with(|| ka.cmp(kb))
    });
    pairs
}

/// A new table with the same keys as `map` and every value set to zero.
///
/// `map` itself is not modified.
pub fn reset_values_to_zero<K, V>(map: &HashMap<K, V>) -> Counts<K>
where
    K: Clone + Eq + Hash,
{
    map.keys().map(|key| (key.clone(), 0)).collect()
}

/// A new table mapping each of `keys` to zero.
///
/// ```
/// use admin_tools::build_zeroed_mapping;
///
/// let table = build_zeroed_mapping(&["7A", "7B"]);
/// assert_eq!(table["7A"], 0);
/// assert_eq!(table.len(), 2);
/// ```
pub fn build_zeroed_mapping<K: Clone + Eq + Hash>(keys: &[K]) -> Counts<K> {
    keys.iter().map(|key| (key.clone(), 0)).collect()
}
