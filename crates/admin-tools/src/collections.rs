//! Reshape flat lists and lists of rows.
//!
//! Nothing here mutates its input: every function returns a fresh vector.
//!
//! Two failure styles are used:
//!
//! - Expected bad input (an index that is not a number or is out of range,
//!   a non-list where a list is required) returns `None`.
//! - Rows that are shorter than the column being addressed are a shape
//!   violation by the caller and panic with an index-out-of-bounds error.
//!   These cases are listed under `# Panics` on each function.

use crate::error::Result;
use crate::string_form::StringForm;
use crate::validate::is_int;
use log::debug;
use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;
use std::io::{self, Write};
use std::str::FromStr;

/// Fetch the element at `index`, where `index` may be any value whose string
/// form is an integer (`1`, `"1"`, `" 1 "`).
///
/// Returns `None` when the index is not an integer, is negative, or is past
/// the end of `outer`. Never panics.
///
/// # Examples
///
/// ```
/// use admin_tools::extract_item_at_index;
///
/// let data = [10, 20, 30];
/// assert_eq!(extract_item_at_index(&data, "1"), Some(&20));
/// assert_eq!(extract_item_at_index(&data, 5), None);
/// assert_eq!(extract_item_at_index(&data, "x"), None);
/// ```
pub fn extract_item_at_index<T, I: StringForm>(outer: &[T], index: I) -> Option<&T> {
    let text = index.string_form();
    if !is_int(&text) {
        return None;
    }
    let position: i64 = text.trim().parse().ok()?;
    let position = usize::try_from(position).ok()?;
    outer.get(position)
}

/// Return the items of the single inner list held by `outer`.
///
/// Only `outer[0]` is read; any further rows are ignored.
///
/// # Panics
///
/// Panics if `outer` is empty.
pub fn flatten_single<T: Clone>(outer: &[Vec<T>]) -> Vec<T> {
    outer[0].clone()
}

/// Concatenate the rows of `outer` into one list.
///
/// A single row is returned unchanged. Otherwise the length of the *second*
/// row is used as the width for every row: longer rows are truncated to that
/// width and shorter rows panic. Callers are expected to pass rows of equal
/// length.
///
/// ```
/// use admin_tools::flatten_all;
///
/// let rows = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
/// assert_eq!(flatten_all(&rows), vec![1, 2, 3, 4, 5, 6]);
/// ```
///
/// # Panics
///
/// Panics if any row is shorter than `outer[1]`.
pub fn flatten_all<T: Clone>(outer: &[Vec<T>]) -> Vec<T> {
    if outer.len() == 1 {
        return outer[0].clone();
    }
    let Some(second) = outer.get(1) else {
        return Vec::new();
    };

    // TODO: use each row's own length once callers confirm ragged rows are expected.
    let width = second.len();
    let mut flat = Vec::with_capacity(outer.len() * width);
    for row in outer {
        flat.extend_from_slice(&row[..width]);
    }
    flat
}

/// Pull the value at `column` out of every row, in row order.
///
/// # Panics
///
/// Panics if any row has no element at `column`.
pub fn extract_column<T: Clone>(rows: &[Vec<T>], column: usize) -> Vec<T> {
    rows.iter().map(|row| row[column].clone()).collect()
}

/// Keep the rows whose value at `column` is one of `allowed`.
///
/// Row order is preserved.
///
/// ```
/// use admin_tools::filter_rows_by_column;
///
/// let rows = vec![vec!["ann", "7A"], vec!["bob", "8C"], vec!["cy", "7B"]];
/// let found = filter_rows_by_column(&rows, &["7A", "7B"], 1);
/// assert_eq!(found, vec![vec!["ann", "7A"], vec!["cy", "7B"]]);
/// ```
///
/// # Panics
///
/// Panics if any row has no element at `column`.
pub fn filter_rows_by_column<T: Clone + PartialEq>(
    rows: &[Vec<T>],
    allowed: &[T],
    column: usize,
) -> Vec<Vec<T>> {
    rows.iter()
        .filter(|row| allowed.contains(&row[column]))
        .cloned()
        .collect()
}

/// Items of `source` that do not appear in `target`.
///
/// Order and duplicates from `source` are preserved.
pub fn difference<T: Clone + PartialEq>(source: &[T], target: &[T]) -> Vec<T> {
    source
        .iter()
        .filter(|item| !target.contains(*item))
        .cloned()
        .collect()
}

/// Items of `a` that also appear in `b`, in the order of `a`.
///
/// ```
/// use admin_tools::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// ```
pub fn intersection<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| b.contains(*item)).cloned().collect()
}

/// [`intersection`] for loosely typed JSON input.
///
/// Returns `None` unless both values are JSON arrays. Strings are rejected
/// rather than being split into characters.
///
/// ```
/// use admin_tools::intersection_values;
/// use serde_json::json;
///
/// assert_eq!(
///     intersection_values(&json!([1, 2, 3]), &json!([2, 3, 4])),
///     Some(vec![json!(2), json!(3)])
/// );
/// assert_eq!(intersection_values(&json!("abc"), &json!([1])), None);
/// ```
pub fn intersection_values(a: &Value, b: &Value) -> Option<Vec<Value>> {
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => Some(intersection(a, b)),
        _ => None,
    }
}

/// Copy `rows` with the element at `column` deleted from every row.
///
/// The input is left untouched.
///
/// ```
/// use admin_tools::remove_column;
///
/// let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// assert_eq!(remove_column(&rows, 1), vec![vec![1, 3], vec![4, 6]]);
/// assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5, 6]]);
/// ```
///
/// # Panics
///
/// Panics if any row has no element at `column`.
pub fn remove_column<T: Clone>(rows: &[Vec<T>], column: usize) -> Vec<Vec<T>> {
    rows.iter()
        .map(|row| {
            let mut row = row.clone();
            row.remove(column);
            row
        })
        .collect()
}

/// What [`filter_items`] does with elements found in the criteria list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Drop elements that appear in the criteria.
    Remove,
    /// Drop elements that do not appear in the criteria.
    Keep,
    /// Drop nothing.
    PassThrough,
}

impl FilterMode {
    fn drops(self, found: bool) -> bool {
        match self {
            FilterMode::Remove => found,
            FilterMode::Keep => !found,
            FilterMode::PassThrough => false,
        }
    }
}

/// `"r"`/`"remove"` and `"k"`/`"keep"` (any case) select a mode; every
/// other string is a pass-through, so parsing never fails.
impl FromStr for FilterMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "r" | "remove" => FilterMode::Remove,
            "k" | "keep" => FilterMode::Keep,
            _ => FilterMode::PassThrough,
        })
    }
}

/// Filter a flat list against `criteria`, printing progress to stdout.
///
/// See [`filter_items_with_progress`] for the semantics.
pub fn filter_items<T: Clone + PartialEq>(
    items: &[T],
    criteria: &[T],
    mode: FilterMode,
) -> Result<Vec<T>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    filter_items_with_progress(items, criteria, mode, &mut out)
}

/// Filter a flat list against `criteria`, writing a percent-complete
/// indicator to `progress` as it scans.
///
/// Every qualifying element is dropped, including adjacent duplicates; the
/// input is not modified.
///
/// # Examples
///
/// ```
/// use admin_tools::{filter_items_with_progress, FilterMode};
///
/// let mut progress = Vec::new();
/// let kept = filter_items_with_progress(
///     &["a", "b", "b", "c"],
///     &["b"],
///     FilterMode::Remove,
///     &mut progress,
/// )
/// .unwrap();
/// assert_eq!(kept, vec!["a", "c"]);
/// ```
pub fn filter_items_with_progress<T, W>(
    items: &[T],
    criteria: &[T],
    mode: FilterMode,
    progress: &mut W,
) -> Result<Vec<T>>
where
    T: Clone + PartialEq,
    W: Write,
{
    writeln!(progress, "\nProcessing items")?;

    let total = items.len();
    let mut kept = Vec::with_capacity(total);
    for (n, item) in items.iter().enumerate() {
        let percent = ((n + 1) as f64 / total as f64 * 100.0).round();
        write!(progress, "\rProgress: {percent}%")?;
        progress.flush()?;

        if !mode.drops(criteria.contains(item)) {
            kept.push(item.clone());
        }
    }

    writeln!(progress, "\rFinished processing items")?;
    debug!(
        "filter_items: kept {} of {} items (mode {:?})",
        kept.len(),
        total,
        mode
    );
    Ok(kept)
}

/// One instance of each distinct value in `items`.
///
/// The order of the result is unspecified.
///
/// ```
/// use admin_tools::deduplicate;
///
/// let mut unique = deduplicate(&[1, 2, 2, 3, 1]);
/// unique.sort();
/// assert_eq!(unique, vec![1, 2, 3]);
/// ```
pub fn deduplicate<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    let unique: HashSet<T> = items.iter().cloned().collect();
    unique.into_iter().collect()
}
