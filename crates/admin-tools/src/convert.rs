//! Coerce and remap values.
//!
//! Conversions never fail loudly: a value that cannot be converted comes
//! back as `None`, and callers must check for it before using the result.

use crate::string_form::{contains_string_form, StringForm};
use crate::validate::{is_float, is_int};

/// Which side of a membership test gets replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Matching {
    /// Replace items found among the candidates; pass the rest through.
    #[default]
    Matching,
    /// Replace items *not* found among the candidates; pass matches through.
    NonMatching,
}

impl Matching {
    /// Whether an item with the given membership should be replaced.
    fn replaces(self, found: bool) -> bool {
        match self {
            Matching::Matching => found,
            Matching::NonMatching => !found,
        }
    }
}

impl From<bool> for Matching {
    fn from(matching: bool) -> Self {
        if matching {
            Matching::Matching
        } else {
            Matching::NonMatching
        }
    }
}

/// Parse `value` as an `f64`, or `None` if it is not a number.
///
/// ```
/// use admin_tools::to_float;
///
/// assert_eq!(to_float("2.5"), Some(2.5));
/// assert_eq!(to_float("two"), None);
/// ```
pub fn to_float(value: &str) -> Option<f64> {
    if is_float(value) {
        value.trim().parse().ok()
    } else {
        None
    }
}

/// Parse `value` as an `i64`, or `None` if it is not an integer.
///
/// ```
/// use admin_tools::to_int;
///
/// assert_eq!(to_int("42"), Some(42));
/// assert_eq!(to_int("4.2"), None);
/// ```
pub fn to_int(value: &str) -> Option<i64> {
    if is_int(value) {
        value.trim().parse().ok()
    } else {
        None
    }
}

/// Swap `item` for `replacement` depending on whether it appears in
/// `candidates`.
///
/// Membership is decided by comparing string forms, so `1` matches `"1"`.
/// With [`Matching::Matching`] a found item is replaced and everything else
/// is returned unchanged; [`Matching::NonMatching`] inverts that.
///
/// # Examples
///
/// ```
/// use admin_tools::{replace_matching, Matching};
///
/// let withdrawn = ["1002", "1005"];
/// assert_eq!(replace_matching(1002, &withdrawn, 0, Matching::Matching), 0);
/// assert_eq!(replace_matching(1003, &withdrawn, 0, Matching::Matching), 1003);
/// assert_eq!(replace_matching(1003, &withdrawn, 0, Matching::NonMatching), 0);
/// ```
pub fn replace_matching<T, C>(item: T, candidates: &[C], replacement: T, matching: Matching) -> T
where
    T: StringForm,
    C: StringForm,
{
    if matching.replaces(contains_string_form(candidates, &item)) {
        replacement
    } else {
        item
    }
}

/// Mark `item` as missing (`None`) depending on whether it appears in
/// `candidates`.
///
/// This is [`replace_matching`] with a fixed "missing" sentinel, typically
/// used to flag rows for removal later.
///
/// ```
/// use admin_tools::{missing_if_matching, Matching};
///
/// assert_eq!(missing_if_matching("N/A", &["N/A", "-"], Matching::Matching), None);
/// assert_eq!(missing_if_matching("12", &["N/A", "-"], Matching::Matching), Some("12"));
/// ```
pub fn missing_if_matching<T, C>(item: T, candidates: &[C], matching: Matching) -> Option<T>
where
    T: StringForm,
    C: StringForm,
{
    if matching.replaces(contains_string_form(candidates, &item)) {
        None
    } else {
        Some(item)
    }
}

/// Freeze each row into an immutable, fixed-size record.
///
/// Row order and the order and count of each row's elements are preserved.
/// Useful when handing rows to a writer that expects one record per line.
pub fn rows_to_records<T: Clone>(rows: &[Vec<T>]) -> Vec<Box<[T]>> {
    rows.iter().map(|row| row.clone().into_boxed_slice()).collect()
}
