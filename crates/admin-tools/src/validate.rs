//! Format and type predicates for user-supplied text.
//!
//! All validators are total: they return `false` for anything they cannot
//! accept and never panic.

use crate::string_form::StringForm;
use regex::Regex;
use std::sync::LazyLock;

/// Strict email shape: alphanumeric start, text before `@`, at least three
/// characters between `@` and the `.`, and a letter at the end.
static STRICT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9]\S+@\S+[a-zA-Z]\S+[.]\S+[a-zA-Z]").expect("Invalid strict email regex")
});

/// Loose email shape: an `@` followed somewhere later by a `.`.
static LOOSE_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*?@.*?\..*?$").expect("Invalid loose email regex"));

/// Minimum length (in characters) an address must exceed to be considered.
const MIN_EMAIL_CHARS: usize = 2;

/// Check that an email address has a plausible `local@domain.tld` shape.
///
/// The input must be longer than two characters and contain a match for the
/// strict pattern anywhere in the string. Addresses with two or fewer
/// characters between `@` and `.` are rejected (`jo@ab.com` fails); this is
/// a known limitation of the pattern and is kept as-is.
///
/// # Examples
///
/// ```
/// use admin_tools::is_email_valid;
///
/// assert!(is_email_valid("jane.doe@example.com"));
/// assert!(!is_email_valid("jane.doe@x.com"));
/// assert!(!is_email_valid("no-at-sign.com"));
/// ```
pub fn is_email_valid(email: &str) -> bool {
    email.chars().count() > MIN_EMAIL_CHARS && STRICT_EMAIL_REGEX.is_match(email)
}

/// Check that an email address contains an `@` followed later by a `.`.
///
/// Much more permissive than [`is_email_valid`]: `a@b.c` passes.
pub fn is_email_valid_loose(email: &str) -> bool {
    email.chars().count() > MIN_EMAIL_CHARS && LOOSE_EMAIL_REGEX.is_match(email)
}

/// Whether `value` parses as an `f64`.
///
/// Surrounding whitespace is ignored. Anything the standard parser accepts
/// counts, including `inf` and `NaN`.
///
/// ```
/// use admin_tools::is_float;
///
/// assert!(is_float("3.14"));
/// assert!(is_float(" 42 "));
/// assert!(!is_float("abc"));
/// ```
pub fn is_float(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

/// Whether `value` parses as an `i64`.
///
/// Decimal points and out-of-range values both give `false`.
///
/// ```
/// use admin_tools::is_int;
///
/// assert!(is_int("-17"));
/// assert!(!is_int("3.14"));
/// assert!(!is_int("99999999999999999999"));
/// ```
pub fn is_int(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

/// Whether the string form of `value` is empty or starts with `0`.
///
/// An empty (or absent) value counts as having a leading zero so that
/// callers can treat missing identifiers the same way as zero-padded ones.
///
/// ```
/// use admin_tools::has_leading_zero;
///
/// assert!(has_leading_zero("0042"));
/// assert!(has_leading_zero(""));
/// assert!(has_leading_zero(None::<&str>));
/// assert!(!has_leading_zero(42));
/// ```
pub fn has_leading_zero<T: StringForm>(value: T) -> bool {
    let text = value.string_form();
    text.is_empty() || text.starts_with('0')
}
