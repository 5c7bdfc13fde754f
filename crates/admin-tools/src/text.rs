//! Plain string helpers.

/// Replace every occurrence of `find` in `text` with `replacement`.
///
/// ```
/// use admin_tools::replace_text;
///
/// assert_eq!(replace_text("a,b,c", ",", ";"), "a;b;c");
/// ```
pub fn replace_text(text: &str, find: &str, replacement: &str) -> String {
    text.replace(find, replacement)
}
