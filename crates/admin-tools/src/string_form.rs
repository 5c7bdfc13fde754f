//! Text rendering used when values of different types must compare equal.
//!
//! Several helpers (`extract_item_at_index`, `replace_matching`,
//! `has_leading_zero`) compare values by their *string form* rather than by
//! native equality. The number `1` and the string `"1"` therefore count as
//! the same key. This cross-type equality is intentional.
//!
//! Rendering rules:
//!
//! - strings render as themselves (no quotes)
//! - numbers, booleans and chars use their `Display` output
//! - `None` and JSON `null` render as the empty string
//! - other JSON values (arrays, objects) render as compact JSON

use serde_json::Value;
use std::borrow::Cow;

/// A value that can be rendered as plain text for cross-type comparison.
///
/// # Examples
///
/// ```
/// use admin_tools::StringForm;
/// use serde_json::json;
///
/// assert_eq!(1.string_form(), "1");
/// assert_eq!("1".string_form(), "1");
/// assert_eq!(json!("1").string_form(), "1");
/// assert_eq!(json!(null).string_form(), "");
/// ```
pub trait StringForm {
    /// Render the value as plain text.
    fn string_form(&self) -> Cow<'_, str>;
}

impl StringForm for str {
    fn string_form(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl StringForm for String {
    fn string_form(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: StringForm + ?Sized> StringForm for &T {
    fn string_form(&self) -> Cow<'_, str> {
        (**self).string_form()
    }
}

impl<T: StringForm> StringForm for Option<T> {
    fn string_form(&self) -> Cow<'_, str> {
        match self {
            Some(inner) => inner.string_form(),
            None => Cow::Borrowed(""),
        }
    }
}

impl StringForm for Value {
    fn string_form(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Null => Cow::Borrowed(""),
            // Numbers and booleans print bare; containers print as compact JSON.
            other => Cow::Owned(other.to_string()),
        }
    }
}

macro_rules! display_string_form {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StringForm for $ty {
                fn string_form(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_string_form!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Whether `item` has the same string form as any of `candidates`.
pub(crate) fn contains_string_form<T, C>(candidates: &[C], item: &T) -> bool
where
    T: StringForm + ?Sized,
    C: StringForm,
{
    let needle = item.string_form();
    candidates.iter().any(|c| c.string_form() == needle)
}
