//! Dump mappings and sequences to the console while debugging.
//!
//! The `write_*` functions take JSON values so they can be pointed at
//! whatever was just loaded, and print a short notice instead of failing
//! when the value has the wrong shape. [`write_pairs`] and [`write_items`]
//! are the typed equivalents for data that is already in Rust collections.

use crate::error::Result;
use crate::string_form::StringForm;
use serde_json::Value;
use std::fmt::Display;
use std::io::{self, Write};

const NOT_A_MAPPING: &str = "Passed object is not a dictionary";
const NOT_A_SEQUENCE: &str = "Passed object is not a list";

/// Write one `key value` line per pair.
pub fn write_pairs<W, K, V, I>(out: &mut W, pairs: I) -> Result<()>
where
    W: Write,
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    for (key, value) in pairs {
        writeln!(out, "{key} {value}")?;
    }
    Ok(())
}

/// Write each item as an `Item <index>` header followed by the item.
pub fn write_items<W, T, I>(out: &mut W, items: I) -> Result<()>
where
    W: Write,
    T: Display,
    I: IntoIterator<Item = T>,
{
    for (index, item) in items.into_iter().enumerate() {
        writeln!(out, "Item {index}")?;
        writeln!(out, "{item}")?;
    }
    Ok(())
}

/// Write every key/value pair of a JSON object, or a notice if `value` is
/// not an object.
///
/// ```
/// use admin_tools::write_mapping;
/// use serde_json::json;
///
/// let mut out = Vec::new();
/// write_mapping(&mut out, &json!({"ann": 3, "bob": "absent"})).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "ann 3\nbob absent\n");
/// ```
pub fn write_mapping<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::Object(map) => write_pairs(
            out,
            map.iter().map(|(key, value)| (key, value.string_form())),
        ),
        _ => {
            writeln!(out, "{NOT_A_MAPPING}")?;
            Ok(())
        }
    }
}

/// Write every element of a JSON array with its index, or a notice if
/// `value` is not an array. A string is not treated as a sequence.
///
/// ```
/// use admin_tools::write_sequence;
/// use serde_json::json;
///
/// let mut out = Vec::new();
/// write_sequence(&mut out, &json!("abc")).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Passed object is not a list\n");
/// ```
pub fn write_sequence<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => write_items(out, items.iter().map(|item| item.string_form())),
        _ => {
            writeln!(out, "{NOT_A_SEQUENCE}")?;
            Ok(())
        }
    }
}

/// [`write_mapping`] to stdout.
pub fn print_mapping(value: &Value) -> Result<()> {
    write_mapping(&mut io::stdout().lock(), value)
}

/// [`write_sequence`] to stdout.
pub fn print_sequence(value: &Value) -> Result<()> {
    write_sequence(&mut io::stdout().lock(), value)
}

/// Print a single item on its own line.
pub fn print_item<T: Display + ?Sized>(item: &T) {
    println!("{item}");
}
