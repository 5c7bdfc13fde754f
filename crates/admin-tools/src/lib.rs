//! # admin-tools
//!
//! Small, independent helpers for admin-style data wrangling: validating
//! input, reshaping lists and rows, counting occurrences, and asking the
//! person at the console simple yes/no questions.
//!
//! Every function takes plain input, performs one transformation, and
//! returns a plain output. Expected failures (a number that does not parse,
//! an index out of range, a non-list where a list was required) come back as
//! `None` rather than as an error; callers check for it before using the
//! result.
//!
//! ## Quick start
//!
//! ```rust
//! use admin_tools::{increment_counts, sort_counts, Counts, SortOrder};
//!
//! let mut counts = Counts::new();
//! increment_counts(&mut counts, ["x", "y", "x", "z", "z"]);
//!
//! let ranked = sort_counts(&counts, SortOrder::Descending);
//! assert_eq!(ranked, vec![("x", 2), ("z", 2), ("y", 1)]);
//! ```
//!
//! ## Modules
//!
//! - [`validate`] — email shape, numeric parseability, leading zeros
//! - [`convert`] — numeric coercion, string-form remapping, row records
//! - [`collections`] — dedupe, filter, flatten, column and set operations
//! - [`ordering`] — remember and restore insertion order of keys
//! - [`counting`] — frequency tables: seed, increment, sort, zero
//! - [`prompt`] — retry-until-valid console questions
//! - [`debug`] — dump mappings and sequences for inspection
//! - [`text`] — string replacement
//! - [`string_form`] — the text rendering used for cross-type comparison
//! - [`error`] — error types for console I/O

pub mod collections;
pub mod convert;
pub mod counting;
pub mod debug;
pub mod error;
pub mod ordering;
pub mod prompt;
pub mod string_form;
pub mod text;
pub mod validate;

pub use collections::{
    deduplicate, difference, extract_column, extract_item_at_index, filter_items,
    filter_items_with_progress, filter_rows_by_column, flatten_all, flatten_single,
    intersection, intersection_values, remove_column, FilterMode,
};
pub use convert::{
    missing_if_matching, replace_matching, rows_to_records, to_float, to_int, Matching,
};
pub use counting::{
    build_zeroed_mapping, increment_counts, reset_values_to_zero, seed_missing_keys,
    sort_counts, Counts, SortOrder,
};
pub use debug::{print_item, print_mapping, print_sequence, write_mapping, write_sequence};
pub use error::{AdminError, Result};
pub use ordering::{build_order_index, to_ordered_pairs};
pub use prompt::{ask_yes_no, check_action, check_repeat, check_repeat_help, confirm_files};
pub use string_form::StringForm;
pub use text::replace_text;
pub use validate::{has_leading_zero, is_email_valid, is_email_valid_loose, is_float, is_int};
