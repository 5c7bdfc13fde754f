//! Error types for admin-tools operations.
//!
//! Only console I/O and argument parsing can fail. Bad *data* (an unparsable
//! number, an out-of-range index) is reported through `Option` by the
//! individual helpers instead.

use thiserror::Error;

/// Errors that can occur while talking to the console or parsing options.
#[derive(Error, Debug)]
pub enum AdminError {
    /// Reading from or writing to the console failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end-of-file while a prompt was waiting for an
    /// answer.
    #[error("input closed before a valid answer was given")]
    InputClosed,

    /// A sort order string other than `descending` or `ascending`.
    #[error("invalid sort order: '{0}' (expected 'descending' or 'ascending')")]
    InvalidSortOrder(String),
}

/// Convenience alias used throughout admin-tools.
pub type Result<T> = std::result::Result<T, AdminError>;
