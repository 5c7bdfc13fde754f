//! `admintools` CLI — run the admin-tools helpers from a shell.
//!
//! Values are passed as arguments; lists and rows are read as JSON from
//! stdin. Results go to stdout, logs and progress to stderr.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a single value
//! admintools check email jane.doe@example.com
//! admintools check int 42
//!
//! # Convert, printing `false` on failure
//! admintools convert float 3.5
//!
//! # Count occurrences, most frequent first
//! echo '["7A","7B","7A"]' | admintools count
//!
//! # Items common to / missing from two lists
//! echo '[[1,2,3],[2,3,4]]' | admintools common
//! echo '[[1,2,3],[2,3,4]]' | admintools missing
//!
//! # Column operations on rows
//! echo '[[1,"Ann"],[2,"Bob"]]' | admintools column --index 1
//! echo '[[1,"Ann"],[2,"Bob"]]' | admintools drop-column --index 0
//!
//! # Keep or remove listed items
//! echo '["a","b","c"]' | admintools filter --mode keep --criteria a,c
//!
//! # Ask a yes/no question (exit status 0 = yes, 1 = no)
//! admintools ask "Upload the timetable?"
//! ```

mod logging;

use admin_tools::{
    check_action, deduplicate, difference, extract_column, filter_items_with_progress,
    has_leading_zero, increment_counts, intersection_values, is_email_valid,
    is_email_valid_loose, is_float, is_int, print_mapping, print_sequence, remove_column,
    sort_counts, to_float, to_int, Counts, FilterMode, SortOrder, StringForm,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "admintools",
    version,
    about = "Validation, list and count helpers for admin data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a value against a format, printing true or false
    Check {
        #[arg(value_enum)]
        kind: CheckKind,
        value: String,
    },
    /// Convert a value to a number, printing false if it does not parse
    Convert {
        #[arg(value_enum)]
        kind: NumberKind,
        value: String,
    },
    /// Print the distinct items of a JSON array (stdin)
    Dedupe,
    /// Count the items of a JSON array (stdin)
    Count {
        /// Sort direction: descending or ascending
        #[arg(long, default_value_t = SortOrder::Descending)]
        order: SortOrder,
        /// Emit a JSON array of {key, count} objects instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Items of the first list that are also in the second (stdin: [a, b])
    Common,
    /// Items of the first list that are not in the second (stdin: [a, b])
    Missing,
    /// Extract one column from a JSON array of rows (stdin)
    Column {
        /// Zero-based column index
        #[arg(long)]
        index: usize,
    },
    /// Remove one column from a JSON array of rows (stdin)
    DropColumn {
        /// Zero-based column index
        #[arg(long)]
        index: usize,
    },
    /// Keep or remove the items of a JSON array (stdin) that are in a list
    Filter {
        /// remove (r), keep (k), or anything else to pass through
        #[arg(long, default_value = "remove")]
        mode: String,
        /// Comma-separated items to match against
        #[arg(long, value_delimiter = ',')]
        criteria: Vec<String>,
    },
    /// Print a JSON mapping or sequence (stdin) for inspection
    Inspect,
    /// Ask a yes/no question; exit status is 0 for yes and 1 for no
    Ask {
        /// Question to show before "y or n:"
        message: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CheckKind {
    Email,
    EmailLoose,
    Float,
    Int,
    LeadZero,
}

#[derive(Clone, Copy, ValueEnum)]
enum NumberKind {
    Float,
    Int,
}

/// One row of `count --json` output.
#[derive(Serialize)]
struct CountRow {
    key: String,
    count: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.debug);

    match cli.command {
        Commands::Check { kind, value } => {
            let ok = match kind {
                CheckKind::Email => is_email_valid(&value),
                CheckKind::EmailLoose => is_email_valid_loose(&value),
                CheckKind::Float => is_float(&value),
                CheckKind::Int => is_int(&value),
                CheckKind::LeadZero => has_leading_zero(&value),
            };
            println!("{ok}");
        }
        Commands::Convert { kind, value } => {
            let converted = match kind {
                NumberKind::Float => to_float(&value).map(|n| n.to_string()),
                NumberKind::Int => to_int(&value).map(|n| n.to_string()),
            };
            println!("{}", converted.unwrap_or_else(|| "false".to_string()));
        }
        Commands::Dedupe => {
            let items = string_forms(array(&read_json()?, "dedupe input")?);
            let mut unique = deduplicate(&items);
            // Library order is unspecified; sort for stable output.
            unique.sort();
            print_json(&unique)?;
        }
        Commands::Count { order, json } => {
            let items = string_forms(array(&read_json()?, "count input")?);
            let mut counts = Counts::new();
            increment_counts(&mut counts, items);
            debug!("counted {} distinct keys", counts.len());

            let ranked = sort_counts(&counts, order);
            if json {
                let rows: Vec<CountRow> = ranked
                    .into_iter()
                    .map(|(key, count)| CountRow { key, count })
                    .collect();
                print_json(&rows)?;
            } else {
                for (key, count) in ranked {
                    println!("{key}\t{count}");
                }
            }
        }
        Commands::Common => {
            let (a, b) = pair(read_json()?)?;
            match intersection_values(&a, &b) {
                Some(common) => print_json(&common)?,
                None => println!("false"),
            }
        }
        Commands::Missing => {
            let (source, target) = pair(read_json()?)?;
            match (source.as_array(), target.as_array()) {
                (Some(source), Some(target)) => print_json(&difference(source, target))?,
                _ => println!("false"),
            }
        }
        Commands::Column { index } => {
            let rows = rows_of(&read_json()?, index)?;
            print_json(&extract_column(&rows, index))?;
        }
        Commands::DropColumn { index } => {
            let rows = rows_of(&read_json()?, index)?;
            print_json(&remove_column(&rows, index))?;
        }
        Commands::Filter { mode, criteria } => {
            let items = string_forms(array(&read_json()?, "filter input")?);
            let Ok(mode) = mode.parse::<FilterMode>();
            let kept = filter_items_with_progress(&items, &criteria, mode, &mut io::stderr())
                .context("Failed to write filter progress")?;
            print_json(&kept)?;
        }
        Commands::Inspect => {
            let value = read_json()?;
            if value.is_object() {
                print_mapping(&value)?;
            } else {
                print_sequence(&value)?;
            }
        }
        Commands::Ask { message } => {
            let yes = check_action(&message).context("Failed to read an answer")?;
            process::exit(if yes { 0 } else { 1 });
        }
    }

    Ok(())
}

fn read_json() -> Result<Value> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read from stdin")?;
    debug!("read {} bytes from stdin", buf.len());
    serde_json::from_str(&buf).context("Failed to parse stdin as JSON")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    match value.as_array() {
        Some(items) => Ok(items),
        None => bail!("{what} must be a JSON array"),
    }
}

/// Items are compared by string form, so `1` and `"1"` count as the same.
fn string_forms(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.string_form().into_owned())
        .collect()
}

/// Split a two-element JSON array into its operands.
fn pair(value: Value) -> Result<(Value, Value)> {
    match value {
        Value::Array(mut items) if items.len() == 2 => {
            let second = items.pop().unwrap_or(Value::Null);
            let first = items.pop().unwrap_or(Value::Null);
            Ok((first, second))
        }
        _ => bail!("input must be a JSON array of exactly two lists: [first, second]"),
    }
}

/// Read an array of rows, checking every row is wide enough for `index`.
fn rows_of(value: &Value, index: usize) -> Result<Vec<Vec<Value>>> {
    let mut rows = Vec::new();
    for (n, row) in array(value, "rows input")?.iter().enumerate() {
        let Some(cells) = row.as_array() else {
            bail!("row {n} is not a JSON array");
        };
        if cells.len() <= index {
            bail!(
                "row {n} has {} columns; column {index} does not exist",
                cells.len()
            );
        }
        rows.push(cells.clone());
    }
    Ok(rows)
}
