//! Console questions that keep asking until they get a usable answer.
//!
//! Each prompt comes in two forms: a generic one over any `BufRead`/`Write`
//! pair (used by tests and by callers with their own streams) and a console
//! one bound to stdin/stdout.
//!
//! Invalid answers are never an error; the question is simply asked again.
//! The only failures are broken console streams and end of input.

use crate::error::{AdminError, Result};
use log::trace;
use std::io::{self, BufRead, Write};

const INVALID_ANSWER: &str = "\nThat is not a valid answer! Please try again.";
const REPEAT_PROMPT: &str = "\nDo you want to prepare another file? y/n --> ";
const REPEAT_HELP_PROMPT: &str = "\nDo you want to view another help file entry? y/n --> ";

/// Ask a yes/no question until the answer is `y` or `n` (any case).
///
/// Writes `prompt` to `output`, reads one line from `input`, and returns
/// `true` for yes or `false` for no. Anything else (including an empty line
/// or surrounding spaces) prints a notice and asks again, without limit.
///
/// # Errors
///
/// Returns [`AdminError::InputClosed`] if `input` reaches end of file, or
/// [`AdminError::Io`] if either stream fails.
///
/// # Examples
///
/// ```
/// use admin_tools::ask_yes_no;
///
/// let mut input = "maybe\nY\n".as_bytes();
/// let mut output = Vec::new();
/// assert!(ask_yes_no(&mut input, &mut output, "Continue? ").unwrap());
///
/// let shown = String::from_utf8(output).unwrap();
/// assert_eq!(shown.matches("Continue? ").count(), 2);
/// ```
pub fn ask_yes_no<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AdminError::InputClosed);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        match answer.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {
                trace!("rejected prompt answer {answer:?}");
                writeln!(output, "{INVALID_ANSWER}")?;
            }
        }
    }
}

/// Ask on the console whether to perform the action described by `message`.
///
/// The prompt shown is `"{message} y or n: "`.
pub fn check_action(message: &str) -> Result<bool> {
    ask_on_console(&format!("{message} y or n: "))
}

/// Ask on the console whether to prepare another file.
pub fn check_repeat() -> Result<bool> {
    ask_on_console(REPEAT_PROMPT)
}

/// Ask on the console whether to view another help entry.
pub fn check_repeat_help() -> Result<bool> {
    ask_on_console(REPEAT_HELP_PROMPT)
}

fn ask_on_console(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask_yes_no(&mut stdin.lock(), &mut stdout.lock(), prompt)
}

/// List the files needed to process `name` and wait for the user to press
/// enter.
///
/// With `sort` set, the files are shown in alphabetical order; the caller's
/// slice is not reordered.
///
/// # Errors
///
/// Returns [`AdminError::InputClosed`] if `input` ends before a line is read.
///
/// ```
/// use admin_tools::prompt::confirm_files_with;
///
/// let mut input = "\n".as_bytes();
/// let mut output = Vec::new();
/// confirm_files_with(&mut input, &mut output, "timetable", &["rooms.csv", "classes.csv"], true)
///     .unwrap();
///
/// let shown = String::from_utf8(output).unwrap();
/// assert!(shown.find("classes.csv").unwrap() < shown.find("rooms.csv").unwrap());
/// assert!(shown.contains("these files are"));
/// ```
pub fn confirm_files_with<R, W, S>(
    input: &mut R,
    output: &mut W,
    name: &str,
    files: &[S],
    sort: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    let mut listed: Vec<&str> = files.iter().map(|file| file.as_ref()).collect();
    if sort {
        listed.sort_unstable();
    }
    let wording = if listed.len() == 1 {
        "this file is"
    } else {
        "these files are"
    };

    writeln!(
        output,
        "\nTo process the {name} the following files are required:\n"
    )?;
    for file in &listed {
        writeln!(output, "{file}")?;
    }
    writeln!(
        output,
        "\nPlease make sure that {wording} in the required folder and are updated correctly before proceeding."
    )?;
    write!(
        output,
        "\nPress the enter key to continue processing the {name} file --> "
    )?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AdminError::InputClosed);
    }
    Ok(())
}

/// [`confirm_files_with`] on the console.
pub fn confirm_files<S: AsRef<str>>(name: &str, files: &[S], sort: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    confirm_files_with(&mut stdin.lock(), &mut stdout.lock(), name, files, sort)
}
