//! Integration tests for the `admintools` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to run each subcommand
//! through the actual binary, piping JSON on stdin and checking stdout,
//! stderr, and exit status.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn admintools() -> Command {
    Command::cargo_bin("admintools").unwrap()
}

/// Run a subcommand with `stdin` and parse its stdout as JSON.
fn json_output(args: &[&str], stdin: &str) -> serde_json::Value {
    let output = admintools()
        .args(args)
        .write_stdin(stdin)
        .output()
        .expect("command should run");
    assert!(output.status.success(), "{args:?} should succeed");
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// check / convert
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_email_prints_true_or_false() {
    admintools()
        .args(["check", "email", "jane.doe@example.com"])
        .assert()
        .success()
        .stdout("true\n");

    admintools()
        .args(["check", "email", "jo@ab.com"])
        .assert()
        .success()
        .stdout("false\n");

    admintools()
        .args(["check", "email-loose", "jo@ab.com"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn check_numbers_and_leading_zero() {
    admintools()
        .args(["check", "float", "3.14"])
        .assert()
        .stdout("true\n");
    admintools()
        .args(["check", "int", "3.14"])
        .assert()
        .stdout("false\n");
    admintools()
        .args(["check", "lead-zero", "0042"])
        .assert()
        .stdout("true\n");
}

#[test]
fn check_unknown_kind_fails() {
    admintools()
        .args(["check", "phone", "555"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn convert_prints_number_or_false() {
    admintools()
        .args(["convert", "int", "42"])
        .assert()
        .success()
        .stdout("42\n");
    admintools()
        .args(["convert", "float", "2.5"])
        .assert()
        .success()
        .stdout("2.5\n");
    admintools()
        .args(["convert", "int", "forty"])
        .assert()
        .success()
        .stdout("false\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// List commands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dedupe_outputs_sorted_distinct_string_forms() {
    let out = json_output(&["dedupe"], r#"["b", "a", "b", 1, "1"]"#);
    assert_eq!(out, serde_json::json!(["1", "a", "b"]));
}

#[test]
fn count_ranks_by_frequency_then_key() {
    admintools()
        .arg("count")
        .write_stdin(r#"["x", "y", "z", "x", "z"]"#)
        .assert()
        .success()
        .stdout("x\t2\nz\t2\ny\t1\n");
}

#[test]
fn count_ascending_as_json() {
    let out = json_output(&["count", "--order", "ascending", "--json"], r#"["x", "y", "x"]"#);
    assert_eq!(
        out,
        serde_json::json!([{"key": "y", "count": 1}, {"key": "x", "count": 2}])
    );
}

#[test]
fn count_rejects_unknown_order() {
    admintools()
        .args(["count", "--order", "sideways"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));
}

#[test]
fn common_and_missing() {
    let input = "[[1, 2, 3, 2], [2, 3, 4]]";
    assert_eq!(json_output(&["common"], input), serde_json::json!([2, 3, 2]));
    assert_eq!(json_output(&["missing"], input), serde_json::json!([1]));
}

#[test]
fn common_with_non_list_operand_prints_false() {
    admintools()
        .arg("common")
        .write_stdin(r#"["abc", [1]]"#)
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn common_requires_two_operands() {
    admintools()
        .arg("common")
        .write_stdin("[[1]]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly two lists"));
}

#[test]
fn filter_keep_and_remove() {
    let input = r#"["a", "b", "b", "c"]"#;
    assert_eq!(
        json_output(&["filter", "--mode", "remove", "--criteria", "b"], input),
        serde_json::json!(["a", "c"])
    );
    assert_eq!(
        json_output(&["filter", "--mode", "keep", "--criteria", "a,c"], input),
        serde_json::json!(["a", "c"])
    );
    assert_eq!(
        json_output(&["filter", "--mode", "other", "--criteria", "a"], input),
        serde_json::json!(["a", "b", "b", "c"])
    );
}

#[test]
fn filter_progress_goes_to_stderr() {
    admintools()
        .args(["filter", "--criteria", "a"])
        .write_stdin(r#"["a", "b"]"#)
        .assert()
        .success()
        .stdout("[\"b\"]\n")
        .stderr(predicate::str::contains("Progress: 100%"))
        .stderr(predicate::str::contains("Finished processing items"));
}

#[test]
fn list_commands_reject_invalid_json() {
    admintools()
        .arg("dedupe")
        .write_stdin("not json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse stdin as JSON"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Row commands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn column_and_drop_column() {
    let rows = r#"[[1001, "Ann", "7A"], [1002, "Bob", "8C"]]"#;
    assert_eq!(
        json_output(&["column", "--index", "1"], rows),
        serde_json::json!(["Ann", "Bob"])
    );
    assert_eq!(
        json_output(&["drop-column", "--index", "1"], rows),
        serde_json::json!([[1001, "7A"], [1002, "8C"]])
    );
}

#[test]
fn column_on_short_row_is_an_error_not_a_panic() {
    admintools()
        .args(["column", "--index", "2"])
        .write_stdin(r#"[[1, 2, 3], [4]]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 1 has 1 columns"));
}

// ─────────────────────────────────────────────────────────────────────────────
// inspect / ask
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn inspect_mapping_and_sequence() {
    admintools()
        .arg("inspect")
        .write_stdin(r#"{"7A": 28, "7B": 30}"#)
        .assert()
        .success()
        .stdout("7A 28\n7B 30\n");

    admintools()
        .arg("inspect")
        .write_stdin(r#"["ann", "bob"]"#)
        .assert()
        .success()
        .stdout("Item 0\nann\nItem 1\nbob\n");

    admintools()
        .arg("inspect")
        .write_stdin(r#""just text""#)
        .assert()
        .success()
        .stdout("Passed object is not a list\n");
}

#[test]
fn ask_retries_until_valid_answer() {
    admintools()
        .args(["ask", "Upload the timetable?"])
        .write_stdin("maybe\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Upload the timetable? y or n: "))
        .stdout(predicate::str::contains("That is not a valid answer!"));
}

#[test]
fn ask_no_exits_with_status_one() {
    admintools()
        .args(["ask", "Delete the report?"])
        .write_stdin("N\n")
        .assert()
        .code(1);
}

#[test]
fn ask_with_closed_input_fails() {
    admintools()
        .args(["ask", "Continue?"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read an answer"));
}
