//! Unit tests for script loading and command filtering

use dbharness::script::{filter_commands, load_commands};
use std::io::Write;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_create_select_scenario() {
    // "CREATE TABLE t (id INT); -- comment\n\nSELECT * FROM t;" filters to
    // exactly two commands.
    let raw = lines(&["CREATE TABLE t (id INT); -- comment", "", "SELECT * FROM t;"]);
    let commands = filter_commands(&raw, "--");
    assert_eq!(
        commands,
        vec!["CREATE TABLE t (id INT);", "SELECT * FROM t;"]
    );
}

#[test]
fn test_filtering_already_filtered_is_identity() {
    let raw = lines(&[
        "-- full functionality test",
        "CREATE TABLE users (id INT);",
        "",
        "   INSERT INTO users VALUES (1);",
        "DROP TABLE users; -- cleanup",
    ]);

    let once = filter_commands(&raw, "--");
    let twice = filter_commands(&once, "--");
    assert_eq!(once, twice);
}

#[test]
fn test_comments_and_blanks_only_yield_no_commands() {
    let raw = lines(&["-- a", "   ", "", "-- b", "\t"]);
    assert!(filter_commands(&raw, "--").is_empty());
}

#[test]
fn test_no_reordering_or_merging() {
    let raw = lines(&["A;", "-- x", "B;", "", "C;"]);
    assert_eq!(filter_commands(&raw, "--"), vec!["A;", "B;", "C;"]);
}

#[test]
fn test_load_commands_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.sql");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "-- header").unwrap();
    writeln!(file, "CREATE TABLE t (id INT);").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "SELECT * FROM t;").unwrap();
    drop(file);

    let commands = load_commands(&path, "--").unwrap();
    assert_eq!(
        commands,
        vec!["CREATE TABLE t (id INT);", "SELECT * FROM t;"]
    );
}

#[test]
fn test_missing_script_is_a_script_read_error() {
    let err = load_commands(std::path::Path::new("/nonexistent/x.sql"), "--").unwrap_err();
    assert!(matches!(err, dbharness::Error::ScriptRead { .. }));
}
