//! Unit tests for verdict aggregation

use std::time::Duration;

use dbharness::models::{Transcript, TranscriptLine};
use dbharness::verdict::evaluate;

fn transcript_of(texts: &[&str]) -> Transcript {
    let mut t = Transcript::new();
    for (i, text) in texts.iter().enumerate() {
        t.push(TranscriptLine::new(*text, i));
    }
    t
}

#[test]
fn test_two_pass_lines_zero_errors() {
    let transcript = transcript_of(&[
        "CREATE TABLE ok",
        "rename check PASSED",
        "trivial_db> ",
        "constraint check PASSED",
    ]);

    let verdict = evaluate(&transcript, Duration::from_secs(2), "PASSED", "[Error]", &[]);
    assert_eq!(verdict.passed, 2);
    assert_eq!(verdict.errors, 0);
    assert_eq!(verdict.total_lines, 4);
    assert!(verdict.clean());
    assert!(verdict.overall_pass());
}

#[test]
fn test_adding_error_line_flips_clean_only() {
    let transcript = transcript_of(&[
        "rename check PASSED",
        "constraint check PASSED",
        "[Error] duplicate key",
    ]);

    let verdict = evaluate(&transcript, Duration::from_secs(2), "PASSED", "[Error]", &[]);
    assert_eq!(verdict.passed, 2);
    assert_eq!(verdict.errors, 1);
    assert!(!verdict.clean());
    assert!(!verdict.overall_pass());
}

#[test]
fn test_required_substrings_all_must_appear() {
    let transcript = transcript_of(&[
        "ALTER TABLE users RENAME COLUMN name TO full_name;",
        "query ok",
    ]);
    let required = vec!["RENAME COLUMN".to_string(), "full_name".to_string()];

    let verdict = evaluate(
        &transcript,
        Duration::from_secs(1),
        "PASSED",
        "[Error]",
        &required,
    );
    assert!(verdict.overall_pass());

    let required = vec!["RENAME COLUMN".to_string(), "does_not_appear".to_string()];
    let verdict = evaluate(
        &transcript,
        Duration::from_secs(1),
        "PASSED",
        "[Error]",
        &required,
    );
    assert!(verdict.clean());
    assert!(!verdict.overall_pass());
    assert_eq!(verdict.missing_required, vec!["does_not_appear".to_string()]);
}

#[test]
fn test_verdict_is_pure_and_repeatable() {
    let transcript = transcript_of(&["PASSED", "[Error] x"]);
    let a = evaluate(&transcript, Duration::ZERO, "PASSED", "[Error]", &[]);
    let b = evaluate(&transcript, Duration::ZERO, "PASSED", "[Error]", &[]);
    assert_eq!(a.passed, b.passed);
    assert_eq!(a.errors, b.errors);
    assert_eq!(a.total_lines, b.total_lines);
}
