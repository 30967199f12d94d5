//! Verdict aggregation
//!
//! Scans a finalized transcript for the configured pass and error markers
//! and reduces it to counts plus one overall boolean. Pure: nothing here
//! touches the session or mutates the transcript.

use std::time::Duration;

use crate::models::Transcript;

/// Derived, read-only pass/fail summary of a session transcript
#[derive(Debug, Clone)]
pub struct Verdict {
    /// Number of lines containing the pass marker
    pub passed: usize,

    /// Number of lines containing the error marker
    pub errors: usize,

    /// Total number of transcript lines
    pub total_lines: usize,

    /// Wall-clock time the session took
    pub elapsed: Duration,

    /// Required substrings that never appeared anywhere in the transcript
    pub missing_required: Vec<String>,
}

impl Verdict {
    /// No error markers were observed
    pub fn clean(&self) -> bool {
        self.errors == 0
    }

    /// Clean, and every required substring appeared
    pub fn overall_pass(&self) -> bool {
        self.clean() && self.missing_required.is_empty()
    }
}

/// Compute the verdict for a finalized transcript.
///
/// Marker matches are literal substring containment per line. Required
/// substrings are checked against the whole transcript, each independently
/// and order-insensitively.
pub fn evaluate(
    transcript: &Transcript,
    elapsed: Duration,
    pass_marker: &str,
    error_marker: &str,
    required: &[String],
) -> Verdict {
    let mut passed = 0;
    let mut errors = 0;

    for line in transcript.lines() {
        if line.contains(pass_marker) {
            passed += 1;
        }
        if line.contains(error_marker) {
            errors += 1;
        }
    }

    let missing_required = required
        .iter()
        .filter(|needle| !transcript.contains(needle.as_str()))
        .cloned()
        .collect();

    Verdict {
        passed,
        errors,
        total_lines: transcript.len(),
        elapsed,
        missing_required,
    }
}
