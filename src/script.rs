//! Script loading and command filtering
//!
//! A script is a plain text file with one command per line. Filtering
//! strips comments, trims each line, drops anything left empty, and keeps
//! the rest in order. No merging, no reordering, no validation of the
//! command text: whether a line is valid SQL is the database's problem.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a script file into its raw lines
pub fn load_script(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::ScriptRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

/// Filter raw script lines into the ordered command sequence.
///
/// Everything from the comment marker to the end of the line is dropped,
/// which covers both full-line comments and trailing ones. Pure and
/// idempotent: filtering already-filtered output is a no-op.
pub fn filter_commands(lines: &[String], comment_marker: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| strip_comment(line, comment_marker).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a script and filter it in one step
pub fn load_commands(path: &Path, comment_marker: &str) -> Result<Vec<String>> {
    let raw = load_script(path)?;
    let commands = filter_commands(&raw, comment_marker);
    debug!(
        "loaded {} commands from {} ({} raw lines)",
        commands.len(),
        path.display(),
        raw.len()
    );
    Ok(commands)
}

fn strip_comment<'a>(line: &'a str, comment_marker: &str) -> &'a str {
    match line.find(comment_marker) {
        Some(idx) => &line[..idx],
        None => line,
    }
}
