//! Transcript Line Model
//!
//! Represents a single line of database output, trailing newline stripped,
//! with its position in the transcript and the time it was received.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line of output from the driven database process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// The text content, without the trailing newline
    pub text: String,

    /// Zero-based position in the transcript
    pub line_number: usize,

    /// When this line was received
    pub timestamp: DateTime<Utc>,
}

impl TranscriptLine {
    /// Create a new transcript line
    pub fn new(text: impl Into<String>, line_number: usize) -> Self {
        Self {
            text: text.into(),
            line_number,
            timestamp: Utc::now(),
        }
    }

    /// True if the given literal substring occurs in this line
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}
