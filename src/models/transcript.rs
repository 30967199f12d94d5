//! Transcript Model
//!
//! The full ordered log of every output line observed during a session.
//! Append-only with a single writer (the session driver); the verdict
//! aggregator and reports only ever read it.

use super::TranscriptLine;

/// Ordered concatenation of all turns produced during a session
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line; returns its transcript position
    pub fn push(&mut self, line: TranscriptLine) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// Total number of lines observed so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in arrival order
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// The last `n` lines (fewer if the transcript is shorter)
    pub fn tail(&self, n: usize) -> &[TranscriptLine] {
        let start = self.lines.len().saturating_sub(n);
        &self.lines[start..]
    }

    /// True if the given literal substring occurs on any line
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}
