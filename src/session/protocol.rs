//! Turn framing over the database's unstructured text output
//!
//! The database signals readiness with a fixed prompt substring and
//! voluntary shutdown with a fixed farewell phrase. This module is the
//! only place those signals are recognized: every output line is
//! classified exactly once, and the session driver acts on the result.
//! Only the two configured markers (plus stream EOF, handled by the
//! driver) are terminal signals: ordinary output that happens to contain
//! words like "exit" does not end a turn.

/// Classification of a single output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSignal {
    /// Ordinary output; keep reading
    Output,

    /// The line contains the prompt marker; the turn is complete and the
    /// database is ready for the next command
    Prompt,

    /// The line contains the farewell phrase; the turn is complete and the
    /// database is shutting down
    Farewell,
}

/// Recognizes the two terminal line signals of the session protocol
#[derive(Debug, Clone)]
pub struct LineClassifier {
    prompt_marker: String,
    farewell_lower: String,
}

impl LineClassifier {
    /// Create a classifier for the given markers. The farewell phrase is
    /// matched case-insensitively, the prompt marker exactly.
    pub fn new(prompt_marker: &str, farewell_phrase: &str) -> Self {
        Self {
            prompt_marker: prompt_marker.to_string(),
            farewell_lower: farewell_phrase.to_lowercase(),
        }
    }

    /// Classify one output line.
    ///
    /// The farewell check runs first: a line matching both markers means
    /// the database is exiting, and treating it as a ready-prompt would
    /// make the driver send a command into a dying process.
    pub fn classify(&self, line: &str) -> LineSignal {
        if line.to_lowercase().contains(&self.farewell_lower) {
            LineSignal::Farewell
        } else if line.contains(&self.prompt_marker) {
            LineSignal::Prompt
        } else {
            LineSignal::Output
        }
    }
}
