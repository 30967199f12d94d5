//! Turn Model
//!
//! One turn is the complete output the database produces in response to a
//! single command. A turn only ends on one of the three terminal signals;
//! never on a fixed line count or a fixed delay.

use serde::{Deserialize, Serialize};

use super::TranscriptLine;

/// The terminal signal that ended a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEnd {
    /// A line containing the prompt marker was observed; the database is
    /// ready for the next command
    Prompt,

    /// A line containing the farewell phrase was observed; the database is
    /// shutting down voluntarily
    Farewell,

    /// The output stream reached end-of-file; the process closed its output
    Eof,
}

/// The ordered output lines produced in response to exactly one command
#[derive(Debug, Clone)]
pub struct Turn {
    /// Lines in arrival order; a prompt or farewell line is included
    pub lines: Vec<TranscriptLine>,

    /// How the turn ended
    pub end: TurnEnd,
}

impl Turn {
    pub fn new(lines: Vec<TranscriptLine>, end: TurnEnd) -> Self {
        Self { lines, end }
    }

    /// True if the process produced no output at all for this turn
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True if the database is still ready for more commands after this turn
    pub fn prompt_ready(&self) -> bool {
        self.end == TurnEnd::Prompt
    }
}
