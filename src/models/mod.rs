//! Data structures shared across the harness
//!
//! - [`TranscriptLine`] - one line of database output
//! - [`Turn`] / [`TurnEnd`] - the output produced in response to one command
//! - [`Transcript`] - the append-only log of all turns in a session

pub mod line;
pub mod transcript;
pub mod turn;

pub use line::TranscriptLine;
pub use transcript::Transcript;
pub use turn::{Turn, TurnEnd};
