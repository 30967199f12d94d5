//! dbharness - a test harness for the TrivialDB interactive SQL shell
//!
//! Drives an already-built database binary through its line-oriented
//! prompt: commands go in over stdin, output lines come back over a merged
//! stdout/stderr channel, and the transcript is graded into a pass/fail
//! verdict.
//!
//! ## Module Organization
//!
//! - [`session`] - the core session driver and its turn-framing protocol
//! - [`script`] - script loading and command filtering
//! - [`verdict`] - transcript grading
//! - [`modes`] - batch, single-command, and interactive controllers
//! - [`models`] - transcript data structures
//! - [`config`] - harness configuration
//! - [`mod@error`] - error types and Result alias
//!
//! ## Session protocol
//!
//! One command is in flight at a time. After each send, the driver reads
//! output lines until it observes one of three terminal signals: a line
//! containing the prompt marker (ready for the next command), a line
//! containing the farewell phrase (the database is exiting), or stream
//! EOF. Turn completion is never decided by a line count or a delay.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod models;
pub mod modes;
pub mod script;
pub mod session;
pub mod verdict;

// Re-exports for common types
pub use config::HarnessConfig;
pub use error::{Error, Result};
pub use models::{Transcript, TranscriptLine, Turn, TurnEnd};
pub use session::{CloseOutcome, Session, SessionState};
pub use verdict::Verdict;

/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
