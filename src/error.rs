//! Error types and Result alias for dbharness

use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dbharness
///
/// The database's own `[Error]` lines are not represented here: they are
/// ordinary transcript content interpreted by the verdict aggregator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The database executable (or its spawn) failed before a session existed
    #[error("failed to launch '{path}': {reason}")]
    Launch { path: PathBuf, reason: String },

    /// Writing a command to the database process failed (closed pipe, dead child)
    #[error("failed to write to the database process: {reason}")]
    Write { reason: String },

    /// An operation was attempted on a session that has already terminated
    #[error("session closed: {operation} attempted after termination")]
    Protocol { operation: String },

    /// A bounded wait elapsed without the expected event
    #[error("timed out after {limit:?} waiting for {what}")]
    Timeout { what: String, limit: Duration },

    /// The script file could not be read
    #[error("failed to read script '{path}': {reason}")]
    ScriptRead { path: PathBuf, reason: String },

    /// The configuration file could not be parsed
    #[error("failed to parse config '{path}': {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// I/O errors not covered by a more specific variant
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the timeout failure mode, which must not be conflated with
    /// an unclean verdict.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}
