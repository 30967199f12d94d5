//! Single-command mode
//!
//! Runs exactly one externally supplied command, appends the configured
//! exit command, and prints the full transcript for human inspection. No
//! verdict is computed.

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::models::Transcript;
use crate::session::{Session, SessionState};

use super::print_line;

/// Drive one command (plus the implicit exit) end-to-end.
///
/// Returns the transcript so tests can inspect both turns.
pub async fn run(config: &HarnessConfig, command: &str) -> Result<Transcript> {
    let mut session = Session::open(config).await?;

    session.send(command).await?;
    session.read_turn(print_line).await?;

    // The first turn may already have ended the session (farewell or EOF);
    // only ask for an exit while the database is still listening.
    if session.state() == SessionState::Open {
        session.send(&config.exit_command).await?;
        session.read_turn(print_line).await?;
    }

    session.close(config.close_grace()).await?;
    Ok(session.into_transcript())
}
