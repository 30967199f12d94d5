//! Interactive mode
//!
//! Keeps one session alive across a human-driven read-evaluate loop. Each
//! typed line becomes a command whose turn is streamed to the display as
//! it arrives. A local, case-insensitive `exit` ends the loop without
//! being sent to the database; Ctrl-C force-terminates the session rather
//! than leaving it orphaned.

use std::io::Write as _;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::session::Session;

use super::{print_header, print_line};

/// Run the interactive loop until the user exits or interrupts
pub async fn run(config: &HarnessConfig) -> Result<()> {
    print_header("TrivialDB interactive mode");
    println!("Type SQL commands, one per line.");
    println!("Type 'exit' to quit.");

    let mut session = Session::open(config).await?;

    tokio::select! {
        result = command_loop(&mut session) => {
            result?;
            session.close(config.close_grace()).await?;
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted, terminating session");
            // Zero grace: kill immediately instead of waiting politely.
            session.close(Duration::ZERO).await?;
        }
    }

    Ok(())
}

async fn command_loop(session: &mut Session) -> Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("SQL> ");
        std::io::stdout().flush()?;

        let Some(line) = input.next_line().await? else {
            // stdin closed; treat like a local exit.
            break;
        };

        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("exit") {
            break;
        }

        session.send(command).await?;
        let turn = session.read_turn(print_line).await?;

        if !turn.prompt_ready() {
            println!("(database session ended)");
            break;
        }
    }

    Ok(())
}
