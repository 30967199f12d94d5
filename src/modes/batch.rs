//! Batch mode: replay a script, grade the transcript
//!
//! Loader → filter → one session driving every command in order → close
//! with the configured grace period → verdict → printed report. The whole
//! drive is held under a single hard wall-clock ceiling; exceeding it is
//! its own failure mode, distinct from an unclean verdict.

use std::time::Instant;

use tokio::time::timeout;

use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::models::Transcript;
use crate::script;
use crate::session::{CloseOutcome, Session, SessionState};
use crate::verdict::{self, Verdict};

use super::{print_header, print_line, print_section};

/// Run the full script against the database and report the verdict.
///
/// Returns the verdict; callers map `overall_pass` to the process exit
/// status.
pub async fn run(config: &HarnessConfig) -> Result<Verdict> {
    let commands = script::load_commands(&config.script_path, &config.comment_marker)?;

    print_header("TrivialDB script run");
    println!("script:   {}", config.script_path.display());
    println!("database: {}", config.db_path.display());
    println!("commands: {}", commands.len());

    print_section("Output");
    let started = Instant::now();

    let transcript = match timeout(config.run_timeout(), drive(config, &commands)).await {
        Ok(result) => result?,
        Err(_) => {
            // The timed-out future is dropped here, and the session's child
            // handle goes with it (kill_on_drop), so nothing is orphaned.
            return Err(Error::Timeout {
                what: "batch run".to_string(),
                limit: config.run_timeout(),
            });
        }
    };

    let elapsed = started.elapsed();
    let verdict = verdict::evaluate(
        &transcript,
        elapsed,
        &config.pass_marker,
        &config.error_marker,
        &config.required_markers,
    );

    report(&transcript, &verdict);
    Ok(verdict)
}

/// Drive every command through one session and return the transcript.
///
/// Stops early as soon as a turn leaves the session in a non-open state.
/// A write failure aborts the command loop but still closes and reports;
/// whatever transcript exists is worth grading.
async fn drive(config: &HarnessConfig, commands: &[String]) -> Result<Transcript> {
    let mut session = Session::open(config).await?;

    for command in commands {
        if session.state() != SessionState::Open {
            debug!("session left open state, stopping early");
            break;
        }

        if let Err(e) = session.send(command).await {
            warn!("aborting command loop: {e}");
            break;
        }

        session.read_turn(print_line).await?;
    }

    if session.close(config.close_grace()).await? == CloseOutcome::ForceKilled {
        warn!("database ignored shutdown, force-killed after grace period");
    }

    Ok(session.into_transcript())
}

fn report(transcript: &Transcript, verdict: &Verdict) {
    print_section("Results");
    println!("elapsed:      {:.2} s", verdict.elapsed.as_secs_f64());
    println!("passed:       {}", verdict.passed);
    println!("errors:       {}", verdict.errors);
    println!("output lines: {}", verdict.total_lines);
    if !verdict.missing_required.is_empty() {
        println!("missing required markers:");
        for marker in &verdict.missing_required {
            println!("  - {marker}");
        }
    }

    print_section("Last output");
    for line in transcript.tail(20) {
        println!("{}", line.text);
    }

    if verdict.overall_pass() {
        print_header("RESULT: PASS");
    } else {
        print_header("RESULT: FAIL");
    }
}
