//! Session driver for the external database process
//!
//! Owns exactly one child process and its I/O streams for the session's
//! lifetime. Commands go in over stdin one line at a time; output comes
//! back as lines on a single merged channel (stderr is pumped into the
//! same channel as stdout). `send` and `read_turn` for a given command run
//! strictly in sequence: the database is single-threaded and
//! line-oriented, so there is never more than one command in flight.

pub mod protocol;

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, Command};
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::models::{Transcript, TranscriptLine, Turn, TurnEnd};
use protocol::{LineClassifier, LineSignal};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The child is live and accepting commands
    Open,

    /// The farewell phrase was observed; the child is on its way out and no
    /// further commands may be sent
    Terminating,

    /// The child has exited (or its output stream closed) and was reaped
    Terminated,
}

/// How a close resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The child exited on its own within the grace period
    Exited,

    /// The grace period elapsed and the child was force-killed
    ForceKilled,
}

/// One live session with the external database process.
///
/// The child handle and both stream handles are exclusively owned here; no
/// other component reads or writes them. The child is spawned with
/// `kill_on_drop`, so every exit path (normal completion, error,
/// interrupt) releases the process.
#[derive(Debug)]
pub struct Session {
    child: Child,
    stdin: Option<ChildStdin>,
    output_rx: mpsc::UnboundedReceiver<String>,
    classifier: LineClassifier,
    state: SessionState,
    transcript: Transcript,
}

impl Session {
    /// Launch the database executable and wire up its streams.
    ///
    /// stderr is merged into the same line channel as stdout, so the
    /// transcript sees one interleaved stream, the way a terminal would.
    pub async fn open(config: &HarnessConfig) -> Result<Self> {
        let path = &config.db_path;
        if !path.exists() {
            return Err(Error::Launch {
                path: path.clone(),
                reason: "executable not found".to_string(),
            });
        }

        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::Launch {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let stdin = child.stdin.take().ok_or_else(|| Error::Launch {
            path: path.clone(),
            reason: "could not capture stdin".to_string(),
        })?;
        let stdout = child.stdout.take().ok_or_else(|| Error::Launch {
            path: path.clone(),
            reason: "could not capture stdout".to_string(),
        })?;
        let stderr = child.stderr.take().ok_or_else(|| Error::Launch {
            path: path.clone(),
            reason: "could not capture stderr".to_string(),
        })?;

        let (tx, output_rx) = mpsc::unbounded_channel();
        spawn_line_pump(stdout, tx.clone());
        spawn_line_pump(stderr, tx);

        debug!("session opened: {}", path.display());

        Ok(Self {
            child,
            stdin: Some(stdin),
            output_rx,
            classifier: LineClassifier::new(&config.prompt_marker, &config.farewell_phrase),
            state: SessionState::Open,
            transcript: Transcript::new(),
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Consume the session, keeping only its transcript
    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }

    /// Write one command line to the child and flush it immediately.
    ///
    /// The database blocks until it sees a complete, flushed line, so any
    /// write buffering here would deadlock the whole protocol. Fails fast
    /// with a protocol error once the session has left the open state.
    pub async fn send(&mut self, command: &str) -> Result<()> {
        if self.state != SessionState::Open {
            return Err(Error::Protocol {
                operation: format!("send '{command}'"),
            });
        }

        let stdin = self.stdin.as_mut().ok_or_else(|| Error::Write {
            reason: "stdin already closed".to_string(),
        })?;

        debug!("send: {command}");
        let write = async {
            stdin.write_all(command.as_bytes()).await?;
            stdin.write_all(b"\n").await?;
            stdin.flush().await
        };
        write.await.map_err(|e| Error::Write {
            reason: e.to_string(),
        })
    }

    /// Read output lines until a terminal signal, appending each line to
    /// the transcript and handing it to `observer` as it arrives so
    /// interactive callers can display it live.
    ///
    /// Reading is the only suspension point in the harness; completion is
    /// decided solely by the prompt marker, the farewell phrase, or EOF.
    pub async fn read_turn<F>(&mut self, mut observer: F) -> Result<Turn>
    where
        F: FnMut(&TranscriptLine),
    {
        let mut lines = Vec::new();

        loop {
            let Some(raw) = self.output_rx.recv().await else {
                // Both stream pumps are done: the process closed its output.
                // An empty turn here is legitimate; callers decide what it means.
                self.state = SessionState::Terminated;
                debug!("output stream EOF, session terminated");
                return Ok(Turn::new(lines, TurnEnd::Eof));
            };

            let text = raw.trim_end_matches('\r').to_string();
            let signal = self.classifier.classify(&text);

            let line = TranscriptLine::new(text, self.transcript.len());
            observer(&line);
            self.transcript.push(line.clone());
            lines.push(line);

            match signal {
                LineSignal::Output => continue,
                LineSignal::Prompt => return Ok(Turn::new(lines, TurnEnd::Prompt)),
                LineSignal::Farewell => {
                    self.state = SessionState::Terminating;
                    debug!("farewell observed, session terminating");
                    return Ok(Turn::new(lines, TurnEnd::Farewell));
                }
            }
        }
    }

    /// Wait up to `grace` for the child to exit on its own, then force-kill
    /// and reap it. Bounds worst-case hang time regardless of how the child
    /// misbehaves. Idempotent: closing a terminated session is a no-op.
    pub async fn close(&mut self, grace: Duration) -> Result<CloseOutcome> {
        // Dropping stdin gives the child an EOF, its cue to exit.
        self.stdin.take();

        match timeout(grace, self.child.wait()).await {
            Ok(status) => {
                let status = status?;
                debug!("child exited: {status}");
                self.state = SessionState::Terminated;
                Ok(CloseOutcome::Exited)
            }
            Err(_) => {
                warn!("child did not exit within {grace:?}, killing");
                self.child.start_kill().map_err(Error::Io)?;
                self.child.wait().await?;
                self.state = SessionState::Terminated;
                Ok(CloseOutcome::ForceKilled)
            }
        }
    }
}

/// Forward lines from one child stream into the shared output channel.
///
/// The task ends at stream EOF and drops its sender; once both pumps are
/// done the receiver sees the channel close, which is the session's EOF
/// signal.
fn spawn_line_pump<R>(stream: R, tx: mpsc::UnboundedSender<String>)
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).is_err() {
                        // Receiver dropped; the session is gone.
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    debug!("stream read error, treating as EOF: {e}");
                    break;
                }
            }
        }
    });
}
