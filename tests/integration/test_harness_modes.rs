//! End-to-end tests for the batch and single-command controllers.

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use dbharness::{modes, Error, HarnessConfig};

const ECHO_DB: &str = r#"#!/bin/sh
while IFS= read -r line; do
  case "$line" in
    EXIT*) echo "good bye"; exit 0 ;;
    FAIL*) echo "[Error] forced failure"; echo "trivial_db> " ;;
    *) echo "ok: $line"; echo "PASSED"; echo "trivial_db> " ;;
  esac
done
"#;

fn write_fake_db(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake_db.sh");
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn write_script(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("script.sql");
    std::fs::write(&path, content).unwrap();
    path
}

fn config_for(db_path: PathBuf, script_path: PathBuf) -> HarnessConfig {
    HarnessConfig {
        db_path,
        script_path,
        ..HarnessConfig::default()
    }
}

#[tokio::test]
async fn test_batch_clean_script_passes() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = write_fake_db(dir.path(), ECHO_DB);
    let script = write_script(
        dir.path(),
        "-- full run\nCREATE TABLE t (id INT); -- comment\n\nSELECT * FROM t;\nEXIT;\n",
    );

    let verdict = modes::batch::run(&config_for(db, script)).await?;
    // Two real commands, each answered with one PASSED line; EXIT answers
    // with the farewell.
    assert_eq!(verdict.passed, 2);
    assert_eq!(verdict.errors, 0);
    assert!(verdict.overall_pass());
    Ok(())
}

#[tokio::test]
async fn test_batch_error_marker_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let db = write_fake_db(dir.path(), ECHO_DB);
    let script = write_script(dir.path(), "CREATE TABLE t (id INT);\nFAIL now\nEXIT;\n");

    let verdict = modes::batch::run(&config_for(db, script)).await.unwrap();
    assert_eq!(verdict.errors, 1);
    assert_eq!(verdict.passed, 1);
    assert!(!verdict.clean());
    assert!(!verdict.overall_pass());
}

#[tokio::test]
async fn test_batch_required_markers_are_enforced() {
    let dir = tempfile::tempdir().unwrap();
    let db = write_fake_db(dir.path(), ECHO_DB);
    let script = write_script(dir.path(), "RENAME COLUMN name TO full_name;\nEXIT;\n");

    let mut config = config_for(db, script);
    config.required_markers = vec!["RENAME COLUMN".to_string(), "full_name".to_string()];
    let verdict = modes::batch::run(&config).await.unwrap();
    assert!(verdict.overall_pass());

    config.required_markers.push("does_not_appear".to_string());
    let verdict = modes::batch::run(&config).await.unwrap();
    assert!(verdict.clean());
    assert!(!verdict.overall_pass());
    assert_eq!(verdict.missing_required, vec!["does_not_appear".to_string()]);
}

#[tokio::test]
async fn test_batch_comments_only_script_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let db = write_fake_db(dir.path(), ECHO_DB);
    let script = write_script(dir.path(), "-- only\n\n-- comments\n");

    let verdict = modes::batch::run(&config_for(db, script)).await.unwrap();
    assert_eq!(verdict.total_lines, 0);
    assert_eq!(verdict.passed, 0);
    assert!(verdict.overall_pass());
}

#[tokio::test]
async fn test_batch_missing_script_is_a_script_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let db = write_fake_db(dir.path(), ECHO_DB);
    let config = config_for(db, PathBuf::from("/nonexistent/script.sql"));

    let err = modes::batch::run(&config).await.unwrap_err();
    assert!(matches!(err, Error::ScriptRead { .. }));
}

#[tokio::test]
async fn test_batch_run_timeout_is_a_distinct_failure() {
    // This database swallows the first command and then stalls forever
    // without ever prompting again.
    let dir = tempfile::tempdir().unwrap();
    let stalled = "#!/bin/sh\nwhile IFS= read -r line; do sleep 600; done\n";
    let db = write_fake_db(dir.path(), stalled);
    let script = write_script(dir.path(), "SELECT 1;\n");

    let mut config = config_for(db, script);
    config.run_timeout_secs = 1;

    let started = Instant::now();
    let err = modes::batch::run(&config).await.unwrap_err();
    let waited = started.elapsed();

    assert!(err.is_timeout());
    assert!(
        waited < Duration::from_secs(5),
        "timeout fired after {waited:?}, expected about 1s"
    );
}

#[tokio::test]
async fn test_single_command_appends_exit() {
    let dir = tempfile::tempdir().unwrap();
    let db = write_fake_db(dir.path(), ECHO_DB);
    let config = config_for(db, PathBuf::from("unused.sql"));

    let transcript = modes::single::run(&config, "RENAME COLUMN old TO new;")
        .await
        .unwrap();

    // First turn: the command's own output up to the prompt. Second turn:
    // the implicit exit, observing the termination phrase.
    assert!(transcript.contains("ok: RENAME COLUMN old TO new;"));
    assert!(transcript.contains("good bye"));
    let last = transcript.lines().last().unwrap();
    assert!(last.text.to_lowercase().contains("good bye"));
}

#[tokio::test]
async fn test_single_command_survives_immediate_exit() {
    // A database that quits on the first command; the implicit exit must
    // not be sent into the dead session.
    let dir = tempfile::tempdir().unwrap();
    let quitter = "#!/bin/sh\nIFS= read -r line\necho \"good bye\"\nexit 0\n";
    let db = write_fake_db(dir.path(), quitter);
    let config = config_for(db, PathBuf::from("unused.sql"));

    let transcript = modes::single::run(&config, "SELECT 1;").await.unwrap();
    assert!(transcript.contains("good bye"));
}
