//! Harness configuration
//!
//! All knobs the session driver and mode controllers need: where the
//! database binary and default script live, the marker strings that frame
//! the line protocol, and the two timeout ceilings. Everything has a
//! default matching the TrivialDB build layout, so the harness runs with
//! no config file at all.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable naming an explicit config file path
pub const CONFIG_ENV_VAR: &str = "DBHARNESS_CONFIG";

/// Config file looked up in the working directory when the env var is unset
pub const DEFAULT_CONFIG_FILE: &str = "dbharness.toml";

/// Main configuration structure for dbharness
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Path to the database executable, resolved relative to the working directory
    pub db_path: PathBuf,

    /// Default script replayed by batch mode
    pub script_path: PathBuf,

    /// Substring the database emits when it is ready for the next command
    pub prompt_marker: String,

    /// Substring the database emits immediately before a voluntary exit
    /// (matched case-insensitively)
    pub farewell_phrase: String,

    /// Command that asks the database to exit
    pub exit_command: String,

    /// Prefix marking a full-line comment in script files
    pub comment_marker: String,

    /// Substring marking a passing check in the database's output
    pub pass_marker: String,

    /// Substring marking an error in the database's output
    pub error_marker: String,

    /// Literal substrings that must all appear somewhere in the transcript
    /// for an overall pass (used by single-feature verification scripts)
    pub required_markers: Vec<String>,

    /// Seconds to wait for a natural exit before force-terminating the child
    pub close_grace_secs: u64,

    /// Hard ceiling in seconds on an entire batch run
    pub run_timeout_secs: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("build/trivial_db"),
            script_path: PathBuf::from("test_all_features.sql"),
            prompt_marker: "trivial_db>".to_string(),
            farewell_phrase: "good bye".to_string(),
            exit_command: "EXIT;".to_string(),
            comment_marker: "--".to_string(),
            pass_marker: "PASSED".to_string(),
            error_marker: "[Error]".to_string(),
            required_markers: Vec::new(),
            close_grace_secs: 5,
            run_timeout_secs: 30,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from the usual locations.
    ///
    /// Order: path named by `DBHARNESS_CONFIG`, then `./dbharness.toml` if it
    /// exists, otherwise built-in defaults. A file that exists but does not
    /// parse is an error; callers decide whether to fall back.
    pub fn load() -> Result<Self> {
        if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from_file(Path::new(&path));
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::load_from_file(default_path);
        }

        debug!("no config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Load configuration from an explicit TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: HarnessConfig = toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!("configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Grace period granted to the child on close before a forced kill
    pub fn close_grace(&self) -> Duration {
        Duration::from_secs(self.close_grace_secs)
    }

    /// Wall-clock ceiling on a full batch run
    pub fn run_timeout(&self) -> Duration {
        Duration::from_secs(self.run_timeout_secs)
    }
}
