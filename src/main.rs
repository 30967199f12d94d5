//! dbharness entry point
//!
//! CLI surface:
//! - no arguments: batch run against the configured script
//! - `-i` / `--interactive`: interactive mode
//! - `-h` / `--help`: usage text
//! - anything else: joined into one literal command, single-command mode

use std::env;
use std::process;

use tracing::{error, warn};

use dbharness::{modes, Error, HarnessConfig};

/// Print usage information
fn print_help() {
    println!("dbharness - drives the TrivialDB interactive SQL shell");
    println!();
    println!("USAGE:");
    println!("    dbharness                 Run the configured test script");
    println!("    dbharness -i              Interactive mode");
    println!("    dbharness \"SQL COMMAND\"   Run a single command and exit");
    println!();
    println!("OPTIONS:");
    println!("    -i, --interactive    Start an interactive session");
    println!("    -h, --help           Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    dbharness reads TOML configuration from, in order:");
    println!("    1. The path in the DBHARNESS_CONFIG environment variable");
    println!("    2. ./dbharness.toml");
    println!("    3. Built-in defaults (build/trivial_db, test_all_features.sql)");
    println!();
    println!("ENVIRONMENT:");
    println!("    DBHARNESS_CONFIG    Path to configuration file");
    println!("    RUST_LOG            Logging level (error, warn, info, debug, trace)");
}

#[tokio::main]
async fn main() {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .compact()
        .init();

    let config = match HarnessConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("{e}; using built-in defaults");
            HarnessConfig::default()
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();

    let code = match args.first().map(String::as_str) {
        None => run_batch(&config).await,
        Some("-i") | Some("--interactive") => run_interactive(&config).await,
        Some("-h") | Some("--help") => {
            print_help();
            0
        }
        Some(_) => run_single(&config, &args.join(" ")).await,
    };

    process::exit(code);
}

/// Batch run: exit 0 iff the verdict is an overall pass
async fn run_batch(config: &HarnessConfig) -> i32 {
    match modes::batch::run(config).await {
        Ok(verdict) if verdict.overall_pass() => 0,
        Ok(_) => 1,
        Err(e @ Error::Timeout { .. }) => {
            error!("run exceeded its time ceiling: {e}");
            1
        }
        Err(e) => {
            error!("batch run failed: {e}");
            1
        }
    }
}

async fn run_interactive(config: &HarnessConfig) -> i32 {
    match modes::interactive::run(config).await {
        Ok(()) => 0,
        Err(e) => {
            error!("interactive session failed: {e}");
            1
        }
    }
}

async fn run_single(config: &HarnessConfig, command: &str) -> i32 {
    match modes::single::run(config, command).await {
        Ok(_) => 0,
        Err(e) => {
            error!("command failed: {e}");
            1
        }
    }
}
