#![forbid(unsafe_code)]

//! Card Layout Replay Driver
//!
//! Reads a JSON scenario, lays the cards out for the initial viewport and
//! each listed resize, and prints one `LayoutSnapshot` per pass as JSONL.
//!
//! # Running
//!
//! ```sh
//! cargo run -p cardflow-harness -- scenario.json
//! cat scenario.json | cargo run -p cardflow-harness
//! ```
//!
//! # Environment
//!
//! - `CARDFLOW_LOG`: tracing filter directives (default `warn`)
//! - `CARDFLOW_LOG_JSON=1`: emit logs as JSON
//! - `CARDFLOW_STRATEGY`, `CARDFLOW_DIRECTION`, `CARDFLOW_CARD_WIDTH`,
//!   `CARDFLOW_CARD_HEIGHT`, `CARDFLOW_FIXED_HEIGHT`, `CARDFLOW_GAP`,
//!   `CARDFLOW_PADDING`: override the scenario config
//!
//! Logs go to stderr. Exit codes: 0 success, 1 I/O or parse failure,
//! 2 invalid configuration.

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use cardflow_harness::{HarnessError, Scenario, write_jsonl};
use tracing_subscriber::EnvFilter;

fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|value| {
        matches!(
            value.trim(),
            "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON"
        )
    })
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CARDFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if env_flag("CARDFLOW_LOG_JSON") {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run() -> Result<(), HarnessError> {
    let scenario = match std::env::args_os().nth(1) {
        Some(path) => Scenario::from_reader(BufReader::new(File::open(path)?))?,
        None => Scenario::from_reader(io::stdin().lock())?,
    };
    let scenario = scenario.with_env_overrides()?;
    let snapshots = scenario.replay()?;
    write_jsonl(&mut io::stdout().lock(), &snapshots)
}

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "replay failed");
            eprintln!("cardflow-harness: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
