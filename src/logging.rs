//! File logging
//!
//! The terminal belongs to the TUI, so tracing output goes to
//! `<data dir>/casefile/casefile.log`. Filter with `CASEFILE_LOG`
//! (e.g. `CASEFILE_LOG=debug`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "CASEFILE_LOG";

pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("casefile").join("casefile.log"))
}

/// Install the global subscriber. Failure leaves logging off; the app still runs.
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}
