//! Tracing setup for the `dlbridge` binary.
//!
//! Events are appended to `$XDG_STATE_HOME/dlbridge/dlbridge.log`. `RUST_LOG`
//! overrides the default filter. If the log file cannot be opened the binary
//! logs to stderr instead and says why.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,dlbridge=debug,dlbridge_core=debug";
const LOG_FILE_NAME: &str = "dlbridge.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/dlbridge/dlbridge.log`, creating the directory.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlbridge")?;
    xdg_dirs
        .place_state_file(LOG_FILE_NAME)
        .context("create dlbridge state directory")
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs the file subscriber and returns the log path.
///
/// The file is opened once; every event locks it for the duration of a write.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::debug!(path = %path.display(), "file logging ready");
    Ok(path)
}

/// Installs a stderr subscriber and records why file logging was skipped.
pub fn init_logging_stderr(reason: &anyhow::Error) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
    if installed.is_ok() {
        tracing::warn!("file logging unavailable, using stderr: {reason:#}");
    }
}
