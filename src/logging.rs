//! Log output setup.
//!
//! The terminal belongs to the TUI, so log lines go to a file instead of
//! stdout.

use std::fs::OpenOptions;
use std::sync::Mutex;

use crate::Result;
use crate::config::LogConfig;

/// Installs a global `tracing` subscriber that appends to the configured
/// log file.
///
/// # Errors
///
/// Returns [`CoinboardError::Io`](crate::CoinboardError::Io) if the file
/// cannot be opened or a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|e| {
            crate::CoinboardError::Io(format!(
                "failed to open log file {}: {e}",
                config.file.display()
            ))
        })?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.level)
        .try_init()
        .map_err(|e| crate::CoinboardError::Io(format!("failed to install logger: {e}")))
}
