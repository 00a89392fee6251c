//! Tracing setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to `log_file`.
///
/// Logs go to a file so they never draw over the terminal UI. `RUST_LOG`
/// wins over `default_filter` when set.
pub fn init(log_file: &Path, default_filter: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
