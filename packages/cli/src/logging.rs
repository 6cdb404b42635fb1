use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize tracing to a log file.
///
/// The TUI owns stdout, so logs only go to a file; callers skip this
/// entirely when no log file is configured. Filtering follows `UWC_LOG`
/// (env-filter syntax), defaulting to `info`.
pub fn init(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("could not open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_env("UWC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
