use crate::{CONFIG_DIRECTORY, LOG_FILE};
use anyhow::{Context, Result, anyhow};
use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};
use tracing::Level;

/// Route `tracing` output to a log file. The terminal belongs to the UI,
/// so nothing may be written to stdout/stderr while it runs.
pub fn init(level: &str) -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or_else(|| anyhow!("Could not determine cache directory!"))?
        .join(CONFIG_DIRECTORY);
    std::fs::create_dir_all(&dir)?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_names(true)
        .with_max_level(parse_level(level))
        .try_init()
        .map_err(|e| anyhow!("Could not install logger: {e}"))?;

    Ok(path)
}

fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}
