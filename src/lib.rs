use anyhow::{Result, anyhow};
use ratatui::crossterm::{
    ExecutableCommand,
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub mod app_core;
pub mod config;
pub mod key_handler;
pub mod logging;
pub mod player;
pub mod tui;
pub mod ui_state;

pub use config::Config;
pub use player::PlaybackController;
pub use ui_state::UiState;

// ~30fps
pub const REFRESH_RATE: u64 = 33;

pub const CONFIG_DIRECTORY: &str = "overture";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "overture.log";

pub fn overwrite_line(message: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout
        .execute(MoveToColumn(0))?
        .execute(Clear(ClearType::CurrentLine))?
        .execute(Print(message))?;
    stdout.flush()?;
    Ok(())
}

/// Expand a leading `~` into the user's home directory.
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;

    match path_str.as_ref() {
        "~" => Ok(home),
        s if s.starts_with("~/") || s.starts_with("~\\") => Ok(home.join(&s[2..])),
        _ => Err(anyhow!("Cannot expand another user's home: {path_str}")),
    }
}
