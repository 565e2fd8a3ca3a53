use crate::{CONFIG_DIRECTORY, CONFIG_FILE, expand_tilde};
use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TRACK: &str = "~/Music/01-overture.mp3";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub track: PathBuf,
    pub loop_track: bool,
    pub log_level: String,
    pub window: WindowConfig,
    pub icons: IconConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub play: String,
    pub pause: String,
    pub color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            track: PathBuf::from(DEFAULT_TRACK),
            loop_track: true,
            log_level: String::from("info"),
            window: WindowConfig::default(),
            icons: IconConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: String::from("Music Player"),
            width: 40,
            height: 20,
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            play: String::from("▶"),
            pause: String::from("⏸"),
            color: Color::Yellow,
        }
    }
}

impl Config {
    /// Load `<config_dir>/overture/config.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Self::default().resolved(),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_toml_str(&file_str).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str::<Config>(s)?.resolved()
    }

    fn resolved(mut self) -> Result<Self> {
        self.track = expand_tilde(&self.track)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        let defaults = Config::default();

        assert!(config.loop_track);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.window, defaults.window);
        assert_eq!(config.icons, defaults.icons);
        assert!(config.track.ends_with("Music/01-overture.mp3"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_toml_str(
            r#"
            track = "/srv/audio/theme.ogg"
            loop_track = false

            [window]
            title = "Jukebox"

            [icons]
            play = ">"
            pause = "||"
            "#,
        )
        .unwrap();

        assert_eq!(config.track, PathBuf::from("/srv/audio/theme.ogg"));
        assert!(!config.loop_track);
        assert_eq!(config.window.title, "Jukebox");
        assert_eq!(config.window.width, 40);
        assert_eq!(config.icons.play, ">");
        assert_eq!(config.icons.pause, "||");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Config::from_toml_str("loop_track = \"sometimes\"").is_err());
    }
}
