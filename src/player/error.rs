use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The output device could not be opened. Fatal at startup.
    #[error("audio output could not be initialized: {0}")]
    AudioInit(String),

    #[error("failed to load {}: {reason}", .path.display())]
    TrackLoad { path: PathBuf, reason: String },

    #[error("failed to start playback: {0}")]
    PlaybackStart(String),

    #[error("a playback session is already running")]
    AlreadyRunning,

    #[error("playback worker could not be spawned: {0}")]
    WorkerSpawn(String),
}
