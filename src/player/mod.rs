mod backend;
mod backend_rodio;
mod controller;
mod error;
mod shared;
mod state;
mod track;
mod worker;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{AudioBackend, OnTrackEnd, TrackOutput};
pub use backend_rodio::{RodioBackend, RodioDevice};
pub use controller::PlaybackController;
pub use error::PlayerError;
pub use state::PlaybackState;
pub use track::TrackInfo;

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    StateChanged {
        from: PlaybackState,
        to: PlaybackState,
    },
    TrackFinished(PathBuf),
    Error(PlayerError),
}
