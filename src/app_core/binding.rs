use crate::{
    player::{PlaybackController, PlaybackState, PlayerError, PlayerEvent},
    ui_state::UiState,
};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, PartialEq, Eq)]
pub enum ClickCommand {
    Start,
    Pause,
    Resume,
}

/// Translate a button click into a player command.
///
/// Pause and resume take effect immediately, so the icon is updated here.
/// A start only shows "pause" once the worker reports the track playing,
/// which arrives later through [`on_player_event`].
pub fn on_click(
    ui: &mut UiState,
    player: &mut PlaybackController,
    track: &Path,
) -> Result<ClickCommand, PlayerError> {
    let command = match player.state() {
        PlaybackState::Stopped => {
            player.start(track)?;
            ClickCommand::Start
        }
        PlaybackState::Playing => {
            player.pause();
            ClickCommand::Pause
        }
        PlaybackState::Paused => {
            player.resume();
            ClickCommand::Resume
        }
    };

    debug!(?command, "button clicked");
    ui.button.reflect(player.state());
    Ok(command)
}

/// Apply a worker-originated event on the UI thread.
pub fn on_player_event(ui: &mut UiState, event: &PlayerEvent) {
    match event {
        PlayerEvent::StateChanged { to, .. } => ui.button.reflect(*to),
        PlayerEvent::TrackFinished(path) => info!(path = %path.display(), "track finished"),
        // Already logged where it happened; the icon stays as it was
        PlayerEvent::Error(_) => (),
    }
}
