use crate::player::PlaybackState;

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum Icon {
    #[default]
    Play,
    Pause,
}

/// The play/pause button. Its icon always advertises what a click will do
/// next, so a playing track shows "pause".
#[derive(Debug, Default)]
pub struct PlayButton {
    icon: Icon,
}

impl PlayButton {
    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn reflect(&mut self, state: PlaybackState) {
        self.icon = match state {
            PlaybackState::Playing => Icon::Pause,
            PlaybackState::Paused | PlaybackState::Stopped => Icon::Play,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_follows_playback_state() {
        let mut button = PlayButton::default();
        assert_eq!(button.icon(), Icon::Play);

        button.reflect(PlaybackState::Playing);
        assert_eq!(button.icon(), Icon::Pause);

        button.reflect(PlaybackState::Paused);
        assert_eq!(button.icon(), Icon::Play);

        button.reflect(PlaybackState::Stopped);
        assert_eq!(button.icon(), Icon::Play);
    }
}
