use super::{Icon, PlayButton};
use crate::{
    config::{Config, IconConfig, WindowConfig},
    player::TrackInfo,
};
use ratatui::layout::{Position, Rect};

pub struct UiState {
    pub(crate) button: PlayButton,
    pub(crate) label: String,
    pub(crate) window: WindowConfig,
    pub(crate) icons: IconConfig,

    // Where the button was last drawn, for mouse hit-testing
    button_area: Rect,
    quit: bool,
}

impl UiState {
    pub fn new(config: &Config, track: &TrackInfo) -> Self {
        UiState {
            button: PlayButton::default(),
            label: track.label(),
            window: config.window.clone(),
            icons: config.icons.clone(),
            button_area: Rect::default(),
            quit: false,
        }
    }
}

impl UiState {
    pub fn icon_glyph(&self) -> &str {
        match self.button.icon() {
            Icon::Play => &self.icons.play,
            Icon::Pause => &self.icons.pause,
        }
    }

    pub fn set_button_area(&mut self, area: Rect) {
        self.button_area = area;
    }

    pub fn button_contains(&self, column: u16, row: u16) -> bool {
        self.button_area.contains(Position::new(column, row))
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlaybackState;

    fn ui() -> UiState {
        let track = TrackInfo {
            title: String::from("Overture"),
            artist: None,
        };
        UiState::new(&Config::default(), &track)
    }

    #[test]
    fn glyph_tracks_the_button_icon() {
        let mut ui = ui();
        assert_eq!(ui.icon_glyph(), "▶");

        ui.button.reflect(PlaybackState::Playing);
        assert_eq!(ui.icon_glyph(), "⏸");
    }

    #[test]
    fn hit_test_uses_the_last_drawn_area() {
        let mut ui = ui();
        assert!(!ui.button_contains(0, 0));

        ui.set_button_area(Rect::new(10, 5, 6, 3));
        assert!(ui.button_contains(10, 5));
        assert!(ui.button_contains(15, 7));
        assert!(!ui.button_contains(16, 7));
        assert!(!ui.button_contains(12, 8));
    }
}
