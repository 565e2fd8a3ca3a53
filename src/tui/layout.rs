use crate::ui_state::UiState;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub window: Rect,
    pub label: Rect,
    pub button: Rect,
}

impl AppLayout {
    /// A fixed-size window centered in the terminal, split into three equal
    /// rows. The label spans the middle row; the button takes the centre
    /// third of the bottom row.
    pub fn new(area: Rect, state: &UiState) -> Self {
        let width = state.window.width.min(area.width);
        let height = state.window.height.min(area.height);

        let [window] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [window] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(window);

        // Leave room for the window border
        let inner = window.inner(ratatui::layout::Margin::new(1, 1));

        let [_, middle_row, bottom_row] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 3); 3])
            .areas(inner);

        let [_, button, _] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .areas(bottom_row);

        AppLayout {
            window,
            label: middle_row,
            button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, player::TrackInfo};
    use ratatui::layout::Position;
    use std::path::Path;

    fn ui() -> UiState {
        UiState::new(&Config::default(), &TrackInfo::from_path(Path::new("a.mp3")))
    }

    #[test]
    fn window_is_centered_and_clamped() {
        let ui = ui();

        let layout = AppLayout::new(Rect::new(0, 0, 100, 40), &ui);
        assert_eq!(layout.window, Rect::new(30, 10, 40, 20));

        let layout = AppLayout::new(Rect::new(0, 0, 30, 10), &ui);
        assert_eq!(layout.window, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn button_sits_below_the_label_inside_the_window() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 40), &ui());

        assert!(layout.button.y > layout.label.y);
        assert!(layout.button.width < layout.label.width);
        assert!(layout.window.contains(Position::new(layout.button.x, layout.button.y)));
        assert!(layout.button.bottom() < layout.window.bottom());
    }
}
