use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

pub struct StatusLabel;

impl StatefulWidget for StatusLabel {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        Paragraph::new(state.label.as_str())
            .wrap(Wrap { trim: true })
            .centered()
            .italic()
            .render(area, buf);
    }
}
