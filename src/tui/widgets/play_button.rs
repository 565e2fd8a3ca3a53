use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Flex, Layout},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

pub struct PlayButtonWidget;

impl StatefulWidget for PlayButtonWidget {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let color = state.icons.color;

        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::new().fg(color));
        let inner = block.inner(area);
        block.render(area, buf);

        let [icon_row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);

        Paragraph::new(state.icon_glyph().to_string())
            .centered()
            .fg(color)
            .bold()
            .render(icon_row, buf);
    }
}
