use super::{AppLayout, PlayButtonWidget, StatusLabel};
use crate::UiState;
use ratatui::{
    Frame,
    layout::Alignment,
    widgets::{Block, BorderType, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area(), state);

    Block::bordered()
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", state.window.title))
        .title_alignment(Alignment::Center)
        .render(layout.window, f.buffer_mut());

    StatusLabel.render(layout.label, f.buffer_mut(), state);
    PlayButtonWidget.render(layout.button, f.buffer_mut(), state);

    state.set_button_area(layout.button);
}
