mod button;
mod ui_state;

pub use button::{Icon, PlayButton};
pub use ui_state::UiState;
