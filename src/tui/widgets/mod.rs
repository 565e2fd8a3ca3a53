mod play_button;
mod status_label;

pub use play_button::PlayButtonWidget;
pub use status_label::StatusLabel;
