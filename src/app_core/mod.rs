mod app;
mod binding;
mod select;

pub use app::Overture;
pub use binding::{ClickCommand, on_click, on_player_event};
