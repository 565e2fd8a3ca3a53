mod action;

pub use action::{handle_event, spawn_input_reader};

use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const C: KeyModifiers = KeyModifiers::CONTROL;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// The play/pause button was pressed, by mouse or keyboard
    Click,
    Stop,
    QUIT,
}
