use super::{Action, C, X};
use crate::{REFRESH_RATE, ui_state::UiState};
use anyhow::Result;
use crossbeam_channel::Sender;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

use KeyCode::*;

pub fn handle_event(event: &Event, state: &UiState) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state),
        _ => None,
    }
}

fn handle_key_event(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (X, Char('q')) | (X, Esc) => Some(Action::QUIT),

        (X, Char(' ')) | (X, Enter) => Some(Action::Click),
        (X, Char('s')) | (C, Char('s')) => Some(Action::Stop),
        _ => None,
    }
}

fn handle_mouse_event(mouse: &MouseEvent, state: &UiState) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if state.button_contains(mouse.column, mouse.row) =>
        {
            Some(Action::Click)
        }
        _ => None,
    }
}

/// Forward terminal events to the UI loop. The thread ends once the
/// receiving side is gone.
pub fn spawn_input_reader(tx: Sender<Event>) -> Result<JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name(String::from("input-reader"))
        .spawn(move || {
            loop {
                match next_event() {
                    Ok(Some(event)) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => (),
                    Err(e) => {
                        tracing::error!(error = %e, "terminal input failed");
                        break;
                    }
                }
            }
        })?;
    Ok(handle)
}

fn next_event() -> Result<Option<Event>> {
    match event::poll(Duration::from_millis(REFRESH_RATE))? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}
