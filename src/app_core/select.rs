use crate::{REFRESH_RATE, app_core::Overture, key_handler};
use crossbeam_channel::{Receiver, select};
use ratatui::crossterm::event::Event;
use std::time::Duration;

impl Overture {
    /// Wait for the next player event or terminal input, whichever comes
    /// first. Both are handled here, on the UI thread.
    #[inline]
    pub(super) fn select_shortcut(&mut self, input_rx: &Receiver<Event>) {
        let player_rx = self.player.events().clone();

        select! {
            recv(player_rx) -> event => {
                if let Ok(event) = event {
                    super::on_player_event(&mut self.ui, &event);
                }
            }

            recv(input_rx) -> event => {
                match event {
                    Ok(event) => {
                        if let Some(action) = key_handler::handle_event(&event, &self.ui) {
                            self.handle_action(action);
                        }
                    }
                    // Input reader is gone, nothing can reach us anymore
                    Err(_) => self.ui.quit(),
                }
            }

            default(Duration::from_millis(REFRESH_RATE)) => {}
        }
    }
}
