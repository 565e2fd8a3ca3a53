use crate::{
    Config, UiState,
    app_core::{ClickCommand, binding},
    key_handler::{self, Action},
    overwrite_line,
    player::{PlaybackController, RodioDevice, TrackInfo},
    tui,
};
use anyhow::Result;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use std::io::stdout;
use tracing::{info, warn};

pub struct Overture {
    config: Config,
    pub(super) ui: UiState,
    pub(super) player: PlaybackController,
    // Dropped last: the output stream must outlive the player
    _device: RodioDevice,
}

impl Overture {
    pub fn new(config: Config) -> Result<Self> {
        let device = RodioDevice::open_default()?;
        let player = PlaybackController::new(device.backend(), config.loop_track);
        let track = TrackInfo::read(&config.track);
        let ui = UiState::new(&config, &track);

        Ok(Overture {
            config,
            ui,
            player,
            _device: device,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;
        execute!(stdout(), EnableMouseCapture)?;

        let (input_tx, input_rx) = crossbeam_channel::unbounded();
        key_handler::spawn_input_reader(input_tx)?;

        // MAIN ROUTINE
        let outcome = loop {
            if let Err(e) = terminal.draw(|f| tui::render(f, &mut self.ui)) {
                break Err(anyhow::Error::from(e));
            }

            self.select_shortcut(&input_rx);

            if self.ui.should_quit() {
                break Ok(());
            }
        };

        self.player.stop();

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        overwrite_line("Thank you for using overture!\n")?;

        info!("shut down");
        outcome
    }
}

impl Overture {
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Click => self.click(),
            Action::Stop => {
                self.player.stop();
                self.ui.button.reflect(self.player.state());
            }
            Action::QUIT => self.ui.quit(),
        }
    }

    fn click(&mut self) {
        match binding::on_click(&mut self.ui, &mut self.player, &self.config.track) {
            Ok(ClickCommand::Start) => {
                info!(track = %self.config.track.display(), "starting playback")
            }
            Ok(_) => (),
            Err(e) => warn!(error = %e, "click ignored"),
        }
    }
}
