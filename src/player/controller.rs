use super::{
    AudioBackend, PlaybackState, PlayerError, PlayerEvent,
    shared::{Shared, WorkerPhase},
    worker::PlaybackWorker,
};
use crossbeam_channel::{Receiver, unbounded};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    thread::JoinHandle,
};
use tracing::{debug, info, warn};

pub struct PlaybackController {
    shared: Arc<Shared>,
    backend: Arc<dyn AudioBackend>,
    events: Receiver<PlayerEvent>,
    looping: bool,
    worker: Option<JoinHandle<()>>,
    spawn: fn(PlaybackWorker) -> Result<JoinHandle<()>, PlayerError>,
}

impl PlaybackController {
    pub fn new(backend: Arc<dyn AudioBackend>, looping: bool) -> Self {
        let (evt_tx, evt_rx) = unbounded();

        PlaybackController {
            shared: Arc::new(Shared::new(evt_tx)),
            backend,
            events: evt_rx,
            looping,
            worker: None,
            spawn: PlaybackWorker::spawn,
        }
    }

    /// Events from the controller and the worker, to be drained on the UI
    /// thread.
    pub fn events(&self) -> &Receiver<PlayerEvent> {
        &self.events
    }
}

// =====================
//    COMMAND HANDLER
// =====================
impl PlaybackController {
    /// Spawn a worker that loads `path` and starts playing it.
    ///
    /// Only valid while stopped with no session alive. Load failures are
    /// reported through [`PlayerEvent::Error`], not returned here.
    pub fn start(&mut self, path: &Path) -> Result<(), PlayerError> {
        {
            let status = self.shared.lock();
            if status.state != PlaybackState::Stopped || status.worker == WorkerPhase::Loading {
                warn!(state = %status.state, "start rejected, session already running");
                return Err(PlayerError::AlreadyRunning);
            }
        }

        // A worker may still be releasing its track after a natural end
        self.join_worker();

        let session = {
            let mut status = self.shared.lock();
            status.session += 1;
            status.worker = WorkerPhase::Loading;
            status.cur_path = Some(path.to_path_buf());
            status.session
        };

        let worker = PlaybackWorker {
            shared: Arc::clone(&self.shared),
            backend: Arc::clone(&self.backend),
            path: path.to_path_buf(),
            session,
            looping: self.looping,
        };

        match (self.spawn)(worker) {
            Ok(handle) => {
                self.worker = Some(handle);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "could not start playback worker");
                self.shared.lock().worker = WorkerPhase::Idle;
                Err(e)
            }
        }
    }

    /// Suspend output. Returns `false` (and does nothing) unless playing.
    pub fn pause(&self) -> bool {
        let mut status = self.shared.lock();
        match status.state {
            PlaybackState::Playing => self.shared.steer(&mut status, PlaybackState::Paused),
            _ => false,
        }
    }

    /// Resume output. Returns `false` (and does nothing) unless paused.
    pub fn resume(&self) -> bool {
        let mut status = self.shared.lock();
        match status.state {
            PlaybackState::Paused => self.shared.steer(&mut status, PlaybackState::Playing),
            _ => false,
        }
    }

    /// Stop playback and wait for the worker to release its track.
    ///
    /// A load still in progress is cancelled without waiting: its worker
    /// notices the stale session once the backend returns and exits on
    /// its own.
    pub fn stop(&mut self) {
        {
            let mut status = self.shared.lock();
            match status.state {
                PlaybackState::Playing | PlaybackState::Paused => {
                    self.shared.transition(&mut status, PlaybackState::Stopped);
                }
                PlaybackState::Stopped if status.worker == WorkerPhase::Loading => {
                    debug!("cancelling track load");
                    status.session += 1;
                    self.shared.notify();
                    self.worker = None;
                    return;
                }
                PlaybackState::Stopped => {}
            }
        }

        self.join_worker();
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("playback worker panicked");
                self.shared.worker_exited();
            }
        }
    }
}

// ===============
//    ACCESSORS
// ===============
impl PlaybackController {
    pub fn state(&self) -> PlaybackState {
        self.shared.lock().state
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.shared.lock().cur_path.clone()
    }

    pub fn is_worker_alive(&self) -> bool {
        self.shared.lock().worker != WorkerPhase::Idle
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        if self.worker.is_some() {
            info!("shutting down playback");
            self.stop();
        }
    }
}
