use super::{
    AudioBackend, OnTrackEnd, PlaybackState, PlayerError, TrackOutput,
    shared::{Shared, WorkerPhase},
};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Weak},
    thread::{self, JoinHandle},
};
use tracing::{debug, info};

/// Owns the loaded track for one session. Dropping it stops output and
/// releases the track, whichever way the worker leaves.
pub(crate) struct TrackHandle {
    output: Box<dyn TrackOutput>,
    path: PathBuf,
}

impl TrackHandle {
    fn new(output: Box<dyn TrackOutput>, path: &Path) -> Self {
        TrackHandle {
            output,
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn apply(&mut self, state: PlaybackState) {
        match state {
            PlaybackState::Playing => self.output.resume(),
            PlaybackState::Paused => self.output.pause(),
            PlaybackState::Stopped => self.output.stop(),
        }
    }
}

impl Drop for TrackHandle {
    fn drop(&mut self) {
        self.output.stop();
        debug!(path = %self.path.display(), "track released");
    }
}

pub(crate) struct PlaybackWorker {
    pub(crate) shared: Arc<Shared>,
    pub(crate) backend: Arc<dyn AudioBackend>,
    pub(crate) path: PathBuf,
    pub(crate) session: u64,
    pub(crate) looping: bool,
}

impl PlaybackWorker {
    pub(crate) fn spawn(self) -> Result<JoinHandle<()>, PlayerError> {
        thread::Builder::new()
            .name(String::from("playback-worker"))
            .spawn(move || {
                let shared = Arc::clone(&self.shared);
                self.run();
                shared.worker_exited();
            })
            .map_err(|e| PlayerError::WorkerSpawn(e.to_string()))
    }

    fn run(self) {
        info!(path = %self.path.display(), session = self.session, "loading track");

        let output = match self.backend.load(&self.path, self.looping) {
            Ok(output) => output,
            Err(e) => return self.shared.report(e),
        };
        let mut track = TrackHandle::new(output, &self.path);

        let mut status = self.shared.lock();
        if status.session != self.session {
            debug!("load cancelled before playback started");
            return;
        }

        if let Err(e) = track.output.play(self.end_callback()) {
            drop(status);
            return self.shared.report(e);
        }

        status.worker = WorkerPhase::Running;
        status.track = Some(track);
        self.shared.transition(&mut status, PlaybackState::Playing);

        while status.session == self.session && status.state.is_active() {
            status = self.shared.wait(status);
        }

        // Released outside the guard
        let track = status.track.take();
        drop(status);
        drop(track);
        info!(path = %self.path.display(), "playback ended");
    }

    fn end_callback(&self) -> OnTrackEnd {
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let session = self.session;

        Box::new(move || {
            if let Some(shared) = shared.upgrade() {
                shared.track_finished(session);
            }
        })
    }
}
