use super::{PlaybackState, PlayerError, PlayerEvent, worker::TrackHandle};
use crossbeam_channel::Sender;
use std::{
    path::PathBuf,
    sync::{Condvar, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, info, warn};

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub(crate) enum WorkerPhase {
    #[default]
    Idle,
    Loading,
    Running,
}

#[derive(Default)]
pub(crate) struct Status {
    pub(crate) state: PlaybackState,
    pub(crate) cur_path: Option<PathBuf>,
    pub(crate) worker: WorkerPhase,
    /// Bumped on every `start` and on a cancelled load. A worker whose
    /// session no longer matches must not touch the state.
    pub(crate) session: u64,
    /// Present while a worker is running. Pause and resume reach the output
    /// through it without waiting on the worker.
    pub(crate) track: Option<TrackHandle>,
}

/// The single guard over playback state, shared by the controller, the
/// worker and the output's end-of-track callback.
pub(crate) struct Shared {
    status: Mutex<Status>,
    changed: Condvar,
    events: Sender<PlayerEvent>,
}

impl Shared {
    pub(crate) fn new(events: Sender<PlayerEvent>) -> Self {
        Shared {
            status: Mutex::new(Status::default()),
            changed: Condvar::new(),
            events,
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Status> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until another thread signals a change to the status.
    pub(crate) fn wait<'a>(&self, guard: MutexGuard<'a, Status>) -> MutexGuard<'a, Status> {
        self.changed
            .wait(guard)
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn notify(&self) {
        self.changed.notify_all();
    }

    /// Move to `to` if the edge is legal. Emits `StateChanged` while the
    /// guard is held so events arrive in transition order.
    pub(crate) fn transition(&self, status: &mut Status, to: PlaybackState) -> bool {
        let from = status.state;
        if !from.can_transition_to(to) {
            debug!(%from, %to, "ignored illegal transition");
            return false;
        }

        status.state = to;
        debug!(%from, %to, "playback state changed");
        self.emit(PlayerEvent::StateChanged { from, to });
        self.notify();
        true
    }

    /// Transition and apply the new state to the running track, if any.
    pub(crate) fn steer(&self, status: &mut Status, to: PlaybackState) -> bool {
        if !self.transition(status, to) {
            return false;
        }
        if let Some(track) = status.track.as_mut() {
            track.apply(to);
        }
        true
    }

    /// Called from the audio thread once a non-looping track has drained.
    pub(crate) fn track_finished(&self, session: u64) {
        let mut status = self.lock();
        if status.session != session || status.state != PlaybackState::Playing {
            return;
        }

        info!("track finished");
        if self.transition(&mut status, PlaybackState::Stopped) {
            let path = status.cur_path.clone().unwrap_or_default();
            self.emit(PlayerEvent::TrackFinished(path));
        }
    }

    /// The worker is gone; a new session may start.
    pub(crate) fn worker_exited(&self) {
        let mut status = self.lock();
        status.worker = WorkerPhase::Idle;
        self.notify();
    }

    pub(crate) fn report(&self, error: PlayerError) {
        warn!(%error, "playback error");
        self.emit(PlayerEvent::Error(error));
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.events.send(event);
    }
}
