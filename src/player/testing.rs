//! An in-memory backend that records every call, for driving the
//! controller without a sound device.

use super::{
    AudioBackend, OnTrackEnd, PlaybackController, PlaybackState, PlayerError, PlayerEvent,
    TrackOutput,
};
use crossbeam_channel::Receiver;
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

pub(crate) const TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Load(PathBuf),
    Play { looping: bool },
    Pause,
    Resume,
    Stop,
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
    on_end: Mutex<Option<OnTrackEnd>>,
}

impl Recorder {
    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub(crate) struct FakeBackend {
    playable: Vec<PathBuf>,
    recorder: Arc<Recorder>,
    gate: Option<Receiver<()>>,
    reject_play: bool,
}

impl FakeBackend {
    pub(crate) fn with_tracks(paths: &[&str]) -> Self {
        FakeBackend {
            playable: paths.iter().map(PathBuf::from).collect(),
            recorder: Arc::new(Recorder::default()),
            gate: None,
            reject_play: false,
        }
    }

    /// Hold every `load` until a message arrives on `gate`.
    pub(crate) fn gated(mut self, gate: Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn rejecting_play(mut self) -> Self {
        self.reject_play = true;
        self
    }

    pub(crate) fn probe(&self) -> BackendProbe {
        BackendProbe {
            recorder: Arc::clone(&self.recorder),
        }
    }
}

impl AudioBackend for FakeBackend {
    fn load(&self, path: &Path, looping: bool) -> Result<Box<dyn TrackOutput>, PlayerError> {
        if let Some(gate) = &self.gate {
            let _ = gate.recv_timeout(TIMEOUT);
        }
        self.recorder.push(Call::Load(path.to_path_buf()));

        if !self.playable.iter().any(|p| p == path) {
            return Err(PlayerError::TrackLoad {
                path: path.to_path_buf(),
                reason: String::from("No such file or directory"),
            });
        }

        Ok(Box::new(FakeTrack {
            recorder: Arc::clone(&self.recorder),
            looping,
            reject_play: self.reject_play,
        }))
    }
}

struct FakeTrack {
    recorder: Arc<Recorder>,
    looping: bool,
    reject_play: bool,
}

impl TrackOutput for FakeTrack {
    fn play(&mut self, on_end: OnTrackEnd) -> Result<(), PlayerError> {
        if self.reject_play {
            return Err(PlayerError::PlaybackStart(String::from("device busy")));
        }
        self.recorder.push(Call::Play {
            looping: self.looping,
        });
        *self.recorder.on_end.lock().unwrap() = Some(on_end);
        Ok(())
    }

    fn pause(&mut self) {
        self.recorder.push(Call::Pause);
    }

    fn resume(&mut self) {
        self.recorder.push(Call::Resume);
    }

    fn stop(&mut self) {
        self.recorder.push(Call::Stop);
    }
}

/// Inspects a [`FakeBackend`] after it has been moved into a controller.
pub(crate) struct BackendProbe {
    recorder: Arc<Recorder>,
}

impl BackendProbe {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.recorder.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, call: &Call) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    pub(crate) fn loads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Load(_)))
            .count()
    }

    /// Simulate the output draining a non-looping track.
    pub(crate) fn finish_track(&self) {
        let on_end = self.recorder.on_end.lock().unwrap().take();
        on_end.expect("no track is playing")();
    }
}

pub(crate) fn controller(
    backend: FakeBackend,
    looping: bool,
) -> (PlaybackController, BackendProbe) {
    let probe = backend.probe();
    (PlaybackController::new(Arc::new(backend), looping), probe)
}

pub(crate) fn next_event(events: &Receiver<PlayerEvent>) -> PlayerEvent {
    events.recv_timeout(TIMEOUT).expect("no player event arrived")
}

/// Drain events until the state reaches `target`, returning everything seen.
pub(crate) fn wait_for_state(
    events: &Receiver<PlayerEvent>,
    target: PlaybackState,
) -> Vec<PlayerEvent> {
    let mut seen = Vec::new();
    loop {
        let event = next_event(events);
        let done = matches!(event, PlayerEvent::StateChanged { to, .. } if to == target);
        seen.push(event);
        if done {
            return seen;
        }
    }
}

pub(crate) fn eventually(mut condition: impl FnMut() -> bool) {
    let deadline = Instant::now() + TIMEOUT;
    while !condition() {
        assert!(Instant::now() < deadline, "condition not met in time");
        std::thread::sleep(Duration::from_millis(5));
    }
}
