use super::PlayerError;
use std::path::Path;

/// Invoked once, from the audio thread, when a non-looping track runs out.
pub type OnTrackEnd = Box<dyn FnOnce() + Send>;

/// Opens tracks on an already initialized output device.
///
/// Shared between the UI thread and the playback worker.
pub trait AudioBackend: Send + Sync {
    /// A `looping` track restarts from the top instead of ending.
    fn load(&self, path: &Path, looping: bool) -> Result<Box<dyn TrackOutput>, PlayerError>;
}

/// A loaded track bound to the output. Dropping it releases the track.
pub trait TrackOutput: Send {
    fn play(&mut self, on_end: OnTrackEnd) -> Result<(), PlayerError>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
}
