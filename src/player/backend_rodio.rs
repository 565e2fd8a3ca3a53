use super::{AudioBackend, OnTrackEnd, PlayerError, TrackOutput};
use anyhow::Result;
use rodio::{
    ChannelCount, Decoder, OutputStream, OutputStreamBuilder, SampleRate, Sink, Source,
    mixer::Mixer,
};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

/// Keeps the default output stream open for the lifetime of the app.
///
/// The stream itself cannot leave the thread that opened it, so only the
/// mixer is handed to the backend.
pub struct RodioDevice {
    _stream: OutputStream,
    backend: Arc<RodioBackend>,
}

impl RodioDevice {
    pub fn open_default() -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::AudioInit(e.to_string()))?;
        stream.log_on_drop(false);

        let backend = Arc::new(RodioBackend {
            mixer: stream.mixer().clone(),
        });

        Ok(Self {
            _stream: stream,
            backend,
        })
    }

    pub fn backend(&self) -> Arc<dyn AudioBackend> {
        Arc::clone(&self.backend) as Arc<dyn AudioBackend>
    }
}

pub struct RodioBackend {
    mixer: Mixer,
}

impl AudioBackend for RodioBackend {
    fn load(&self, path: &Path, looping: bool) -> Result<Box<dyn TrackOutput>, PlayerError> {
        let source = decode(path, looping).map_err(|e| PlayerError::TrackLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let sink = Sink::connect_new(&self.mixer);
        sink.pause();

        Ok(Box::new(RodioTrack {
            sink,
            source: Some(source),
        }))
    }
}

type BoxedSource = Box<dyn Source + Send>;

pub struct RodioTrack {
    sink: Sink,
    source: Option<BoxedSource>,
}

impl TrackOutput for RodioTrack {
    fn play(&mut self, on_end: OnTrackEnd) -> Result<(), PlayerError> {
        let source = self
            .source
            .take()
            .ok_or_else(|| PlayerError::PlaybackStart("track was already started".into()))?;

        self.sink.append(EndSignal::new(source, on_end));
        self.sink.play();

        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.stop();
    }
}

/// A looped decoder seeks back to the start of the file when it runs
/// out, so the decoded track is never held in memory.
fn decode(song: &Path, looping: bool) -> Result<BoxedSource> {
    let path = PathBuf::from(song);
    let file = File::open(song)?;
    let len = file.metadata()?.len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len)
        .with_seekable(true);

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let hint = match ext {
            "adif" | "adts" => "aac",
            "caf" => "audio/x-caf",
            "m4a" | "m4b" | "m4p" | "m4r" | "mp4" => "audio/mp4",
            "bit" | "mpga" => "mp3",
            "mka" | "mkv" => "audio/matroska",
            "oga" | "ogm" | "ogv" | "ogx" | "spx" => "audio/ogg",
            "wave" => "wav",
            _ => ext,
        };
        builder = builder.with_hint(hint);
    }

    Ok(match looping {
        true => Box::new(builder.build_looped()?),
        false => Box::new(builder.build()?),
    })
}

/// Passes samples through untouched and fires `on_end` when the inner
/// source is exhausted.
pub struct EndSignal<I> {
    input: I,
    on_end: Option<OnTrackEnd>,
}

impl<I> EndSignal<I> {
    pub fn new(input: I, on_end: OnTrackEnd) -> Self {
        EndSignal {
            input,
            on_end: Some(on_end),
        }
    }
}

impl<I> Iterator for EndSignal<I>
where
    I: Source,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.input.next() {
            Some(sample) => Some(sample),
            None => {
                if let Some(on_end) = self.on_end.take() {
                    on_end();
                }
                None
            }
        }
    }
}

impl<I> Source for EndSignal<I>
where
    I: Source,
{
    fn current_span_len(&self) -> Option<usize> {
        self.input.current_span_len()
    }

    fn channels(&self) -> ChannelCount {
        self.input.channels()
    }

    fn sample_rate(&self) -> SampleRate {
        self.input.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.input.total_duration()
    }

    fn try_seek(&mut self, pos: Duration) -> Result<(), rodio::source::SeekError> {
        self.input.try_seek(pos)
    }
}
