use lofty::prelude::{Accessor, TaggedFileExt};
use std::path::Path;

/// What the status label shows for the loaded track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: String,
    pub artist: Option<String>,
}

impl TrackInfo {
    /// Read tags when possible; any failure falls back to the file stem.
    pub fn read(path: &Path) -> Self {
        match lofty::read_from_path(path) {
            Ok(file) => {
                let tag = file.primary_tag().or(file.first_tag());
                let title = tag.and_then(|t| t.title().map(|s| s.to_string()));
                let artist = tag.and_then(|t| t.artist().map(|s| s.to_string()));

                TrackInfo {
                    title: title.unwrap_or_else(|| file_stem(path)),
                    artist,
                }
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no readable tags");
                Self::from_path(path)
            }
        }
    }

    pub fn from_path(path: &Path) -> Self {
        TrackInfo {
            title: file_stem(path),
            artist: None,
        }
    }

    pub fn label(&self) -> String {
        match &self.artist {
            Some(artist) => format!("{} - {artist}", self.title),
            None => self.title.clone(),
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("Unknown"))
}
