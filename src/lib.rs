pub mod bbox;
pub mod detection;
pub mod error;
pub mod filter;
pub mod frame;
pub mod matching;
pub mod record;
pub mod tracker;

mod track;
mod trail;

pub use detection::Detection;
pub use frame::Frame;
pub use track::{Track, TrackId};
pub use tracker::{Tracker, TrackerConfig};

use error::Error;
use std::collections::HashMap;
use std::rc::Rc;

/// Frame-to-frame correspondence between detector output and persistent
/// track identities, kept separately per detection source.
pub trait Tracking {
    fn update(&mut self, frame: &Frame, src: &str) -> HashMap<TrackId, Track>;
    fn tracks(&self, src: &str) -> Rc<[Track]>;
}

/// Nearest-centroid tracker holding one independent [`Tracker`] per source
/// key ("camera", "video", ...). Track IDs are unique within a source.
pub struct CentroidTracker {
    config: TrackerConfig,
    sources: HashMap<String, Tracker>,
}

impl CentroidTracker {
    pub fn new() -> Self {
        Self {
            config: TrackerConfig::default(),
            sources: HashMap::new(),
        }
    }

    pub fn with_config(config: TrackerConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            config,
            sources: HashMap::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}

impl Default for CentroidTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracking for CentroidTracker {
    fn update(&mut self, frame: &Frame, src: &str) -> HashMap<TrackId, Track> {
        let config = self.config.clone();
        let tracker = self
            .sources
            .entry(src.to_string())
            .or_insert_with(|| Tracker::unchecked(config));

        tracker.update(&frame.detections)
    }

    #[inline]
    fn tracks(&self, src: &str) -> Rc<[Track]> {
        if let Some(tracker) = self.sources.get(src) {
            return tracker.tracks().into_boxed_slice().into();
        }

        Rc::new([])
    }
}
