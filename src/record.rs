use std::collections::HashMap;
use std::fmt;

use serde_derive::Serialize;

use crate::error::Error;
use crate::track::{Track, TrackId};

/// Higher cutoff applied to the live camera feed before recording.
pub const CAMERA_RECORD_THRESHOLD: f32 = 0.7;

/// Which feed produced an observation.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Camera,
    Video,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Camera => "camera",
            Source::Video => "video",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row handed to the persistence collaborator: a high-confidence track
/// observation keyed by source, with the box serialized as a JSON array.
#[derive(Serialize, Debug, Clone)]
pub struct Observation {
    pub timestamp: f64,
    #[serde(rename = "object_name")]
    pub label: String,
    pub confidence: f32,
    pub location: String,
    pub source: Source,
    pub image_path: Option<String>,
}

impl Observation {
    pub fn from_track(track: &Track, source: Source, timestamp: f64) -> Result<Self, Error> {
        Ok(Self {
            timestamp,
            label: track.label.clone(),
            confidence: track.confidence,
            location: serde_json::to_string(track.bbox.as_slice())?,
            source,
            image_path: None,
        })
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }
}

/// Turn one update's output into observation rows, keeping tracks strictly
/// above `min_confidence`. The camera feed passes [`CAMERA_RECORD_THRESHOLD`]
/// here; batch video analysis records everything it was handed.
pub fn observations(
    tracks: &HashMap<TrackId, Track>,
    source: Source,
    timestamp: f64,
    min_confidence: f32,
) -> Result<Vec<Observation>, Error> {
    let mut rows = Vec::with_capacity(tracks.len());

    for track in tracks.values() {
        if track.confidence > min_confidence {
            rows.push(Observation::from_track(track, source, timestamp)?);
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::BBox;
    use crate::detection::Detection;
    use crate::tracker::{Tracker, TrackerConfig};

    fn table_with(confidences: &[f32]) -> HashMap<TrackId, Track> {
        let mut tracker = Tracker::new(TrackerConfig::default()).unwrap();
        let dets: Vec<_> = confidences
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let x = i as f32 * 200.0;
                Detection::new(BBox::ltrb(x, 0.0, x + 20.0, 20.0), "backpack", p)
            })
            .collect();

        tracker.update(&dets)
    }

    #[test]
    fn camera_cutoff_drops_low_confidence() {
        let tracks = table_with(&[0.9, 0.6]);

        let rows =
            observations(&tracks, Source::Camera, 12.0, CAMERA_RECORD_THRESHOLD).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].source, Source::Camera);
    }

    #[test]
    fn location_is_serialized_box() {
        let tracks = table_with(&[0.9]);

        let rows = observations(&tracks, Source::Video, 3.5, 0.0).unwrap();
        assert_eq!(rows[0].location, "[0.0,0.0,20.0,20.0]");
    }

    #[test]
    fn source_serializes_lowercase() {
        let tracks = table_with(&[0.9]);
        let row = observations(&tracks, Source::Video, 0.0, 0.0)
            .unwrap()
            .pop()
            .unwrap();

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains(r#""source":"video""#));
        assert!(json.contains(r#""object_name":"backpack""#));
    }

    #[test]
    fn image_path_is_optional() {
        let tracks = table_with(&[0.9]);
        let row = observations(&tracks, Source::Camera, 0.0, 0.0)
            .unwrap()
            .pop()
            .unwrap()
            .with_image_path("static/detections/detection_0.jpg");

        assert_eq!(
            row.image_path.as_deref(),
            Some("static/detections/detection_0.jpg")
        );
    }
}
