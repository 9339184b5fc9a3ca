use std::collections::HashMap;

use nalgebra as na;
use tracing::{debug, trace};

use crate::bbox::{BBox, Ltrb};
use crate::detection::Detection;
use crate::error::Error;
use crate::matching::{FirstFit, Matcher, Target};
use crate::track::{Track, TrackId};
use crate::trail::Trail;

/// Reference centroid match radius, in pixels.
pub const DISTANCE_THRESHOLD: f32 = 50.0;

/// Reference number of consecutive unmatched calls a track survives.
pub const MAX_DISAPPEARED: u32 = 30;

const TRAIL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Centroid match radius, in pixels of the source resolution
    pub distance_threshold: f32,
    /// Consecutive unmatched calls tolerated before eviction
    pub max_disappeared: u32,
    /// Bounded length of the per-track centroid trail
    pub trail_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DISTANCE_THRESHOLD,
            max_disappeared: MAX_DISAPPEARED,
            trail_capacity: TRAIL_CAPACITY,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.distance_threshold.is_finite() || self.distance_threshold <= 0.0 {
            return Err(Error::InvalidConfig(
                "distance_threshold must be finite and positive",
            ));
        }

        if self.trail_capacity == 0 {
            return Err(Error::InvalidConfig("trail_capacity must be nonzero"));
        }

        Ok(())
    }
}

#[derive(Debug)]
struct TrackEntry {
    id: TrackId,
    bbox: BBox<Ltrb>,
    center: na::Point2<f32>,
    label: String,
    confidence: f32,
    age: u32,
    disappeared: u32,
    matched: bool,
    trail: Trail,
}

impl TrackEntry {
    fn new(id: TrackId, det: &Detection, trail_capacity: usize) -> Self {
        let center = det.centroid();
        let mut trail = Trail::with_capacity(trail_capacity);
        trail.push(center);

        Self {
            id,
            bbox: det.bbox(),
            center,
            label: det.label.clone(),
            confidence: det.confidence,
            age: 0,
            disappeared: 0,
            matched: true,
            trail,
        }
    }

    /// Last write wins: class label and confidence are overwritten with the
    /// latest matched detection's values, with no smoothing or voting.
    fn absorb(&mut self, det: &Detection) {
        let center = det.centroid();

        self.bbox = det.bbox();
        self.center = center;
        self.label.clone_from(&det.label);
        self.confidence = det.confidence;
        self.disappeared = 0;
        self.matched = true;
        self.trail.push(center);
    }
}

impl From<&TrackEntry> for Track {
    fn from(e: &TrackEntry) -> Track {
        Track {
            id: e.id,
            bbox: e.bbox.clone(),
            label: e.label.clone(),
            confidence: e.confidence,
            center: e.center,
            age: e.age,
            disappeared: e.disappeared,
            trail: e.trail.to_vec(),
        }
    }
}

/// Live track table for a single detection source.
///
/// `update` both reads and mutates the whole table without locking, so
/// callers serialize calls: one call per frame, in frame order. Independent
/// sources get independent `Tracker` instances.
pub struct Tracker {
    config: TrackerConfig,
    matcher: Box<dyn Matcher>,
    // creation order; the matcher sees slots in this order
    entries: Vec<TrackEntry>,
    next_id: TrackId,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self::unchecked(config))
    }

    /// Swap the correspondence strategy without touching lifecycle logic.
    pub fn with_matcher(config: TrackerConfig, matcher: Box<dyn Matcher>) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            matcher,
            ..Self::unchecked(config)
        })
    }

    pub(crate) fn unchecked(config: TrackerConfig) -> Self {
        let matcher = Box::new(FirstFit::new(config.distance_threshold));

        Self {
            config,
            matcher,
            entries: Vec::with_capacity(32),
            next_id: 0,
        }
    }

    /// Consume one frame's detection set and return the current state of
    /// every track matched or created in this call.
    ///
    /// Tracks that failed to match stay in internal state until their
    /// disappearance counter exceeds `max_disappeared`, but are withheld
    /// from the returned mapping.
    pub fn update(&mut self, detections: &[Detection]) -> HashMap<TrackId, Track> {
        for e in &mut self.entries {
            e.matched = false;
            e.age += 1;
        }

        let centers: Vec<_> = self.entries.iter().map(|e| e.center).collect();
        let assignment = self.matcher.assign(&centers, detections);

        debug_assert_eq!(assignment.targets.len(), detections.len());

        for (det, target) in detections.iter().zip(assignment.targets.iter()) {
            match *target {
                Target::Track(slot) => self.entries[slot].absorb(det),
                Target::Fresh => {
                    let id = self.next_id;
                    self.next_id += 1;

                    trace!("track {} created for class {:?}", id, det.label);
                    self.entries.push(TrackEntry::new(id, det, self.config.trail_capacity));
                }
            }
        }

        let max_disappeared = self.config.max_disappeared;

        for e in &mut self.entries {
            if !e.matched {
                e.disappeared += 1;
            }
        }

        self.entries.retain(|e| {
            if e.disappeared > max_disappeared {
                debug!("track {} evicted after {} unmatched calls", e.id, e.disappeared);
                false
            } else {
                true
            }
        });

        let emitted: HashMap<TrackId, Track> = self
            .entries
            .iter()
            .filter(|e| e.matched)
            .map(|e| (e.id, e.into()))
            .collect();

        debug!("{} live tracks, {} emitted", self.entries.len(), emitted.len());
        emitted
    }

    /// Snapshot of every live track, matched or not. The `update` return
    /// value stays matched-only; this is the side channel for trail and
    /// drawing consumers.
    pub fn tracks(&self) -> Vec<Track> {
        self.entries.iter().map(Into::into).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
