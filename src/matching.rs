use nalgebra as na;

use crate::detection::Detection;

/// Euclidean distance between two centroids, in pixels of the source
/// resolution. The metric is intentionally not normalized for frame size,
/// so a fixed threshold is resolution-dependent.
#[inline]
pub fn centroid_distance(a: &na::Point2<f32>, b: &na::Point2<f32>) -> f32 {
    na::distance(a, b)
}

/// Where one detection went, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Bound to the track occupying this slot of the live table (creation
    /// order). Slots past the initial track count refer to tracks founded
    /// by earlier `Fresh` entries of the same pass.
    Track(usize),
    /// No track in reach; founds a new track at the next free slot.
    Fresh,
}

/// Outcome of one matching pass: one [`Target`] per input detection.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub targets: Vec<Target>,
}

/// Frame-to-frame correspondence strategy.
///
/// `tracks` holds the current centroid of every live track in creation
/// order. Implementations must be deterministic; the track lifecycle
/// (creation, aging, eviction) stays outside and only consumes the
/// returned [`Assignment`].
pub trait Matcher {
    fn assign(&self, tracks: &[na::Point2<f32>], detections: &[Detection]) -> Assignment;
}

/// Greedy first-fit matching: each detection binds to the first track whose
/// centroid lies strictly within the distance threshold, scanning tracks in
/// creation order. Not globally optimal, and a track already matched in the
/// same pass stays eligible for later detections (last write wins).
#[derive(Debug, Clone)]
pub struct FirstFit {
    pub distance_threshold: f32,
}

impl FirstFit {
    pub fn new(distance_threshold: f32) -> Self {
        Self { distance_threshold }
    }
}

impl Matcher for FirstFit {
    fn assign(&self, tracks: &[na::Point2<f32>], detections: &[Detection]) -> Assignment {
        let mut centers = tracks.to_vec();
        let mut targets = Vec::with_capacity(detections.len());

        for det in detections {
            let c = det.centroid();
            let slot = centers
                .iter()
                .position(|t| centroid_distance(t, &c) < self.distance_threshold);

            match slot {
                Some(slot) => {
                    // later detections compare against the moved centroid
                    centers[slot] = c;
                    targets.push(Target::Track(slot));
                }
                None => {
                    centers.push(c);
                    targets.push(Target::Fresh);
                }
            }
        }

        Assignment { targets }
    }
}
