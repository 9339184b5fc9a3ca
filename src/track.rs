use nalgebra as na;

use crate::bbox::{BBox, Ltrb};

/// Persistent identity of one tracked object, unique per tracker instance
/// and never reused within a process lifetime.
pub type TrackId = u64;

#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,
    pub bbox: BBox<Ltrb>,
    pub label: String,
    pub confidence: f32,

    // centroid of the last matched detection
    pub center: na::Point2<f32>,

    // update calls survived since creation
    pub age: u32,

    // consecutive update calls since last matched
    pub disappeared: u32,

    // past centroids, oldest first, bounded by the configured capacity
    pub trail: Vec<na::Point2<f32>>,
}
