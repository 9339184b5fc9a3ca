use crate::detection::Detection;

/// One frame's worth of detector output. The timestamp is consumed by the
/// observation boundary, never by matching.
pub struct Frame {
    pub detections: Vec<Detection>,
    pub timestamp: f64, // in seconds
}

impl Frame {
    pub fn new(timestamp: f64, detections: Vec<Detection>) -> Self {
        Self {
            detections,
            timestamp,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}
