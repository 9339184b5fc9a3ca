use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltrb};

/// One detector output for one frame: corner-format bbox, class label
/// and confidence. Detections carry no identity across frames.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Detection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    #[serde(rename = "p")]
    pub confidence: f32,
    #[serde(rename = "c")]
    pub label: String,
}

impl Detection {
    pub fn new(bbox: BBox<Ltrb>, label: impl Into<String>, confidence: f32) -> Self {
        let [x1, y1, x2, y2] = *bbox.as_slice();

        Self {
            x1,
            y1,
            x2,
            y2,
            confidence,
            label: label.into(),
        }
    }

    #[inline(always)]
    pub fn bbox(&self) -> BBox<Ltrb> {
        BBox::ltrb(self.x1, self.y1, self.x2, self.y2)
    }

    /// Centroid of the bbox, the matching feature
    #[inline]
    pub fn centroid(&self) -> na::Point2<f32> {
        self.bbox().center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centroid_matches_bbox_center() {
        let det = Detection::new(BBox::ltrb(10.0, 10.0, 30.0, 30.0), "backpack", 0.9);
        let c = det.centroid();

        assert_relative_eq!(c.x, 20.0);
        assert_relative_eq!(c.y, 20.0);
    }

    #[test]
    fn serde_shape() {
        let det = Detection::new(BBox::ltrb(1.0, 2.0, 3.0, 4.0), "cup", 0.75);
        let json = serde_json::to_string(&det).unwrap();

        assert_eq!(
            json,
            r#"{"x1":1.0,"y1":2.0,"x2":3.0,"y2":4.0,"p":0.75,"c":"cup"}"#
        );

        let back: Detection = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label, "cup");
        assert_relative_eq!(back.confidence, 0.75);
    }
}
