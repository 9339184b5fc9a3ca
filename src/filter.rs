use crate::detection::Detection;

/// Reference minimum-confidence cutoff applied before detections reach the
/// tracker.
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Caller-side detection policy: a confidence cutoff plus an optional
/// case-insensitive class allowlist. The tracker itself never filters; this
/// runs on the detector side of the boundary.
#[derive(Debug, Clone)]
pub struct DetectionFilter {
    pub min_confidence: f32,
    targets: Option<Vec<String>>,
}

impl DetectionFilter {
    pub fn new(min_confidence: f32) -> Self {
        Self {
            min_confidence,
            targets: None,
        }
    }

    /// Keep only the named classes, compared case-insensitively.
    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.targets = Some(
            targets
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        );

        self
    }

    pub fn accepts(&self, det: &Detection) -> bool {
        if det.confidence <= self.min_confidence {
            return false;
        }

        match &self.targets {
            Some(targets) => {
                let label = det.label.to_lowercase();
                targets.iter().any(|t| *t == label)
            }
            None => true,
        }
    }

    pub fn apply(&self, mut detections: Vec<Detection>) -> Vec<Detection> {
        detections.retain(|det| self.accepts(det));
        detections
    }
}

impl Default for DetectionFilter {
    fn default() -> Self {
        Self::new(CONFIDENCE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::BBox;

    fn det(label: &str, confidence: f32) -> Detection {
        Detection::new(BBox::ltrb(0.0, 0.0, 10.0, 10.0), label, confidence)
    }

    #[test]
    fn confidence_cutoff_is_strict() {
        let filter = DetectionFilter::default();

        assert!(!filter.accepts(&det("backpack", 0.5)));
        assert!(filter.accepts(&det("backpack", 0.51)));
    }

    #[test]
    fn target_match_ignores_case() {
        let filter = DetectionFilter::default().with_targets(["Backpack", "CELL PHONE"]);

        let kept = filter.apply(vec![
            det("backpack", 0.9),
            det("cell phone", 0.8),
            det("chair", 0.95),
        ]);

        let labels: Vec<_> = kept.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["backpack", "cell phone"]);
    }

    #[test]
    fn no_targets_keeps_every_class() {
        let filter = DetectionFilter::new(0.1);
        let kept = filter.apply(vec![det("chair", 0.2), det("cup", 0.3)]);

        assert_eq!(kept.len(), 2);
    }
}
