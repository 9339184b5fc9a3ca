use nalgebra as na;
use std::collections::VecDeque;
use std::fmt;

/// Bounded history of a track's past centroids, oldest first. Once full,
/// pushing discards the oldest point.
#[derive(Clone)]
pub struct Trail {
    points: VecDeque<na::Point2<f32>>,
    capacity: usize,
}

impl fmt::Debug for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.points.fmt(f)
    }
}

impl Trail {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap),
            capacity: cap,
        }
    }

    #[inline]
    pub fn push(&mut self, pt: na::Point2<f32>) -> Option<na::Point2<f32>> {
        let popped = if self.is_full() {
            self.points.pop_front()
        } else {
            None
        };

        self.points.push_back(pt);

        popped
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.points.len() == self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn latest(&self) -> Option<&na::Point2<f32>> {
        self.points.back()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'_ na::Point2<f32>> {
        self.points.iter()
    }

    #[inline]
    pub fn to_vec(&self) -> Vec<na::Point2<f32>> {
        self.points.iter().copied().collect()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.points.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> na::Point2<f32> {
        na::Point2::new(x, y)
    }

    #[test]
    fn grows_until_capacity() {
        let mut trail = Trail::with_capacity(3);

        assert_eq!(trail.push(pt(0.0, 0.0)), None);
        assert_eq!(trail.push(pt(1.0, 0.0)), None);
        assert_eq!(trail.push(pt(2.0, 0.0)), None);
        assert!(trail.is_full());

        // oldest point falls out
        assert_eq!(trail.push(pt(3.0, 0.0)), Some(pt(0.0, 0.0)));
        assert_eq!(trail.len(), 3);
    }

    #[test]
    fn iterates_oldest_first() {
        let mut trail = Trail::with_capacity(4);
        trail.push(pt(0.0, 0.0));
        trail.push(pt(1.0, 1.0));
        trail.push(pt(2.0, 2.0));

        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(trail.latest(), Some(&pt(2.0, 2.0)));
    }
}
