//! Overlap tests for axis-aligned boxes and circles
//!
//! Cones and the player car collide as rectangles; coins are circles tested
//! against the car's rectangle. Both tests are total over finite inputs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of `size` centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Shrink by `margin` on every side; an axis shrunk past zero collapses
    /// onto the centre line. Negative margins grow the rect.
    pub fn inset(&self, margin: f32) -> Self {
        let margin = Vec2::splat(margin).min(self.size / 2.0);
        Self {
            min: self.min + margin,
            size: self.size - 2.0 * margin,
        }
    }
}

/// Strict overlap: rectangles that only share an edge do not overlap
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.min.x < b_max.x && a_max.x > b.min.x && a.min.y < b_max.y && a_max.y > b.min.y
}

/// Circle vs rectangle using the nearest point on the rectangle.
/// Touching (distance == radius) counts as overlap.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = center.clamp(rect.min, rect.max());
    center.distance_squared(nearest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rects_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));

        let far = Rect::new(30.0, 0.0, 5.0, 5.0);
        assert!(!rects_overlap(&a, &far));
    }

    #[test]
    fn test_rects_sharing_edge_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &right));
        assert!(!rects_overlap(&a, &below));
    }

    #[test]
    fn test_rect_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
        assert!(rects_overlap(&outer, &inner));
    }

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(0.0, 0.0, 44.0, 78.0);
        assert!(circle_rect_overlap(Vec2::new(22.0, 39.0), 10.0, &rect));
    }

    #[test]
    fn test_circle_near_corner() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Diagonal distance to corner (10,10) is ~7.07
        assert!(!circle_rect_overlap(Vec2::new(15.0, 15.0), 7.0, &rect));
        assert!(circle_rect_overlap(Vec2::new(15.0, 15.0), 7.2, &rect));
    }

    #[test]
    fn test_circle_touching_edge_counts() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(circle_rect_overlap(Vec2::new(15.0, 5.0), 5.0, &rect));
        assert!(!circle_rect_overlap(Vec2::new(15.1, 5.0), 5.0, &rect));
    }

    #[test]
    fn test_from_center_and_inset() {
        let r = Rect::from_center(Vec2::new(100.0, 200.0), Vec2::new(44.0, 78.0));
        assert_eq!(r.min, Vec2::new(78.0, 161.0));
        assert_eq!(r.max(), Vec2::new(122.0, 239.0));

        let shrunk = r.inset(4.0);
        assert_eq!(shrunk.min, Vec2::new(82.0, 165.0));
        assert_eq!(shrunk.size, Vec2::new(36.0, 70.0));

        let collapsed = r.inset(100.0);
        assert_eq!(collapsed.size, Vec2::ZERO);
        assert_eq!(collapsed.min, Vec2::new(100.0, 200.0));

        // Only the narrow axis collapses
        let thin = r.inset(30.0);
        assert_eq!(thin.min, Vec2::new(100.0, 191.0));
        assert_eq!(thin.size, Vec2::new(0.0, 18.0));

        let grown = r.inset(-10.0);
        assert_eq!(grown.min, Vec2::new(68.0, 151.0));
        assert_eq!(grown.size, Vec2::new(64.0, 98.0));
    }
}
