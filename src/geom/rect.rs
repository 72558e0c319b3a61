//! Axis-aligned boxes
//!
//! Screen convention: `y` grows downward, so `top <= bottom`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::boundary::Boundary;
use super::polygon::Polygon;
use crate::error::ShapeError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest box containing every point (zero box for an empty slice)
    pub fn bounding(points: &[DVec2]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self::default();
        };
        let (min, max) = rest
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [DVec2; 4] {
        [
            DVec2::new(self.left(), self.top()),
            DVec2::new(self.right(), self.top()),
            DVec2::new(self.right(), self.bottom()),
            DVec2::new(self.left(), self.bottom()),
        ]
    }

    /// Top, right, bottom and left edges as boundary descriptors
    pub fn edges(&self) -> [Boundary; 4] {
        let [tl, tr, br, bl] = self.corners();
        [
            Boundary::new(tl, tr),
            Boundary::new(tr, br),
            Boundary::new(bl, br),
            Boundary::new(tl, bl),
        ]
    }

    /// Inclusive on every side
    #[inline]
    pub fn contains_point(&self, p: DVec2) -> bool {
        self.left() <= p.x && p.x <= self.right() && self.top() <= p.y && p.y <= self.bottom()
    }

    /// Inclusive overlap, so boxes of zero width (vertical lines) still meet
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// The box as a four-vertex polygon
    pub fn to_polygon(&self) -> Result<Polygon, ShapeError> {
        Polygon::new(&self.corners())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding() {
        let r = Rect::bounding(&[DVec2::new(3.0, 1.0), DVec2::new(-1.0, 4.0), DVec2::new(2.0, -2.0)]);
        assert_eq!(r, Rect::new(-1.0, -2.0, 4.0, 6.0));
        assert_eq!(Rect::bounding(&[]), Rect::default());
    }

    #[test]
    fn test_overlap_is_inclusive() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(10.0, 5.0, 3.0, 3.0)));
        assert!(!a.overlaps(&Rect::new(10.5, 5.0, 3.0, 3.0)));
        // Zero-width box on the edge
        assert!(a.overlaps(&Rect::new(10.0, 0.0, 0.0, 4.0)));
    }

    #[test]
    fn test_contains_point() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.contains_point(DVec2::new(10.0, 10.0)));
        assert!(a.contains_point(DVec2::new(5.0, 0.0)));
        assert!(!a.contains_point(DVec2::new(5.0, -0.1)));
    }

    #[test]
    fn test_edges_classified() {
        use crate::geom::LineEq;
        let edges = Rect::new(1.0, 2.0, 3.0, 4.0).edges();
        assert_eq!(edges[0].eq, LineEq::Horizontal { y: 2.0 });
        assert_eq!(edges[1].eq, LineEq::Vertical { x: 4.0 });
        assert_eq!(edges[2].eq, LineEq::Horizontal { y: 6.0 });
        assert_eq!(edges[3].eq, LineEq::Vertical { x: 1.0 });
    }

    #[test]
    fn test_to_polygon() {
        let poly = Rect::new(0.0, 0.0, 4.0, 2.0).to_polygon().unwrap();
        assert_eq!(poly.vertices().len(), 4);
        assert_eq!(poly.center(), DVec2::new(2.0, 1.0));
        assert_eq!(*poly.bounding_box(), Rect::new(0.0, 0.0, 4.0, 2.0));
    }
}
