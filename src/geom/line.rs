//! Line segments (ship outline)

use glam::DVec2;
use serde::Serialize;

use super::boundary::Boundary;
use super::circle::Circle;
use super::collision;
use super::polygon::Polygon;
use super::rect::Rect;
use crate::error::ShapeError;
use crate::{enlarge_point, rotate_point};

/// A finite segment between two ordered endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    points: [DVec2; 2],
    center: DVec2,
    rect: Rect,
    boundary: Boundary,
}

impl Line {
    pub fn new(start: DVec2, end: DVec2) -> Result<Self, ShapeError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if start == end {
            return Err(ShapeError::ZeroLengthLine { at: start });
        }
        Ok(Self::from_points([start, end]))
    }

    fn from_points(points: [DVec2; 2]) -> Self {
        let mut line = Self {
            points,
            center: DVec2::ZERO,
            rect: Rect::default(),
            boundary: Boundary::new(points[0], points[1]),
        };
        line.rebuild();
        line
    }

    /// Recompute midpoint, bounding box and boundary from the endpoints
    fn rebuild(&mut self) {
        let [a, b] = self.points;
        self.center = (a + b) * 0.5;
        self.rect = Rect::bounding(&self.points);
        self.boundary = Boundary::new(a, b);
    }

    #[inline]
    pub fn start(&self) -> DVec2 {
        self.points[0]
    }

    #[inline]
    pub fn end(&self) -> DVec2 {
        self.points[1]
    }

    #[inline]
    pub fn points(&self) -> &[DVec2; 2] {
        &self.points
    }

    /// Midpoint of the segment
    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn bounding_box(&self) -> &Rect {
        &self.rect
    }

    #[inline]
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn length(&self) -> f64 {
        self.points[0].distance(self.points[1])
    }

    pub fn translate(&mut self, delta: DVec2) -> &mut Self {
        for p in &mut self.points {
            *p += delta;
        }
        self.rebuild();
        self
    }

    pub fn move_to(&mut self, target: DVec2) -> &mut Self {
        let delta = target - self.center;
        self.translate(delta)
    }

    /// Rotate by `degrees` about `pivot` (the midpoint by default)
    pub fn rotate(&mut self, degrees: f64, pivot: Option<DVec2>) -> &mut Self {
        let pivot = pivot.unwrap_or(self.center);
        for p in &mut self.points {
            *p = rotate_point(*p, degrees, pivot);
        }
        self.rebuild();
        self
    }

    /// Scale both endpoints' offsets from `pivot` (the midpoint by default)
    pub fn enlarge(&mut self, scale: f64, pivot: Option<DVec2>) -> &mut Self {
        debug_assert!(scale != 0.0, "enlarging by zero collapses the line");
        let pivot = pivot.unwrap_or(self.center);
        for p in &mut self.points {
            *p = enlarge_point(*p, scale, pivot);
        }
        self.rebuild();
        self
    }

    pub fn collide_line(&self, other: &Line) -> bool {
        collision::line_line(self, other)
    }

    pub fn collide_circle(&self, circle: &Circle) -> bool {
        collision::circle_line(circle, self)
    }

    pub fn collide_polygon(&self, polygon: &Polygon) -> bool {
        collision::line_polygon(self, polygon)
    }

    pub fn collide_rect(&self, rect: &Rect) -> bool {
        collision::line_rect(self, rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::LineEq;

    const EPS: f64 = 1e-9;

    fn line(ax: f64, ay: f64, bx: f64, by: f64) -> Line {
        Line::new(DVec2::new(ax, ay), DVec2::new(bx, by)).unwrap()
    }

    #[test]
    fn test_rejects_zero_length() {
        let p = DVec2::new(2.0, 3.0);
        assert_eq!(Line::new(p, p), Err(ShapeError::ZeroLengthLine { at: p }));
        assert_eq!(Line::new(p, DVec2::NAN), Err(ShapeError::NonFinite));
    }

    #[test]
    fn test_derived_state() {
        let l = line(0.0, 0.0, 4.0, 2.0);
        assert_eq!(l.center(), DVec2::new(2.0, 1.0));
        assert_eq!(*l.bounding_box(), Rect::new(0.0, 0.0, 4.0, 2.0));
        assert_eq!(
            l.boundary().eq,
            LineEq::Oblique {
                slope: 0.5,
                intercept: 0.0
            }
        );
    }

    #[test]
    fn test_translate_and_move_to() {
        let mut l = line(0.0, 0.0, 0.0, 4.0);
        l.translate(DVec2::new(3.0, 1.0));
        assert_eq!(l.boundary().eq, LineEq::Vertical { x: 3.0 });
        l.move_to(DVec2::ZERO);
        assert_eq!(l.start(), DVec2::new(0.0, -2.0));
        assert_eq!(l.end(), DVec2::new(0.0, 2.0));
    }

    #[test]
    fn test_rotate_about_midpoint_keeps_length() {
        let mut l = line(-2.0, 0.0, 2.0, 0.0);
        l.rotate(90.0, None);
        assert!((l.length() - 4.0).abs() < EPS);
        assert!(l.center().length() < EPS);
        assert!((l.start() - DVec2::new(0.0, -2.0)).length() < EPS);
    }

    #[test]
    fn test_enlarge_about_pivot() {
        let mut l = line(2.0, 0.0, 4.0, 0.0);
        l.enlarge(0.5, Some(DVec2::ZERO));
        assert_eq!(l.start(), DVec2::new(1.0, 0.0));
        assert_eq!(l.end(), DVec2::new(2.0, 0.0));
        assert_eq!(l.center(), DVec2::new(1.5, 0.0));
    }
}
