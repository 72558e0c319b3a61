//! Circles (bullets)

use glam::DVec2;
use serde::Serialize;

use super::boundary::{Boundary, LineEq};
use super::collision;
use super::line::Line;
use super::polygon::Polygon;
use super::rect::Rect;
use crate::error::ShapeError;

/// A circle with a cached bounding box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    center: DVec2,
    radius: f64,
    rect: Rect,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Result<Self, ShapeError> {
        if !center.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ShapeError::InvalidRadius { radius });
        }
        Ok(Self {
            center,
            radius,
            rect: Self::bounds(center, radius),
        })
    }

    fn bounds(center: DVec2, radius: f64) -> Rect {
        Rect::new(center.x - radius, center.y - radius, 2.0 * radius, 2.0 * radius)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn bounding_box(&self) -> &Rect {
        &self.rect
    }

    pub fn set_center(&mut self, center: DVec2) -> &mut Self {
        self.center = center;
        self.rect = Self::bounds(center, self.radius);
        self
    }

    pub fn translate(&mut self, delta: DVec2) -> &mut Self {
        self.set_center(self.center + delta)
    }

    pub fn move_to(&mut self, target: DVec2) -> &mut Self {
        self.set_center(target)
    }

    /// Point within the radius (boundary included)
    #[inline]
    pub fn contains_point(&self, p: DVec2) -> bool {
        self.center.distance(p) <= self.radius
    }

    /// Whether the circle reaches a finite edge: the perpendicular from the
    /// center to the edge's line is no longer than the radius and its foot
    /// lands within the edge's extent.
    ///
    /// Endpoint contact is covered by the vertex tests of the callers.
    pub fn touches_boundary(&self, edge: &Boundary) -> bool {
        let c = self.center;
        match edge.eq {
            LineEq::Vertical { x } => (x - c.x).abs() <= self.radius && edge.spans_y(c.y),
            LineEq::Horizontal { y } => (y - c.y).abs() <= self.radius && edge.spans_x(c.x),
            LineEq::Oblique { slope, intercept } => {
                let normal_slope = -1.0 / slope;
                let normal_intercept = c.y - normal_slope * c.x;
                let foot_x = (normal_intercept - intercept) / (slope - normal_slope);
                let foot = DVec2::new(foot_x, normal_slope * foot_x + normal_intercept);
                c.distance(foot) <= self.radius && edge.spans_x(foot_x)
            }
        }
    }

    /// Whether any of the edges is reached
    pub fn touches_any<'a>(&self, edges: impl IntoIterator<Item = &'a Boundary>) -> bool {
        edges.into_iter().any(|edge| self.touches_boundary(edge))
    }

    pub fn collide_circle(&self, other: &Circle) -> bool {
        collision::circle_circle(self, other)
    }

    pub fn collide_line(&self, line: &Line) -> bool {
        collision::circle_line(self, line)
    }

    pub fn collide_polygon(&self, polygon: &Polygon) -> bool {
        collision::circle_polygon(self, polygon)
    }

    pub fn collide_rect(&self, rect: &Rect) -> bool {
        collision::circle_rect(self, rect)
    }
}
